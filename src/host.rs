//! Host plugin presence.
//!
//! Every operation is gated on the tributes plugin being active. When it is
//! not, projections and submissions are skipped silently.

use serde::Deserialize;

/// Basename the host reports for the tributes plugin when it is active.
pub const TRIBUTES_PLUGIN: &str = "fcrm-tributes/fcrm-tributes.php";

/// A signal telling whether the tributes plugin is active.
pub trait HostPresence {
    fn is_active(&self) -> bool;
}

impl HostPresence for bool {
    fn is_active(&self) -> bool {
        *self
    }
}

impl<H: HostPresence + ?Sized> HostPresence for &H {
    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}

/// The host's view of which plugins are running.
///
/// The tributes plugin counts as active if its basename is in the active
/// list, or if the host already has the plugin loaded under another path.
///
/// # Example
///
/// ```rust
/// use fcrm_styles::{ActivePlugins, HostPresence};
///
/// let plugins = ActivePlugins::new(["akismet/akismet.php", "fcrm-tributes/fcrm-tributes.php"]);
/// assert!(plugins.is_active());
///
/// assert!(!ActivePlugins::default().is_active());
/// assert!(ActivePlugins::default().with_host_loaded(true).is_active());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ActivePlugins {
    /// Active plugin basenames, e.g. `akismet/akismet.php`.
    pub active_plugins: Vec<String>,
    /// Set when the tributes plugin is loaded regardless of its basename.
    pub host_loaded: bool,
}

impl ActivePlugins {
    pub fn new<I, S>(active: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active_plugins: active.into_iter().map(Into::into).collect(),
            host_loaded: false,
        }
    }

    pub fn with_host_loaded(mut self, loaded: bool) -> Self {
        self.host_loaded = loaded;
        self
    }
}

impl HostPresence for ActivePlugins {
    fn is_active(&self) -> bool {
        self.host_loaded || self.active_plugins.iter().any(|p| p == TRIBUTES_PLUGIN)
    }
}
