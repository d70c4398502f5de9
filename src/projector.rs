//! Projection of style settings into CSS custom properties.
//!
//! The three free functions are the whole core:
//!
//! - [`render_css_variables`]: Builds the `:root { ... }` block
//! - [`reset_all`]: Clears every recognized setting
//! - [`get_field_value`]: Reads one setting, defaulting to an empty string
//!
//! [`SettingsProjector`] wraps them behind a [`HostPresence`] check, which is
//! what host adapters normally call.
//!
//! Values are emitted verbatim. Sanitizing user input is the job of whoever
//! writes into the store (see [`crate::submit`]); a value written directly into
//! the store bypasses that and lands in the CSS unchanged.

use crate::host::HostPresence;
use crate::inject::{InjectError, StyleQueue, Stylesheet};
use crate::setting::StyleSettingKey;
use crate::store::SettingsStore;

/// Renders every non-empty setting as a CSS custom property on `:root`.
///
/// Declarations follow the canonical key order regardless of the order the
/// values were written. Unset and empty settings contribute nothing.
///
/// # Example
///
/// ```rust
/// use fcrm_styles::{render_css_variables, MemoryStore};
///
/// let store = MemoryStore::new()
///     .with("fcrm-primary-color", "#ff0000")
///     .with("fcrm-link-color", "rgba(0,0,255,0.5)");
///
/// assert_eq!(
///     render_css_variables(&store),
///     ":root {--fcrm-link-color: rgba(0,0,255,0.5);--fcrm-primary-color: #ff0000;}"
/// );
/// assert_eq!(render_css_variables(&MemoryStore::new()), ":root {}");
/// ```
pub fn render_css_variables<S: SettingsStore + ?Sized>(store: &S) -> String {
    let mut css = String::from(":root {");
    for key in StyleSettingKey::ALL {
        let value = get_field_value(store, key);
        if !value.is_empty() {
            css.push_str(&key.css_property());
            css.push_str(": ");
            css.push_str(&value);
            css.push(';');
        }
    }
    css.push('}');
    css
}

/// Removes every recognized setting from the store.
///
/// Keys that are already absent are skipped without error, and entries that
/// are not style settings are left alone.
pub fn reset_all<S: SettingsStore + ?Sized>(store: &mut S) {
    for key in StyleSettingKey::ALL {
        store.delete(key.as_str());
    }
    log::debug!("cleared {} style settings", StyleSettingKey::ALL.len());
}

/// Returns the stored value for `key`, or an empty string when unset.
pub fn get_field_value<S: SettingsStore + ?Sized>(store: &S, key: StyleSettingKey) -> String {
    store.get(key.as_str()).unwrap_or_default()
}

/// The core operations gated on the tributes plugin being active.
///
/// When the host reports the plugin inactive, every method returns without
/// touching the store.
///
/// # Example
///
/// ```rust
/// use fcrm_styles::{MemoryStore, SettingsProjector};
///
/// let store = MemoryStore::new().with("fcrm-link-color", "#123456");
///
/// let active = SettingsProjector::new(true);
/// assert_eq!(
///     active.render(&store).as_deref(),
///     Some(":root {--fcrm-link-color: #123456;}")
/// );
///
/// let inert = SettingsProjector::new(false);
/// assert_eq!(inert.render(&store), None);
/// ```
#[derive(Debug, Clone)]
pub struct SettingsProjector<H> {
    host: H,
}

impl<H: HostPresence> SettingsProjector<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Returns `true` if the tributes plugin is active.
    pub fn is_active(&self) -> bool {
        self.host.is_active()
    }

    /// Renders the custom property block, or `None` when inert.
    pub fn render<S: SettingsStore + ?Sized>(&self, store: &S) -> Option<String> {
        if !self.gate("render") {
            return None;
        }
        Some(render_css_variables(store))
    }

    /// Clears every recognized setting. Returns `false` when inert.
    pub fn reset<S: SettingsStore + ?Sized>(&self, store: &mut S) -> bool {
        if !self.gate("reset") {
            return false;
        }
        reset_all(store);
        true
    }

    /// Reads one setting for pre-filling a form field, or `None` when inert.
    pub fn field_value<S: SettingsStore + ?Sized>(
        &self,
        store: &S,
        key: StyleSettingKey,
    ) -> Option<String> {
        if !self.gate("field value") {
            return None;
        }
        Some(get_field_value(store, key))
    }

    /// Enqueues `base` and attaches the rendered block inline after it.
    ///
    /// The custom properties only override the base sheet's defaults if they
    /// come after it in document order, which the queue guarantees by keeping
    /// inline CSS with its sheet.
    ///
    /// Returns `Ok(false)` when inert, leaving the queue untouched.
    pub fn inject<S: SettingsStore + ?Sized>(
        &self,
        store: &S,
        queue: &mut StyleQueue,
        base: &Stylesheet,
    ) -> Result<bool, InjectError> {
        if !self.gate("inject") {
            return Ok(false);
        }
        queue.enqueue(base.clone());
        queue.add_inline(&base.handle, render_css_variables(store))?;
        Ok(true)
    }

    fn gate(&self, operation: &str) -> bool {
        let active = self.host.is_active();
        if !active {
            log::debug!("tributes plugin inactive, skipping {}", operation);
        }
        active
    }
}
