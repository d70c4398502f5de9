//! Settings form submission.
//!
//! [`SettingsForm`] is the only writer of user input into the store. It maps
//! submitted field names onto recognized keys, sanitizes every value, and
//! optionally rejects values that are not colours. The projector relies on
//! this having happened before it reads anything.

use serde::Serialize;

use crate::color::{parse_color, ColorParseError};
use crate::host::HostPresence;
use crate::projector::get_field_value;
use crate::sanitize::sanitize_text_field;
use crate::setting::StyleSettingKey;
use crate::store::SettingsStore;

/// One field of the settings form, pre-filled from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub key: StyleSettingKey,
    pub label: &'static str,
    pub value: String,
}

/// A submitted value that failed the colour check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub key: StyleSettingKey,
    pub value: String,
    pub error: ColorParseError,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: '{}' rejected ({})", self.key, self.value, self.error)
    }
}

/// What a submission changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitReport {
    /// Keys that now hold a new value.
    pub updated: Vec<StyleSettingKey>,
    /// Keys removed because their sanitized value was empty.
    pub cleared: Vec<StyleSettingKey>,
    /// Values refused by the strict colour check; the stored value is unchanged.
    pub rejected: Vec<Rejection>,
    /// Submitted names that are not style settings.
    pub ignored: Vec<String>,
}

impl SubmitReport {
    /// Returns `true` if the store was modified.
    pub fn changed(&self) -> bool {
        !self.updated.is_empty() || !self.cleared.is_empty()
    }
}

/// The settings form: pre-fills fields and applies submissions.
///
/// # Example
///
/// ```rust
/// use fcrm_styles::{render_css_variables, MemoryStore, SettingsForm};
///
/// let mut store = MemoryStore::new();
/// let form = SettingsForm::new(true).strict_colors(true);
///
/// let report = form
///     .submit(&mut store, [
///         ("fcrm-link-color", " #336699 "),
///         ("fcrm-primary-color", "</style><script>"),
///     ])
///     .unwrap();
///
/// assert_eq!(report.updated.len(), 1);
/// assert_eq!(report.cleared.len(), 1);
/// assert_eq!(render_css_variables(&store), ":root {--fcrm-link-color: #336699;}");
/// ```
#[derive(Debug, Clone)]
pub struct SettingsForm<H> {
    host: H,
    strict_colors: bool,
}

impl<H: HostPresence> SettingsForm<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            strict_colors: false,
        }
    }

    /// Rejects values that are not `#hex`, `rgb()` or `rgba()` colours.
    pub fn strict_colors(mut self, strict: bool) -> Self {
        self.strict_colors = strict;
        self
    }

    /// Returns every field in canonical order with its current value.
    ///
    /// Returns `None` when the tributes plugin is inactive.
    pub fn fields<S: SettingsStore + ?Sized>(&self, store: &S) -> Option<Vec<FormField>> {
        if !self.host.is_active() {
            return None;
        }
        Some(
            StyleSettingKey::ALL
                .into_iter()
                .map(|key| FormField {
                    key,
                    label: key.label(),
                    value: get_field_value(store, key),
                })
                .collect(),
        )
    }

    /// Applies submitted `(name, value)` pairs to the store.
    ///
    /// Later pairs for the same name win. Returns `None` without touching the
    /// store when the tributes plugin is inactive.
    pub fn submit<S, I, K, V>(&self, store: &mut S, fields: I) -> Option<SubmitReport>
    where
        S: SettingsStore + ?Sized,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if !self.host.is_active() {
            log::debug!("tributes plugin inactive, ignoring settings submission");
            return None;
        }

        let mut report = SubmitReport::default();
        for (name, raw) in fields {
            let name = name.as_ref();
            let key: StyleSettingKey = match name.parse() {
                Ok(key) => key,
                Err(_) => {
                    log::debug!("ignoring unrecognized field {}", name);
                    report.ignored.push(name.to_string());
                    continue;
                }
            };

            let value = sanitize_text_field(raw.as_ref());
            if value.is_empty() {
                store.delete(key.as_str());
                report.updated.retain(|k| *k != key);
                push_unique(&mut report.cleared, key);
                continue;
            }

            if self.strict_colors {
                if let Err(error) = parse_color(&value) {
                    log::warn!("rejecting {} for {}: {}", value, key, error);
                    report.rejected.push(Rejection { key, value, error });
                    continue;
                }
            }

            store.set(key.as_str(), value);
            report.cleared.retain(|k| *k != key);
            push_unique(&mut report.updated, key);
        }
        Some(report)
    }
}

fn push_unique(keys: &mut Vec<StyleSettingKey>, key: StyleSettingKey) {
    if !keys.contains(&key) {
        keys.push(key);
    }
}
