//! # fcrm-styles - Colour overrides for FireHawkCRM Tributes
//!
//! A site owner picks colours for the tributes plugin's front-end markup.
//! This crate stores those choices and projects them into a block of CSS
//! custom properties that is attached after the tributes stylesheet:
//!
//! ```css
//! :root {--fcrm-link-color: rgba(0,0,255,0.5);--fcrm-primary-color: #ff0000;}
//! ```
//!
//! ## Core
//!
//! - [`StyleSettingKey`]: The fourteen recognized settings, in canonical order
//! - [`render_css_variables`]: Settings to `:root { ... }`, skipping unset values
//! - [`reset_all`]: Clears every recognized setting
//! - [`get_field_value`]: One setting, empty string when unset
//!
//! All three take the store explicitly; there is no global state.
//!
//! ## Host collaborators
//!
//! - [`SettingsStore`], [`MemoryStore`], [`JsonFileStore`]: Where values live
//! - [`SettingsProjector`]: The core gated on [`HostPresence`]
//! - [`SettingsForm`]: Sanitizes and writes submitted values
//! - [`StyleQueue`]: Keeps the inline block right after its base stylesheet
//! - [`Config`]: YAML configuration for the command-line host
//!
//! ## Example
//!
//! ```rust
//! use fcrm_styles::{MemoryStore, SettingsForm, SettingsProjector};
//!
//! let mut store = MemoryStore::new();
//!
//! SettingsForm::new(true).submit(&mut store, [("fcrm-primary-button", "#0a0a0a")]);
//!
//! let projector = SettingsProjector::new(true);
//! assert_eq!(
//!     projector.render(&store).as_deref(),
//!     Some(":root {--fcrm-primary-button: #0a0a0a;}")
//! );
//!
//! projector.reset(&mut store);
//! assert_eq!(projector.render(&store).as_deref(), Some(":root {}"));
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod color;
pub mod config;
pub mod host;
pub mod inject;
pub mod projector;
pub mod sanitize;
pub mod setting;
pub mod store;
pub mod submit;

pub use color::{parse_color, ColorParseError, Rgba};
pub use config::{Config, ConfigError};
pub use host::{ActivePlugins, HostPresence, TRIBUTES_PLUGIN};
pub use inject::{InjectError, StyleQueue, Stylesheet};
pub use projector::{get_field_value, render_css_variables, reset_all, SettingsProjector};
pub use sanitize::sanitize_text_field;
pub use setting::{StyleSettingKey, UnknownKeyError};
pub use store::{JsonFileStore, MemoryStore, SettingsStore, StoreError};
pub use submit::{FormField, Rejection, SettingsForm, SubmitReport};
