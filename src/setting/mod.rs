//! The closed set of style settings.
//!
//! This module provides:
//!
//! - [`StyleSettingKey`]: One of the fourteen recognized colour settings
//! - [`UnknownKeyError`]: Returned when a name is not a recognized key
//!
//! Each key doubles as the settings-store entry name and, prefixed with `--`,
//! as the CSS custom property the tributes stylesheet reads.

mod error;
mod key;

pub use error::UnknownKeyError;
pub use key::StyleSettingKey;
