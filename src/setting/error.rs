//! Key recognition errors.

/// Error returned when a name does not match any recognized style setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKeyError {
    /// The name that was looked up
    pub name: String,
}

impl UnknownKeyError {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for UnknownKeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not a recognized style setting", self.name)?;
        if self.name.contains('_') {
            write!(f, " (setting names use dashes, e.g. 'fcrm-link-color')")?;
        }
        Ok(())
    }
}

impl std::error::Error for UnknownKeyError {}
