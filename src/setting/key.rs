//! Style setting keys.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::UnknownKeyError;

/// A recognized style setting.
///
/// The set is closed: there is no way to construct a key outside these
/// fourteen variants, and parsing rejects every other name. Variants are
/// declared in canonical order, which is the order declarations appear in
/// the rendered CSS block.
///
/// # Example
///
/// ```rust
/// use fcrm_styles::StyleSettingKey;
///
/// let key: StyleSettingKey = "fcrm-primary-button-hover".parse().unwrap();
/// assert_eq!(key, StyleSettingKey::PrimaryButtonHover);
/// assert_eq!(key.css_property(), "--fcrm-primary-button-hover");
/// assert_eq!(key.label(), "Primary Button Hover Colour");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleSettingKey {
    LinkColor,
    PrimaryColor,
    SecondaryColor,
    PrimaryButton,
    PrimaryButtonText,
    PrimaryButtonHover,
    PrimaryButtonHoverText,
    SecondaryButton,
    SecondaryButtonText,
    SecondaryButtonHover,
    SecondaryButtonHoverText,
    FocusShadowColor,
    FocusBorderColor,
    PrimaryShadow,
}

impl StyleSettingKey {
    /// Every recognized key, in canonical order.
    pub const ALL: [StyleSettingKey; 14] = [
        StyleSettingKey::LinkColor,
        StyleSettingKey::PrimaryColor,
        StyleSettingKey::SecondaryColor,
        StyleSettingKey::PrimaryButton,
        StyleSettingKey::PrimaryButtonText,
        StyleSettingKey::PrimaryButtonHover,
        StyleSettingKey::PrimaryButtonHoverText,
        StyleSettingKey::SecondaryButton,
        StyleSettingKey::SecondaryButtonText,
        StyleSettingKey::SecondaryButtonHover,
        StyleSettingKey::SecondaryButtonHoverText,
        StyleSettingKey::FocusShadowColor,
        StyleSettingKey::FocusBorderColor,
        StyleSettingKey::PrimaryShadow,
    ];

    /// Returns the settings-store entry name for this key.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleSettingKey::LinkColor => "fcrm-link-color",
            StyleSettingKey::PrimaryColor => "fcrm-primary-color",
            StyleSettingKey::SecondaryColor => "fcrm-secondary-color",
            StyleSettingKey::PrimaryButton => "fcrm-primary-button",
            StyleSettingKey::PrimaryButtonText => "fcrm-primary-button-text",
            StyleSettingKey::PrimaryButtonHover => "fcrm-primary-button-hover",
            StyleSettingKey::PrimaryButtonHoverText => "fcrm-primary-button-hover-text",
            StyleSettingKey::SecondaryButton => "fcrm-secondary-button",
            StyleSettingKey::SecondaryButtonText => "fcrm-secondary-button-text",
            StyleSettingKey::SecondaryButtonHover => "fcrm-secondary-button-hover",
            StyleSettingKey::SecondaryButtonHoverText => "fcrm-secondary-button-hover-text",
            StyleSettingKey::FocusShadowColor => "fcrm-focus-shadow-color",
            StyleSettingKey::FocusBorderColor => "fcrm-focus-border-color",
            StyleSettingKey::PrimaryShadow => "fcrm-primary-shadow",
        }
    }

    /// Returns the CSS custom property name, `--<key>`.
    pub fn css_property(self) -> String {
        format!("--{}", self.as_str())
    }

    /// Returns the label shown next to this setting in the admin form.
    pub fn label(self) -> &'static str {
        match self {
            StyleSettingKey::LinkColor => "Link Colour",
            StyleSettingKey::PrimaryColor => "Primary Colour",
            StyleSettingKey::SecondaryColor => "Secondary Colour",
            StyleSettingKey::PrimaryButton => "Primary Button Colour",
            StyleSettingKey::PrimaryButtonText => "Primary Button Text Colour",
            StyleSettingKey::PrimaryButtonHover => "Primary Button Hover Colour",
            StyleSettingKey::PrimaryButtonHoverText => "Primary Button Hover Text Colour",
            StyleSettingKey::SecondaryButton => "Secondary Button Colour",
            StyleSettingKey::SecondaryButtonText => "Secondary Button Text Colour",
            StyleSettingKey::SecondaryButtonHover => "Secondary Button Hover Colour",
            StyleSettingKey::SecondaryButtonHoverText => "Secondary Button Hover Text Colour",
            StyleSettingKey::FocusShadowColor => "Focus Shadow Colour",
            StyleSettingKey::FocusBorderColor => "Focus Border Colour",
            StyleSettingKey::PrimaryShadow => "Primary Shadow Colour [box shading]",
        }
    }
}

impl std::fmt::Display for StyleSettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StyleSettingKey {
    type Err = UnknownKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleSettingKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownKeyError::new(s))
    }
}

impl Serialize for StyleSettingKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StyleSettingKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
