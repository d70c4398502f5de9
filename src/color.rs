//! Colour syntax checking for submitted values.
//!
//! The projector never validates colours. This check is used by the
//! submission path when strict colours are enabled in the configuration.

/// An sRGB colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    InvalidLength,
    InvalidHex,
    InvalidFunc,
    OutOfRange,
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            ColorParseError::Empty => "empty colour",
            ColorParseError::InvalidLength => "hex colour must have 3, 4, 6 or 8 digits",
            ColorParseError::InvalidHex => "invalid hex digits",
            ColorParseError::InvalidFunc => "expected #hex, rgb() or rgba()",
            ColorParseError::OutOfRange => "colour component out of range",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ColorParseError {}

/// Parses a hex, `rgb()` or `rgba()` colour.
///
/// Accepted forms:
///
/// - `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
/// - `rgb(r, g, b)` with channels `0..=255` or `0%..=100%`
/// - `rgba(r, g, b, a)` with alpha `0..=1` or `0%..=100%`
///
/// # Example
///
/// ```rust
/// use fcrm_styles::color::{parse_color, Rgba};
///
/// assert_eq!(
///     parse_color("rgba(0,0,255,0.5)"),
///     Ok(Rgba { r: 0, g: 0, b: 255, a: 128 })
/// );
/// assert!(parse_color("#ff000").is_err());
/// ```
pub fn parse_color(input: &str) -> Result<Rgba, ColorParseError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = s.to_ascii_lowercase();
    if let Some(args) = function_args(&lower, "rgba") {
        return parse_rgb_args(args, true);
    }
    if let Some(args) = function_args(&lower, "rgb") {
        return parse_rgb_args(args, false);
    }

    Err(ColorParseError::InvalidFunc)
}

/// Returns `true` if `input` parses as a colour.
pub fn is_color(input: &str) -> bool {
    parse_color(input).is_ok()
}

fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_hex(hex: &str) -> Result<Rgba, ColorParseError> {
    let nibble = |c: u8| -> Result<u8, ColorParseError> {
        match c {
            b'0'..=b'9' => Ok(c - b'0'),
            b'a'..=b'f' => Ok(c - b'a' + 10),
            b'A'..=b'F' => Ok(c - b'A' + 10),
            _ => Err(ColorParseError::InvalidHex),
        }
    };

    let bytes = hex.as_bytes();
    let short = |i: usize| nibble(bytes[i]).map(|n| n * 17);
    let long = |i: usize| -> Result<u8, ColorParseError> {
        Ok(nibble(bytes[i])? << 4 | nibble(bytes[i + 1])?)
    };

    match bytes.len() {
        3 => Ok(Rgba {
            r: short(0)?,
            g: short(1)?,
            b: short(2)?,
            a: 255,
        }),
        4 => Ok(Rgba {
            r: short(0)?,
            g: short(1)?,
            b: short(2)?,
            a: short(3)?,
        }),
        6 => Ok(Rgba {
            r: long(0)?,
            g: long(2)?,
            b: long(4)?,
            a: 255,
        }),
        8 => Ok(Rgba {
            r: long(0)?,
            g: long(2)?,
            b: long(4)?,
            a: long(6)?,
        }),
        _ => Err(ColorParseError::InvalidLength),
    }
}

fn parse_rgb_args(args: &str, with_alpha: bool) -> Result<Rgba, ColorParseError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(ColorParseError::InvalidFunc);
    }

    let a = if with_alpha {
        parse_alpha(parts[3])?
    } else {
        255
    };

    Ok(Rgba {
        r: parse_channel(parts[0])?,
        g: parse_channel(parts[1])?,
        b: parse_channel(parts[2])?,
        a,
    })
}

fn parse_channel(s: &str) -> Result<u8, ColorParseError> {
    if let Some(pct) = s.strip_suffix('%') {
        let unit = parse_percent(pct)?;
        return Ok((unit * 255.0).round() as u8);
    }
    let value: u16 = s.parse().map_err(|_| ColorParseError::InvalidFunc)?;
    u8::try_from(value).map_err(|_| ColorParseError::OutOfRange)
}

fn parse_alpha(s: &str) -> Result<u8, ColorParseError> {
    let unit = match s.strip_suffix('%') {
        Some(pct) => parse_percent(pct)?,
        None => {
            let value: f32 = s.parse().map_err(|_| ColorParseError::InvalidFunc)?;
            if !(0.0..=1.0).contains(&value) {
                return Err(ColorParseError::OutOfRange);
            }
            value
        }
    };
    Ok((unit * 255.0).round() as u8)
}

/// Parses a percentage body into `0.0..=1.0`.
fn parse_percent(s: &str) -> Result<f32, ColorParseError> {
    let value: f32 = s.trim().parse().map_err(|_| ColorParseError::InvalidFunc)?;
    if !(0.0..=100.0).contains(&value) {
        return Err(ColorParseError::OutOfRange);
    }
    Ok(value / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba {
        Rgba { r, g, b, a }
    }

    #[test]
    fn test_hex_forms() {
        assert_eq!(parse_color("#f00"), Ok(rgba(255, 0, 0, 255)));
        assert_eq!(parse_color("#f008"), Ok(rgba(255, 0, 0, 136)));
        assert_eq!(parse_color("#FF8000"), Ok(rgba(255, 128, 0, 255)));
        assert_eq!(parse_color("#ff800080"), Ok(rgba(255, 128, 0, 128)));
    }

    #[test]
    fn test_hex_errors() {
        assert_eq!(parse_color("#ff00"), Ok(rgba(255, 255, 0, 0)));
        assert_eq!(parse_color("#ff000"), Err(ColorParseError::InvalidLength));
        assert_eq!(parse_color("#gggggg"), Err(ColorParseError::InvalidHex));
        assert_eq!(parse_color("#"), Err(ColorParseError::InvalidLength));
    }

    #[test]
    fn test_rgb_function() {
        assert_eq!(parse_color("rgb(1, 2, 3)"), Ok(rgba(1, 2, 3, 255)));
        assert_eq!(parse_color("RGB(255,255,255)"), Ok(rgba(255, 255, 255, 255)));
        assert_eq!(parse_color("rgb(100%, 0%, 50%)"), Ok(rgba(255, 0, 128, 255)));
    }

    #[test]
    fn test_rgba_function() {
        assert_eq!(parse_color("rgba(0,0,255,0.5)"), Ok(rgba(0, 0, 255, 128)));
        assert_eq!(parse_color("rgba(0, 0, 0, 1)"), Ok(rgba(0, 0, 0, 255)));
        assert_eq!(parse_color("rgba(0, 0, 0, 25%)"), Ok(rgba(0, 0, 0, 64)));
    }

    #[test]
    fn test_function_errors() {
        assert_eq!(parse_color("rgb(1, 2)"), Err(ColorParseError::InvalidFunc));
        assert_eq!(parse_color("rgb(1, 2, 3, 0.5)"), Err(ColorParseError::InvalidFunc));
        assert_eq!(parse_color("rgb(256, 0, 0)"), Err(ColorParseError::OutOfRange));
        assert_eq!(parse_color("rgba(0, 0, 0, 1.5)"), Err(ColorParseError::OutOfRange));
        assert_eq!(parse_color("rgb(a, b, c)"), Err(ColorParseError::InvalidFunc));
        assert_eq!(parse_color("hsl(0, 0%, 0%)"), Err(ColorParseError::InvalidFunc));
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_color("   "), Err(ColorParseError::Empty));
        assert!(!is_color(""));
    }

    #[test]
    fn test_injection_is_not_a_color() {
        assert!(!is_color("red;}</style><script>"));
        assert!(!is_color("#fff;} body {display:none"));
    }
}
