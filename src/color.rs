//! RGB color type, color parsing, and predefined color constants.

use crate::error::{Error, Result};

mod names;

/// An opaque RGB color with 8-bit components.
///
/// Immutable once constructed. All color-accepting operations in the crate
/// go through [`Color::parse`], which normalizes the accepted input forms
/// (name, hex literal, channel triple) into this type.
///
/// # Examples
///
/// ```
/// use rasterpen::Color;
/// let c = Color::parse("aquamarine")?;
/// assert_eq!(c, Color::new(127, 255, 212));
/// # Ok::<(), rasterpen::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

/// A color specification as accepted at the API boundary.
///
/// The original interface took colors as either a name string, a single
/// 3-tuple, or three discrete integers; this union captures those forms so
/// they can be resolved into a canonical [`Color`] before any drawing logic
/// runs.
#[derive(Clone, Debug)]
pub enum ColorSpec {
    /// A named color (`"burlywood"`, `"dark red"`) or hex literal (`"#FF802A"`).
    Name(String),
    /// Discrete channel values, validated to [0, 255] at parse time.
    Channels(i32, i32, i32),
    /// An already-constructed color; passes through unchanged.
    Value(Color),
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Name(name.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(name: String) -> Self {
        ColorSpec::Name(name)
    }
}

impl From<(i32, i32, i32)> for ColorSpec {
    fn from((r, g, b): (i32, i32, i32)) -> Self {
        ColorSpec::Channels(r, g, b)
    }
}

impl From<[i32; 3]> for ColorSpec {
    fn from([r, g, b]: [i32; 3]) -> Self {
        ColorSpec::Channels(r, g, b)
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Value(color)
    }
}

impl Color {
    /// Creates a color from 8-bit components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses any accepted color specification into a `Color`.
    ///
    /// Accepted forms:
    /// - a color name, matched case-insensitively with interior whitespace
    ///   ignored (`"Dark Red"` resolves like `"darkred"`);
    /// - a `#RRGGBB` or `#RGB` hexadecimal literal;
    /// - a channel triple `(r, g, b)` with each component in [0, 255].
    ///
    /// Unknown names and malformed literals fail with
    /// [`Error::InvalidColorSpec`]; out-of-range channels fail with
    /// [`Error::ColorRange`] reporting the offending triple.
    pub fn parse(spec: impl Into<ColorSpec>) -> Result<Color> {
        match spec.into() {
            ColorSpec::Name(name) => parse_name(&name),
            ColorSpec::Channels(r, g, b) => rgb(r, g, b),
            ColorSpec::Value(color) => Ok(color),
        }
    }

    pub(crate) fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }
}

/// Identifies one of the three color components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Channel {
    Red,
    Green,
    Blue,
}

/// Validates a channel triple into a [`Color`].
pub(crate) fn rgb(r: i32, g: i32, b: i32) -> Result<Color> {
    let in_range = |v: i32| (0..=255).contains(&v);
    if !(in_range(r) && in_range(g) && in_range(b)) {
        return Err(Error::ColorRange(r, g, b));
    }
    Ok(Color::new(r as u8, g as u8, b as u8))
}

fn parse_name(name: &str) -> Result<Color> {
    let normalized: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();

    if let Some(hex) = normalized.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| Error::InvalidColorSpec(name.to_string()));
    }

    names::lookup(&normalized)
        .map(|(r, g, b)| Color::new(r, g, b))
        .ok_or_else(|| Error::InvalidColorSpec(name.to_string()))
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digit = |c: char| c.to_digit(16).map(|d| d as u8);
    let bytes: Vec<u8> = hex.chars().map(digit).collect::<Option<Vec<_>>>()?;
    match bytes.as_slice() {
        [r, g, b] => Some(Color::new(r * 17, g * 17, b * 17)),
        [r1, r0, g1, g0, b1, b0] => {
            Some(Color::new(r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0))
        }
        _ => None,
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Opaque black (0, 0, 0) - the default outline color.
pub const BLACK: Color = Color::new(0, 0, 0);

/// Opaque white (255, 255, 255) - the default fill and background color.
pub const WHITE: Color = Color::new(255, 255, 255);

/// Opaque red (255, 0, 0)
pub const RED: Color = Color::new(255, 0, 0);

/// Opaque green (0, 255, 0)
pub const GREEN: Color = Color::new(0, 255, 0);

/// Opaque blue (0, 0, 255)
pub const BLUE: Color = Color::new(0, 0, 255);
