//! Core types shared by the parser, serializer and validator.

/// Maximum length of a color name (palette entry or CSS keyword).
pub const NAME_CAPACITY: usize = 32;

/// Maximum length of a serialized CSS color string.
///
/// The longest form, `hsva(359, 100%, 100%, 0.99)`, fits comfortably.
pub const CSS_CAPACITY: usize = 32;

/// Maximum length of a user-facing error message.
pub const MESSAGE_CAPACITY: usize = 96;

/// Name attached to a color selected from a palette or matched by keyword.
pub type Name = heapless::String<NAME_CAPACITY>;

/// A serialized CSS color.
pub type CssString = heapless::String<CSS_CAPACITY>;

/// A translated, user-facing message.
pub type Message = heapless::String<MESSAGE_CAPACITY>;

/// Copies `text` into a fixed-capacity string, dropping whatever does not fit.
pub(crate) fn truncated<const N: usize>(text: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Color space a channel tuple is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorSpace {
    /// Red, green, blue on the 0-255 scale.
    Rgb,

    /// Hue in degrees, saturation and value in percent.
    Hsv,

    /// Hue in degrees, saturation and lightness in percent.
    Hsl,
}

/// Textual output format of the serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CssFormat {
    /// `#rrggbb` / `#rrggbbaa`.
    #[default]
    Hex,

    /// `rgb(r, g, b)` / `rgba(r, g, b, a)`.
    Rgb,

    /// `hsl(h, s%, l%)` / `hsla(h, s%, l%, a)`.
    Hsl,

    /// `hsv(h, s%, v%)` / `hsva(h, s%, v%, a)`.
    Hsv,
}

impl From<ColorSpace> for CssFormat {
    fn from(space: ColorSpace) -> Self {
        match space {
            ColorSpace::Rgb => CssFormat::Rgb,
            ColorSpace::Hsv => CssFormat::Hsv,
            ColorSpace::Hsl => CssFormat::Hsl,
        }
    }
}

/// Why a color was rejected or corrected.
///
/// Errors are carried as data on a [`ColorValue`](crate::ColorValue) rather
/// than returned, so every kind has a stable translation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// Input could not be parsed as a color.
    InvalidColor,

    /// Input carried alpha while alpha is disabled.
    AlphaNotSupported,
}

impl ErrorKind {
    /// Translation key for this error kind.
    pub const fn key(&self) -> &'static str {
        match self {
            ErrorKind::InvalidColor => "invalidColor",
            ErrorKind::AlphaNotSupported => "alphaNotSupported",
        }
    }

    /// English message used when no translation is available.
    pub const fn default_message(&self) -> &'static str {
        match self {
            ErrorKind::InvalidColor => "Invalid color",
            ErrorKind::AlphaNotSupported => "Alpha not supported",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ErrorKind::InvalidColor => {
                write!(f, "invalid color")
            }
            ErrorKind::AlphaNotSupported => {
                write!(f, "alpha channel not supported")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ErrorKind {}
