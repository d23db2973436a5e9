//! CSS serialization of color values.
//!
//! Functional forms print the integer channels stored on the
//! [`ColorValue`], never re-derived ones, so parsing a serialized string
//! gives back the same channels.

use core::fmt::{self, Write};

use crate::types::{CssFormat, CssString};
use crate::value::ColorValue;

/// Ready-made CSS strings for one color, all with alpha when it is below 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssBundle {
    /// `#rrggbb` or `#rrggbbaa`.
    pub hex: CssString,
    /// `rgb(...)` or `rgba(...)`.
    pub rgb: CssString,
    /// `hsl(...)` or `hsla(...)`.
    pub hsl: CssString,
    /// `hsv(...)` or `hsva(...)`.
    pub hsv: CssString,
    /// Value for a CSS `background-color` declaration.
    pub background_color: CssString,
}

impl CssBundle {
    /// Returns the string for `format`.
    pub fn get(&self, format: CssFormat) -> &str {
        match format {
            CssFormat::Hex => self.hex.as_str(),
            CssFormat::Rgb => self.rgb.as_str(),
            CssFormat::Hsl => self.hsl.as_str(),
            CssFormat::Hsv => self.hsv.as_str(),
        }
    }
}

/// Serializes `color` as CSS text.
///
/// The alpha form (`#rrggbbaa`, `rgba()`, `hsla()`, `hsva()`) is used when
/// `include_alpha` is set and the color is not fully opaque; otherwise the
/// shorter opaque form is emitted. Hex output is lower-case.
pub fn to_css(color: &ColorValue, format: CssFormat, include_alpha: bool) -> CssString {
    let alpha = color.alpha();
    let translucent = include_alpha && alpha < 1.0;
    let [r, g, b] = color.rgb();

    let mut out = CssString::new();
    let written = match (format, translucent) {
        (CssFormat::Hex, false) => write!(out, "#{:02x}{:02x}{:02x}", r, g, b),
        (CssFormat::Hex, true) => {
            write!(out, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, alpha_byte(alpha))
        }
        (CssFormat::Rgb, false) => write!(out, "rgb({}, {}, {})", r, g, b),
        (CssFormat::Rgb, true) => {
            write!(out, "rgba({}, {}, {}, {})", r, g, b, AlphaText(alpha))
        }
        (CssFormat::Hsl, translucent) => {
            write_polar(&mut out, "hsl", color.hsl(), translucent.then_some(alpha))
        }
        (CssFormat::Hsv, translucent) => {
            write_polar(&mut out, "hsv", color.hsv(), translucent.then_some(alpha))
        }
    };
    // Every form fits in CSS_CAPACITY.
    debug_assert!(written.is_ok());
    out
}

/// Packs the RGB channels as `0xRRGGBB`. Alpha is dropped.
pub fn to_packed(color: &ColorValue) -> u32 {
    let [r, g, b] = color.rgb();
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Builds the string bundle memoized by [`ColorValue::css`].
pub fn css_bundle(color: &ColorValue) -> CssBundle {
    CssBundle {
        hex: to_css(color, CssFormat::Hex, true),
        rgb: to_css(color, CssFormat::Rgb, true),
        hsl: to_css(color, CssFormat::Hsl, true),
        hsv: to_css(color, CssFormat::Hsv, true),
        background_color: to_css(color, CssFormat::Rgb, true),
    }
}

/// The shade a swatch shows under the pointer, as `hsla()`.
///
/// Lightness drops by 10, or rises by 50 when that would fall below 30.
pub fn hover_css(color: &ColorValue) -> CssString {
    let [h, s, l] = color.hsl();
    let darker = i32::from(l) - 10;
    let lightness = if darker < 30 {
        (i32::from(l) + 50).min(100)
    } else {
        darker
    };

    let mut out = CssString::new();
    let written = write!(
        out,
        "hsla({}, {}%, {}%, {})",
        h,
        s,
        lightness,
        AlphaText(color.alpha())
    );
    debug_assert!(written.is_ok());
    out
}

fn write_polar(
    out: &mut CssString,
    function: &str,
    channels: [u16; 3],
    alpha: Option<f32>,
) -> fmt::Result {
    let [h, a, b] = channels;
    match alpha {
        Some(alpha) => write!(
            out,
            "{}a({}, {}%, {}%, {})",
            function,
            h,
            a,
            b,
            AlphaText(alpha)
        ),
        None => write!(out, "{}({}, {}%, {}%)", function, h, a, b),
    }
}

fn alpha_byte(alpha: f32) -> u8 {
    libm::roundf(alpha * 255.0) as u8
}

/// Alpha rounded to two decimals, in its shortest form (`0.5`, `1`).
struct AlphaText(f32);

impl fmt::Display for AlphaText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = libm::roundf(self.0 * 100.0) / 100.0;
        write!(f, "{}", rounded)
    }
}
