//! The canonical color representation.

use crate::convert;
use crate::serialize::{self, CssBundle};
use crate::types::{truncated, CssFormat, ErrorKind, Name};

#[cfg(feature = "std")]
type Memo<T> = std::sync::OnceLock<T>;
#[cfg(not(feature = "std"))]
type Memo<T> = core::cell::OnceCell<T>;

/// An immutable color with mutually consistent RGB, HSV and HSL channels.
///
/// Values are created by [`parse`](crate::parse) (directly or through the
/// validator) or by the `from_*` constructors, and never change afterwards:
/// every edit returns a new value.
///
/// A value may carry an [`ErrorKind`]. Its channels are then the sentinel
/// (black, fully transparent) so it can still be rendered, but it should
/// not be committed.
///
/// The hue of an achromatic color is whatever its source carried: 0 for
/// RGB, hex, keyword and packed inputs, the given hue for HSV and HSL
/// inputs. Edits that keep the channels keep the hue as well, so a hue
/// slider dragged over a gray does not jump back to red.
#[derive(Debug, Clone)]
pub struct ColorValue {
    rgb: [u8; 3],
    hsv: [u16; 3],
    hsl: [u16; 3],
    alpha: f32,
    name: Option<Name>,
    error: Option<ErrorKind>,
    css: Memo<CssBundle>,
}

impl ColorValue {
    /// Creates a value from RGB channels on the 0-255 scale.
    ///
    /// Channels are clamped, alpha is clamped to `[0, 1]`.
    pub fn from_rgb(rgb: [f32; 3], alpha: f32) -> Self {
        let rgb = rgb.map(convert::clamp_rgb);
        let hsv = convert::rgb_to_hsv(rgb);
        let hsl = convert::hsv_to_hsl(hsv);
        Self::from_channels(rgb, hsv, hsl, alpha)
    }

    /// Creates a value from HSV channels (degrees, percent, percent).
    ///
    /// Hue wraps, saturation and value are clamped.
    pub fn from_hsv(hsv: [f32; 3], alpha: f32) -> Self {
        let [h, s, v] = hsv;
        let hsv = [
            convert::wrap_hue(h),
            convert::clamp_percent(s),
            convert::clamp_percent(v),
        ];
        let rgb = convert::hsv_to_rgb(hsv);
        let hsl = convert::hsv_to_hsl(hsv);
        Self::from_channels(rgb, hsv, hsl, alpha)
    }

    /// Creates a value from HSL channels (degrees, percent, percent).
    ///
    /// Hue wraps, saturation and lightness are clamped.
    pub fn from_hsl(hsl: [f32; 3], alpha: f32) -> Self {
        let [h, s, l] = hsl;
        let hsl = [
            convert::wrap_hue(h),
            convert::clamp_percent(s),
            convert::clamp_percent(l),
        ];
        let rgb = convert::hsl_to_rgb(hsl);
        let hsv = convert::hsl_to_hsv(hsl);
        Self::from_channels(rgb, hsv, hsl, alpha)
    }

    /// Creates the sentinel value for a rejected input.
    pub fn invalid(kind: ErrorKind) -> Self {
        Self {
            rgb: [0; 3],
            hsv: [0; 3],
            hsl: [0; 3],
            alpha: 0.0,
            name: None,
            error: Some(kind),
            css: Memo::new(),
        }
    }

    // Single rounding point for every constructor.
    fn from_channels(rgb: [f32; 3], hsv: [f32; 3], hsl: [f32; 3], alpha: f32) -> Self {
        let hue = convert::round_hue(hsv[0]);
        Self {
            rgb: rgb.map(convert::round_rgb),
            hsv: [
                hue,
                convert::round_percent(hsv[1]),
                convert::round_percent(hsv[2]),
            ],
            hsl: [
                hue,
                convert::round_percent(hsl[1]),
                convert::round_percent(hsl[2]),
            ],
            alpha: sanitize_alpha(alpha, 1.0),
            name: None,
            error: None,
            css: Memo::new(),
        }
    }

    /// Red, green and blue in `[0, 255]`.
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// Hue in `[0, 360)`, saturation and value in `[0, 100]`.
    pub fn hsv(&self) -> [u16; 3] {
        self.hsv
    }

    /// Hue in `[0, 360)`, saturation and lightness in `[0, 100]`.
    pub fn hsl(&self) -> [u16; 3] {
        self.hsl
    }

    /// Shared hue of the HSV and HSL channels.
    pub fn hue(&self) -> u16 {
        self.hsv[0]
    }

    /// Opacity in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Opacity as a whole percentage, the scale of an alpha slider.
    pub fn alpha_percent(&self) -> u8 {
        libm::roundf(self.alpha * 100.0) as u8
    }

    /// Palette or keyword name, if the color was picked by name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Why the input behind this value was rejected, if it was.
    pub fn error(&self) -> Option<ErrorKind> {
        self.error
    }

    /// Returns `true` if the value can be committed.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Ready-made CSS strings for this color.
    ///
    /// Computed on first access and cached on the value.
    pub fn css(&self) -> &CssBundle {
        self.css.get_or_init(|| serialize::css_bundle(self))
    }

    /// The color packed as `0xRRGGBB`.
    pub fn packed(&self) -> u32 {
        serialize::to_packed(self)
    }

    /// Returns a copy with a new opacity. Clears the name.
    ///
    /// A non-finite alpha keeps the current opacity.
    pub fn with_alpha(&self, alpha: f32) -> Self {
        let alpha = sanitize_alpha(alpha, self.alpha);
        Self {
            rgb: self.rgb,
            hsv: self.hsv,
            hsl: self.hsl,
            alpha,
            name: None,
            error: None,
            css: Memo::new(),
        }
    }

    /// Returns a copy with alpha forced to 1.
    ///
    /// Opaque values are returned unchanged, name included. So are invalid
    /// ones: the sentinel stays uncommittable.
    pub fn opaque(&self) -> Self {
        if self.alpha >= 1.0 || !self.is_valid() {
            return self.clone();
        }
        self.with_alpha(1.0)
    }

    /// Returns a copy with a new hue, keeping HSV saturation and value.
    /// Clears the name. Invalid values are returned unchanged.
    pub fn with_hue(&self, hue: f32) -> Self {
        if !self.is_valid() {
            return self.clone();
        }
        let [_, s, v] = self.hsv;
        Self::from_hsv([hue, f32::from(s), f32::from(v)], self.alpha)
    }

    /// Returns a copy carrying `name`, truncated to
    /// [`NAME_CAPACITY`](crate::NAME_CAPACITY) bytes.
    pub fn with_name(&self, name: &str) -> Self {
        let mut named = self.clone();
        named.name = Some(truncated(name));
        named
    }

    /// Returns a copy without a name.
    pub fn without_name(&self) -> Self {
        let mut unnamed = self.clone();
        unnamed.name = None;
        unnamed
    }
}

impl PartialEq for ColorValue {
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb
            && self.hsv == other.hsv
            && self.hsl == other.hsl
            && self.alpha == other.alpha
            && self.name == other.name
            && self.error == other.error
    }
}

impl core::fmt::Display for ColorValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(serialize::to_css(self, CssFormat::Hex, true).as_str())
    }
}

fn sanitize_alpha(alpha: f32, fallback: f32) -> f32 {
    if alpha.is_finite() {
        convert::clamp_alpha(alpha)
    } else {
        fallback
    }
}
