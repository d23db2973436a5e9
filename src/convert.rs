//! Color space conversion routines.
//!
//! All functions are pure and work on `f32` triples: RGB channels on the
//! 0-255 scale, hue in degrees, saturation, value and lightness in percent.
//! Nothing here rounds; rounding to the integer channels stored on a
//! [`ColorValue`](crate::ColorValue) happens once, when the value is built,
//! so chained conversions do not accumulate error.
//!
//! RGB to HSV/HSL goes through `palette`. HSV and HSL convert into each other
//! directly so the hue survives achromatic colors.

use palette::{FromColor, Hsl, Hsv, Srgb};

/// Upper bound of an RGB channel.
pub const RGB_MAX: f32 = 255.0;

/// Upper bound of a saturation, value or lightness channel.
pub const PERCENT_MAX: f32 = 100.0;

/// Full turn, in degrees.
pub const HUE_TURN: f32 = 360.0;

/// Converts RGB to HSV.
///
/// The hue of a gray is 0.
#[inline]
pub fn rgb_to_hsv(rgb: [f32; 3]) -> [f32; 3] {
    let hsv: Hsv = Hsv::from_color(normalized(rgb));
    [
        wrap_hue(hsv.hue.into_positive_degrees()),
        hsv.saturation * PERCENT_MAX,
        hsv.value * PERCENT_MAX,
    ]
}

/// Converts HSV to RGB.
#[inline]
pub fn hsv_to_rgb(hsv: [f32; 3]) -> [f32; 3] {
    let [h, s, v] = hsv;
    let hsv: Hsv = Hsv::new(
        wrap_hue(h),
        clamp_percent(s) / PERCENT_MAX,
        clamp_percent(v) / PERCENT_MAX,
    );
    denormalized(Srgb::from_color(hsv))
}

/// Converts RGB to HSL.
///
/// The hue of a gray is 0.
#[inline]
pub fn rgb_to_hsl(rgb: [f32; 3]) -> [f32; 3] {
    let hsl: Hsl = Hsl::from_color(normalized(rgb));
    [
        wrap_hue(hsl.hue.into_positive_degrees()),
        hsl.saturation * PERCENT_MAX,
        hsl.lightness * PERCENT_MAX,
    ]
}

/// Converts HSL to RGB.
#[inline]
pub fn hsl_to_rgb(hsl: [f32; 3]) -> [f32; 3] {
    let [h, s, l] = hsl;
    let hsl: Hsl = Hsl::new(
        wrap_hue(h),
        clamp_percent(s) / PERCENT_MAX,
        clamp_percent(l) / PERCENT_MAX,
    );
    denormalized(Srgb::from_color(hsl))
}

/// Converts HSV to HSL, keeping the hue as given.
pub fn hsv_to_hsl(hsv: [f32; 3]) -> [f32; 3] {
    let [h, s, v] = hsv;
    let s = clamp_percent(s) / PERCENT_MAX;
    let v = clamp_percent(v) / PERCENT_MAX;

    let l = v * (1.0 - s / 2.0);
    let s_hsl = if l <= 0.0 || l >= 1.0 {
        0.0
    } else {
        (v - l) / l.min(1.0 - l)
    };

    [wrap_hue(h), s_hsl * PERCENT_MAX, l * PERCENT_MAX]
}

/// Converts HSL to HSV, keeping the hue as given.
pub fn hsl_to_hsv(hsl: [f32; 3]) -> [f32; 3] {
    let [h, s, l] = hsl;
    let s = clamp_percent(s) / PERCENT_MAX;
    let l = clamp_percent(l) / PERCENT_MAX;

    let v = l + s * l.min(1.0 - l);
    let s_hsv = if v <= 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };

    [wrap_hue(h), s_hsv * PERCENT_MAX, v * PERCENT_MAX]
}

/// Wraps a hue into `[0, 360)`.
#[inline]
pub fn wrap_hue(hue: f32) -> f32 {
    let wrapped = libm::fmodf(hue, HUE_TURN);
    let wrapped = if wrapped < 0.0 { wrapped + HUE_TURN } else { wrapped };
    // -0.00001 + 360 rounds back up to a full turn
    if wrapped >= HUE_TURN { 0.0 } else { wrapped }
}

/// Clamps an RGB channel to `[0, 255]`.
#[inline]
pub fn clamp_rgb(value: f32) -> f32 {
    value.clamp(0.0, RGB_MAX)
}

/// Clamps a saturation, value or lightness channel to `[0, 100]`.
#[inline]
pub fn clamp_percent(value: f32) -> f32 {
    value.clamp(0.0, PERCENT_MAX)
}

/// Clamps alpha to `[0, 1]`.
#[inline]
pub fn clamp_alpha(alpha: f32) -> f32 {
    alpha.clamp(0.0, 1.0)
}

/// Rounds an RGB channel to its stored integer form.
#[inline]
pub fn round_rgb(value: f32) -> u8 {
    libm::roundf(clamp_rgb(value)) as u8
}

/// Rounds a hue to its stored integer form, wrapping 360 back to 0.
#[inline]
pub fn round_hue(hue: f32) -> u16 {
    let rounded = libm::roundf(wrap_hue(hue)) as u16;
    if rounded >= HUE_TURN as u16 { 0 } else { rounded }
}

/// Rounds a saturation, value or lightness channel to its stored integer form.
#[inline]
pub fn round_percent(value: f32) -> u16 {
    libm::roundf(clamp_percent(value)) as u16
}

fn normalized(rgb: [f32; 3]) -> Srgb {
    let [r, g, b] = rgb;
    Srgb::new(
        clamp_rgb(r) / RGB_MAX,
        clamp_rgb(g) / RGB_MAX,
        clamp_rgb(b) / RGB_MAX,
    )
}

fn denormalized(rgb: Srgb) -> [f32; 3] {
    [rgb.red * RGB_MAX, rgb.green * RGB_MAX, rgb.blue * RGB_MAX]
}
