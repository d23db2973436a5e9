//! Pointer geometry of the picker controls.
//!
//! Maps positions on the 2D saturation gradient and on the hue and alpha
//! sliders to channel edits, and colors back to positions.

use crate::value::ColorValue;

/// Which color model the 2D gradient shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GradientMode {
    /// Saturation across, value down.
    #[default]
    Hsv,

    /// Saturation across, lightness down.
    Hsl,
}

/// The 2D gradient: saturation grows left to right, value (or lightness)
/// falls top to bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    width: f32,
    height: f32,
    mode: GradientMode,
}

impl Surface {
    /// Creates a surface of the given size. Sizes below one unit are
    /// raised to one.
    pub fn new(width: f32, height: f32, mode: GradientMode) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            mode,
        }
    }

    /// Surface width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Surface height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Gradient mode.
    pub fn mode(&self) -> GradientMode {
        self.mode
    }

    /// Color under the pointer at `(x, y)` for the given hue.
    ///
    /// Positions outside the surface are clamped to its edge.
    pub fn color_at(&self, hue: f32, x: f32, y: f32, alpha: f32) -> ColorValue {
        let saturation = fraction(x, self.width) * 100.0;
        let level = (1.0 - fraction(y, self.height)) * 100.0;

        match self.mode {
            GradientMode::Hsv => ColorValue::from_hsv([hue, saturation, level], alpha),
            GradientMode::Hsl => ColorValue::from_hsl([hue, saturation, level], alpha),
        }
    }

    /// Where the cursor for `color` sits on the surface.
    pub fn position_of(&self, color: &ColorValue) -> (f32, f32) {
        let [_, saturation, level] = match self.mode {
            GradientMode::Hsv => color.hsv(),
            GradientMode::Hsl => color.hsl(),
        };
        (
            f32::from(saturation) / 100.0 * self.width,
            (1.0 - f32::from(level) / 100.0) * self.height,
        )
    }
}

/// Applies a hue slider position (degrees, 0 to 360) to `color`.
pub fn hue_from_slider(color: &ColorValue, degrees: f32) -> ColorValue {
    if !degrees.is_finite() {
        return color.clone();
    }
    color.with_hue(degrees.clamp(0.0, 360.0))
}

/// Applies an alpha slider position (percent, 0 to 100) to `color`.
pub fn alpha_from_slider(color: &ColorValue, percent: f32) -> ColorValue {
    color.with_alpha(percent.clamp(0.0, 100.0) / 100.0)
}

fn fraction(position: f32, extent: f32) -> f32 {
    if position.is_finite() {
        (position / extent).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
