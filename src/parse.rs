//! Parsing of heterogeneous color inputs.
//!
//! Every supported input shape is a variant of [`ColorInput`] and goes
//! through the single [`parse`] entry point. Parsing never fails loudly:
//! rejected input yields a [`ColorValue`] carrying
//! [`ErrorKind::InvalidColor`] and sentinel channels.
//!
//! Strings describe their own color space (`#`, `rgb(`, `hsl(`, a keyword),
//! so the format hint only matters for channel tuples and bare
//! comma-separated lists. Those are ambiguous without a hint and are
//! rejected rather than guessed.

use heapless::Vec;

use crate::convert;
use crate::named;
use crate::types::{ColorSpace, ErrorKind};
use crate::value::ColorValue;

/// Largest value accepted as a packed `0xRRGGBB` integer.
pub const PACKED_MAX: u32 = 0x00FF_FFFF;

/// Anything the parser accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorInput<'a> {
    /// Hex, functional notation, CSS keyword or a bare comma list.
    Text(&'a str),

    /// `0xRRGGBB`.
    Packed(u32),

    /// Three channels, or three channels and alpha, in the hinted space.
    Channels(&'a [f32]),

    /// An already parsed value, returned as-is.
    Value(&'a ColorValue),
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(text: &'a str) -> Self {
        ColorInput::Text(text)
    }
}

impl From<u32> for ColorInput<'_> {
    fn from(packed: u32) -> Self {
        ColorInput::Packed(packed)
    }
}

impl<'a> From<&'a [f32]> for ColorInput<'a> {
    fn from(channels: &'a [f32]) -> Self {
        ColorInput::Channels(channels)
    }
}

impl<'a> From<&'a [f32; 3]> for ColorInput<'a> {
    fn from(channels: &'a [f32; 3]) -> Self {
        ColorInput::Channels(channels)
    }
}

impl<'a> From<&'a [f32; 4]> for ColorInput<'a> {
    fn from(channels: &'a [f32; 4]) -> Self {
        ColorInput::Channels(channels)
    }
}

impl<'a> From<&'a ColorValue> for ColorInput<'a> {
    fn from(color: &'a ColorValue) -> Self {
        ColorInput::Value(color)
    }
}

/// Parses `input` into a color value.
///
/// `hint` names the color space of channel tuples and bare comma lists.
/// Self-describing strings ignore it.
///
/// Returns a value with [`ErrorKind::InvalidColor`] if the input is not a
/// color. Out-of-range channels are clamped and hues wrap; neither is an
/// error.
pub fn parse<'a>(input: impl Into<ColorInput<'a>>, hint: Option<ColorSpace>) -> ColorValue {
    match input.into() {
        ColorInput::Value(color) => color.clone(),
        input => parse_input(input, hint).unwrap_or_else(ColorValue::invalid),
    }
}

fn parse_input(input: ColorInput<'_>, hint: Option<ColorSpace>) -> Result<ColorValue, ErrorKind> {
    match input {
        ColorInput::Text(text) => parse_text(text, hint),
        ColorInput::Packed(packed) => parse_packed(packed),
        ColorInput::Channels(channels) => parse_channels(channels, hint),
        ColorInput::Value(color) => Ok(color.clone()),
    }
}

fn parse_text(text: &str, hint: Option<ColorSpace>) -> Result<ColorValue, ErrorKind> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ErrorKind::InvalidColor);
    }

    if let Some(hex) = text.strip_prefix('#') {
        return parse_hex(hex);
    }

    if let Some(open) = text.find('(') {
        return parse_function(text, open);
    }

    if let Some(keyword) = named::lookup(text) {
        let rgb = keyword.rgb.map(f32::from);
        return Ok(ColorValue::from_rgb(rgb, keyword.alpha).with_name(keyword.name));
    }

    if text.contains(',') {
        let space = hint.ok_or(ErrorKind::InvalidColor)?;
        let components = split_list(text)?;
        return build(space, &components);
    }

    parse_hex(text)
}

fn parse_hex(hex: &str) -> Result<ColorValue, ErrorKind> {
    let digits = hex.trim().as_bytes();
    if !digits.iter().all(u8::is_ascii_hexdigit) {
        return Err(ErrorKind::InvalidColor);
    }

    let nibble = |i: usize| -> u8 {
        match digits[i] {
            c @ b'0'..=b'9' => c - b'0',
            c @ b'a'..=b'f' => c - b'a' + 10,
            c => c - b'A' + 10,
        }
    };
    let short = |i: usize| nibble(i) * 17;
    let pair = |i: usize| (nibble(i) << 4) | nibble(i + 1);

    let (rgb, alpha) = match digits.len() {
        3 => ([short(0), short(1), short(2)], u8::MAX),
        4 => ([short(0), short(1), short(2)], short(3)),
        6 => ([pair(0), pair(2), pair(4)], u8::MAX),
        8 => ([pair(0), pair(2), pair(4)], pair(6)),
        _ => return Err(ErrorKind::InvalidColor),
    };

    Ok(ColorValue::from_rgb(
        rgb.map(f32::from),
        f32::from(alpha) / 255.0,
    ))
}

fn parse_function(text: &str, open: usize) -> Result<ColorValue, ErrorKind> {
    let function = text[..open].trim();
    let space = if function.eq_ignore_ascii_case("rgb") || function.eq_ignore_ascii_case("rgba") {
        ColorSpace::Rgb
    } else if function.eq_ignore_ascii_case("hsl") || function.eq_ignore_ascii_case("hsla") {
        ColorSpace::Hsl
    } else if function.eq_ignore_ascii_case("hsv") || function.eq_ignore_ascii_case("hsva") {
        ColorSpace::Hsv
    } else {
        return Err(ErrorKind::InvalidColor);
    };

    let args = text[open + 1..]
        .strip_suffix(')')
        .ok_or(ErrorKind::InvalidColor)?;
    let components = split_arguments(args)?;
    build(space, &components)
}

/// Splits functional arguments in either the comma form `a, b, c, alpha`
/// or the space form `a b c / alpha`.
fn split_arguments(args: &str) -> Result<Vec<&str, 4>, ErrorKind> {
    if args.contains(',') {
        return split_list(args);
    }

    let (channels, alpha) = match args.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha.trim())),
        None => (args, None),
    };

    let mut components = Vec::new();
    for token in channels.split_whitespace().chain(alpha) {
        components
            .push(token)
            .map_err(|_| ErrorKind::InvalidColor)?;
    }
    Ok(components)
}

fn split_list(list: &str) -> Result<Vec<&str, 4>, ErrorKind> {
    let mut components = Vec::new();
    for token in list.split(',') {
        components
            .push(token.trim())
            .map_err(|_| ErrorKind::InvalidColor)?;
    }
    Ok(components)
}

/// Turns three or four textual components into a color in `space`.
fn build(space: ColorSpace, components: &[&str]) -> Result<ColorValue, ErrorKind> {
    let (channels, alpha) = match components {
        [a, b, c] => ([*a, *b, *c], None),
        [a, b, c, alpha] => ([*a, *b, *c], Some(*alpha)),
        _ => return Err(ErrorKind::InvalidColor),
    };

    let [first, second, third] = channels;
    let channels = match space {
        ColorSpace::Rgb => [rgb_channel(first)?, rgb_channel(second)?, rgb_channel(third)?],
        ColorSpace::Hsv | ColorSpace::Hsl => [
            hue(first)?,
            percentage(second)?,
            percentage(third)?,
        ],
    };
    let alpha = alpha.map(alpha_channel).transpose()?.unwrap_or(1.0);

    Ok(from_space(space, channels, alpha))
}

fn parse_channels(channels: &[f32], hint: Option<ColorSpace>) -> Result<ColorValue, ErrorKind> {
    let space = hint.ok_or(ErrorKind::InvalidColor)?;
    if !channels.iter().all(|c| c.is_finite()) {
        return Err(ErrorKind::InvalidColor);
    }

    match *channels {
        [a, b, c] => Ok(from_space(space, [a, b, c], 1.0)),
        [a, b, c, alpha] => Ok(from_space(space, [a, b, c], alpha)),
        _ => Err(ErrorKind::InvalidColor),
    }
}

fn parse_packed(packed: u32) -> Result<ColorValue, ErrorKind> {
    if packed > PACKED_MAX {
        return Err(ErrorKind::InvalidColor);
    }
    let [_, r, g, b] = packed.to_be_bytes();
    Ok(ColorValue::from_rgb([r, g, b].map(f32::from), 1.0))
}

fn from_space(space: ColorSpace, channels: [f32; 3], alpha: f32) -> ColorValue {
    match space {
        ColorSpace::Rgb => ColorValue::from_rgb(channels, alpha),
        ColorSpace::Hsv => ColorValue::from_hsv(channels, alpha),
        ColorSpace::Hsl => ColorValue::from_hsl(channels, alpha),
    }
}

/// A decimal number. Magnitudes beyond `f32` come back infinite and are
/// left for the channel to clamp; NaN is rejected.
fn number(token: &str) -> Result<f32, ErrorKind> {
    token
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|n| !n.is_nan())
        .ok_or(ErrorKind::InvalidColor)
}

/// `255` or `100%`.
fn rgb_channel(token: &str) -> Result<f32, ErrorKind> {
    match token.trim().strip_suffix('%') {
        Some(percent) => Ok(number(percent)? * 2.55),
        None => number(token),
    }
}

/// Saturation, value or lightness; the `%` sign is optional.
fn percentage(token: &str) -> Result<f32, ErrorKind> {
    let token = token.trim();
    number(token.strip_suffix('%').unwrap_or(token))
}

/// `0.5` or `50%`.
fn alpha_channel(token: &str) -> Result<f32, ErrorKind> {
    let alpha = match token.trim().strip_suffix('%') {
        Some(percent) => number(percent)? / 100.0,
        None => number(token)?,
    };
    Ok(convert::clamp_alpha(alpha))
}

/// Degrees, optionally with a CSS angle unit.
fn hue(token: &str) -> Result<f32, ErrorKind> {
    const UNITS: [(&str, f32); 4] = [
        ("deg", 1.0),
        ("grad", 0.9),
        ("rad", 180.0 / core::f32::consts::PI),
        ("turn", 360.0),
    ];

    let token = token.trim();
    let degrees = match UNITS
        .iter()
        .find_map(|(unit, scale)| Some((strip_suffix_ignore_case(token, unit)?, scale)))
    {
        Some((value, scale)) => number(value)? * scale,
        None => number(token)?,
    };
    // An overflowing angle saturates so it still wraps to a finite hue
    Ok(degrees.clamp(f32::MIN, f32::MAX))
}

fn strip_suffix_ignore_case<'t>(token: &'t str, suffix: &str) -> Option<&'t str> {
    let split = token.len().checked_sub(suffix.len())?;
    let tail = token.get(split..)?;
    if tail.eq_ignore_ascii_case(suffix) {
        token.get(..split)
    } else {
        None
    }
}
