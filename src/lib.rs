#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ColorValue`**: An immutable color with consistent RGB, HSV and HSL channels, alpha, an optional name and an optional error
//! - **`ColorInput`**: Every input shape the parser accepts (text, packed integer, channel tuple, existing value)
//! - **`parse`**: Turns any `ColorInput` into a `ColorValue`, marking unparseable input instead of failing
//! - **`to_css`**: Serializes a `ColorValue` as hex, `rgb()`, `hsl()` or `hsv()` text
//! - **`Validator`**: Applies a widget's alpha policy and picks translated error messages
//! - **`Swatches`**: An ordered, fixed-capacity palette of named colors
//! - **`Surface`**: Maps pointer positions on the saturation gradient to colors and back
//!
//! Numeric conversions live in [`convert`] and work on `f32` channels; values
//! round to integers only when a `ColorValue` is built.

pub mod convert;
pub mod named;
pub mod parse;
pub mod serialize;
pub mod surface;
pub mod swatches;
pub mod types;
pub mod validate;
pub mod value;

pub use parse::{parse, ColorInput, PACKED_MAX};
pub use serialize::{hover_css, to_css, to_packed, CssBundle};
pub use surface::{alpha_from_slider, hue_from_slider, GradientMode, Surface};
pub use swatches::{Swatch, SwatchError, Swatches};
pub use types::{
    ColorSpace, CssFormat, CssString, ErrorKind, Message, Name, CSS_CAPACITY, MESSAGE_CAPACITY,
    NAME_CAPACITY,
};
pub use validate::{validate, NoTranslation, Translate, Validation, Validator};
pub use value::ColorValue;
