//! Validation at the widget boundary.
//!
//! The validator wraps [`parse`](crate::parse) with the policy widgets apply
//! to every incoming value: alpha is silently dropped when the widget does
//! not support it, and rejected input is paired with a translated message.
//! The value itself only ever stores the untranslated [`ErrorKind`], so
//! validating again under another locale gives the same value.

use crate::parse::{parse, ColorInput};
use crate::types::{truncated, ColorSpace, ErrorKind, Message};
use crate::value::ColorValue;

/// Source of user-facing messages.
///
/// Implemented for closures `Fn(&str, &str) -> Option<Message>` taking a
/// translation key and a locale.
pub trait Translate {
    /// Returns the message for `key` in `locale`, or `None` to fall back to
    /// the built-in English text.
    fn translate(&self, key: &str, locale: &str) -> Option<Message>;
}

impl<F> Translate for F
where
    F: Fn(&str, &str) -> Option<Message>,
{
    fn translate(&self, key: &str, locale: &str) -> Option<Message> {
        self(key, locale)
    }
}

/// Translator that always falls back to English.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslation;

impl Translate for NoTranslation {
    fn translate(&self, _key: &str, _locale: &str) -> Option<Message> {
        None
    }
}

/// Result of validating one input.
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    /// The color to use. Always renderable.
    pub color: ColorValue,

    /// Correction applied to an otherwise valid color, if any.
    pub correction: Option<ErrorKind>,

    /// Translated message for the error or the correction.
    pub message: Option<Message>,
}

/// Validation policy of one widget.
pub struct Validator<'a, T: Translate + ?Sized = NoTranslation> {
    disable_alpha: bool,
    hint: Option<ColorSpace>,
    translator: &'a T,
    locale: &'a str,
}

impl<T: Translate + ?Sized> Clone for Validator<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Translate + ?Sized> Copy for Validator<'_, T> {}

impl<T: Translate + ?Sized> core::fmt::Debug for Validator<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Validator")
            .field("disable_alpha", &self.disable_alpha)
            .field("hint", &self.hint)
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl<'a, T: Translate + ?Sized> Validator<'a, T> {
    /// Creates a validator.
    pub fn new(disable_alpha: bool, translator: &'a T, locale: &'a str) -> Self {
        Self {
            disable_alpha,
            hint: None,
            translator,
            locale,
        }
    }

    /// Sets the color space assumed for channel tuples.
    pub fn hint(mut self, space: ColorSpace) -> Self {
        self.hint = Some(space);
        self
    }

    /// Returns `true` if alpha is forced to 1.
    pub fn disables_alpha(&self) -> bool {
        self.disable_alpha
    }

    /// Parses `input` and applies the alpha policy.
    pub fn check<'i>(&self, input: impl Into<ColorInput<'i>>) -> Validation {
        let color = parse(input, self.hint);

        if let Some(kind) = color.error() {
            #[cfg(feature = "defmt")]
            defmt::debug!("color input rejected: {}", kind);
            return Validation {
                color,
                correction: None,
                message: Some(self.message(kind)),
            };
        }

        if self.disable_alpha && color.alpha() < 1.0 {
            #[cfg(feature = "defmt")]
            defmt::debug!("alpha {} dropped, alpha is disabled", color.alpha());
            return Validation {
                color: color.opaque(),
                correction: Some(ErrorKind::AlphaNotSupported),
                message: Some(self.message(ErrorKind::AlphaNotSupported)),
            };
        }

        Validation {
            color,
            correction: None,
            message: None,
        }
    }

    /// Parses `input` and applies the alpha policy, keeping only the color.
    pub fn validate<'i>(&self, input: impl Into<ColorInput<'i>>) -> ColorValue {
        self.check(input).color
    }

    /// Message for `kind` in this validator's locale.
    pub fn message(&self, kind: ErrorKind) -> Message {
        self.translator
            .translate(kind.key(), self.locale)
            .unwrap_or_else(|| truncated(kind.default_message()))
    }

    /// Message explaining why `color` was rejected, if it was.
    pub fn error_message(&self, color: &ColorValue) -> Option<Message> {
        color.error().map(|kind| self.message(kind))
    }
}

/// Parses `input`, forcing alpha to 1 when `disable_alpha` is set.
///
/// Never fails: rejected input yields a value carrying
/// [`ErrorKind::InvalidColor`] with sentinel channels, and the report
/// carries its message translated by `translator` for `locale`.
pub fn validate<'i, T: Translate + ?Sized>(
    input: impl Into<ColorInput<'i>>,
    disable_alpha: bool,
    translator: &T,
    locale: &str,
) -> Validation {
    Validator::new(disable_alpha, translator, locale).check(input)
}
