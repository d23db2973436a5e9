//! Ordered palettes of named swatches.

use heapless::Vec;

use crate::parse::{parse, ColorInput};
use crate::types::{truncated, ColorSpace, Name, NAME_CAPACITY};
use crate::validate::Translate;
use crate::value::ColorValue;

/// Errors that can occur while filling a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwatchError {
    /// The palette is full.
    Full,

    /// The swatch name is longer than [`NAME_CAPACITY`] bytes.
    NameTooLong,
}

impl core::fmt::Display for SwatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SwatchError::Full => {
                write!(f, "palette is full, cannot add more swatches")
            }
            SwatchError::NameTooLong => {
                write!(f, "swatch name exceeds {} bytes", NAME_CAPACITY)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SwatchError {}

/// One named palette entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    name: Name,
    color: ColorValue,
}

impl Swatch {
    /// Name the swatch was inserted under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parsed color. Invalid entries keep their error so they render
    /// as such.
    pub fn color(&self) -> &ColorValue {
        &self.color
    }
}

/// A palette of up to `N` named colors, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Swatches<const N: usize> {
    entries: Vec<Swatch, N>,
    hint: Option<ColorSpace>,
}

impl<const N: usize> Swatches<N> {
    /// Creates an empty palette.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            hint: None,
        }
    }

    /// Sets the color space assumed for channel tuples and bare comma
    /// lists. Without it those entries are stored as invalid.
    pub fn hint(mut self, space: ColorSpace) -> Self {
        self.hint = Some(space);
        self
    }

    /// Parses `input` and stores it under `name`.
    ///
    /// An existing swatch with the same name is replaced in place, keeping
    /// its position.
    ///
    /// # Errors
    /// * `NameTooLong` - `name` does not fit in a [`Name`]
    /// * `Full` - the palette already holds `N` swatches
    pub fn insert<'i>(
        &mut self,
        name: &str,
        input: impl Into<ColorInput<'i>>,
    ) -> Result<(), SwatchError> {
        if name.len() > NAME_CAPACITY {
            return Err(SwatchError::NameTooLong);
        }
        let color = parse(input, self.hint);

        if let Some(existing) = self.entries.iter_mut().find(|s| s.name == name) {
            existing.color = color;
            return Ok(());
        }

        self.entries
            .push(Swatch {
                name: truncated(name),
                color,
            })
            .map_err(|_| SwatchError::Full)
    }

    /// Builder form of [`insert`](Self::insert).
    ///
    /// # Errors
    /// Same as [`insert`](Self::insert).
    pub fn with<'i>(
        mut self,
        name: &str,
        input: impl Into<ColorInput<'i>>,
    ) -> Result<Self, SwatchError> {
        self.insert(name, input)?;
        Ok(self)
    }

    /// Color stored under `name`.
    pub fn get(&self, name: &str) -> Option<&ColorValue> {
        self.find(name).map(Swatch::color)
    }

    /// Picks the swatch `name`: its color, carrying the swatch name.
    pub fn select(&self, name: &str) -> Option<ColorValue> {
        self.find(name).map(|s| s.color.with_name(&s.name))
    }

    /// Picks the swatch `name`, naming the color with the translation of
    /// the swatch name (or the name itself when there is none).
    pub fn select_translated<T: Translate + ?Sized>(
        &self,
        name: &str,
        translator: &T,
        locale: &str,
    ) -> Option<ColorValue> {
        let swatch = self.find(name)?;
        let color = match translator.translate(&swatch.name, locale) {
            Some(translated) => swatch.color.with_name(&translated),
            None => swatch.color.with_name(&swatch.name),
        };
        Some(color)
    }

    /// Swatches in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Swatch> {
        self.entries.iter()
    }

    /// Number of swatches.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the palette has no swatches.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, name: &str) -> Option<&Swatch> {
        self.entries.iter().find(|s| s.name == name)
    }
}

impl<'s, const N: usize> IntoIterator for &'s Swatches<N> {
    type Item = &'s Swatch;
    type IntoIter = core::slice::Iter<'s, Swatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
