use std::fmt;
use std::str::FromStr;

use crate::error::FilterError;
use crate::filters::{BlurExt, EdgesExt, GrayscaleExt, ReflectExt};
use crate::grid::PixelGrid;

/// One of the four filter passes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    Grayscale,
    Reflect,
    Blur,
    Edges,
}

impl Filter {
    pub const ALL: [Self; 4] = [Self::Grayscale, Self::Reflect, Self::Blur, Self::Edges];

    /// Looks up a filter by its single-letter flag (`g`, `r`, `b`, `e`).
    pub fn from_flag(flag: char) -> Option<Self> {
        match flag.to_ascii_lowercase() {
            'g' => Some(Self::Grayscale),
            'r' => Some(Self::Reflect),
            'b' => Some(Self::Blur),
            'e' => Some(Self::Edges),
            _ => None,
        }
    }

    pub const fn flag(self) -> char {
        match self {
            Self::Grayscale => 'g',
            Self::Reflect => 'r',
            Self::Blur => 'b',
            Self::Edges => 'e',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Reflect => "reflect",
            Self::Blur => "blur",
            Self::Edges => "edges",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = FilterError;

    /// Accepts a filter name in any case, or its single-letter flag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(flag), None) = (chars.next(), chars.next()) {
            if let Some(filter) = Self::from_flag(flag) {
                return Ok(filter);
            }
        }

        Self::ALL
            .into_iter()
            .find(|filter| filter.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| FilterError::UnknownFilter(s.to_owned()))
    }
}

/// Trait for running one caller-selected filter pass.
///
/// Passes are not chained here; to apply several filters, call this once
/// per filter in the desired order.
pub trait ApplyFilterExt {
    /// Applies `filter`, consuming the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_filters::{ApplyFilterExt, Filter, PixelGrid};
    /// use image::Rgb;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let grid = PixelGrid::from_pixel(3, 3, Rgb([255, 255, 255]));
    /// let filter: Filter = "blur".parse()?;
    /// let blurred = grid.clone().apply_filter(filter)?;
    /// assert_eq!(blurred, grid);
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    fn apply_filter(self, filter: Filter) -> Result<Self, FilterError>
    where
        Self: Sized;

    /// Applies `filter` in place.
    fn apply_filter_mut(&mut self, filter: Filter) -> Result<&mut Self, FilterError>;
}

impl ApplyFilterExt for PixelGrid {
    fn apply_filter(mut self, filter: Filter) -> Result<Self, FilterError> {
        self.apply_filter_mut(filter)?;
        Ok(self)
    }

    fn apply_filter_mut(&mut self, filter: Filter) -> Result<&mut Self, FilterError> {
        match filter {
            Filter::Grayscale => self.grayscale_mut(),
            Filter::Reflect => self.reflect_mut(),
            Filter::Blur => self.blur_mut(),
            Filter::Edges => self.detect_edges_mut(),
        }
    }
}
