//! Largest-fitting size search.
//!
//! Steps a size (typically a font size) down from a maximum until a
//! caller-supplied measurement says the content fits its panel. The
//! measurement itself (text wrapping, glyph metrics) belongs to the caller.

use crate::error::LayoutError;

/// Stepped descending range `max, max - step, …` down to `min`.
///
/// # Example
///
/// ```
/// use boxfit::SizeSearch;
///
/// // Body text needs 40pt of height per point of font size; panel is 480pt tall.
/// let search = SizeSearch::new(13.5, 10.0, 0.5).unwrap();
/// assert_eq!(search.largest_fitting(|size| size * 40.0 <= 480.0), 12.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SizeSearch {
    max: f32,
    min: f32,
    step: f32,
}

impl SizeSearch {
    /// Validate and create a search range.
    ///
    /// `step` must be large enough to move `max` at `f32` precision.
    pub fn new(max: f32, min: f32, step: f32) -> Result<Self, LayoutError> {
        let finite = max.is_finite() && min.is_finite() && step.is_finite();
        if !finite || min <= 0.0 || max < min || step <= 0.0 || max - step == max {
            return Err(LayoutError::InvalidSearchRange);
        }
        Ok(Self { max, min, step })
    }

    pub const fn max(&self) -> f32 {
        self.max
    }

    pub const fn min(&self) -> f32 {
        self.min
    }

    pub const fn step(&self) -> f32 {
        self.step
    }

    /// Sizes tried, largest first. Each is `max - i * step`, so rounding
    /// error does not accumulate across steps. Strictly decreasing: a step
    /// that rounds to the previous size is skipped.
    pub fn candidates(&self) -> Candidates {
        Candidates {
            search: *self,
            index: 0,
            last: None,
        }
    }

    /// First candidate for which `fits` returns true, or `min` if none does.
    pub fn largest_fitting(&self, mut fits: impl FnMut(f32) -> bool) -> f32 {
        let chosen = self.candidates().find(|&size| fits(size));
        trace_layout!(
            max = self.max,
            min = self.min,
            step = self.step,
            fitted = chosen.is_some(),
            "size search finished"
        );
        chosen.unwrap_or(self.min)
    }
}

/// Iterator over [`SizeSearch`] candidates.
#[derive(Clone, Debug)]
pub struct Candidates {
    search: SizeSearch,
    index: u32,
    last: Option<f32>,
}

impl Iterator for Candidates {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        loop {
            let size = self.search.max - self.index as f32 * self.search.step;
            if size < self.search.min {
                return None;
            }
            self.index = self.index.checked_add(1)?;
            if self.last.is_none_or(|last| size < last) {
                self.last = Some(size);
                return Some(size);
            }
        }
    }
}

impl core::iter::FusedIterator for Candidates {}
