//! Aspect-preserving fit-to-box placement for document and image layout.
//!
//! Pure geometry: no pixel operations, no I/O, `no_std` compatible.
//!
//! # Modules
//!
//! - [`fit`](mod@fit): fit an image into a box on `f64` page units, with mode and gravity
//! - [`letterbox`]: the same in whole pixels, onto a padded fixed-size canvas
//! - [`paginate`]: split table rows into fixed-size pages
//! - [`autosize`]: largest size (e.g. font size) for which content still fits
//! - `svg` (feature `svg`): SVG preview of a placement

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod macros;

pub mod autosize;
pub mod error;
pub mod fit;
pub mod letterbox;
pub mod paginate;
#[cfg(feature = "svg")]
pub mod svg;

pub use autosize::SizeSearch;
pub use error::LayoutError;
pub use fit::{BoxFitter, Dimensions, FitMode, Frame, Gravity, Placement, fit};
pub use letterbox::{CanvasColor, Letterbox, LetterboxLayout, Rect, Size};
#[cfg(feature = "alloc")]
pub use paginate::split_with_header;
pub use paginate::{PageRanges, page_count, page_ranges};
