//! Aspect-preserving fit-to-box scaling.
//!
//! Scales an image uniformly so it is as large as possible while lying
//! entirely inside a bounding box, then positions it in the leftover space.
//! Pure geometry on `f64` page units (points, millimetres or pixels, as the
//! caller decides). No allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use boxfit::fit;
//!
//! // A 100×200 portrait map in a 300×300 slot.
//! let p = fit(100.0, 200.0, 300.0, 300.0).unwrap();
//! assert_eq!((p.scaled_width, p.scaled_height), (150.0, 300.0));
//! assert_eq!((p.x_offset, p.y_offset), (75.0, 0.0));
//! ```

use crate::error::LayoutError;

/// How an image is scaled into its box.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FitMode {
    /// Scale up or down until the image touches the box on the binding axis.
    #[default]
    Fit,

    /// Like [`Fit`](Self::Fit), but never upscales.
    /// Images already inside the box keep their natural size.
    Within,
}

/// Where to position the image in the space the fit leaves over.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Gravity {
    /// Center on both axes.
    #[default]
    Center,
    /// Position by fraction of free space. `(0.0, 0.0)` = top-left,
    /// `(1.0, 1.0)` = bottom-right. Values are clamped to `0.0..=1.0`;
    /// a NaN component centers that axis.
    Percentage(f32, f32),
}

impl Gravity {
    /// Top-left corner.
    pub const TOP_LEFT: Self = Self::Percentage(0.0, 0.0);
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Self = Self::Percentage(1.0, 1.0);

    /// Fraction of free space placed before the image on one axis.
    pub(crate) fn fraction(&self, horizontal: bool) -> f64 {
        match *self {
            Gravity::Center => 0.5,
            Gravity::Percentage(x, y) => {
                let pct = if horizontal { x } else { y };
                if pct.is_nan() {
                    0.5
                } else {
                    f64::from(pct.clamp(0.0, 1.0))
                }
            }
        }
    }
}

/// Width × height of an image or a box. Both components are positive and finite.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dimensions {
    width: f64,
    height: f64,
}

impl Dimensions {
    /// Validate and create dimensions.
    pub fn new(width: f64, height: f64) -> Result<Self, LayoutError> {
        if is_valid_extent(width) && is_valid_extent(height) {
            Ok(Self { width, height })
        } else {
            Err(LayoutError::InvalidDimension)
        }
    }

    /// Caller guarantees both extents are positive and finite.
    #[cfg_attr(not(feature = "svg"), allow(dead_code))]
    pub(crate) const fn from_valid(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub const fn width(self) -> f64 {
        self.width
    }

    pub const fn height(self) -> f64 {
        self.height
    }

    /// Width divided by height.
    pub fn aspect_ratio(self) -> f64 {
        self.width / self.height
    }
}

impl TryFrom<(f64, f64)> for Dimensions {
    type Error = LayoutError;

    fn try_from((width, height): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(width, height)
    }
}

fn is_valid_extent(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Result of fitting an image into a box, relative to the box origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Width to draw the image at (≤ box width).
    pub scaled_width: f64,
    /// Height to draw the image at (≤ box height).
    pub scaled_height: f64,
    /// Distance from the box's left edge to the image.
    pub x_offset: f64,
    /// Distance from the box's top edge to the image. In y-up page
    /// coordinates this is measured from the bottom edge instead.
    pub y_offset: f64,
}

impl Placement {
    /// Uniform scale factor that was applied to the natural image size.
    pub fn scale_factor(&self, image: Dimensions) -> f64 {
        self.scaled_width / image.width()
    }

    /// Position this placement inside a box whose origin is `(x, y)`.
    pub fn at(&self, x: f64, y: f64) -> Frame {
        Frame {
            x: x + self.x_offset,
            y: y + self.y_offset,
            width: self.scaled_width,
            height: self.scaled_height,
        }
    }
}

/// Axis-aligned rectangle in page coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    /// Create a new frame.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Size of this frame, validated.
    pub fn dimensions(&self) -> Result<Dimensions, LayoutError> {
        Dimensions::new(self.width, self.height)
    }

    /// Whether `other` lies entirely inside this frame.
    pub fn contains(&self, other: &Frame) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.width <= self.x + self.width
            && other.y + other.height <= self.y + self.height
    }
}

/// Fit configuration.
///
/// # Example
///
/// ```
/// use boxfit::{BoxFitter, Dimensions, FitMode, Frame, Gravity};
///
/// let fitter = BoxFitter::new().mode(FitMode::Within).gravity(Gravity::TOP_LEFT);
/// let photo = Dimensions::new(120.0, 80.0).unwrap();
///
/// // Small photo in a large slot: no upscale, pinned to the top-left.
/// let frame = fitter.fit_frame(photo, Frame::new(36.0, 400.0, 240.0, 160.0)).unwrap();
/// assert_eq!(frame, Frame::new(36.0, 400.0, 120.0, 80.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoxFitter {
    pub mode: FitMode,
    pub gravity: Gravity,
}

impl BoxFitter {
    /// Fit mode, centered.
    pub const fn new() -> Self {
        Self {
            mode: FitMode::Fit,
            gravity: Gravity::Center,
        }
    }

    /// Set the fit mode.
    pub fn mode(mut self, mode: FitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set gravity for positioning within leftover space.
    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    /// Fit validated image dimensions into validated box dimensions.
    ///
    /// Fails with [`LayoutError::InvalidDimension`] when the aspect ratios
    /// are so far apart that the scaled free axis underflows to zero.
    pub fn fit(&self, image: Dimensions, bounds: Dimensions) -> Result<Placement, LayoutError> {
        let (iw, ih) = (image.width(), image.height());
        let (bw, bh) = (bounds.width(), bounds.height());

        let (scaled_width, scaled_height) = scale_inside(iw, ih, bw, bh, self.mode);
        if scaled_width == 0.0 || scaled_height == 0.0 {
            return Err(LayoutError::InvalidDimension);
        }
        let x_offset = (bw - scaled_width) * self.gravity.fraction(true);
        let y_offset = (bh - scaled_height) * self.gravity.fraction(false);

        trace_layout!(
            image_w = iw,
            image_h = ih,
            box_w = bw,
            box_h = bh,
            scaled_width,
            scaled_height,
            x_offset,
            y_offset,
            "fit image into box"
        );

        Ok(Placement {
            scaled_width,
            scaled_height,
            x_offset,
            y_offset,
        })
    }

    /// Fit from raw numbers, validating all four.
    pub fn fit_raw(
        &self,
        image_w: f64,
        image_h: f64,
        box_w: f64,
        box_h: f64,
    ) -> Result<Placement, LayoutError> {
        let image = Dimensions::new(image_w, image_h)?;
        let bounds = Dimensions::new(box_w, box_h)?;
        self.fit(image, bounds)
    }

    /// Fit an image into a box positioned on a page; returns the draw frame.
    ///
    /// Fails with [`LayoutError::InvalidDimension`] when the frame has a
    /// non-positive size or a non-finite origin, or when [`fit`](Self::fit) does.
    pub fn fit_frame(&self, image: Dimensions, frame: Frame) -> Result<Frame, LayoutError> {
        if !frame.x.is_finite() || !frame.y.is_finite() {
            return Err(LayoutError::InvalidDimension);
        }
        let bounds = frame.dimensions()?;
        Ok(self.fit(image, bounds)?.at(frame.x, frame.y))
    }
}

/// Fit an `image_w × image_h` image into a `box_w × box_h` box, centered.
///
/// Fails with [`LayoutError::InvalidDimension`] when any input is zero,
/// negative, NaN, or infinite, and when the image and box aspect ratios
/// differ by so much (beyond about 2^1000) that the scaled short side
/// rounds to zero.
pub fn fit(image_w: f64, image_h: f64, box_w: f64, box_h: f64) -> Result<Placement, LayoutError> {
    BoxFitter::new().fit_raw(image_w, image_h, box_w, box_h)
}

/// Scaled size for an image inside a box. The binding axis equals the box
/// exactly; the free axis never exceeds it.
fn scale_inside(iw: f64, ih: f64, bw: f64, bh: f64, mode: FitMode) -> (f64, f64) {
    if mode == FitMode::Within && iw <= bw && ih <= bh {
        return (iw, ih);
    }
    // Height of the image scaled to the box width.
    let h = mul_div(bw, ih, iw);
    if h <= bh {
        (bw, h)
    } else {
        (mul_div(bh, iw, ih).min(bw), bh)
    }
}

/// `t * n / d` for positive finite operands, ordered so the intermediate
/// stays a normal number whenever the result can be represented.
fn mul_div(t: f64, n: f64, d: f64) -> f64 {
    let q = t / d;
    if q.is_normal() {
        return q * n;
    }
    let q = n / d;
    if q.is_normal() {
        return t * q;
    }
    t * n / d
}
