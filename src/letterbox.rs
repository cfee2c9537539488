//! Integer-pixel letterboxing onto a fixed-size canvas.
//!
//! Computes the resize target, canvas, and placement for producing a raster
//! image of exactly the box size: the source is scaled to fit, then padded
//! with a background color. Used when an image is preprocessed into a file
//! that a layout engine later draws without further scaling.
//!
//! # Example
//!
//! ```
//! use boxfit::{CanvasColor, Letterbox, Size};
//!
//! // Map screenshot into a 540×216 slot on a white background.
//! let layout = Letterbox::new(540, 216)
//!     .canvas_color(CanvasColor::white())
//!     .compute(1000, 500)
//!     .unwrap();
//!
//! assert_eq!(layout.resize_to, Size::new(432, 216));
//! assert_eq!(layout.canvas, Size::new(540, 216));
//! assert_eq!(layout.placement, (54, 0));
//! ```

use num_traits::Float;

use crate::error::LayoutError;
use crate::fit::{FitMode, Gravity};

/// Guards the free-axis floor against `x.999…` representation error.
const FLOOR_EPSILON: f64 = 1e-9;

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether this rect lies inside `(0, 0, size.width, size.height)`.
    pub fn fits_in(&self, size: Size) -> bool {
        self.x as u64 + self.width as u64 <= size.width as u64
            && self.y as u64 + self.height as u64 <= size.height as u64
    }
}

/// Canvas background color for the padded area.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CanvasColor {
    /// Transparent black `[0, 0, 0, 0]`.
    #[default]
    Transparent,
    /// sRGB color with alpha (8-bit per channel).
    Srgb { r: u8, g: u8, b: u8, a: u8 },
}

impl CanvasColor {
    /// White, fully opaque.
    pub const fn white() -> Self {
        Self::Srgb {
            r: 255,
            g: 255,
            b: 255,
            a: 255,
        }
    }

    /// Black, fully opaque.
    pub const fn black() -> Self {
        Self::Srgb {
            r: 0,
            g: 0,
            b: 0,
            a: 255,
        }
    }

    /// RGBA bytes for filling a buffer.
    pub const fn to_rgba(self) -> [u8; 4] {
        match self {
            Self::Transparent => [0, 0, 0, 0],
            Self::Srgb { r, g, b, a } => [r, g, b, a],
        }
    }
}

/// Letterbox settings: a fixed canvas size plus fit options.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Letterbox {
    pub width: u32,
    pub height: u32,
    pub mode: FitMode,
    pub gravity: Gravity,
    pub canvas_color: CanvasColor,
}

impl Letterbox {
    /// Letterbox into a `width × height` canvas, fit mode, centered, transparent.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            mode: FitMode::Fit,
            gravity: Gravity::Center,
            canvas_color: CanvasColor::Transparent,
        }
    }

    /// Set the fit mode.
    pub fn mode(mut self, mode: FitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set gravity for placement on the canvas.
    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set canvas background color.
    pub fn canvas_color(mut self, color: CanvasColor) -> Self {
        self.canvas_color = color;
        self
    }

    /// Compute the layout for a source image of the given pixel dimensions.
    pub fn compute(&self, source_w: u32, source_h: u32) -> Result<LetterboxLayout, LayoutError> {
        if source_w == 0 || source_h == 0 || self.width == 0 || self.height == 0 {
            return Err(LayoutError::InvalidDimension);
        }
        let (tw, th) = (self.width, self.height);

        let (rw, rh) = fit_pixels(source_w, source_h, tw, th, self.mode);
        let x = gravity_offset_1d(tw - rw, &self.gravity, true);
        let y = gravity_offset_1d(th - rh, &self.gravity, false);

        trace_layout!(
            source_w,
            source_h,
            canvas_w = tw,
            canvas_h = th,
            resize_w = rw,
            resize_h = rh,
            x,
            y,
            "letterbox computed"
        );

        Ok(LetterboxLayout {
            source: Size::new(source_w, source_h),
            resize_to: Size::new(rw, rh),
            canvas: Size::new(tw, th),
            placement: (x, y),
            canvas_color: self.canvas_color,
        })
    }
}

/// Computed letterbox layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LetterboxLayout {
    /// Original source dimensions.
    pub source: Size,
    /// Dimensions to resize the source to.
    pub resize_to: Size,
    /// Output canvas dimensions, always the letterbox size.
    pub canvas: Size,
    /// Top-left offset where the resized image sits on the canvas.
    pub placement: (u32, u32),
    /// Background color for the padded area.
    pub canvas_color: CanvasColor,
}

impl LetterboxLayout {
    /// Whether resampling is needed.
    pub fn needs_resize(&self) -> bool {
        self.resize_to != self.source
    }

    /// Whether any canvas area is left uncovered by the image.
    pub fn needs_padding(&self) -> bool {
        self.canvas != self.resize_to
    }

    /// Region of the canvas covered by the resized image.
    pub fn image_rect(&self) -> Rect {
        Rect::new(
            self.placement.0,
            self.placement.1,
            self.resize_to.width,
            self.resize_to.height,
        )
    }
}

/// Fit in whole pixels. The binding axis equals the target; the free axis is
/// floored, at least 1, and never exceeds the target.
fn fit_pixels(sw: u32, sh: u32, tw: u32, th: u32, mode: FitMode) -> (u32, u32) {
    if mode == FitMode::Within && sw <= tw && sh <= th {
        return (sw, sh);
    }
    let ratio_w = tw as f64 / sw as f64;
    let ratio_h = th as f64 / sh as f64;
    if ratio_w <= ratio_h {
        (tw, scale_floor(sh, ratio_w).min(th))
    } else {
        (scale_floor(sw, ratio_h).min(tw), th)
    }
}

fn scale_floor(v: u32, scale: f64) -> u32 {
    let scaled = Float::floor(v as f64 * scale + FLOOR_EPSILON);
    (scaled as u32).max(1)
}

fn gravity_offset_1d(space: u32, gravity: &Gravity, horizontal: bool) -> u32 {
    if space == 0 {
        return 0;
    }
    match gravity {
        Gravity::Center => space / 2,
        Gravity::Percentage(..) => {
            let pct = gravity.fraction(horizontal);
            (Float::round(space as f64 * pct) as u32).min(space)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_source_into_slot() {
        let l = Letterbox::new(540, 216).compute(1000, 500).unwrap();
        assert_eq!(l.resize_to, Size::new(432, 216));
        assert_eq!(l.placement, (54, 0));
        assert!(l.needs_resize());
        assert!(l.needs_padding());
    }

    #[test]
    fn tall_source_into_square() {
        let l = Letterbox::new(300, 300).compute(400, 100).unwrap();
        assert_eq!(l.resize_to, Size::new(300, 75));
        // (300 - 75) / 2 = 112.5, integer division keeps the extra row below.
        assert_eq!(l.placement, (0, 112));
    }

    #[test]
    fn binding_axis_is_exact() {
        // 3 * (100 / 3) would be 99.999… in floating point.
        let l = Letterbox::new(100, 1000).compute(3, 7).unwrap();
        assert_eq!(l.resize_to.width, 100);
        assert_eq!(l.resize_to.height, 233);
    }

    #[test]
    fn free_axis_floors() {
        // 1200×400 into 100×33: height binds, width = 1200 * 33/400 = 99.
        let l = Letterbox::new(100, 33).compute(1200, 400).unwrap();
        assert_eq!(l.resize_to, Size::new(99, 33));
        assert_eq!(l.placement, (0, 0));
    }

    #[test]
    fn extreme_aspect_keeps_one_pixel() {
        let l = Letterbox::new(100, 100).compute(100_000, 1).unwrap();
        assert_eq!(l.resize_to, Size::new(100, 1));
        assert_eq!(l.placement, (0, 49));
    }

    #[test]
    fn same_size_is_identity() {
        let l = Letterbox::new(640, 480).compute(640, 480).unwrap();
        assert!(!l.needs_resize());
        assert!(!l.needs_padding());
        assert_eq!(l.image_rect(), Rect::new(0, 0, 640, 480));
    }

    #[test]
    fn settings_are_copied_into_builders() {
        let base = Letterbox::new(540, 216).canvas_color(CanvasColor::white());
        let pinned = base.gravity(Gravity::TOP_LEFT);
        let centered = base.compute(1000, 500).unwrap();
        let layout = pinned.compute(1000, 500).unwrap();
        assert_eq!(centered.placement, (54, 0));
        assert_eq!(layout.placement, (0, 0));
        assert_eq!(base.gravity, Gravity::Center);
        let again = layout;
        assert_eq!(again, layout);
    }

    #[test]
    fn within_keeps_small_source() {
        let l = Letterbox::new(256, 256)
            .mode(FitMode::Within)
            .compute(16, 16)
            .unwrap();
        assert_eq!(l.resize_to, Size::new(16, 16));
        assert_eq!(l.canvas, Size::new(256, 256));
        assert_eq!(l.placement, (120, 120));
        assert!(!l.needs_resize());
    }

    #[test]
    fn fit_upscales_small_source() {
        let l = Letterbox::new(256, 256).compute(16, 8).unwrap();
        assert_eq!(l.resize_to, Size::new(256, 128));
        assert_eq!(l.placement, (0, 64));
    }

    #[test]
    fn gravity_bottom_right_pad() {
        let l = Letterbox::new(400, 300)
            .gravity(Gravity::BOTTOM_RIGHT)
            .compute(1000, 1000)
            .unwrap();
        assert_eq!(l.resize_to, Size::new(300, 300));
        assert_eq!(l.placement, (100, 0));
    }

    #[test]
    fn gravity_percentage_rounds() {
        let l = Letterbox::new(400, 300)
            .gravity(Gravity::Percentage(0.25, 0.0))
            .compute(1000, 1000)
            .unwrap();
        assert_eq!(l.placement, (25, 0));
    }

    #[test]
    fn zero_dimensions_error() {
        assert_eq!(
            Letterbox::new(100, 100).compute(0, 10),
            Err(LayoutError::InvalidDimension)
        );
        assert_eq!(
            Letterbox::new(0, 100).compute(10, 10),
            Err(LayoutError::InvalidDimension)
        );
    }

    #[test]
    fn canvas_color_bytes() {
        assert_eq!(CanvasColor::white().to_rgba(), [255; 4]);
        assert_eq!(CanvasColor::black().to_rgba(), [0, 0, 0, 255]);
        assert_eq!(CanvasColor::Transparent.to_rgba(), [0; 4]);
    }

    const TARGETS: [(u32, u32); 7] = [
        (1, 1),
        (100, 33),
        (300, 300),
        (540, 216),
        (512, 512),
        (33, 100),
        (1920, 1080),
    ];

    const SOURCES: [(u32, u32); 12] = [
        (1, 1),
        (1, 1000),
        (1000, 1),
        (3, 7),
        (17, 1871),
        (638, 423),
        (971, 967),
        (1000, 500),
        (1200, 400),
        (1399, 697),
        (1621, 883),
        (4000, 3000),
    ];

    #[test]
    fn parametric_invariants() {
        let mut failures = Vec::new();

        for &(tw, th) in &TARGETS {
            for &(sw, sh) in &SOURCES {
                for mode in [FitMode::Fit, FitMode::Within] {
                    let l = Letterbox::new(tw, th).mode(mode).compute(sw, sh).unwrap();
                    let tag = format!("{mode:?} ({sw}x{sh} -> {tw}x{th})");
                    let Size {
                        width: rw,
                        height: rh,
                    } = l.resize_to;

                    if l.canvas != Size::new(tw, th) {
                        failures.push(format!("{tag}: canvas {:?}", l.canvas));
                    }
                    if rw == 0 || rh == 0 {
                        failures.push(format!("{tag}: empty resize ({rw},{rh})"));
                    }
                    if !l.image_rect().fits_in(l.canvas) {
                        failures.push(format!("{tag}: image {:?} overflows", l.image_rect()));
                    }
                    let within_identity = mode == FitMode::Within && sw <= tw && sh <= th;
                    if !within_identity && rw != tw && rh != th {
                        failures.push(format!("{tag}: doesn't touch either edge ({rw},{rh})"));
                    }
                    if mode == FitMode::Within && (rw > sw || rh > sh) {
                        failures.push(format!("{tag}: within upscaled to ({rw},{rh})"));
                    }
                    let (px, py) = l.placement;
                    if px != (tw - rw) / 2 || py != (th - rh) / 2 {
                        failures.push(format!("{tag}: not centered ({px},{py})"));
                    }
                }
            }
        }

        assert!(failures.is_empty(), "{}", failures.join("\n"));
    }
}
