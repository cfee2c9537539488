//! SVG preview of a fit placement.
//!
//! Renders two annotated panels, the natural image and the box with the
//! fitted image placed in it, so layout choices can be eyeballed without
//! generating a whole document.
//!
//! # Example
//!
//! ```
//! use boxfit::{BoxFitter, Dimensions, svg::render_placement_svg};
//!
//! let image = Dimensions::new(1600.0, 900.0).unwrap();
//! let bounds = Dimensions::new(400.0, 400.0).unwrap();
//! let placement = BoxFitter::new().fit(image, bounds).unwrap();
//!
//! let svg = render_placement_svg(image, bounds, &placement);
//! assert!(svg.contains("Box  400×400"));
//! ```

use crate::fit::{BoxFitter, Dimensions, Placement};

/// Maximum pixel width for any panel in the SVG output.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum pixel height for any panel in the SVG output.
const MAX_PANEL_H: f64 = 200.0;
/// Vertical gap between panels.
const PANEL_GAP: f64 = 50.0;
/// Horizontal margin.
const MARGIN_X: f64 = 50.0;
/// Top margin for first panel.
const MARGIN_TOP: f64 = 30.0;
/// Height of label text area above each panel.
const LABEL_H: f64 = 22.0;

/// One panel of the preview.
struct Panel {
    label: String,
    /// The panel's background box, in layout units.
    outer: Dimensions,
    /// Placed content inside `outer`; `None` fills the whole box.
    inner: Option<Placement>,
    annotation: String,
}

/// Render a complete SVG document showing an image and its placement in a box.
pub fn render_placement_svg(image: Dimensions, bounds: Dimensions, placement: &Placement) -> String {
    let panels = [
        Panel {
            label: format!("Image  {}×{}", fmt_num(image.width()), fmt_num(image.height())),
            outer: image,
            inner: None,
            annotation: format!("aspect {:.3}", image.aspect_ratio()),
        },
        Panel {
            label: format!("Box  {}×{}", fmt_num(bounds.width()), fmt_num(bounds.height())),
            outer: bounds,
            inner: Some(*placement),
            annotation: format!(
                "draw {}×{} at ({}, {}), scale {:.3}",
                fmt_num(placement.scaled_width),
                fmt_num(placement.scaled_height),
                fmt_num(placement.x_offset),
                fmt_num(placement.y_offset),
                placement.scale_factor(image)
            ),
        },
    ];
    render_panels(&panels)
}

/// Scale a panel's box into the fixed panel area. Returns (w, h, scale).
fn panel_size(outer: Dimensions) -> (f64, f64, f64) {
    let area = Dimensions::from_valid(MAX_PANEL_W, MAX_PANEL_H);
    // Slivers too thin to scale into the panel are drawn empty.
    BoxFitter::new()
        .fit(outer, area)
        .map_or((0.0, 0.0, 0.0), |p| {
            (p.scaled_width, p.scaled_height, p.scale_factor(outer))
        })
}

fn render_panels(panels: &[Panel]) -> String {
    let n = panels.len();
    let total_h = 2.0 * MARGIN_TOP
        + n as f64 * (LABEL_H + MAX_PANEL_H)
        + n.saturating_sub(1) as f64 * PANEL_GAP;
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;

    let mut svg = String::with_capacity(2048);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .outer { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .inner { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .outer { fill: #2d2d2d; stroke: #555; }
    .inner { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##,
    );

    let mut y = MARGIN_TOP;
    let center_x = total_w / 2.0;

    for panel in panels {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            center_x,
            y + 14.0,
            escape_xml(&panel.label)
        ));
        svg.push('\n');
        y += LABEL_H;

        let (pw, ph, scale) = panel_size(panel.outer);
        let panel_x = center_x - pw / 2.0;
        let panel_y = y;

        match &panel.inner {
            Some(inner) => {
                svg.push_str(&format!(
                    r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="outer" rx="2"/>"#,
                    panel_x, panel_y, pw, ph
                ));
                svg.push('\n');
                svg.push_str(&format!(
                    r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="inner" rx="1"/>"#,
                    panel_x + inner.x_offset * scale,
                    panel_y + inner.y_offset * scale,
                    inner.scaled_width * scale,
                    inner.scaled_height * scale
                ));
                svg.push('\n');
            }
            None => {
                svg.push_str(&format!(
                    r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="inner" rx="2"/>"#,
                    panel_x, panel_y, pw, ph
                ));
                svg.push('\n');
            }
        }

        if !panel.annotation.is_empty() {
            svg.push_str(&format!(
                r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
                center_x,
                panel_y + ph + 14.0,
                escape_xml(&panel.annotation)
            ));
            svg.push('\n');
        }

        y += MAX_PANEL_H + PANEL_GAP;
    }

    svg.push_str("</svg>\n");
    svg
}

/// Whole numbers without a fraction, others to two decimals.
fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v:.2}")
    }
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
