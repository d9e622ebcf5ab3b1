//! Hand-assembled SVG documents.
//!
//! The SVG series is plain textual XML built element by element, the same
//! way the raster series issues drawing calls. There is deliberately no
//! templating layer: each design appends fixed elements to a [`Document`].

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::geometry::Point;

/// CSS color string for a translucent white/grey stroke.
///
/// `alpha` is in `0.0..=1.0`; values are clamped.
pub fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> String {
    format!("rgba({},{},{},{})", r, g, b, format_alpha(alpha))
}

fn format_alpha(alpha: f64) -> String {
    let a = alpha.clamp(0.0, 1.0);
    // Keep the output stable and short: up to three decimals, no trailing zeros.
    let s = format!("{:.3}", a);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// An SVG document under assembly.
///
/// The viewBox and the pixel size are always square and equal; the brand
/// marks are all composed on a 512×512 canvas.
pub struct Document {
    size: u32,
    body: String,
}

impl Document {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            body: String::new(),
        }
    }

    /// Full-canvas background rectangle.
    pub fn background(&mut self, fill: &str) -> &mut Self {
        self.push(&format!(
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            fill
        ))
    }

    /// Open a `<g>` with raw attributes, e.g. `fill="none" stroke="white"`.
    pub fn open_group(&mut self, attrs: &str) -> &mut Self {
        if attrs.is_empty() {
            self.push("<g>")
        } else {
            self.push(&format!("<g {}>", attrs))
        }
    }

    pub fn close_group(&mut self) -> &mut Self {
        self.push("</g>")
    }

    pub fn circle_fill(&mut self, cx: f64, cy: f64, r: f64, fill: &str) -> &mut Self {
        self.push(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            fmt(cx),
            fmt(cy),
            fmt(r),
            fill
        ))
    }

    pub fn circle_outline(&mut self, cx: f64, cy: f64, r: f64, stroke: &str, width: f64) -> &mut Self {
        self.push(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            fmt(cx),
            fmt(cy),
            fmt(r),
            stroke,
            fmt(width)
        ))
    }

    /// Circle outline with its own stroke color, inheriting the stroke
    /// width from the enclosing group.
    pub fn circle_stroked(&mut self, cx: f64, cy: f64, r: f64, stroke: &str) -> &mut Self {
        self.push(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}"/>"#,
            fmt(cx),
            fmt(cy),
            fmt(r),
            stroke
        ))
    }

    /// Circle outline inheriting stroke attributes from the enclosing group.
    pub fn circle_plain(&mut self, cx: f64, cy: f64, r: f64) -> &mut Self {
        self.push(&format!(
            r#"<circle cx="{}" cy="{}" r="{}"/>"#,
            fmt(cx),
            fmt(cy),
            fmt(r)
        ))
    }

    pub fn dashed_circle(
        &mut self,
        cx: f64,
        cy: f64,
        r: f64,
        stroke: &str,
        width: f64,
        dasharray: &str,
    ) -> &mut Self {
        self.push(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-width="{}" stroke-dasharray="{}"/>"#,
            fmt(cx),
            fmt(cy),
            fmt(r),
            stroke,
            fmt(width),
            dasharray
        ))
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        self.push(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            fmt(x1),
            fmt(y1),
            fmt(x2),
            fmt(y2)
        ))
    }

    pub fn line_stroked(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: &str,
    ) -> &mut Self {
        self.push(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"/>"#,
            fmt(x1),
            fmt(y1),
            fmt(x2),
            fmt(y2),
            stroke
        ))
    }

    /// Closed polygon outline from a sampled point list.
    pub fn polygon_outline(&mut self, points: &[Point], stroke: &str, width: f64) -> &mut Self {
        let pts: Vec<String> = points
            .iter()
            .map(|(x, y)| format!("{},{}", fmt(*x), fmt(*y)))
            .collect();
        self.push(&format!(
            r#"<polygon points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            pts.join(" "),
            stroke,
            fmt(width)
        ))
    }

    pub fn ellipse_fill(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, fill: &str) -> &mut Self {
        self.push(&format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{}"/>"#,
            fmt(cx),
            fmt(cy),
            fmt(rx),
            fmt(ry),
            fill
        ))
    }

    pub fn ellipse_outline(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        stroke: &str,
        width: f64,
    ) -> &mut Self {
        self.push(&format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            fmt(cx),
            fmt(cy),
            fmt(rx),
            fmt(ry),
            stroke,
            fmt(width)
        ))
    }

    pub fn comment(&mut self, text: &str) -> &mut Self {
        self.push(&format!("<!-- {} -->", text))
    }

    fn push(&mut self, element: &str) -> &mut Self {
        self.body.push_str("  ");
        self.body.push_str(element);
        self.body.push('\n');
        self
    }

    /// Serialize the document with the standard XML prolog.
    pub fn to_xml(&self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {s} {s}\" width=\"{s}\" height=\"{s}\">\n\
             {body}</svg>\n",
            s = self.size,
            body = self.body
        )
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_xml())?;
        Ok(())
    }
}

fn fmt(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{:.1}", v)
    }
}
