//! Drawing primitives on the supersampled canvas.
//!
//! The primitive set mirrors what the designs actually need: filled dots,
//! ring outlines, ring arcs and thick polylines. Polylines are rendered by
//! stamping round caps along each segment, which also gives round joints.

use image::Rgba;

use super::Canvas;
use crate::geometry::Point;

impl Canvas {
    /// Filled disc.
    pub fn dot(&mut self, cx: f64, cy: f64, r: f64, color: Rgba<u8>) {
        let (x0, x1) = span(cx, r);
        let (y0, y1) = span(cy, r);
        let r2 = r * r;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f64 - cx;
                let dy = y as f64 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Circle outline of the given stroke width.
    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, color: Rgba<u8>, width: f64) {
        self.arc(cx, cy, r, 0.0, 360.0, color, width);
    }

    /// Ring arc from `start_deg` to `end_deg`, measured clockwise from the
    /// positive x axis (screen coordinates, y down). An end angle past 360
    /// or behind the start wraps around; equal sweep of zero means a full
    /// circle is not drawn.
    pub fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        r: f64,
        start_deg: f64,
        end_deg: f64,
        color: Rgba<u8>,
        width: f64,
    ) {
        let half = width / 2.0;
        let inner = (r - half).max(0.0);
        let outer = r + half;
        let inner2 = inner * inner;
        let outer2 = outer * outer;
        let sweep = sweep_of(start_deg, end_deg);

        let (x0, x1) = span(cx, outer);
        let (y0, y1) = span(cy, outer);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f64 - cx;
                let dy = y as f64 - cy;
                let d2 = dx * dx + dy * dy;
                if d2 < inner2 || d2 > outer2 {
                    continue;
                }
                let theta = dy.atan2(dx).to_degrees();
                if (theta - start_deg).rem_euclid(360.0) <= sweep {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Straight segment of the given stroke width.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba<u8>, width: f64) {
        self.polyline(&[(x1, y1), (x2, y2)], color, width);
    }

    /// Thick polyline with round caps and joints.
    pub fn polyline(&mut self, points: &[Point], color: Rgba<u8>, width: f64) {
        if points.len() < 2 {
            return;
        }
        let r = (width / 2.0).max(1.0);
        // Step at under one pixel so consecutive stamps overlap.
        let step = 0.75;
        for pair in points.windows(2) {
            let (ax, ay) = pair[0];
            let (bx, by) = pair[1];
            let len = ((bx - ax).powi(2) + (by - ay).powi(2)).sqrt();
            let n = (len / step).ceil() as usize;
            for i in 0..=n {
                let t = if n == 0 { 0.0 } else { i as f64 / n as f64 };
                self.dot(ax + (bx - ax) * t, ay + (by - ay) * t, r, color);
            }
        }
    }

    /// Closed polygon outline.
    pub fn polygon(&mut self, points: &[Point], color: Rgba<u8>, width: f64) {
        if points.len() < 2 {
            return;
        }
        self.polyline(points, color, width);
        let last = points[points.len() - 1];
        let first = points[0];
        self.line(last.0, last.1, first.0, first.1, color, width);
    }
}

fn span(center: f64, reach: f64) -> (i64, i64) {
    (
        (center - reach).floor() as i64,
        (center + reach).ceil() as i64,
    )
}

/// Clockwise sweep between two angles in degrees; a zero difference on
/// distinct angles wraps to a full turn.
fn sweep_of(start_deg: f64, end_deg: f64) -> f64 {
    let diff = end_deg - start_deg;
    if diff >= 360.0 {
        return 360.0;
    }
    let wrapped = diff.rem_euclid(360.0);
    if wrapped == 0.0 && diff != 0.0 {
        360.0
    } else if diff == 0.0 {
        0.0
    } else {
        wrapped
    }
}
