//! Base-layer painting: grid lines and radial glows.
//!
//! Glows are built on a transparent [`Layer`] and alpha-composited over the
//! canvas in one step, after which everything stays opaque. Grid lines and
//! accent strips painted before the composite survive it; the glow's low
//! alpha only tints them.

use crate::canvas::{Canvas, Layer};
use crate::color::{Rgb, Rgba};

/// A soft radial glow described by its stamped-disc construction: discs of
/// radius `radius` down to 1 are written onto the layer in order, each
/// replacing covered pixels with `color` at alpha `peak_alpha * r / radius`
/// (integer truncation), so the smallest disc covering a pixel is the one
/// that remains.
#[derive(Debug, Clone, Copy)]
pub struct Glow {
    pub center: (i32, i32),
    pub radius: i32,
    pub color: Rgb,
    pub peak_alpha: u8,
}

/// Blend faint grid lines over the whole canvas at a fixed stride, vertical
/// lines first, then horizontal, both starting at 0.
pub fn draw_grid(canvas: &mut Canvas, stride: i32, paint: Rgba) {
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;
    let mut x = 0;
    while x < w {
        canvas.vline(x, 0, h - 1, paint);
        x += stride;
    }
    let mut y = 0;
    while y < h {
        canvas.hline(y, 0, w - 1, paint);
        y += stride;
    }
}

/// Render all glows onto one transparent layer and composite it over the
/// canvas.
pub fn composite_glows(canvas: &mut Canvas, glows: &[Glow]) {
    let mut layer = Layer::new(canvas.width(), canvas.height());
    for glow in glows {
        stamp_glow(&mut layer, glow);
    }
    canvas.composite(&layer);
}

// Closed form of the descending disc stamp: a pixel at distance d from the
// center keeps the value of the smallest disc still covering it, which has
// radius ceil(d) (minimum 1 at the center).
fn stamp_glow(layer: &mut Layer, glow: &Glow) {
    let (cx, cy) = glow.center;
    let r = glow.radius;
    if r <= 0 {
        return;
    }
    for y in (cy - r)..=(cy + r) {
        for x in (cx - r)..=(cx + r) {
            let dx = (x - cx) as i64;
            let dy = (y - cy) as i64;
            let d2 = dx * dx + dy * dy;
            if d2 > (r as i64) * (r as i64) {
                continue;
            }
            let ring = ((d2 as f64).sqrt().ceil() as i64).max(1);
            let alpha = (glow.peak_alpha as i64 * ring / r as i64) as u8;
            layer.set_pixel(x, y, (glow.color.0, glow.color.1, glow.color.2, alpha));
        }
    }
}
