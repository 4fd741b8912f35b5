//! Opaque drawing canvas and transparent overlay layer.
//!
//! A [`Canvas`] is a fixed-size 8-bit RGB buffer. Every drawing call blends
//! RGBA paint over what is already there and mutates the buffer in place;
//! the canvas itself never carries an alpha channel, so a saved file is
//! always fully opaque. A [`Layer`] is a same-sized transparent RGBA buffer
//! used to build up glow effects before they are composited (src-over) onto
//! a canvas and discarded.
//!
//! Coordinates are `i32` and may lie outside the buffer; out-of-range pixels
//! are clipped. Bounding boxes are inclusive on all four edges.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgb as ImgRgb, Rgba as ImgRgba, RgbImage, RgbaImage};

use crate::color::{blend_over, Rgb, Rgba};
use crate::error::{Error, Result};

/// An opaque RGB pixel canvas
pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with a solid background color
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let img = RgbImage::from_pixel(
            width,
            height,
            ImgRgb([background.0, background.1, background.2]),
        );
        Self { img }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// Read one pixel; `x` and `y` must be in range
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let p = self.img.get_pixel(x, y);
        (p[0], p[1], p[2])
    }

    /// Blend paint over one pixel, clipping silently if out of range
    pub fn blend_pixel(&mut self, x: i32, y: i32, paint: Rgba) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.img.width() || y >= self.img.height() {
            return;
        }
        let p = self.img.get_pixel(x, y);
        let out = blend_over((p[0], p[1], p[2]), paint);
        self.img.put_pixel(x, y, ImgRgb([out.0, out.1, out.2]));
    }

    /// Vertical line from `y0` to `y1` inclusive
    pub fn vline(&mut self, x: i32, y0: i32, y1: i32, paint: Rgba) {
        for y in y0..=y1 {
            self.blend_pixel(x, y, paint);
        }
    }

    /// Horizontal line from `x0` to `x1` inclusive
    pub fn hline(&mut self, y: i32, x0: i32, x1: i32, paint: Rgba) {
        for x in x0..=x1 {
            self.blend_pixel(x, y, paint);
        }
    }

    /// Fill the inclusive box `(x0, y0)..(x1, y1)`
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, paint: Rgba) {
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.blend_pixel(x, y, paint);
            }
        }
    }

    /// Rounded rectangle over the inclusive box, with optional fill and
    /// optional 1-px outline
    pub fn rounded_rect(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        radius: i32,
        fill: Option<Rgba>,
        outline: Option<Rgba>,
    ) {
        for y in y0..=y1 {
            for x in x0..=x1 {
                if !rounded_contains(x, y, x0, y0, x1, y1, radius) {
                    continue;
                }
                // the fill covers the whole shape; the outline strokes over
                // its 1-px border afterwards
                if let Some(paint) = fill {
                    self.blend_pixel(x, y, paint);
                }
                let on_border =
                    !rounded_contains(x, y, x0 + 1, y0 + 1, x1 - 1, y1 - 1, radius - 1);
                if on_border {
                    if let Some(paint) = outline {
                        self.blend_pixel(x, y, paint);
                    }
                }
            }
        }
    }

    /// Fill the ellipse inscribed in the inclusive box
    pub fn fill_ellipse(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, paint: Rgba) {
        let cx = (x0 + x1) as f32 / 2.0;
        let cy = (y0 + y1) as f32 / 2.0;
        let rx = (x1 - x0) as f32 / 2.0;
        let ry = (y1 - y0) as f32 / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        for y in y0..=y1 {
            for x in x0..=x1 {
                let nx = (x as f32 - cx) / rx;
                let ny = (y as f32 - cy) / ry;
                if nx * nx + ny * ny <= 1.0 {
                    self.blend_pixel(x, y, paint);
                }
            }
        }
    }

    /// Alpha-composite a layer over this canvas. The result stays opaque.
    pub fn composite(&mut self, layer: &Layer) {
        for (x, y, px) in layer.img.enumerate_pixels() {
            if px[3] == 0 {
                continue;
            }
            let dst = self.img.get_pixel(x, y);
            let out = blend_over((dst[0], dst[1], dst[2]), (px[0], px[1], px[2], px[3]));
            self.img.put_pixel(x, y, ImgRgb([out.0, out.1, out.2]));
        }
    }

    /// Encode the canvas as PNG bytes
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.img.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    /// Save the canvas as a PNG file. The parent directory must exist.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.img
            .save(path)
            .map_err(|err| Error::OutputError(format!("{}: {err}", path.display())))
    }
}

/// Inclusive rounded-box containment: corners are cut by quarter-discs of
/// the given radius.
fn rounded_contains(x: i32, y: i32, x0: i32, y0: i32, x1: i32, y1: i32, radius: i32) -> bool {
    if x < x0 || x > x1 || y < y0 || y > y1 {
        return false;
    }
    let r = radius.max(0);
    let dx = (x0 + r - x).max(x - (x1 - r)).max(0);
    let dy = (y0 + r - y).max(y - (y1 - r)).max(0);
    dx * dx + dy * dy <= r * r
}

/// A transparent RGBA buffer composited onto a [`Canvas`] once complete.
///
/// Writes to a layer replace pixels outright (alpha included); blending
/// happens only at composite time.
pub struct Layer {
    img: RgbaImage,
}

impl Layer {
    /// Create a fully transparent layer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbaImage::new(width, height),
        }
    }

    /// Replace one pixel, clipping silently if out of range
    pub fn set_pixel(&mut self, x: i32, y: i32, paint: Rgba) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.img.width() || y >= self.img.height() {
            return;
        }
        self.img
            .put_pixel(x, y, ImgRgba([paint.0, paint.1, paint.2, paint.3]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_background_filled() {
        let c = Canvas::new(8, 4, (13, 17, 23));
        assert_eq!(c.pixel(0, 0), (13, 17, 23));
        assert_eq!(c.pixel(7, 3), (13, 17, 23));
    }

    #[test]
    fn out_of_range_draws_are_clipped() {
        let mut c = Canvas::new(4, 4, (0, 0, 0));
        c.blend_pixel(-1, 2, (255, 255, 255, 255));
        c.blend_pixel(2, 9, (255, 255, 255, 255));
        c.vline(2, -5, 1, (255, 255, 255, 255));
        assert_eq!(c.pixel(2, 0), (255, 255, 255));
        assert_eq!(c.pixel(2, 1), (255, 255, 255));
        assert_eq!(c.pixel(2, 2), (0, 0, 0));
    }

    #[test]
    fn rounded_rect_cuts_corners() {
        let mut c = Canvas::new(20, 20, (0, 0, 0));
        c.rounded_rect(0, 0, 19, 19, 8, Some((255, 255, 255, 255)), None);
        assert_eq!(c.pixel(0, 0), (0, 0, 0));
        assert_eq!(c.pixel(10, 10), (255, 255, 255));
        assert_eq!(c.pixel(10, 0), (255, 255, 255));
    }

    #[test]
    fn rounded_rect_outline_leaves_interior() {
        let mut c = Canvas::new(20, 20, (0, 0, 0));
        c.rounded_rect(0, 0, 19, 19, 4, None, Some((9, 9, 9, 255)));
        assert_eq!(c.pixel(10, 0), (9, 9, 9));
        assert_eq!(c.pixel(10, 10), (0, 0, 0));
    }

    #[test]
    fn composite_blends_only_covered_pixels() {
        let mut c = Canvas::new(2, 1, (0, 0, 0));
        let mut layer = Layer::new(2, 1);
        layer.set_pixel(0, 0, (255, 255, 255, 255));
        c.composite(&layer);
        assert_eq!(c.pixel(0, 0), (255, 255, 255));
        assert_eq!(c.pixel(1, 0), (0, 0, 0));
    }
}
