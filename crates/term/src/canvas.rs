//! Pixel canvas: the fixed-size raster surface the scene is drawn onto.
//!
//! Shapes are filled by scanline, sampling each pixel at its center.
//! Outlines are 1px Bresenham lines between the rounded-down vertices.
//! Everything is clipped to the canvas, so callers may draw partly off-surface.

use arrayvec::ArrayVec;

use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Rgb, ScreenPos};

/// Glyph that shows two stacked pixels: foreground on top, background below.
pub const HALF_BLOCK: char = '▀';

/// Largest polygon the scanline filler accepts.
pub const MAX_POLYGON_POINTS: usize = 8;

/// The four vertices of a diamond inscribed in a `w x h` box whose top-left
/// corner is `origin`, in left, top, right, bottom order.
pub fn diamond(origin: ScreenPos, w: f32, h: f32) -> ArrayVec<ScreenPos, 4> {
    let mut pts = ArrayVec::new();
    pts.push(ScreenPos::new(origin.x, origin.y + h / 2.0));
    pts.push(ScreenPos::new(origin.x + w / 2.0, origin.y));
    pts.push(ScreenPos::new(origin.x + w, origin.y + h / 2.0));
    pts.push(ScreenPos::new(origin.x + w / 2.0, origin.y + h));
    pts
}

/// RGB pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Fill a convex or concave polygon (even-odd rule).
    pub fn fill_polygon(&mut self, points: &[ScreenPos], color: Rgb) {
        if points.len() < 3 || points.len() > MAX_POLYGON_POINTS {
            return;
        }

        let (min_y, max_y) = points
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        let row_start = (min_y.floor() as i32).max(0);
        let row_end = (max_y.ceil() as i32).min(self.height as i32);

        for py in row_start..row_end {
            let sample_y = py as f32 + 0.5;
            let mut xs = ArrayVec::<f32, MAX_POLYGON_POINTS>::new();
            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                let crosses = (a.y <= sample_y && sample_y < b.y)
                    || (b.y <= sample_y && sample_y < a.y);
                if crosses {
                    let t = (sample_y - a.y) / (b.y - a.y);
                    xs.push(a.x + t * (b.x - a.x));
                }
            }
            xs.sort_by(|l, r| l.total_cmp(r));

            for span in xs.chunks_exact(2) {
                let start = (span[0] - 0.5).ceil() as i32;
                let end = (span[1] - 0.5).ceil() as i32;
                for px in start.max(0)..end.min(self.width as i32) {
                    self.set(px, py, color);
                }
            }
        }
    }

    /// Draw a closed 1px outline through `points`.
    pub fn stroke_polygon(&mut self, points: &[ScreenPos], color: Rgb) {
        if points.len() < 2 {
            return;
        }
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            self.line(
                a.x.floor() as i32,
                a.y.floor() as i32,
                b.x.floor() as i32,
                b.y.floor() as i32,
                color,
            );
        }
    }

    /// Bresenham line, both endpoints inclusive.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.set(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Copy the canvas into `fb` as half-block cells, with the canvas
    /// top-left at cell (`x`, `y`). Cells outside `fb` are skipped.
    pub fn blit_half_blocks(&self, fb: &mut FrameBuffer, x: i32, y: i32) {
        let rows = (self.height as i32 + 1) / 2;
        for row in 0..rows {
            let cy = y + row;
            if cy < 0 || cy >= fb.height() as i32 {
                continue;
            }
            for col in 0..self.width as i32 {
                let cx = x + col;
                if cx < 0 || cx >= fb.width() as i32 {
                    continue;
                }
                let top = self.get(col, row * 2).unwrap_or_default();
                let bottom = self.get(col, row * 2 + 1).unwrap_or_default();
                fb.put_char(cx as u16, cy as u16, HALF_BLOCK, CellStyle::new(top, bottom));
            }
        }
    }
}
