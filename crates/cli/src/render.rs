//! Rasterize sweep frames and encode the animated GIF.
//!
//! The renderer only consumes frames; nothing here feeds back into the
//! engine. Each frame plots the static pore lattice in red and the rotated
//! slit lattice in blue over a fixed, equal-aspect world window, so the
//! animation does not jitter as the slit revolves.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame as GifFrame, Rgba, RgbaImage};
use slitpore::grid::{Extent, PointGrid};
use slitpore::overlap::Frame;
use slitpore::Vec2;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const PORE_COLOR: Rgba<u8> = Rgba([200, 30, 30, 255]);
const SLIT_COLOR: Rgba<u8> = Rgba([30, 60, 200, 255]);

/// Fixed world window shared by every frame of an animation.
#[derive(Clone, Copy, Debug)]
pub struct ViewWindow {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl ViewWindow {
    /// Map a world point to pixel coordinates; None when outside the window.
    fn to_pixel(&self, p: &Vec2<f64>, width: u32, height: u32) -> Option<(u32, u32)> {
        let fx = (p.x - self.x_min) / (self.x_max - self.x_min);
        let fy = (p.y - self.y_min) / (self.y_max - self.y_min);
        if !(0.0..=1.0).contains(&fx) || !(0.0..=1.0).contains(&fy) {
            return None;
        }
        let px = (fx * (width - 1) as f64).round() as u32;
        // World y grows upward, image y grows downward.
        let py = ((1.0 - fy) * (height - 1) as f64).round() as u32;
        Some((px, py))
    }
}

/// World window covering the pore and the full revolution of the slit.
///
/// The slit revolves about the origin, so its farthest corner bounds the
/// swept disc; the window is the union of that disc's box and the pore,
/// padded by 5% and squared up for equal aspect.
pub fn view_window(pore: &Extent, slit: &Extent) -> ViewWindow {
    let corners = [
        (slit.x_min, slit.y_min),
        (slit.x_min, slit.y_max),
        (slit.x_max, slit.y_min),
        (slit.x_max, slit.y_max),
    ];
    let radius = corners.iter().map(|&(x, y)| x.hypot(y)).fold(0.0, f64::max);

    let mut x_min = (-radius).min(pore.x_min);
    let mut x_max = radius.max(pore.x_max);
    let mut y_min = (-radius).min(pore.y_min);
    let mut y_max = radius.max(pore.y_max);

    let pad_x = 0.05 * (x_max - x_min);
    let pad_y = 0.05 * (y_max - y_min);
    x_min -= pad_x;
    x_max += pad_x;
    y_min -= pad_y;
    y_max += pad_y;

    // Equal aspect: widen the shorter axis around its center.
    let width = x_max - x_min;
    let height = y_max - y_min;
    if width > height {
        let c = 0.5 * (y_min + y_max);
        y_min = c - 0.5 * width;
        y_max = c + 0.5 * width;
    } else {
        let c = 0.5 * (x_min + x_max);
        x_min = c - 0.5 * height;
        x_max = c + 0.5 * height;
    }
    ViewWindow {
        x_min,
        x_max,
        y_min,
        y_max,
    }
}

/// Plot one sweep frame: pore lattice in red, rotated slit lattice in blue.
pub fn raster_frame(
    frame: &Frame,
    pore_grid: &PointGrid,
    view: ViewWindow,
    size: u32,
) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(size, size, BACKGROUND);
    plot_points(&mut image, pore_grid.points(), view, PORE_COLOR);
    plot_points(&mut image, frame.points.points(), view, SLIT_COLOR);
    image
}

fn plot_points(image: &mut RgbaImage, points: &[Vec2<f64>], view: ViewWindow, color: Rgba<u8>) {
    let (width, height) = image.dimensions();
    for p in points {
        if let Some((px, py)) = view.to_pixel(p, width, height) {
            image.put_pixel(px, py, color);
        }
    }
}

/// Streaming animated-GIF writer with a fixed per-frame delay.
pub struct GifWriter {
    encoder: GifEncoder<File>,
    delay: Delay,
}

impl GifWriter {
    pub fn create(path: &Path, delay_ms: u32) -> Result<Self> {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut encoder = GifEncoder::new(file);
        encoder
            .set_repeat(Repeat::Infinite)
            .context("setting gif repeat")?;
        Ok(Self {
            encoder,
            delay: Delay::from_numer_denom_ms(delay_ms, 1),
        })
    }

    pub fn push(&mut self, image: RgbaImage) -> Result<()> {
        self.encoder
            .encode_frame(GifFrame::from_parts(image, 0, 0, self.delay))
            .context("encoding gif frame")?;
        Ok(())
    }
}
