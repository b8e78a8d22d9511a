//! Export rasterization.
//!
//! Draws the bead grid into a `tiny_skia` pixmap the same way the canvas
//! shows it (one inscribed circle per cell, white outline, black background)
//! and encodes the result as JPEG.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use egui::Color32;
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::error::ExportError;
use crate::grid::GridModel;

/// Width of the ring drawn around every bead
pub const OUTLINE_WIDTH: f32 = 1.0;
pub const OUTLINE_COLOR: Color32 = Color32::WHITE;
pub const BACKGROUND_COLOR: Color32 = Color32::BLACK;

/// Center and radius of the circle inscribed in a cell square, in pixels.
/// The radius leaves room for the outline so it stays inside the square.
pub fn bead_circle(column: usize, row: usize, cell_pixel_size: f32) -> (f32, f32, f32) {
    let half = cell_pixel_size / 2.0;
    let cx = column as f32 * cell_pixel_size + half;
    let cy = row as f32 * cell_pixel_size + half;
    let radius = (half - OUTLINE_WIDTH / 2.0).max(0.5);
    (cx, cy, radius)
}

fn skia_color(color: Color32) -> Color {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Color::from_rgba8(r, g, b, a)
}

/// Renders the grid into an RGB bitmap of `grid_size * cell_pixel_size`
/// pixels per side.
pub fn render(grid: &GridModel, cell_pixel_size: u32) -> Result<RgbImage, ExportError> {
    let side = u32::try_from(grid.size())
        .ok()
        .and_then(|size| size.checked_mul(cell_pixel_size))
        .ok_or(ExportError::PixmapCreationFailed {
            width: u32::MAX,
            height: u32::MAX,
        })?;
    let mut pixmap = Pixmap::new(side, side).ok_or(ExportError::PixmapCreationFailed {
        width: side,
        height: side,
    })?;
    pixmap.fill(skia_color(BACKGROUND_COLOR));

    let mut outline = Paint::default();
    outline.set_color(skia_color(OUTLINE_COLOR));
    outline.anti_alias = true;
    let stroke = Stroke {
        width: OUTLINE_WIDTH,
        ..Stroke::default()
    };

    for (pos, color) in grid.cells() {
        let (cx, cy, radius) = bead_circle(pos.column, pos.row, cell_pixel_size as f32);
        let Some(path) = PathBuilder::from_circle(cx, cy, radius) else {
            log::warn!("Skipping degenerate bead at ({}, {})", pos.column, pos.row);
            continue;
        };

        let mut fill = Paint::default();
        fill.set_color(skia_color(color.fill()));
        fill.anti_alias = true;

        pixmap.fill_path(&path, &fill, FillRule::Winding, Transform::identity(), None);
        pixmap.stroke_path(&path, &outline, &stroke, Transform::identity(), None);
    }

    pixmap_to_rgb(&pixmap)
}

/// Drops alpha; the background is opaque so every pixel is too
fn pixmap_to_rgb(pixmap: &Pixmap) -> Result<RgbImage, ExportError> {
    let mut data = Vec::with_capacity(pixmap.pixels().len() * 3);
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        data.extend_from_slice(&[color.red(), color.green(), color.blue()]);
    }
    RgbImage::from_raw(pixmap.width(), pixmap.height(), data).ok_or(
        ExportError::BufferSizeMismatch {
            width: pixmap.width(),
            height: pixmap.height(),
        },
    )
}

/// Renders the grid and writes it to `path` as a JPEG
pub fn export(
    grid: &GridModel,
    cell_pixel_size: u32,
    path: &Path,
    quality: u8,
) -> Result<(), ExportError> {
    let image = render(grid, cell_pixel_size)?;

    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    JpegEncoder::new_with_quality(&mut writer, quality.clamp(1, 100)).encode_image(&image)?;
    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "Encoded {}x{} design to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{CellColor, Rgb};
    use crate::grid::CellPos;

    fn is_close(pixel: &image::Rgb<u8>, expected: [u8; 3], tolerance: u8) -> bool {
        pixel
            .0
            .iter()
            .zip(expected)
            .all(|(a, b)| a.abs_diff(b) <= tolerance)
    }

    #[test]
    fn test_bead_circle_is_inscribed() {
        let (cx, cy, r) = bead_circle(0, 0, 20.0);
        assert_eq!((cx, cy), (10.0, 10.0));
        assert!(r + OUTLINE_WIDTH / 2.0 <= 10.0);

        let (cx, cy, _) = bead_circle(3, 2, 20.0);
        assert_eq!((cx, cy), (70.0, 50.0));
    }

    #[test]
    fn test_render_dimensions() {
        let grid = GridModel::new(25);
        let image = render(&grid, 20).unwrap();
        assert_eq!(image.dimensions(), (500, 500));
    }

    #[test]
    fn test_render_fill_outline_and_background() {
        let mut grid = GridModel::new(25);
        grid.set(CellPos::new(0, 0), CellColor::Painted(Rgb::new(255, 0, 0)))
            .unwrap();
        let image = render(&grid, 20).unwrap();

        // Painted bead center
        assert!(is_close(image.get_pixel(10, 10), [255, 0, 0], 2));
        // Empty bead center
        assert!(is_close(image.get_pixel(30, 10), [0, 0, 0], 2));
        // Square corner lies outside the circle
        assert!(is_close(image.get_pixel(0, 0), [0, 0, 0], 2));
        assert!(is_close(image.get_pixel(499, 499), [0, 0, 0], 2));
        // Ring of an empty bead
        let ring = image.get_pixel(50, 0);
        assert!(ring.0.iter().all(|&c| c > 200), "ring pixel was {:?}", ring);
        // The painted bead keeps a white ring, top and left
        for (x, y) in [(10, 0), (0, 10)] {
            let ring = image.get_pixel(x, y);
            assert!(ring.0.iter().all(|&c| c > 200), "red bead ring was {:?}", ring);
        }
    }

    #[test]
    fn test_render_every_bead_is_centered_in_its_square() {
        let mut grid = GridModel::new(5);
        let blue = CellColor::Painted(Rgb::new(0, 0, 255));
        for (pos, _) in GridModel::new(5).cells() {
            grid.set(pos, blue).unwrap();
        }
        let image = render(&grid, 20).unwrap();

        for row in 0..5u32 {
            for column in 0..5u32 {
                let center = image.get_pixel(column * 20 + 10, row * 20 + 10);
                assert!(is_close(center, [0, 0, 255], 2));
                let corner = image.get_pixel(column * 20, row * 20);
                assert!(is_close(corner, [0, 0, 0], 2));
            }
        }
    }

    #[test]
    fn test_oversized_canvas_is_an_error() {
        let grid = GridModel::new(2);
        assert!(matches!(
            render(&grid, u32::MAX),
            Err(ExportError::PixmapCreationFailed { .. })
        ));
    }

    #[test]
    fn test_pixmap_converts_to_full_rgb_buffer() {
        let mut pixmap = Pixmap::new(3, 2).unwrap();
        pixmap.fill(Color::from_rgba8(1, 2, 3, 255));
        let image = pixmap_to_rgb(&pixmap).unwrap();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(2, 1).0, [1, 2, 3]);
    }

    #[test]
    fn test_empty_grid_cannot_make_pixmap() {
        let grid = GridModel::new(0);
        assert!(matches!(
            render(&grid, 20),
            Err(ExportError::PixmapCreationFailed { .. })
        ));
    }
}
