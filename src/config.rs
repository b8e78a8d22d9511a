use crate::color::Rgb;

/// Dimensions and export settings for a painter window
#[derive(Debug, Clone, PartialEq)]
pub struct PainterConfig {
    /// Beads per side
    pub grid_size: usize,
    /// Width and height of one bead's square, in pixels
    pub cell_pixel_size: u32,
    /// Paint color at startup
    pub default_color: Rgb,
    /// JPEG quality, 1-100
    pub jpeg_quality: u8,
    pub default_file_name: String,
    /// Added by the save dialog to names typed without one
    pub default_extension: String,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            grid_size: 25,
            cell_pixel_size: 20,
            default_color: Rgb::WHITE,
            jpeg_quality: 90,
            default_file_name: "design.jpg".to_owned(),
            default_extension: "jpg".to_owned(),
        }
    }
}

impl PainterConfig {
    /// Side length of the canvas (and of exported images) in pixels,
    /// or `None` if it does not fit in a `u32`
    pub fn canvas_size(&self) -> Option<u32> {
        u32::try_from(self.grid_size)
            .ok()?
            .checked_mul(self.cell_pixel_size)
    }
}
