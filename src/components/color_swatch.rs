use crate::color::Rgb;

/// Label showing the selected paint color as its background
pub struct ColorSwatch {
    pub color: Rgb,
    pub label: &'static str,
}

impl ColorSwatch {
    pub fn new(color: Rgb, label: &'static str) -> Self {
        Self { color, label }
    }

    /// Black or white, whichever reads better on the swatch
    pub fn text_color(&self) -> egui::Color32 {
        let Rgb { r, g, b } = self.color;
        // ITU-R BT.601 luma
        let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
        if luma > 140.0 {
            egui::Color32::BLACK
        } else {
            egui::Color32::WHITE
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let size = egui::vec2(160.0, 24.0);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter().rect_filled(rect, 4.0, self.color);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(14.0),
                self.text_color(),
            );
            if response.hovered() {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(1.0, egui::Color32::from_gray(160)),
                );
            }
        }

        response
    }
}
