use egui::{Painter, Pos2, Sense, Stroke};

use crate::PainterApp;
use crate::grid::GridModel;
use crate::input::PointerGesture;
use crate::raster::{self, BACKGROUND_COLOR, OUTLINE_COLOR, OUTLINE_WIDTH};

pub fn central_panel(app: &mut PainterApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let Some(side) = app.controller().config().canvas_size() else {
            ui.label("Canvas is too large to display");
            return;
        };
        let side = side as f32;
        let (response, painter) = ui.allocate_painter(egui::vec2(side, side), Sense::click());
        let canvas_rect = response.rect;

        // Handle input
        app.input_mapper_mut().set_origin(canvas_rect.min);
        if let (Some(gesture), Some(pointer)) = (
            PointerGesture::from_response(&response),
            response.interact_pointer_pos(),
        ) {
            if let Some(command) = app.input_mapper().command_for(gesture, pointer) {
                app.execute(command);
            }
        }

        // Render the canvas from the grid, never the other way around
        let cell = app.controller().config().cell_pixel_size as f32;
        painter.rect_filled(canvas_rect, 0.0, BACKGROUND_COLOR);
        paint_beads(&painter, canvas_rect.min, app.controller().grid(), cell);
    });
}

/// Draws every bead as an outlined circle inscribed in its cell
pub fn paint_beads(painter: &Painter, origin: Pos2, grid: &GridModel, cell_pixel_size: f32) {
    let outline = Stroke::new(OUTLINE_WIDTH, OUTLINE_COLOR);
    for (pos, color) in grid.cells() {
        let (cx, cy, radius) = raster::bead_circle(pos.column, pos.row, cell_pixel_size);
        painter.circle(origin + egui::vec2(cx, cy), radius, color.fill(), outline);
    }
}
