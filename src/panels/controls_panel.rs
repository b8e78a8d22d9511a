use crate::PainterApp;
use crate::command::Command;
use crate::components::ColorSwatch;

pub fn controls_panel(app: &mut PainterApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("controls_panel").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let swatch = ColorSwatch::new(app.controller().selected_color(), "Current Color");
            if swatch.show(ui).clicked() {
                app.open_color_dialog();
            }
            if ui.button("Select Color").clicked() {
                app.open_color_dialog();
            }

            ui.separator();

            if ui.button("Save Design").clicked() {
                app.open_save_dialog();
            }
            let can_undo = app.controller().history().can_undo();
            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.execute(Command::Undo);
            }
        });

        ui.horizontal(|ui| {
            let grid = app.controller().grid();
            ui.weak(format!(
                "{} of {} beads painted",
                grid.painted_count(),
                grid.size() * grid.size()
            ));
            if let Some(status) = app.status() {
                ui.separator();
                ui.label(status);
            }
        });
        ui.add_space(6.0);
    });
}
