use egui::Pos2;

use crate::command::{Command, Outcome};
use crate::config::PainterConfig;
use crate::controller::Controller;
use crate::dialogs::{ColorDialog, SaveDialog};
use crate::input::InputMapper;
use crate::panels;

/// The painter window: a bead canvas, a color swatch and the action buttons
pub struct PainterApp {
    controller: Controller,
    input_mapper: InputMapper,
    color_dialog: ColorDialog,
    save_dialog: SaveDialog,
    // Last message for the status line
    status: Option<String>,
}

impl Default for PainterApp {
    fn default() -> Self {
        Self::with_config(PainterConfig::default())
    }
}

impl PainterApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: PainterConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self::with_config(config)
    }

    pub fn with_config(config: PainterConfig) -> Self {
        let input_mapper = InputMapper::new(Pos2::ZERO, config.cell_pixel_size);
        Self {
            controller: Controller::new(config),
            input_mapper,
            color_dialog: ColorDialog::default(),
            save_dialog: SaveDialog::default(),
            status: None,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn input_mapper(&self) -> &InputMapper {
        &self.input_mapper
    }

    pub fn input_mapper_mut(&mut self) -> &mut InputMapper {
        &mut self.input_mapper
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn open_color_dialog(&mut self) {
        self.color_dialog.open(self.controller.selected_color());
    }

    pub fn open_save_dialog(&mut self) {
        let config = self.controller.config();
        self.save_dialog
            .open(&config.default_file_name, &config.default_extension);
    }

    /// Runs a command and reflects saves and export failures in the status line
    pub fn execute(&mut self, command: Command) {
        match self.controller.execute(command) {
            Ok(Outcome::Saved(path)) => {
                self.status = Some(format!("Design saved as {}", path.display()));
            }
            Ok(Outcome::Changed | Outcome::Unchanged) => {}
            Err(err) => {
                self.status = Some(format!("Save failed: {}", err));
            }
        }
    }
}

impl eframe::App for PainterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Panels first; the central panel takes what is left
        panels::controls_panel(self, ctx);
        panels::central_panel(self, ctx);

        if let Some(result) = self.color_dialog.show(ctx) {
            self.execute(Command::ChooseColor(result.into_option()));
        }
        if let Some(result) = self.save_dialog.show(ctx) {
            self.execute(Command::Save(result.into_option()));
        }
    }
}
