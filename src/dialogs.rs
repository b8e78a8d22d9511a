use std::path::PathBuf;

use egui::color_picker::{self, Alpha};
use egui::{Align2, Color32};

use crate::color::Rgb;

/// How a modal dialog was closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult<T> {
    Confirmed(T),
    Cancelled,
}

impl<T> DialogResult<T> {
    /// Collapses a cancel into `None`, the shape commands expect
    pub fn into_option(self) -> Option<T> {
        match self {
            DialogResult::Confirmed(value) => Some(value),
            DialogResult::Cancelled => None,
        }
    }
}

/// "Choose color" window with a picker and OK/Cancel
#[derive(Debug, Default)]
pub struct ColorDialog {
    open: bool,
    pending: Color32,
}

impl ColorDialog {
    pub fn open(&mut self, current: Rgb) {
        self.open = true;
        self.pending = current.into();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Shows the dialog. Returns `Some` on the frame it closes.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<DialogResult<Rgb>> {
        if !self.open {
            return None;
        }

        let mut result = None;
        egui::Window::new("Choose color")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                color_picker::color_picker_color32(ui, &mut self.pending, Alpha::Opaque);
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        result = Some(DialogResult::Confirmed(Rgb::from(self.pending)));
                    }
                    if ui.button("Cancel").clicked() {
                        result = Some(DialogResult::Cancelled);
                    }
                });
            });

        if result.is_some() {
            self.open = false;
        }
        result
    }
}

/// "Save design" window with a path field and Save/Cancel
#[derive(Debug, Default)]
pub struct SaveDialog {
    open: bool,
    path_text: String,
    default_extension: String,
}

impl SaveDialog {
    pub fn open(&mut self, default_file_name: &str, default_extension: &str) {
        self.open = true;
        self.default_extension = default_extension.to_owned();
        if self.path_text.is_empty() {
            self.path_text = default_file_name.to_owned();
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_path_text(&mut self, text: impl Into<String>) {
        self.path_text = text.into();
    }

    /// The typed path, or `None` when the field is blank.
    /// A name without an extension gets the default one.
    pub fn resolve(&self) -> Option<PathBuf> {
        let trimmed = self.path_text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let path = PathBuf::from(trimmed);
        if path.extension().is_some() || self.default_extension.is_empty() {
            Some(path)
        } else {
            Some(path.with_extension(&self.default_extension))
        }
    }

    /// Shows the dialog. Returns `Some` on the frame it closes; a blank path
    /// confirms as a cancel.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<DialogResult<PathBuf>> {
        if !self.open {
            return None;
        }

        let mut result = None;
        egui::Window::new("Save design")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("File name (JPEG):");
                let response = ui.text_edit_singleline(&mut self.path_text);
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() || submitted {
                        result = Some(match self.resolve() {
                            Some(path) => DialogResult::Confirmed(path),
                            None => DialogResult::Cancelled,
                        });
                    }
                    if ui.button("Cancel").clicked() {
                        result = Some(DialogResult::Cancelled);
                    }
                });
            });

        if result.is_some() {
            self.open = false;
        }
        result
    }
}
