use std::path::PathBuf;

use crate::color::Rgb;
use crate::grid::CellPos;

/// Represents the actions a user can take on the bead grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Paint a bead with the currently selected color
    Paint(CellPos),
    /// Reset a bead to empty
    Erase(CellPos),
    /// Revert the most recent paint or erase
    Undo,
    /// Result of the color dialog; `None` means it was cancelled
    ChooseColor(Option<Rgb>),
    /// Result of the save dialog; `None` means it was cancelled
    Save(Option<PathBuf>),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Paint(_) => "Paint",
            Command::Erase(_) => "Erase",
            Command::Undo => "Undo",
            Command::ChooseColor(_) => "Choose Color",
            Command::Save(_) => "Save",
        }
    }
}

/// What executing a command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Grid or selected color changed
    Changed,
    /// Nothing to do (cancelled dialog, empty history, click outside the grid)
    Unchanged,
    /// Design was written to this file
    Saved(PathBuf),
}
