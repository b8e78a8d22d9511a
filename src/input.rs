use egui::{Pos2, Response};

use crate::command::Command;
use crate::grid::CellPos;

/// Pointer gestures the canvas reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerGesture {
    /// Single primary click paints
    Click,
    /// Double primary click erases
    DoubleClick,
}

impl PointerGesture {
    /// Reads the gesture from a canvas response.
    ///
    /// egui reports the second click of a double click as a click too, so the
    /// double click has to be checked first.
    pub fn from_response(response: &Response) -> Option<Self> {
        if response.double_clicked() {
            Some(Self::DoubleClick)
        } else if response.clicked() {
            Some(Self::Click)
        } else {
            None
        }
    }
}

/// Converts canvas-relative pixel coordinates into a cell index by integer
/// division. Coordinates past the canvas give indices past the grid, which the
/// grid rejects; negative coordinates have no cell at all.
pub fn map_to_cell(x: f32, y: f32, cell_pixel_size: u32) -> Option<CellPos> {
    if cell_pixel_size == 0 || !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
        return None;
    }
    let cell = cell_pixel_size as usize;
    Some(CellPos::new(
        x.floor() as usize / cell,
        y.floor() as usize / cell,
    ))
}

/// Maps screen-space pointer positions onto the bead grid
#[derive(Debug, Clone, Copy)]
pub struct InputMapper {
    /// Top-left corner of the canvas on screen
    origin: Pos2,
    cell_pixel_size: u32,
}

impl InputMapper {
    pub fn new(origin: Pos2, cell_pixel_size: u32) -> Self {
        Self {
            origin,
            cell_pixel_size,
        }
    }

    /// Update the canvas origin (e.g. if the window layout moved)
    pub fn set_origin(&mut self, origin: Pos2) {
        self.origin = origin;
    }

    pub fn map(&self, screen_pos: Pos2) -> Option<CellPos> {
        let local = screen_pos - self.origin;
        map_to_cell(local.x, local.y, self.cell_pixel_size)
    }

    /// Turns a gesture at a screen position into the matching command
    pub fn command_for(&self, gesture: PointerGesture, screen_pos: Pos2) -> Option<Command> {
        let pos = self.map(screen_pos)?;
        Some(match gesture {
            PointerGesture::Click => Command::Paint(pos),
            PointerGesture::DoubleClick => Command::Erase(pos),
        })
    }
}
