use std::path::{Path, PathBuf};

use crate::color::{CellColor, Rgb};
use crate::command::{Command, Outcome};
use crate::config::PainterConfig;
use crate::error::{ExportError, GridError};
use crate::grid::{CellPos, GridModel};
use crate::history::HistoryLog;
use crate::raster;

/// Owns the drawing state of one painter window and applies commands to it.
///
/// The grid, the undo history and the selected color live here rather than
/// in any widget; the canvas only ever reads from [`Controller::grid`].
#[derive(Debug, Clone)]
pub struct Controller {
    config: PainterConfig,
    grid: GridModel,
    history: HistoryLog,
    selected_color: Rgb,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(PainterConfig::default())
    }
}

impl Controller {
    pub fn new(config: PainterConfig) -> Self {
        Self {
            grid: GridModel::new(config.grid_size),
            history: HistoryLog::new(),
            selected_color: config.default_color,
            config,
        }
    }

    pub fn config(&self) -> &PainterConfig {
        &self.config
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn selected_color(&self) -> Rgb {
        self.selected_color
    }

    /// Runs a command. Only a failed export is reported as an error;
    /// clicks outside the grid and cancelled dialogs are no-ops.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, ExportError> {
        log::trace!("Executing {}", command.name());
        let outcome = match command {
            Command::Paint(pos) => Self::ignore_out_of_bounds(self.paint(pos)),
            Command::Erase(pos) => Self::ignore_out_of_bounds(self.erase(pos)),
            Command::Undo => self.undo(),
            Command::ChooseColor(color) => self.choose_color(color),
            Command::Save(path) => match path {
                Some(path) => match self.save(&path)? {
                    Some(saved) => Outcome::Saved(saved),
                    None => Outcome::Unchanged,
                },
                None => Outcome::Unchanged,
            },
        };
        Ok(outcome)
    }

    /// Paints a bead with the selected color, recording its old color first
    pub fn paint(&mut self, pos: CellPos) -> Result<(), GridError> {
        self.replace(pos, CellColor::Painted(self.selected_color))
    }

    /// Resets a bead to empty, recording its old color first
    pub fn erase(&mut self, pos: CellPos) -> Result<(), GridError> {
        self.replace(pos, CellColor::Empty)
    }

    /// Reverts the most recent paint or erase. Empty history is a no-op.
    pub fn undo(&mut self) -> Outcome {
        let Some(entry) = self.history.undo_last() else {
            return Outcome::Unchanged;
        };
        match self.grid.set(entry.pos, entry.previous) {
            Ok(()) => Outcome::Changed,
            Err(err) => {
                // Entries are only recorded for in-bounds cells
                log::error!("Discarding history entry: {}", err);
                Outcome::Unchanged
            }
        }
    }

    /// Applies the color dialog result; `None` (cancelled) keeps the current color
    pub fn choose_color(&mut self, color: Option<Rgb>) -> Outcome {
        match color {
            Some(color) => {
                log::info!("Selected color {}", color);
                self.selected_color = color;
                Outcome::Changed
            }
            None => Outcome::Unchanged,
        }
    }

    /// Exports the design as JPEG to exactly `path`. An empty path counts as a
    /// cancelled dialog and returns `Ok(None)`.
    pub fn save(&self, path: &Path) -> Result<Option<PathBuf>, ExportError> {
        if path.as_os_str().is_empty() {
            return Ok(None);
        }

        if let Err(err) = raster::export(
            &self.grid,
            self.config.cell_pixel_size,
            path,
            self.config.jpeg_quality,
        ) {
            log::error!("Failed to save design: {}", err);
            return Err(err);
        }

        log::info!("Design saved as {}", path.display());
        Ok(Some(path.to_path_buf()))
    }

    fn replace(&mut self, pos: CellPos, color: CellColor) -> Result<(), GridError> {
        let previous = self.grid.get(pos)?;
        self.history.record(pos, previous);
        self.grid.set(pos, color)
    }

    fn ignore_out_of_bounds(result: Result<(), GridError>) -> Outcome {
        match result {
            Ok(()) => Outcome::Changed,
            Err(err) => {
                log::debug!("Ignoring pointer input: {}", err);
                Outcome::Unchanged
            }
        }
    }
}
