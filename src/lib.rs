#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod components;
pub mod config;
pub mod controller;
pub mod dialogs;
pub mod error;
pub mod grid;
pub mod history;
pub mod input;
pub mod panels;
pub mod raster;

pub use app::PainterApp;
pub use color::{CellColor, Rgb};
pub use command::{Command, Outcome};
pub use config::PainterConfig;
pub use controller::Controller;
pub use error::{ColorParseError, ExportError, GridError};
pub use grid::{CellPos, GridModel};
pub use history::{HistoryEntry, HistoryLog};
pub use input::{InputMapper, PointerGesture};
