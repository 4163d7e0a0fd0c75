//! # tagcalc-tui
//!
//! Interactive formula widget using ratatui with Elm architecture.
//!
//! The model owns a [`tagcalc_core::FormulaEditor`]; terminal events and
//! background fetch results arrive as [`TuiMessage`]s and every frame is
//! re-derived from the editor state.

pub mod bridge;
pub mod chips;
pub mod dropdown;
pub mod error;
pub mod footer;
pub mod header;
pub mod hit;
pub mod input;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod result;
pub mod styles;
pub mod table;

pub use bridge::{spawn_fetch, TuiStoreObserver};
pub use error::TuiError;
pub use hit::{Hit, HitRegions};
pub use keymap::{map_key, KeyAction};
pub use messages::TuiMessage;
pub use model::TuiApp;
