//! TUI message types (Elm Messages).

use std::sync::Arc;

use tagcalc_core::{StoreEvent, Suggestion};

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// The background fetch finished (possibly with an empty list).
    SuggestionsLoaded(Arc<[Suggestion]>),
    /// The formula store changed.
    StoreChanged(StoreEvent),
    /// Key press forwarded from the event loop.
    KeyPress(KeyAction),
    /// Left-button pointer-down at a terminal cell.
    PointerDown { column: u16, row: u16 },
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    Tick,
    Quit,
}
