//! # tagcalc-cli
//!
//! Non-interactive output: result presentation, suggestion tables, the fetch
//! spinner and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod spinner;
pub mod ui;

pub use presenter::CliResultPresenter;
pub use spinner::FetchSpinner;
