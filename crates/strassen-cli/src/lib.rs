//! # strassen-cli
//!
//! Input parsing, result presentation, and shell completion for the
//! `strassen` binary.

pub mod completion;
pub mod input;
pub mod output;
pub mod presenter;
pub mod ui;

pub use input::{parse_matrices, read_matrices, InputError};
pub use presenter::CLIResultPresenter;
