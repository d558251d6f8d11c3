//! Error handling and exit codes.

use strassen_cli::InputError;
use strassen_core::{exit_codes, MatrixError};

/// Map a matrix error to its exit code.
#[must_use]
pub fn handle_error(err: &MatrixError) -> i32 {
    match err {
        MatrixError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
        MatrixError::Config(_) => exit_codes::ERROR_CONFIG,
        MatrixError::BufferLength { .. } | MatrixError::NotSquare { .. } => exit_codes::ERROR_INPUT,
        MatrixError::DimensionMismatch { .. } | MatrixError::InvalidQuadrant(_) => {
            exit_codes::ERROR_GENERIC
        }
    }
}

/// Exit code for an application error, found by downcasting to the typed
/// library errors.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(matrix) = err.downcast_ref::<MatrixError>() {
        return handle_error(matrix);
    }
    if err.downcast_ref::<InputError>().is_some() {
        return exit_codes::ERROR_INPUT;
    }
    exit_codes::ERROR_GENERIC
}
