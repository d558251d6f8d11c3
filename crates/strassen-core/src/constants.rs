//! Constants for multiplication thresholds and driver defaults.

/// Default base-case dimension for Strassen recursion.
///
/// Views at or below this dimension are multiplied with the triple loop.
/// Picked from threshold searches on random dense inputs.
pub const DEFAULT_STRASSEN_THRESHOLD: usize = 15;

/// Number of vertices in the random graphs used for triangle counting.
pub const DEFAULT_VERTEX_COUNT: usize = 1024;

/// Number of independent random graphs per triangle estimate.
pub const DEFAULT_TRIANGLE_TRIALS: usize = 5;

/// Smallest threshold tried by the threshold search.
pub const DEFAULT_SEARCH_MIN_THRESHOLD: usize = 2;

/// Largest threshold tried by the threshold search.
pub const DEFAULT_SEARCH_MAX_THRESHOLD: usize = 64;

/// Increment between consecutive thresholds in the search.
pub const DEFAULT_SEARCH_STEP: usize = 2;

/// Timed multiplications per threshold.
pub const DEFAULT_SEARCH_TRIALS: usize = 4;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Strassen and conventional products disagreed during verification.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Unreadable or malformed matrix input.
    pub const ERROR_INPUT: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_range_is_ordered() {
        assert!(DEFAULT_SEARCH_MIN_THRESHOLD >= 1);
        assert!(DEFAULT_SEARCH_MIN_THRESHOLD <= DEFAULT_SEARCH_MAX_THRESHOLD);
        assert!(DEFAULT_SEARCH_STEP >= 1);
    }

    #[test]
    fn default_threshold_inside_search_range() {
        assert!(DEFAULT_STRASSEN_THRESHOLD >= DEFAULT_SEARCH_MIN_THRESHOLD);
        assert!(DEFAULT_STRASSEN_THRESHOLD <= DEFAULT_SEARCH_MAX_THRESHOLD);
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_MISMATCH,
            exit_codes::ERROR_CONFIG,
            exit_codes::ERROR_INPUT,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
