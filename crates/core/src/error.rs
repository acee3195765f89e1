//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Input-validation errors (`InvalidCapacity`, `InvalidInput`) are returned
/// before any simulation work starts. The frame store variants
/// (`CapacityExceeded`, `NotResident`, `AlreadyResident`) indicate a policy bug:
/// a correct policy never triggers them.
#[derive(Debug, Error)]
pub enum Error {
    /// A frame count of zero was requested.
    #[error("Invalid capacity: {0} (at least one frame is required)")]
    InvalidCapacity(usize),

    /// Malformed caller input, e.g. capacities that are not strictly
    /// ascending or a reference string token that is not a page number.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insertion into a full frame store without a prior eviction.
    #[error("Frame store is full ({capacity} frames)")]
    CapacityExceeded { capacity: usize },

    /// Eviction of a page that is not resident.
    #[error("Page {0} is not resident")]
    NotResident(String),

    /// Insertion of a page that is already resident.
    #[error("Page {0} is already resident")]
    AlreadyResident(String),

    /// I/O error while writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidCapacity(0);
        assert_eq!(
            format!("{}", err),
            "Invalid capacity: 0 (at least one frame is required)"
        );

        let err = Error::CapacityExceeded { capacity: 3 };
        assert_eq!(format!("{}", err), "Frame store is full (3 frames)");

        let err = Error::NotResident("7".to_string());
        assert_eq!(format!("{}", err), "Page 7 is not resident");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<usize> {
            Ok(3)
        }

        assert_eq!(might_fail().unwrap(), 3);
    }
}
