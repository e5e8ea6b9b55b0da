//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use tilemerge::GameError;
    use tilemerge::io::error::{WithOperation, invalid_parameter};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = GameError::FileSystem {
            path: "/tmp/board.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("board_size", &12, &"must be between 2 and 8");

        let message = error.to_string();
        assert!(message.contains("board_size"));
        assert!(message.contains("12"));
        assert!(message.contains("must be between 2 and 8"));
        assert!(error.source().is_none());
    }

    // Tests InvalidTile error names the cell and value
    #[test]
    fn test_invalid_tile_error() {
        let error = GameError::InvalidTile {
            row: 1,
            col: 3,
            value: 6,
        };

        let message = error.to_string();
        assert!(message.contains("(1, 3)"));
        assert!(message.contains('6'));
    }

    // Tests DimensionMismatch error reports both lengths
    #[test]
    fn test_dimension_mismatch_error() {
        let message = GameError::DimensionMismatch {
            expected: 4,
            found: 3,
        }
        .to_string();
        assert!(message.contains("expected row length 4"));
        assert!(message.contains("found 3"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = GameError::ImageExport {
            path: PathBuf::from("/restricted/board.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/board.png"));
        assert!(error.source().is_some());
        assert!(
            message.contains("access denied"),
            "Error message should include source error details: {message}"
        );
    }

    // Tests terminal errors carry the failing operation and source
    #[test]
    fn test_terminal_error_from_with_operation() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("no tty"));
        let error = result.with_operation("enable raw mode").unwrap_err();

        let message = error.to_string();
        assert!(message.contains("enable raw mode"));
        assert!(message.contains("no tty"));
        assert!(error.source().is_some());
    }

    // Tests plain I/O errors convert through the question mark operator
    #[test]
    fn test_from_io_error() {
        let error = GameError::from(std::io::Error::other("disk full"));
        assert!(matches!(error, GameError::FileSystem { .. }));
    }
}
