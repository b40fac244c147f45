//! Tests for error types including source chaining and context promotion

#[cfg(test)]
mod tests {
    use aztec_shuffle::DiamondError;
    use aztec_shuffle::io::error::{WithContext, invalid_parameter, invariant_violation};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = DiamondError::FileSystem {
            path: "/tmp/tiling.png".into(),
            operation: "create file",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("create file"));
        assert!(message.contains("/tmp/tiling.png"));
        assert!(message.contains("file not found"));
    }

    // Tests cell errors carry their coordinates into the message
    // Verified by omitting the extent from the out-of-bounds message
    #[test]
    fn test_cell_error_messages() {
        let out_of_bounds = DiamondError::OutOfBounds {
            x: 12,
            y: 3,
            extent: 10,
        };
        assert!(out_of_bounds.to_string().contains("(12, 3)"));
        assert!(out_of_bounds.to_string().contains("10x10"));

        let occupied = DiamondError::CellOccupied { x: 1, y: 2 };
        assert!(occupied.to_string().contains("already holds"));

        let vacant = DiamondError::CellVacant { x: 4, y: 5 };
        assert!(vacant.to_string().contains("(4, 5)"));
        assert!(vacant.source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("order", &0, &"must be between 1 and 500");

        let message = error.to_string();
        assert!(message.contains("order"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be between 1 and 500"));
        assert!(!error.is_cell_error());
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = DiamondError::ImageExport {
            path: PathBuf::from("/restricted/diamond.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/diamond.png"));
        assert!(message.contains("access denied"), "{message}");
        assert!(error.source().is_some());
    }

    // Tests only grid-level precondition errors count as cell errors
    // Verified by including InvariantViolation in is_cell_error
    #[test]
    fn test_is_cell_error() {
        assert!(DiamondError::CellOccupied { x: 0, y: 0 }.is_cell_error());
        assert!(DiamondError::CellVacant { x: 0, y: 0 }.is_cell_error());
        assert!(
            DiamondError::OutOfBounds {
                x: 0,
                y: 0,
                extent: 0
            }
            .is_cell_error()
        );
        assert!(!invariant_violation("move", &"stuck").is_cell_error());
    }

    // Tests with_operation promotes cell errors and keeps the step name
    // Verified by passing cell errors through unchanged
    #[test]
    fn test_with_operation_promotes_cell_errors() {
        let failed: Result<(), DiamondError> = Err(DiamondError::CellVacant { x: 7, y: 8 });
        let promoted = failed.with_operation("delete clashing tiles");

        match promoted {
            Err(DiamondError::InvariantViolation { operation, reason }) => {
                assert_eq!(operation, "delete clashing tiles");
                assert!(reason.contains("(7, 8)"));
            }
            other => panic!("expected an invariant violation, got {other:?}"),
        }
    }

    // Tests with_operation leaves other errors and successes alone
    // Verified by promoting every error
    #[test]
    fn test_with_operation_passes_other_errors() {
        let failed: Result<(), DiamondError> =
            Err(invalid_parameter("extent", &3, &"must be even"));
        assert!(matches!(
            failed.with_operation("initial placement"),
            Err(DiamondError::InvalidParameter {
                parameter: "extent",
                ..
            })
        ));

        let io_failure: Result<u8, DiamondError> = Err(DiamondError::FileSystem {
            path: PathBuf::from("growth.gif"),
            operation: "create file",
            source: std::io::Error::other("disk full"),
        });
        assert!(matches!(
            io_failure.with_operation("fill with unit diamonds"),
            Err(DiamondError::FileSystem {
                operation: "create file",
                ..
            })
        ));

        let fine: Result<u8, DiamondError> = Ok(3);
        assert_eq!(fine.with_operation("expand").ok(), Some(3));
    }
}
