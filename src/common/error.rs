use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    // Mode, length & payload bits exceed the 128 bit data capacity
    #[error("Data too long for QR version 1: {bits} bits exceed capacity of 128 bits")]
    InputTooLarge { bits: usize },

    // Mask search produced no candidate
    #[error("No mask candidate was produced")]
    InternalInvariantViolation,
}

pub type QRResult<T> = Result<T, QRError>;

#[cfg(test)]
mod error_tests {
    use super::QRError;

    #[test]
    fn test_display() {
        let err = QRError::InputTooLarge { bits: 172 };
        assert!(err.to_string().starts_with("Data too long for QR version 1"));
        assert_eq!(QRError::InternalInvariantViolation.to_string(), "No mask candidate was produced");
    }
}
