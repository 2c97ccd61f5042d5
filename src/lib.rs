//! # qrv1m
//!
//! A QR code encoder for version 1 symbols (21x21 modules) at error correction level M,
//! encoding the payload in byte mode.
//!
//! The whole pipeline is built from scratch: GF(256) arithmetic, Reed-Solomon error
//! correction, function pattern placement, zigzag data placement, and mask selection by
//! penalty score.
//!
//! ## Quick Start
//!
//! ```rust
//! use qrv1m::generate_qr_matrix;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let matrix = generate_qr_matrix("Hello")?;
//! assert_eq!(matrix.len(), 21);
//! // Top left corner of the finder pattern is dark
//! assert!(matrix[0][0]);
//! # Ok(())
//! # }
//! ```
//!
//! The returned matrix has no quiet zone. Callers rendering it must add a light border of
//! [`QUIET_ZONE`] modules on every side before the symbol is scannable; the rendering
//! helpers on [`QR`] already do so.
//!
//! ```rust
//! use qrv1m::{MaskPattern, QRBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new(b"pickup:42")
//!     .mask(MaskPattern::new(3))  // Skips the penalty search
//!     .build()?;
//!
//! let img = qr.render(4);  // 4x scale factor, quiet zone included
//! assert_eq!(img.width(), (21 + 8) * 4);
//! # Ok(())
//! # }
//! ```
//!
//! ## Capacity
//!
//! Mode indicator, character count and payload must fit in 128 bits, so payloads are
//! limited to 14 bytes of UTF-8. Longer input fails with [`QRError::InputTooLarge`].

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;

pub use builder::{QRBuilder, QR};
pub use common::error::{QRError, QRResult};
pub use common::mask::{self, MaskPattern};
pub use common::metadata::{Color, ECLevel, Matrix, QUIET_ZONE, WIDTH};

/// Encodes `data` into a finalized version 1-M symbol, `true` marking dark modules.
pub fn generate_qr_matrix(data: &str) -> QRResult<Matrix> {
    let qr = QRBuilder::new(data.as_bytes()).build()?;
    Ok(qr.to_matrix())
}

#[cfg(test)]
mod lib_tests {
    use super::{generate_qr_matrix, QRError};

    #[test]
    fn test_generate_qr_matrix() {
        let matrix = generate_qr_matrix("A").unwrap();
        assert!(matrix[0][0]);
        assert!(matrix[13][8]);
    }

    #[test]
    fn test_generate_qr_matrix_too_long() {
        let err = generate_qr_matrix("01234567890123456789").unwrap_err();
        assert_eq!(err, QRError::InputTooLarge { bits: 172 });
    }
}
