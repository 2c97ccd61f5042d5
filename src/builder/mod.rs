mod qr;

pub use qr::QR;

use tracing::debug;

use crate::common::{
    codec::{build_payload, encoded_bit_len},
    error::QRResult,
    mask::{apply_best_mask, MaskPattern},
    metadata::{DATA_BIT_CAPACITY, EC_LEVEL, VERSION},
};

pub struct QRBuilder<'a> {
    data: &'a [u8],
    mask: Option<MaskPattern>,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, mask: None }
    }

    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = Some(mask);
        self
    }

    pub fn unset_mask(&mut self) -> &mut Self {
        self.mask = None;
        self
    }

    pub fn metadata(&self) -> String {
        match self.mask {
            Some(m) => format!("{{ Version: {VERSION}, Ec level: {EC_LEVEL:?}, Mask: {} }}", *m),
            None => format!("{{ Version: {VERSION}, Ec level: {EC_LEVEL:?}, Mask: None }}"),
        }
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QR> {
        debug!(
            metadata = %self.metadata(),
            data_len = self.data.len(),
            "Generating QR"
        );

        debug!("Encoding data & computing ecc");
        let payload = build_payload(self.data)?;

        debug!("Drawing function patterns");
        let mut qr = QR::new();
        qr.draw_all_function_patterns();

        debug!("Drawing encoding region");
        qr.draw_encoding_region(payload);

        match self.mask {
            Some(m) => {
                debug!(mask = *m, "Applying mask");
                qr.apply_mask(m);
            }
            None => {
                debug!("Finding & applying best mask");
                apply_best_mask(&mut qr)?;
            }
        }

        debug!(
            data_bits = encoded_bit_len(self.data),
            capacity = DATA_BIT_CAPACITY,
            dark_modules = qr.count_dark_modules(),
            "QR generated"
        );

        Ok(qr)
    }
}
