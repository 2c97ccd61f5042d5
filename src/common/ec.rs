use super::galois::{gf_exp, gf_mul};
use super::metadata::{DATA_CODEWORDS, EC_CODEWORDS};

// Generator polynomial
//------------------------------------------------------------------------------

// Product of (x - a^i) for i in 0..ec_count, highest degree coefficient first
pub fn generator_polynomial(ec_count: usize) -> Vec<u8> {
    let mut poly = vec![1u8];
    for i in 0..ec_count {
        let factor = [1, gf_exp(i)];
        let mut res = vec![0u8; poly.len() + 1];
        for (j, &p) in poly.iter().enumerate() {
            for (k, &f) in factor.iter().enumerate() {
                res[j + k] ^= gf_mul(p, f);
            }
        }
        poly = res;
    }
    poly
}

// Error correction codewords
//------------------------------------------------------------------------------

// Performs polynomial long division of the data polynomial (shifted up by ec_count) by
// the generator polynomial. The coefficients of the remainder are the ecc.
pub fn ecc(data: &[u8], ec_count: usize) -> Vec<u8> {
    let len = data.len();
    let gen_poly = generator_polynomial(ec_count);

    let mut res = data.to_vec();
    res.resize(len + ec_count, 0);

    for i in 0..len {
        let lead_coeff = res[i];
        if lead_coeff == 0 {
            continue;
        }
        for (u, &v) in res[i..].iter_mut().zip(gen_poly.iter()) {
            *u ^= gf_mul(v, lead_coeff);
        }
    }

    res.split_off(len)
}

pub fn compute_ecc(data: &[u8; DATA_CODEWORDS]) -> [u8; EC_CODEWORDS] {
    let mut res = [0u8; EC_CODEWORDS];
    res.copy_from_slice(&ecc(data, EC_CODEWORDS));
    res
}
