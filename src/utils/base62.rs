//! Base-62 rendering of arbitrary-precision unsigned integers.
//!
//! Digits are ordered `0-9`, `a-z`, `A-Z`.

const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Encodes a big-endian unsigned integer of any width in base 62.
///
/// Leading zero bytes do not contribute digits; zero itself encodes as `"0"`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(encode(&[62]), "10");
/// assert_eq!(encode(&[1, 0]), "48");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    let mut number: Vec<u8> = bytes.iter().copied().skip_while(|b| *b == 0).collect();
    if number.is_empty() {
        return "0".to_string();
    }

    let mut digits = Vec::new();

    // Schoolbook long division by 62, one base-256 limb at a time.
    while !number.is_empty() {
        let mut remainder: u32 = 0;
        let mut quotient = Vec::with_capacity(number.len());

        for &limb in &number {
            let acc = (remainder << 8) | u32::from(limb);
            let q = acc / 62;
            remainder = acc % 62;
            if !quotient.is_empty() || q != 0 {
                quotient.push(q as u8);
            }
        }

        digits.push(ALPHABET[remainder as usize]);
        number = quotient;
    }

    digits.iter().rev().map(|&d| d as char).collect()
}
