// crates/iqdiff-core/src/fixed/q23.rs

use crate::error::{CmpError, HexFault, Result};

/// Device sample word: 25 bits, a 2-bit extended sign field on top of a
/// 23-bit value field. The real value is `raw / 2^22`.
///
/// Only sign field `11` means negative. `01` and `10` decode through the
/// non-negative path and the sign bits are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Q23(pub i32);

impl Q23 {
    pub const WIDTH_BITS: u32 = 25;
    pub const VALUE_BITS: u32 = 23;
    pub const FRAC_BITS: u32 = 22;

    pub const VALUE_MASK: u32 = (1 << Self::VALUE_BITS) - 1;
    pub const WORD_MASK: u32 = (1 << Self::WIDTH_BITS) - 1;
    pub const SIGN_NEGATIVE: u32 = 0b11;

    /// Digits after the decimal point in rendered samples.
    pub const RENDER_DIGITS: usize = 6;

    /// Decode a raw 25-bit word. Bits above the word width are ignored.
    #[inline]
    pub fn from_word(word: u32) -> Q23 {
        let word = word & Self::WORD_MASK;
        let sign = word >> Self::VALUE_BITS;
        let value = word & Self::VALUE_MASK;

        if sign == Self::SIGN_NEGATIVE {
            let inverted = !value & Self::VALUE_MASK;
            Q23(-(inverted as i32 + 1))
        } else {
            Q23(value as i32)
        }
    }

    /// Parse one hex token as written by the simulator.
    ///
    /// Surrounding whitespace and an optional `0x` prefix are accepted.
    /// Leading zero digits may be omitted; the word is zero-extended to 25 bits.
    pub fn from_hex(token: &str) -> Result<Q23> {
        let fault = |fault: HexFault| CmpError::HexToken {
            token: token.to_string(),
            fault,
        };

        let t = token.trim();
        let digits = t
            .strip_prefix("0x")
            .or_else(|| t.strip_prefix("0X"))
            .unwrap_or(t);
        if digits.is_empty() {
            return Err(fault(HexFault::Empty));
        }

        let word = u64::from_str_radix(digits, 16).map_err(|e| fault(HexFault::Digits(e)))?;
        if word >> Self::WIDTH_BITS != 0 {
            let bits = u64::BITS - word.leading_zeros();
            return Err(fault(HexFault::TooWide { bits }));
        }

        Ok(Q23::from_word(word as u32))
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1u32 << Self::FRAC_BITS) as f64
    }

    /// Render with exactly six fractional digits, ties to even.
    ///
    /// Done in integers: raw * 10^6 / 2^22 == raw * 5^6 / 2^16.
    /// Negative values that round to zero keep their sign (`-0.000000`).
    pub fn render(self) -> String {
        const NUM: i64 = 15_625;
        const DEN: i64 = 1 << 16;

        let n = self.0 as i64 * NUM;
        let mut micros = n.div_euclid(DEN);
        let rem = n.rem_euclid(DEN);
        if rem > DEN / 2 || (rem == DEN / 2 && micros % 2 != 0) {
            micros += 1;
        }

        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = micros.unsigned_abs();
        format!(
            "{sign}{}.{:0width$}",
            abs / 1_000_000,
            abs % 1_000_000,
            width = Self::RENDER_DIGITS
        )
    }
}

/// Decode one hex token straight to its rendered decimal string.
pub fn hex2float(token: &str) -> Result<String> {
    Ok(Q23::from_hex(token)?.render())
}
