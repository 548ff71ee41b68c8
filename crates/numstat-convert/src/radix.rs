//! Base-2 and base-16 encoders for signed 64-bit integers.
//!
//! Non-negative values are plain digit strings without padding. Negative
//! values follow the [`SignPolicy`]:
//!
//! | policy            | binary                              | hex                    |
//! |-------------------|-------------------------------------|------------------------|
//! | `TwosComplement`  | `bit_length(\|v\|) + 1` bits, exact | 32 bits, 8 digits      |
//! | `SignMagnitude`   | `-` + digits of `\|v\|`             | `-` + digits of `\|v\|`|
//!
//! The two two's complement widths differ on purpose: binary grows per
//! value, hex is fixed. Hex fails for values below `-2^31`.

use numstat_core::{EncodingError, SignPolicy};

/// Width of the two's complement hexadecimal form
pub const HEX_WIDTH: u32 = 32;

/// Number of bits needed to write `magnitude` in base 2 (0 for 0)
pub fn bit_length(magnitude: u64) -> u32 {
    u64::BITS - magnitude.leading_zeros()
}

/// Bits a negative value needs in minimal two's complement: magnitude plus sign
pub fn twos_complement_width(value: i64) -> u32 {
    bit_length(value.unsigned_abs()) + 1
}

/// Binary digits of `value`. Every `i64` is representable.
pub fn to_binary(value: i64, policy: SignPolicy) -> String {
    if value >= 0 {
        return format!("{:b}", value);
    }

    match policy {
        SignPolicy::TwosComplement => {
            let width = twos_complement_width(value);
            // Widest case is i64::MIN at 65 bits, so work in 128 bits
            let mask = (1u128 << width) - 1;
            let pattern = (value as i128 as u128) & mask;
            format!("{:0width$b}", pattern, width = width as usize)
        }
        SignPolicy::SignMagnitude => format!("-{:b}", value.unsigned_abs()),
    }
}

/// Uppercase hexadecimal digits of `value`.
///
/// # Errors
/// `OutOfRange` for negative values that do not fit the 32-bit two's
/// complement form.
pub fn to_hex(value: i64, policy: SignPolicy) -> Result<String, EncodingError> {
    if value >= 0 {
        return Ok(format!("{:X}", value));
    }

    match policy {
        SignPolicy::TwosComplement => {
            if value < i64::from(i32::MIN) {
                return Err(EncodingError::OutOfRange {
                    value,
                    encoding: "hex".to_string(),
                    width: HEX_WIDTH,
                    required: twos_complement_width(value),
                });
            }
            Ok(format!("{:08X}", value as i32 as u32))
        }
        SignPolicy::SignMagnitude => Ok(format!("-{:X}", value.unsigned_abs())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TC: SignPolicy = SignPolicy::TwosComplement;
    const SM: SignPolicy = SignPolicy::SignMagnitude;

    #[test]
    fn test_bit_length() {
        assert_eq!(bit_length(0), 0);
        assert_eq!(bit_length(1), 1);
        assert_eq!(bit_length(5), 3);
        assert_eq!(bit_length(8), 4);
        assert_eq!(bit_length(u64::MAX), 64);
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(to_binary(0, TC), "0");
        assert_eq!(to_hex(0, TC).unwrap(), "0");
        assert_eq!(to_binary(10, TC), "1010");
        assert_eq!(to_hex(10, TC).unwrap(), "A");
        assert_eq!(to_hex(255, SM).unwrap(), "FF");
        assert_eq!(to_hex(i64::MAX, TC).unwrap(), "7FFFFFFFFFFFFFFF");
    }

    #[test]
    fn test_minimal_twos_complement_binary() {
        assert_eq!(to_binary(-5, TC), "1011");
        assert_eq!(to_binary(-1, TC), "11");
        assert_eq!(to_binary(-4, TC), "1100");
        assert_eq!(to_binary(-8, TC), "11000");
        assert_eq!(to_binary(-255, TC), "100000001");
    }

    #[test]
    fn test_binary_width_grows_per_value() {
        assert_eq!(to_binary(-3, TC).len(), 3);
        assert_eq!(to_binary(-300, TC).len(), 10);
    }

    #[test]
    fn test_i64_min_binary() {
        let bits = to_binary(i64::MIN, TC);
        assert_eq!(bits.len(), 65);
        assert_eq!(bits, format!("11{}", "0".repeat(63)));
    }

    #[test]
    fn test_fixed_width_hex() {
        assert_eq!(to_hex(-1, TC).unwrap(), "FFFFFFFF");
        assert_eq!(to_hex(-5, TC).unwrap(), "FFFFFFFB");
        assert_eq!(to_hex(-2_147_483_648, TC).unwrap(), "80000000");
    }

    #[test]
    fn test_hex_out_of_range() {
        let err = to_hex(-2_147_483_649, TC).unwrap_err();
        assert_eq!(
            err,
            EncodingError::OutOfRange {
                value: -2_147_483_649,
                encoding: "hex".to_string(),
                width: 32,
                required: 33,
            }
        );
    }

    #[test]
    fn test_sign_magnitude() {
        assert_eq!(to_binary(-5, SM), "-101");
        assert_eq!(to_hex(-255, SM).unwrap(), "-FF");
        assert_eq!(to_hex(-3_000_000_000, SM).unwrap(), "-B2D05E00");
        assert_eq!(to_binary(i64::MIN, SM), format!("-1{}", "0".repeat(63)));
    }
}
