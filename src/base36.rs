/// Base36 encoding and decoding
///
/// Lowercase digits `0-9a-z`, the radix used for the timestamp prefix of
/// unique IDs. Decoding accepts either letter case.
use once_cell::sync::Lazy;

/// Character set for base36 encoding (0-9, a-z)
const BASE36_CHARS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Lookup table for decoding base36 characters to their values
static DECODE_MAP: Lazy<[i8; 256]> = Lazy::new(|| {
    let mut map = [-1i8; 256];
    for (i, &c) in BASE36_CHARS.iter().enumerate() {
        map[c as usize] = i as i8;
        map[c.to_ascii_uppercase() as usize] = i as i8;
    }
    map
});

/// Maximum length of a base36 encoded u64 (13 characters)
pub const MAX_LEN: usize = 13;

/// Encode a u64 to a lowercase base36 string
pub fn encode(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut buffer = [0u8; MAX_LEN];
    let mut position = MAX_LEN;

    while value > 0 {
        position -= 1;
        buffer[position] = BASE36_CHARS[(value % 36) as usize];
        value /= 36;
    }

    String::from_utf8_lossy(&buffer[position..]).into_owned()
}

/// Decode a base36 string to a u64
pub fn decode(encoded: &str) -> Result<u64, DecodeError> {
    if encoded.is_empty() {
        return Err(DecodeError::EmptyString);
    }

    let mut result: u64 = 0;
    for c in encoded.chars() {
        let value = match u8::try_from(c) {
            Ok(byte) => DECODE_MAP[byte as usize],
            Err(_) => -1,
        };
        if value == -1 {
            return Err(DecodeError::InvalidCharacter(c));
        }

        result = result
            .checked_mul(36)
            .and_then(|r| r.checked_add(value as u64))
            .ok_or(DecodeError::Overflow)?;
    }

    Ok(result)
}

/// Errors that can occur during base36 decoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input string is empty
    #[error("Cannot decode an empty string")]
    EmptyString,

    /// The input string contains an invalid character
    #[error("Invalid base36 character: {0}")]
    InvalidCharacter(char),

    /// The decoded value would overflow a u64
    #[error("Decoded value would overflow u64")]
    Overflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_values() {
        assert_eq!(encode(0), "0");
        assert_eq!(encode(9), "9");
        assert_eq!(encode(10), "a");
        assert_eq!(encode(35), "z");
        assert_eq!(encode(36), "10");
        assert_eq!(encode(1_625_097_600_000), "kqk55hc0");
        assert_eq!(encode(u64::MAX), "3w5e11264sgsf");
    }

    #[test]
    fn test_decode_accepts_uppercase() {
        assert_eq!(decode("Z"), Ok(35));
        assert_eq!(decode("KQK55HC0"), Ok(1_625_097_600_000));
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode(""), Err(DecodeError::EmptyString));
        assert_eq!(decode("!"), Err(DecodeError::InvalidCharacter('!')));
        assert_eq!(decode("a_b"), Err(DecodeError::InvalidCharacter('_')));
        assert_eq!(decode("é"), Err(DecodeError::InvalidCharacter('é')));
        assert_eq!(decode("3w5e11264sgsg"), Err(DecodeError::Overflow));
    }
}
