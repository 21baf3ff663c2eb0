//! Conversions between the raw 12-byte form and its hexadecimal and base64 string forms.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use fstr::FStr;

use crate::{ParseError, ParseErrorKind};

/// Length of the raw byte form.
pub const BYTE_LEN: usize = 12;

/// Length of the canonical hexadecimal string.
pub const HEX_LEN: usize = 24;

/// Length of the base64 string (12 bytes encode to 16 characters without padding).
pub const BASE64_LEN: usize = 16;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Validates a hexadecimal string and returns its lowercased canonical form.
///
/// Upper-case digits are accepted and normalized so that case never reaches the canonical store.
///
/// # Examples
///
/// ```rust
/// use objectid::codec;
///
/// let hex = codec::validate_hex("5F1D7F3B9C6A2E001F3A4B5C")?;
/// assert_eq!(&hex as &str, "5f1d7f3b9c6a2e001f3a4b5c");
/// assert!(codec::validate_hex("5f1d7f3b9c6a2e001f3a4b5").is_err());
/// # Ok::<(), objectid::ParseError>(())
/// ```
pub fn validate_hex(src: &str) -> Result<FStr<HEX_LEN>, ParseError> {
    let src = src.as_bytes();
    if src.len() != HEX_LEN {
        return Err(ParseError::new(ParseErrorKind::InvalidHexLength));
    }

    let mut buffer = [0u8; HEX_LEN];
    for (dst, &c) in buffer.iter_mut().zip(src) {
        if !c.is_ascii_hexdigit() {
            return Err(ParseError::new(ParseErrorKind::InvalidHexDigit));
        }
        *dst = c.to_ascii_lowercase();
    }
    Ok(ascii_to_fstr(buffer))
}

/// Returns true if `src` is a 24-character hexadecimal string, ignoring case.
pub fn is_valid_hex(src: &str) -> bool {
    src.len() == HEX_LEN && src.bytes().all(|c| c.is_ascii_hexdigit())
}

/// Returns true if `src` has the length of the raw byte form.
pub fn is_valid_bytes(src: &[u8]) -> bool {
    src.len() == BYTE_LEN
}

/// Renders the raw bytes as the 24-character lowercase hexadecimal string.
pub fn bytes_to_hex(bytes: &[u8; BYTE_LEN]) -> FStr<HEX_LEN> {
    let mut buffer = [0u8; HEX_LEN];
    for (dst, &e) in buffer.chunks_exact_mut(2).zip(bytes) {
        dst[0] = DIGITS[(e >> 4) as usize];
        dst[1] = DIGITS[(e & 15) as usize];
    }
    ascii_to_fstr(buffer)
}

/// Parses a 24-character hexadecimal string, in either case, into raw bytes.
pub fn hex_to_bytes(src: &str) -> Result<[u8; BYTE_LEN], ParseError> {
    let hex = validate_hex(src)?;
    Ok(decode_hex_lenient(hex.as_bytes()))
}

/// Decodes hexadecimal digits without validation; any non-digit decodes as zero.
///
/// Used for strings that crossed a trust boundary unchecked.
pub(crate) fn decode_hex_lenient(src: &[u8]) -> [u8; BYTE_LEN] {
    fn nibble(c: u8) -> u8 {
        (c as char).to_digit(16).map_or(0, |d| d as u8)
    }

    debug_assert_eq!(src.len(), HEX_LEN);
    let mut dst = [0u8; BYTE_LEN];
    for (e, pair) in dst.iter_mut().zip(src.chunks_exact(2)) {
        *e = (nibble(pair[0]) << 4) | nibble(pair[1]);
    }
    dst
}

/// Renders the raw bytes as a 16-character base64 string (standard alphabet).
pub fn bytes_to_base64(bytes: &[u8; BYTE_LEN]) -> FStr<BASE64_LEN> {
    let mut buffer = [0u8; BASE64_LEN];
    let written = BASE64
        .encode_slice(bytes, &mut buffer)
        .expect("12 bytes always encode to 16 base64 characters");
    debug_assert_eq!(written, BASE64_LEN);
    ascii_to_fstr(buffer)
}

/// Decodes a 16-character base64 string into raw bytes.
///
/// The length is checked before any decoding is attempted.
pub fn base64_to_bytes(src: &str) -> Result<[u8; BYTE_LEN], ParseError> {
    if src.len() != BASE64_LEN {
        return Err(ParseError::new(ParseErrorKind::InvalidBase64Length));
    }

    let decoded = BASE64
        .decode(src)
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidBase64))?;
    <[u8; BYTE_LEN]>::try_from(decoded.as_slice())
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidBase64))
}

fn ascii_to_fstr<const N: usize>(buffer: [u8; N]) -> FStr<N> {
    debug_assert!(buffer.is_ascii());
    // SAFETY: every caller fills the buffer with ASCII characters only
    unsafe { FStr::from_inner_unchecked(buffer) }
}
