use std::{cmp, fmt, hash, str, time};

use fstr::FStr;

use crate::codec::{self, BYTE_LEN, HEX_LEN};
use crate::like::{IdField, ObjectIdLike};

/// Represents a 12-byte ObjectId.
///
/// The canonical 24-character lowercase hexadecimal string is the source of truth retained by
/// every instance. An instance may additionally cache the raw bytes (see [`CacheMode`]); the cache
/// is always derived from the hexadecimal string and never disagrees with it.
///
/// Equality, ordering, and hashing consider the hexadecimal string only.
#[derive(Copy, Clone)]
pub struct ObjectId {
    hex: FStr<HEX_LEN>,
    cache: Option<[u8; BYTE_LEN]>,
}

/// Controls whether an [`ObjectId`] retains its raw bytes alongside the hexadecimal string.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum CacheMode {
    /// Keep the raw bytes so that [`ObjectId::bytes()`] does not decode the string.
    #[default]
    Bytes,

    /// Keep the hexadecimal string only.
    HexOnly,
}

/// Selects the string form produced by [`ObjectId::encode()`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Encoding {
    /// 24-character lowercase hexadecimal string.
    #[default]
    Hex,

    /// 16-character base64 string.
    Base64,
}

impl ObjectId {
    fn from_parts(hex: FStr<HEX_LEN>, bytes: [u8; BYTE_LEN]) -> Self {
        Self {
            hex,
            cache: Some(bytes),
        }
    }

    /// Creates an object from the raw 12-byte form.
    pub fn from_bytes(bytes: [u8; BYTE_LEN]) -> Self {
        Self::from_parts(codec::bytes_to_hex(&bytes), bytes)
    }

    /// Creates an object from a byte slice, failing unless it is exactly 12 bytes long.
    pub fn from_slice(src: &[u8]) -> Result<Self, ParseError> {
        <[u8; BYTE_LEN]>::try_from(src)
            .map(Self::from_bytes)
            .map_err(|_| ParseError::new(ParseErrorKind::InvalidByteLength))
    }

    /// Creates an object from a 24-character hexadecimal string in either case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objectid::ObjectId;
    ///
    /// let x = ObjectId::from_hex("5F1D7F3B9C6A2E001F3A4B5C")?;
    /// assert_eq!(x.as_str(), "5f1d7f3b9c6a2e001f3a4b5c");
    /// assert!(ObjectId::from_hex("zzzzzzzzzzzzzzzzzzzzzzzz").is_err());
    /// # Ok::<(), objectid::ParseError>(())
    /// ```
    pub fn from_hex(src: &str) -> Result<Self, ParseError> {
        let hex = codec::validate_hex(src)?;
        let bytes = codec::decode_hex_lenient(hex.as_bytes());
        Ok(Self::from_parts(hex, bytes))
    }

    /// Creates an object from a string that an upstream decoder has already validated.
    ///
    /// Only the 24-byte length required by the fixed-width storage is checked. Neither the digits
    /// nor their case are inspected, so malformed input produces an object whose string form
    /// breaks the canonical invariant; [`is_canonical()`](Self::is_canonical) reports this. Such
    /// an object decodes every non-digit as zero in [`bytes()`](Self::bytes).
    pub fn from_hex_trusted(src: &str) -> Result<Self, ParseError> {
        let inner = <[u8; HEX_LEN]>::try_from(src.as_bytes())
            .map_err(|_| ParseError::new(ParseErrorKind::InvalidHexLength))?;
        // SAFETY: `inner` holds the bytes of a complete `str`
        let hex = unsafe { FStr::from_inner_unchecked(inner) };
        Ok(Self { hex, cache: None })
    }

    /// Creates an object from a 16-character base64 string.
    pub fn from_base64(src: &str) -> Result<Self, ParseError> {
        codec::base64_to_bytes(src).map(Self::from_bytes)
    }

    /// Creates an object that carries `unix_ts_secs` and zeros in every other byte.
    ///
    /// Such objects are not unique and serve as sentinels for range queries by creation time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objectid::ObjectId;
    ///
    /// let x = ObjectId::from_time(1609459200);
    /// assert_eq!(x.as_str(), "5fee66000000000000000000");
    /// ```
    pub fn from_time(unix_ts_secs: u32) -> Self {
        let mut bytes = [0u8; BYTE_LEN];
        bytes[..4].copy_from_slice(&unix_ts_secs.to_be_bytes());
        Self::from_bytes(bytes)
    }

    /// Creates an object from a foreign identifier-like value.
    ///
    /// [`ObjectIdLike::to_hex_string()`] takes precedence over [`ObjectIdLike::id()`]; a value
    /// that provides neither is rejected with [`ParseErrorKind::UnsupportedShape`].
    pub fn from_like<T: ObjectIdLike + ?Sized>(src: &T) -> Result<Self, ParseError> {
        if let Some(hex) = src.to_hex_string() {
            return Self::from_hex(&hex);
        }
        match src.id() {
            Some(IdField::Hex(hex)) => Self::from_hex(hex),
            Some(IdField::Bytes(bytes)) => Self::from_slice(bytes),
            None => Err(ParseError::new(ParseErrorKind::UnsupportedShape)),
        }
    }

    /// Returns a copy of this object that follows the given caching mode.
    pub fn with_cache_mode(self, mode: CacheMode) -> Self {
        let cache = match mode {
            CacheMode::Bytes => Some(self.bytes()),
            CacheMode::HexOnly => None,
        };
        Self { cache, ..self }
    }

    /// Returns the caching mode this object currently follows.
    pub const fn cache_mode(&self) -> CacheMode {
        match self.cache {
            Some(_) => CacheMode::Bytes,
            None => CacheMode::HexOnly,
        }
    }

    /// Returns the raw 12-byte form.
    pub fn bytes(&self) -> [u8; BYTE_LEN] {
        match self.cache {
            Some(bytes) => bytes,
            None => codec::decode_hex_lenient(self.hex.as_bytes()),
        }
    }

    /// Replaces the value with `bytes`, rewriting the string form and the cache together.
    pub fn set_bytes(&mut self, bytes: [u8; BYTE_LEN]) {
        let mode = self.cache_mode();
        *self = Self::from_bytes(bytes).with_cache_mode(mode);
    }

    /// Returns the canonical hexadecimal string as `str`.
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Returns the canonical hexadecimal string.
    pub fn to_hex(&self) -> String {
        self.as_str().to_owned()
    }

    /// Returns the 16-character base64 string.
    pub fn to_base64(&self) -> String {
        codec::bytes_to_base64(&self.bytes()).to_string()
    }

    /// Returns the string form selected by `encoding`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objectid::{Encoding, ObjectId};
    ///
    /// let x = ObjectId::from_hex("5f1d7f3b9c6a2e001f3a4b5c")?;
    /// assert_eq!(x.encode(Encoding::Hex), "5f1d7f3b9c6a2e001f3a4b5c");
    /// assert_eq!(x.encode(Encoding::Base64), "Xx1/O5xqLgAfOktc");
    /// # Ok::<(), objectid::ParseError>(())
    /// ```
    pub fn encode(&self, encoding: Encoding) -> String {
        match encoding {
            Encoding::Hex => self.to_hex(),
            Encoding::Base64 => self.to_base64(),
        }
    }

    /// Returns true if the string form satisfies the canonical invariant.
    ///
    /// This holds for every object except one created through
    /// [`from_hex_trusted()`](Self::from_hex_trusted) from malformed input.
    pub fn is_canonical(&self) -> bool {
        self.hex
            .bytes()
            .all(|c| c.is_ascii_digit() || (b'a'..=b'f').contains(&c))
    }

    /// Returns the creation time in seconds since the Unix epoch.
    pub fn timestamp_secs(&self) -> u32 {
        let bytes = self.bytes();
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Returns the creation time at one-second resolution.
    ///
    /// Objects created within the same second report the same instant.
    pub fn timestamp(&self) -> time::SystemTime {
        time::UNIX_EPOCH + time::Duration::from_secs(self.timestamp_secs().into())
    }

    /// Writes the 12 raw bytes into `buffer` starting at `offset` and returns the number of bytes
    /// written, which is always 12.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is shorter than `offset + 12`. Callers encoding a larger document are
    /// expected to have reserved the space.
    pub fn serialize_into(&self, buffer: &mut [u8], offset: usize) -> usize {
        buffer[offset..offset + BYTE_LEN].copy_from_slice(&self.bytes());
        BYTE_LEN
    }

    /// Returns true if `other` exposes a hexadecimal string equal to this object's, ignoring case.
    ///
    /// Values that do not implement [`ObjectIdLike::to_hex_string()`] compare unequal.
    pub fn equals_like<T: ObjectIdLike + ?Sized>(&self, other: &T) -> bool {
        other
            .to_hex_string()
            .is_some_and(|hex| self.eq_str(&hex))
    }

    fn eq_str(&self, other: &str) -> bool {
        self.as_str() == other || self.as_str().eq_ignore_ascii_case(other)
    }

    /// Returns true if `src` is a 24-character hexadecimal string, ignoring case.
    pub fn is_valid_hex(src: &str) -> bool {
        codec::is_valid_hex(src)
    }

    /// Returns true if `src` is exactly 12 bytes long.
    pub fn is_valid_bytes(src: &[u8]) -> bool {
        codec::is_valid_bytes(src)
    }

    /// Returns true if [`from_like()`](Self::from_like) would accept `src`.
    ///
    /// The same rules are applied without constructing an object.
    pub fn is_valid_like<T: ObjectIdLike + ?Sized>(src: &T) -> bool {
        if let Some(hex) = src.to_hex_string() {
            return codec::is_valid_hex(&hex);
        }
        match src.id() {
            Some(IdField::Hex(hex)) => codec::is_valid_hex(hex),
            Some(IdField::Bytes(bytes)) => codec::is_valid_bytes(bytes),
            None => false,
        }
    }
}

impl PartialEq for ObjectId {
    fn eq(&self, other: &Self) -> bool {
        self.hex == other.hex
    }
}

impl Eq for ObjectId {}

impl PartialOrd for ObjectId {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ObjectId {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.hex.cmp(&other.hex)
    }
}

impl hash::Hash for ObjectId {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.hex.hash(state);
    }
}

impl PartialEq<str> for ObjectId {
    fn eq(&self, other: &str) -> bool {
        self.eq_str(other)
    }
}

impl PartialEq<&str> for ObjectId {
    fn eq(&self, other: &&str) -> bool {
        self.eq_str(other)
    }
}

impl PartialEq<String> for ObjectId {
    fn eq(&self, other: &String) -> bool {
        self.eq_str(other)
    }
}

impl PartialEq<ObjectId> for str {
    fn eq(&self, other: &ObjectId) -> bool {
        other.eq_str(self)
    }
}

impl PartialEq<ObjectId> for &str {
    fn eq(&self, other: &ObjectId) -> bool {
        other.eq_str(self)
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectId").field(&self.as_str()).finish()
    }
}

impl fmt::Display for ObjectId {
    /// Returns the canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for ObjectId {
    type Err = ParseError;

    /// Creates an object from the hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::from_hex(src)
    }
}

impl From<[u8; BYTE_LEN]> for ObjectId {
    fn from(src: [u8; BYTE_LEN]) -> Self {
        Self::from_bytes(src)
    }
}

impl From<ObjectId> for [u8; BYTE_LEN] {
    fn from(src: ObjectId) -> Self {
        src.bytes()
    }
}

impl From<ObjectId> for String {
    fn from(src: ObjectId) -> Self {
        src.to_hex()
    }
}

impl TryFrom<&[u8]> for ObjectId {
    type Error = ParseError;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl TryFrom<&str> for ObjectId {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        Self::from_hex(src)
    }
}

impl TryFrom<String> for ObjectId {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        Self::from_hex(&src)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl ObjectIdLike for ObjectId {
    fn to_hex_string(&self) -> Option<String> {
        Some(self.to_hex())
    }
}

#[cfg(feature = "global_gen")]
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
impl ObjectId {
    /// Generates a new object from the process-wide generator and the current time.
    ///
    /// See [`object_id()`](crate::object_id).
    pub fn new() -> Self {
        crate::object_id()
    }
}

#[cfg(feature = "global_gen")]
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

/// Error creating an [`ObjectId`] from an invalid representation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
}

/// Condition that caused a [`ParseError`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The hexadecimal string is not 24 characters long.
    InvalidHexLength,

    /// The hexadecimal string contains a character other than `[0-9a-fA-F]`.
    InvalidHexDigit,

    /// The base64 string is not 16 characters long.
    InvalidBase64Length,

    /// The base64 string cannot be decoded into 12 bytes.
    InvalidBase64,

    /// The byte sequence is not 12 bytes long.
    InvalidByteLength,

    /// The value exposes neither a hexadecimal string nor an `id` field.
    UnsupportedShape,
}

impl ParseError {
    pub(crate) const fn new(kind: ParseErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the condition that caused this error.
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.kind {
            ParseErrorKind::InvalidHexLength => "hex string must be 24 characters long",
            ParseErrorKind::InvalidHexDigit => "hex string contains a non-hex character",
            ParseErrorKind::InvalidBase64Length => "base64 string must be 16 characters long",
            ParseErrorKind::InvalidBase64 => "invalid base64 representation",
            ParseErrorKind::InvalidByteLength => "byte sequence must be 12 bytes long",
            ParseErrorKind::UnsupportedShape => "unsupported ObjectId representation",
        })
    }
}

impl std::error::Error for ParseError {}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, ObjectId};
    use crate::ExtendedJson;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for ObjectId {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                self.to_extended_json().serialize(serializer)
            } else {
                serializer.serialize_bytes(&self.bytes())
            }
        }
    }

    impl<'de> Deserialize<'de> for ObjectId {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                let doc = ExtendedJson::deserialize(deserializer)?;
                ObjectId::from_hex(&doc.oid).map_err(de::Error::custom)
            } else {
                deserializer.deserialize_bytes(BytesVisitor)
            }
        }
    }

    struct BytesVisitor;

    impl<'de> de::Visitor<'de> for BytesVisitor {
        type Value = ObjectId;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a 12-byte ObjectId")
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            ObjectId::from_slice(value).map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{CacheMode, Encoding, ObjectId, ParseErrorKind};
    use crate::like::{IdField, ObjectIdLike};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [(&'static str, [u8; 12], &'static str)] {
        &[
            ("000000000000000000000000", [0; 12], "AAAAAAAAAAAAAAAA"),
            ("ffffffffffffffffffffffff", [0xff; 12], "////////////////"),
            (
                "5f1d7f3b9c6a2e001f3a4b5c",
                [95, 29, 127, 59, 156, 106, 46, 0, 31, 58, 75, 92],
                "Xx1/O5xqLgAfOktc",
            ),
            (
                "0000000100000000000000ff",
                [0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 255],
                "AAAAAQAAAAAAAAD/",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (hex, bytes, b64) in prepare_cases() {
            let from_bytes = ObjectId::from_bytes(*bytes);
            assert_eq!(from_bytes.as_str(), *hex);
            assert_eq!(from_bytes.to_string(), *hex);
            assert_eq!(from_bytes.to_base64(), *b64);
            assert_eq!(from_bytes.encode(Encoding::Base64), *b64);
            assert_eq!(Ok(from_bytes), hex.parse());
            assert_eq!(Ok(from_bytes), hex.to_uppercase().parse());
            assert_eq!(Ok(from_bytes), ObjectId::from_base64(b64));
            assert_eq!(Ok(from_bytes), ObjectId::from_slice(bytes));
            assert_eq!(from_bytes.bytes(), *bytes);
        }
    }

    /// Returns the input of a hex round trip unchanged
    #[test]
    fn returns_the_input_of_a_hex_round_trip_unchanged() {
        let x = ObjectId::from_hex("5f1d7f3b9c6a2e001f3a4b5c").unwrap();
        assert_eq!(x.to_hex(), "5f1d7f3b9c6a2e001f3a4b5c");
        assert!(x.is_canonical());
    }

    /// Returns error to invalid representations
    #[test]
    fn returns_error_to_invalid_representations() {
        let kind = |r: Result<ObjectId, super::ParseError>| r.map_err(|e| e.kind());

        assert_eq!(
            kind(ObjectId::from_hex("5f1d7f3b9c6a2e001f3a4b5")),
            Err(ParseErrorKind::InvalidHexLength)
        );
        assert_eq!(
            kind("zzzzzzzzzzzzzzzzzzzzzzzz".parse()),
            Err(ParseErrorKind::InvalidHexDigit)
        );
        assert_eq!(
            kind(ObjectId::from_base64("Xx1/O5xqLgAfOktcAA")),
            Err(ParseErrorKind::InvalidBase64Length)
        );
        assert_eq!(
            kind(ObjectId::from_slice(&[0u8; 11])),
            Err(ParseErrorKind::InvalidByteLength)
        );
        assert_eq!(
            kind(ObjectId::from_slice(&[0u8; 13])),
            Err(ParseErrorKind::InvalidByteLength)
        );
        assert_eq!(
            kind(ObjectId::from_hex_trusted("5f1d7f3b9c6a2e001f3a4b5")),
            Err(ParseErrorKind::InvalidHexLength)
        );
    }

    /// Creates sentinel from time
    #[test]
    fn creates_sentinel_from_time() {
        use std::time::{Duration, UNIX_EPOCH};

        let x = ObjectId::from_time(1609459200);
        assert_eq!(x.bytes()[..4], 1609459200u32.to_be_bytes());
        assert_eq!(x.bytes()[4..], [0u8; 8]);
        assert_eq!(x.timestamp_secs(), 1609459200);
        assert_eq!(x.timestamp(), UNIX_EPOCH + Duration::from_secs(1609459200));
    }

    /// Reads timestamp as unsigned big-endian integer
    #[test]
    fn reads_timestamp_as_unsigned_big_endian_integer() {
        let x = ObjectId::from_hex("ffffffff0000000000000000").unwrap();
        assert_eq!(x.timestamp_secs(), u32::MAX);
        let x = ObjectId::from_hex("000000010000000000000000").unwrap();
        assert_eq!(x.timestamp_secs(), 1);
    }

    /// Compares equal to strings regardless of case
    #[test]
    fn compares_equal_to_strings_regardless_of_case() {
        let x = ObjectId::from_hex("5f1d7f3b9c6a2e001f3a4b5c").unwrap();
        assert_eq!(x, "5f1d7f3b9c6a2e001f3a4b5c");
        assert_eq!(x, "5F1D7F3B9C6A2E001F3A4B5C");
        assert_eq!(x, "5F1D7F3B9C6A2E001F3A4B5C".to_owned());
        assert!("5F1d7f3b9c6a2e001f3a4b5c" == x);
        assert_ne!(x, "5f1d7f3b9c6a2e001f3a4b5d");
        assert_ne!(x, "5f1d7f3b9c6a2e001f3a4b5");
        assert_ne!(x, "");
    }

    /// Compares with identifier-like values by hex string
    #[test]
    fn compares_with_identifier_like_values_by_hex_string() {
        struct Upper;
        impl ObjectIdLike for Upper {
            fn to_hex_string(&self) -> Option<String> {
                Some("5F1D7F3B9C6A2E001F3A4B5C".to_owned())
            }
        }

        struct IdOnly;
        impl ObjectIdLike for IdOnly {
            fn id(&self) -> Option<IdField<'_>> {
                Some(IdField::Hex("5f1d7f3b9c6a2e001f3a4b5c"))
            }
        }

        let x = ObjectId::from_hex("5f1d7f3b9c6a2e001f3a4b5c").unwrap();
        assert!(x.equals_like(&Upper));
        assert!(x.equals_like(&x));
        assert!(!x.equals_like(&IdOnly));
        assert!(!x.equals_like(&ObjectId::from_time(0)));
    }

    /// Ignores cache in equality and hashing
    #[test]
    fn ignores_cache_in_equality_and_hashing() {
        use std::collections::HashSet;

        let x = ObjectId::from_hex("5f1d7f3b9c6a2e001f3a4b5c").unwrap();
        let y = x.with_cache_mode(CacheMode::HexOnly);
        assert_eq!(x.cache_mode(), CacheMode::Bytes);
        assert_eq!(y.cache_mode(), CacheMode::HexOnly);
        assert_eq!(x, y);
        assert_eq!(x.bytes(), y.bytes());
        assert_eq!(y.with_cache_mode(CacheMode::Bytes).bytes(), x.bytes());

        let s: HashSet<ObjectId> = [x, y].into_iter().collect();
        assert_eq!(s.len(), 1);
    }

    /// Rewrites string and cache together when bytes are set
    #[test]
    fn rewrites_string_and_cache_together_when_bytes_are_set() {
        for mode in [CacheMode::Bytes, CacheMode::HexOnly] {
            let mut x = ObjectId::from_time(0).with_cache_mode(mode);
            x.set_bytes([95, 29, 127, 59, 156, 106, 46, 0, 31, 58, 75, 92]);
            assert_eq!(x.as_str(), "5f1d7f3b9c6a2e001f3a4b5c");
            assert_eq!(x.bytes(), [95, 29, 127, 59, 156, 106, 46, 0, 31, 58, 75, 92]);
            assert_eq!(x.cache_mode(), mode);
        }
    }

    /// Writes exactly twelve bytes at offset
    #[test]
    fn writes_exactly_twelve_bytes_at_offset() {
        let x = ObjectId::from_hex("5f1d7f3b9c6a2e001f3a4b5c").unwrap();
        let mut buffer = [0xeeu8; 20];
        assert_eq!(x.serialize_into(&mut buffer, 4), 12);
        assert_eq!(buffer[..4], [0xee; 4]);
        assert_eq!(buffer[4..16], x.bytes());
        assert_eq!(buffer[16..], [0xee; 4]);
    }

    /// Panics when buffer is too short
    #[test]
    #[should_panic]
    fn panics_when_buffer_is_too_short() {
        let mut buffer = [0u8; 15];
        ObjectId::from_time(0).serialize_into(&mut buffer, 4);
    }

    /// Resolves identifier-like values by precedence
    #[test]
    fn resolves_identifier_like_values_by_precedence() {
        struct Both;
        impl ObjectIdLike for Both {
            fn to_hex_string(&self) -> Option<String> {
                Some("5f1d7f3b9c6a2e001f3a4b5c".to_owned())
            }
            fn id(&self) -> Option<IdField<'_>> {
                Some(IdField::Bytes(&[0; 12]))
            }
        }

        struct HexField(&'static str);
        impl ObjectIdLike for HexField {
            fn id(&self) -> Option<IdField<'_>> {
                Some(IdField::Hex(self.0))
            }
        }

        struct BytesField(Vec<u8>);
        impl ObjectIdLike for BytesField {
            fn id(&self) -> Option<IdField<'_>> {
                Some(IdField::Bytes(&self.0))
            }
        }

        struct Neither;
        impl ObjectIdLike for Neither {}

        assert_eq!(
            ObjectId::from_like(&Both).unwrap().as_str(),
            "5f1d7f3b9c6a2e001f3a4b5c"
        );
        assert_eq!(
            ObjectId::from_like(&HexField("5F1D7F3B9C6A2E001F3A4B5C"))
                .unwrap()
                .as_str(),
            "5f1d7f3b9c6a2e001f3a4b5c"
        );
        assert_eq!(
            ObjectId::from_like(&BytesField(vec![0xff; 12]))
                .unwrap()
                .as_str(),
            "ffffffffffffffffffffffff"
        );

        let kind = |r: Result<ObjectId, super::ParseError>| r.map_err(|e| e.kind());
        assert_eq!(
            kind(ObjectId::from_like(&HexField("zzzzzzzzzzzzzzzzzzzzzzzz"))),
            Err(ParseErrorKind::InvalidHexDigit)
        );
        assert_eq!(
            kind(ObjectId::from_like(&BytesField(vec![0; 11]))),
            Err(ParseErrorKind::InvalidByteLength)
        );
        assert_eq!(
            kind(ObjectId::from_like(&Neither)),
            Err(ParseErrorKind::UnsupportedShape)
        );

        let x = ObjectId::from_time(1);
        assert_eq!(ObjectId::from_like(&x), Ok(x));
    }

    /// Checks validity without failing
    #[test]
    fn checks_validity_without_failing() {
        struct BytesField(Vec<u8>);
        impl ObjectIdLike for BytesField {
            fn id(&self) -> Option<IdField<'_>> {
                Some(IdField::Bytes(&self.0))
            }
        }

        struct Neither;
        impl ObjectIdLike for Neither {}

        assert!(ObjectId::is_valid_hex("5f1d7f3b9c6a2e001f3a4b5c"));
        assert!(ObjectId::is_valid_hex("5F1D7F3B9C6A2E001F3A4B5C"));
        assert!(!ObjectId::is_valid_hex("5f1d7f3b9c6a2e001f3a4b5"));
        assert!(!ObjectId::is_valid_hex("5f1d7f3b9c6a2e001f3a4b5g"));
        assert!(!ObjectId::is_valid_hex("zzzzzzzzzzzzzzzzzzzzzzzz"));

        assert!(ObjectId::is_valid_bytes(&[0u8; 12]));
        assert!(!ObjectId::is_valid_bytes(&[0u8; 16]));

        assert!(ObjectId::is_valid_like(&ObjectId::from_time(0)));
        assert!(ObjectId::is_valid_like(&BytesField(vec![0; 12])));
        assert!(!ObjectId::is_valid_like(&BytesField(vec![0; 10])));
        assert!(!ObjectId::is_valid_like(&Neither));
    }

    /// Accepts unvalidated strings on the trusted path
    #[test]
    fn accepts_unvalidated_strings_on_the_trusted_path() {
        let x = ObjectId::from_hex_trusted("5f1d7f3b9c6a2e001f3a4b5c").unwrap();
        assert!(x.is_canonical());
        assert_eq!(x.cache_mode(), CacheMode::HexOnly);
        assert_eq!(x, ObjectId::from_hex("5f1d7f3b9c6a2e001f3a4b5c").unwrap());

        let y = ObjectId::from_hex_trusted("zzzzzzzzzzzzzzzzzzzzzzzz").unwrap();
        assert!(!y.is_canonical());
        assert_eq!(y.as_str(), "zzzzzzzzzzzzzzzzzzzzzzzz");
        assert_eq!(y.bytes(), [0u8; 12]);

        let z = ObjectId::from_hex_trusted("5F1D7F3B9C6A2E001F3A4B5C").unwrap();
        assert!(!z.is_canonical());
        assert_eq!(z.bytes(), x.bytes());
    }

    /// Orders objects by bytes
    #[test]
    fn orders_objects_by_bytes() {
        let mut xs: Vec<ObjectId> = [
            [0x5f, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
            [0x00, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff],
            [0x5f, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            [0xa0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        ]
        .into_iter()
        .map(ObjectId::from)
        .collect();
        xs.sort();

        let bytes: Vec<[u8; 12]> = xs.into_iter().map(<[u8; 12]>::from).collect();
        let mut expected = bytes.clone();
        expected.sort();
        assert_eq!(bytes, expected);
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (hex, _, _) in prepare_cases() {
            let e: ObjectId = hex.parse().unwrap();
            assert_eq!(ObjectId::from(<[u8; 12]>::from(e)), e);
            assert_eq!(ObjectId::try_from(String::from(e)), Ok(e));
            assert_eq!(ObjectId::try_from(e.to_string().to_uppercase()), Ok(e));
            assert_eq!(ObjectId::try_from(e.as_str()), Ok(e));
            assert_eq!(ObjectId::try_from(&e.bytes()[..]), Ok(e));
            assert_eq!(ObjectId::from_base64(&e.to_base64()), Ok(e));
            assert_eq!(format!("{:?}", e), format!("ObjectId({:?})", *hex));
        }
    }
}
