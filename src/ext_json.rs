//! Extended JSON representation `{"$oid": "<hex>"}`.

use std::fmt;

use crate::{ObjectId, ParseError};

/// The `{"$oid": "<hex>"}` document used by the textual encoding of the surrounding document
/// format.
///
/// With the `serde` feature, this type (de)serializes under the `$oid` key.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtendedJson {
    /// The hexadecimal string.
    #[cfg_attr(feature = "serde", serde(rename = "$oid"))]
    pub oid: String,
}

impl ExtendedJson {
    /// Converts the document into an [`ObjectId`] through the trusted path.
    ///
    /// See [`ObjectId::from_extended_json()`].
    pub fn to_object_id(&self) -> Result<ObjectId, ParseError> {
        ObjectId::from_extended_json(self)
    }
}

impl fmt::Display for ExtendedJson {
    /// Returns the compact JSON text of the document.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"{{"$oid":"{}"}}"#, self.oid)
    }
}

impl From<ObjectId> for ExtendedJson {
    fn from(src: ObjectId) -> Self {
        src.to_extended_json()
    }
}

impl ObjectId {
    /// Returns the extended JSON document carrying the canonical hexadecimal string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objectid::ObjectId;
    ///
    /// let x = ObjectId::from_hex("5f1d7f3b9c6a2e001f3a4b5c")?;
    /// assert_eq!(
    ///     x.to_extended_json().to_string(),
    ///     r#"{"$oid":"5f1d7f3b9c6a2e001f3a4b5c"}"#
    /// );
    /// # Ok::<(), objectid::ParseError>(())
    /// ```
    pub fn to_extended_json(&self) -> ExtendedJson {
        ExtendedJson { oid: self.to_hex() }
    }

    /// Creates an object from an extended JSON document without validating the digits.
    ///
    /// The extended JSON decoder upstream is trusted to have produced well-formed hexadecimal, so
    /// this path skips the validation pass and only enforces the 24-byte length. Malformed digits
    /// yield an object for which [`is_canonical()`](Self::is_canonical) returns false rather than
    /// an error. Use [`ObjectId::from_hex()`] on `doc.oid` where the input is not trusted.
    pub fn from_extended_json(doc: &ExtendedJson) -> Result<Self, ParseError> {
        log::trace!("accepting extended JSON $oid without digit validation");
        Self::from_hex_trusted(&doc.oid)
    }
}
