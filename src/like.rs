//! Capability contract for foreign values accepted wherever an [`ObjectId`](crate::ObjectId) is
//! expected.

/// A value that can stand in for an [`ObjectId`](crate::ObjectId).
///
/// Implementors override at least one of the methods. When both are provided,
/// [`to_hex_string()`](Self::to_hex_string) wins.
///
/// # Examples
///
/// ```rust
/// use objectid::{IdField, ObjectId, ObjectIdLike};
///
/// struct Row {
///     key: [u8; 12],
/// }
///
/// impl ObjectIdLike for Row {
///     fn id(&self) -> Option<IdField<'_>> {
///         Some(IdField::Bytes(&self.key))
///     }
/// }
///
/// let row = Row { key: [0xff; 12] };
/// assert_eq!(ObjectId::from_like(&row)?, "ffffffffffffffffffffffff");
/// # Ok::<(), objectid::ParseError>(())
/// ```
pub trait ObjectIdLike {
    /// Returns the hexadecimal string form of this value, if it has one.
    fn to_hex_string(&self) -> Option<String> {
        None
    }

    /// Returns the `id` field of this value, if it has one.
    fn id(&self) -> Option<IdField<'_>> {
        None
    }
}

/// The `id` field of an [`ObjectIdLike`] value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum IdField<'a> {
    /// A hexadecimal string, validated on use.
    Hex(&'a str),

    /// A raw byte sequence, which must be 12 bytes long.
    Bytes(&'a [u8]),
}

impl<T: ObjectIdLike + ?Sized> ObjectIdLike for &T {
    fn to_hex_string(&self) -> Option<String> {
        (**self).to_hex_string()
    }

    fn id(&self) -> Option<IdField<'_>> {
        (**self).id()
    }
}
