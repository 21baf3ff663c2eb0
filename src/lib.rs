//! A Rust implementation of the 12-byte ObjectId
//!
//! ```rust
//! use objectid::object_id;
//!
//! let id = object_id();
//! println!("{}", id); // e.g. "5f1d7f3b9c6a2e001f3a4b5c"
//! println!("{:?}", id.bytes()); // as 12-byte big-endian array
//! ```
//!
//! ObjectIds serve as primary keys inside a binary document format. They are cheap to generate,
//! unique within a process, and canonically represented as a 24-character lowercase hexadecimal
//! string.
//!
//! # Field and byte layout
//!
//! This implementation produces identifiers with the following byte layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         unix_ts_secs                          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                        process_unique                         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! | process_unique|                    counter                    |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 32-bit `unix_ts_secs` field holds the Unix timestamp in seconds, truncated to 32 bits.
//! - The 40-bit `process_unique` field holds a random value drawn once per generator (once per
//!   process for the global generator) and shared by all identifiers it produces.
//! - The 24-bit `counter` field is incremented by one for each new identifier and wraps to zero
//!   after reaching its maximum value.
//!
//! Identifiers are not ordered below the one-second resolution of the timestamp, are unique
//! across processes only with the probability afforded by the random `process_unique` field, and
//! are not suitable as cryptographic tokens.
//!
//! # Other representations
//!
//! Besides the hexadecimal string, an ObjectId converts to and from 12 raw bytes, a 16-character
//! base64 string, and the `{"$oid": "<hex>"}` extended JSON document:
//!
//! ```rust
//! use objectid::ObjectId;
//!
//! let id = ObjectId::from_hex("5f1d7f3b9c6a2e001f3a4b5c")?;
//! assert_eq!(id.to_base64(), "Xx1/O5xqLgAfOktc");
//! assert_eq!(id.to_extended_json().to_string(), r#"{"$oid":"5f1d7f3b9c6a2e001f3a4b5c"}"#);
//! assert_eq!(id, "5F1D7F3B9C6A2E001F3A4B5C");
//! # Ok::<(), objectid::ParseError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod codec;

mod id;
pub use id::{CacheMode, Encoding, ObjectId, ParseError, ParseErrorKind};

mod ext_json;
pub use ext_json::ExtendedJson;

mod like;
pub use like::{IdField, ObjectIdLike};

pub mod generator;
pub use generator::Generator;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{global_generator, object_id, object_id_at, GlobalGenerator};
