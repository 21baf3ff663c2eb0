//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync::OnceLock;

use rand::rngs::OsRng;

use crate::generator::{with_rand08::Adapter, Generator};
use crate::ObjectId;

/// The type of the process-wide global generator.
pub type GlobalGenerator = Generator<Adapter<OsRng>>;

/// Returns the process-wide global generator, creating one if none exists.
///
/// The generator draws its process-unique value from the operating system's random number
/// generator on first use.
pub fn global_generator() -> &'static GlobalGenerator {
    static G: OnceLock<GlobalGenerator> = OnceLock::new();
    G.get_or_init(|| {
        log::debug!("creating process-wide ObjectId generator");
        Generator::with_rand08(OsRng)
    })
}

/// Generates an ObjectId from the current time.
///
/// This function employs the global generator, so every ObjectId generated in the process shares
/// the same process-unique value and draws a distinct value from the shared counter.
///
/// # Examples
///
/// ```rust
/// let id = objectid::object_id();
/// println!("{}", id); // e.g., "5f1d7f3b9c6a2e001f3a4b5c"
/// println!("{:?}", id.bytes()); // as 12-byte big-endian array
///
/// let id_string: String = objectid::object_id().to_string();
/// ```
pub fn object_id() -> ObjectId {
    global_generator().generate()
}

/// Generates an ObjectId carrying `unix_ts_secs` from the global generator.
pub fn object_id_at(unix_ts_secs: u32) -> ObjectId {
    global_generator().generate_at(unix_ts_secs)
}
