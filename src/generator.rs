//! ObjectId generator and related types.

use std::sync::{
    atomic::{AtomicU32, Ordering},
    Mutex, OnceLock, PoisonError,
};
use std::time;

use crate::codec::BYTE_LEN;
use crate::ObjectId;

pub mod with_rand08;

/// The largest value of the 24-bit counter field.
pub const MAX_COUNTER: u32 = (1 << 24) - 1;

/// A trait that defines the minimum random number generator interface for [`Generator`].
pub trait RandSource {
    /// Returns the next random `u32`.
    fn next_u32(&mut self) -> u32;

    /// Fills `dest` with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// Represents the generator state shared by every ObjectId it produces: a 5-byte process-unique
/// value and a 24-bit counter.
///
/// The process-unique value is drawn from the random number generator on first use and never
/// changes afterwards, even when several threads race to initialize it. The counter is advanced
/// atomically on each generation and wraps to zero after [`MAX_COUNTER`]. All methods take
/// `&self`, so a generator can be shared across threads directly.
///
/// The process-wide default instance behind [`object_id()`](crate::object_id) is one such
/// generator; a separate instance is useful to inject a seeded random number generator or a fixed
/// state in tests.
///
/// # Examples
///
/// ```rust
/// use objectid::Generator;
/// use std::thread;
///
/// let g = Generator::with_rand08(rand::rngs::OsRng);
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = &g;
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.generate(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
///
/// # Field layout
///
/// | Bytes | Content                                          |
/// | ----- | ------------------------------------------------ |
/// | 0-3   | Seconds since the Unix epoch, big-endian         |
/// | 4-8   | Process-unique value                             |
/// | 9-11  | Counter, big-endian                              |
#[derive(Debug)]
pub struct Generator<R> {
    process_unique: OnceLock<[u8; 5]>,
    counter: AtomicU32,

    /// The random number generator used by the generator.
    rng: Mutex<R>,
}

impl<R: RandSource> Generator<R> {
    /// Creates a generator instance whose counter starts at a random value.
    pub fn new(mut rng: R) -> Self {
        let counter = rng.next_u32() & MAX_COUNTER;
        Self {
            process_unique: OnceLock::new(),
            counter: AtomicU32::new(counter),
            rng: Mutex::new(rng),
        }
    }

    /// Creates a generator instance with a fixed process-unique value and counter.
    ///
    /// # Panics
    ///
    /// Panics if `counter` is greater than [`MAX_COUNTER`].
    pub fn with_state(rng: R, process_unique: [u8; 5], counter: u32) -> Self {
        assert!(counter <= MAX_COUNTER, "`counter` must be a 24-bit integer");
        Self {
            process_unique: OnceLock::from(process_unique),
            counter: AtomicU32::new(counter),
            rng: Mutex::new(rng),
        }
    }

    /// Returns the process-unique value, drawing it from the random number generator if this is
    /// the first use.
    pub fn process_unique(&self) -> [u8; 5] {
        *self.process_unique.get_or_init(|| {
            let mut value = [0u8; 5];
            self.rng
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .fill_bytes(&mut value);
            log::debug!("initialized process-unique value of ObjectId generator");
            value
        })
    }

    /// Returns the current counter value, advancing the counter.
    fn next_counter(&self) -> u32 {
        let prev = self
            .counter
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |c| {
                Some((c + 1) & MAX_COUNTER)
            })
            .unwrap_or_else(|c| c);
        if prev == MAX_COUNTER {
            log::trace!("ObjectId counter wrapped around");
        }
        prev
    }

    /// Generates the raw 12 bytes of a new ObjectId carrying `unix_ts_secs`.
    pub fn generate_bytes_at(&self, unix_ts_secs: u32) -> [u8; BYTE_LEN] {
        let mut bytes = [0u8; BYTE_LEN];
        bytes[..4].copy_from_slice(&unix_ts_secs.to_be_bytes());
        bytes[4..9].copy_from_slice(&self.process_unique());
        bytes[9..].copy_from_slice(&self.next_counter().to_be_bytes()[1..]);
        bytes
    }

    /// Generates a new ObjectId carrying `unix_ts_secs`.
    pub fn generate_at(&self, unix_ts_secs: u32) -> ObjectId {
        ObjectId::from_bytes(self.generate_bytes_at(unix_ts_secs))
    }

    /// Generates a new ObjectId carrying `unix_ts_secs` if given or the current time otherwise.
    pub fn generate_with(&self, unix_ts_secs: Option<u32>) -> ObjectId {
        self.generate_at(unix_ts_secs.unwrap_or_else(now_secs))
    }

    /// Generates a new ObjectId from the current time.
    pub fn generate(&self) -> ObjectId {
        self.generate_at(now_secs())
    }

    /// Returns an infinite iterator that produces a new ObjectId for each call of `next()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objectid::Generator;
    ///
    /// Generator::with_rand08(rand::thread_rng())
    ///     .iter()
    ///     .enumerate()
    ///     .skip(4)
    ///     .take(4)
    ///     .for_each(|(i, e)| println!("[{}] {}", i, e));
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = ObjectId> + '_ {
        std::iter::repeat_with(move || self.generate())
    }
}

/// Returns the current Unix time in seconds truncated to 32 bits, or zero if the clock reads a
/// time before the epoch.
pub(crate) fn now_secs() -> u32 {
    time::SystemTime::now()
        .duration_since(time::UNIX_EPOCH)
        .map_or(0, |d| d.as_secs() as u32)
}
