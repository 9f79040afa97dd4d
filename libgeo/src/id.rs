//! Record id generation.
//!
//! Ids are opaque strings assigned once at creation. The generator is a
//! trait so callers can inject a deterministic implementation in tests
//! instead of depending on the clock and the thread rng.

use rand::Rng;
use time::OffsetDateTime;

pub trait IdGenerator {
    fn generate(&self) -> String;
}

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 7;

/// Epoch milliseconds followed by a short random base-36 suffix to break
/// same-millisecond ties. Existing data files carry ids in this format.
pub struct SystemIdGenerator;

impl IdGenerator for SystemIdGenerator {
    fn generate(&self) -> String {
        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
            .collect();
        format!("{millis}{suffix}")
    }
}
