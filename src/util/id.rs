//! ID utilities (short random room tokens).

use rand::{distributions::Alphanumeric, Rng};

/// Length of the default room id suggested on the home page.
pub const DEFAULT_ROOM_ID_LEN: usize = 8;

/// Upper bound accepted for generated ids.
pub const MAX_ROOM_ID_LEN: usize = 64;

/// Generate a `length`-char token from `A-Z a-z 0-9` using `rng`.
///
/// Each char is sampled independently and uniformly. A zero length gives an
/// empty string.
pub fn ran_hash<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Source of fresh room tokens, held in the app state so handlers never
/// reach for a global RNG themselves.
pub trait TokenSource: Send + Sync {
    fn token(&self, length: usize) -> String;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl TokenSource for ThreadRngSource {
    fn token(&self, length: usize) -> String {
        ran_hash(&mut rand::thread_rng(), length)
    }
}
