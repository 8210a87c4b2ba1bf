//! Track id allocation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out unique, monotonically increasing track ids.
///
/// One generator is shared by everything that creates tracks for a clip (or a
/// whole process). It is `Sync`, so tracks may be created from several threads.
#[derive(Debug)]
pub struct TrackIdGenerator {
    next: AtomicU64,
}

impl Default for TrackIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackIdGenerator {
    /// Create a generator whose first id is 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Get the next unique track ID.
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    /// Peek at the id the next call to `next_id` will return.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}
