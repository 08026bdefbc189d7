use crate::rng::{new_rng, SeededRng};
use rand::Rng;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireError {
    #[error("cannot fire {requested} torpedoes, {available} available")]
    InvalidCount { requested: u32, available: u32 },
}

/// An ammunition container that a ship can draw torpedoes from.
///
/// `fire` distinguishes two kinds of failure: `Ok(false)` is a misfire of a
/// valid request and leaves the count unchanged, `Err` is a request the store
/// cannot honour at all (zero torpedoes, or more than it holds).
pub trait TorpedoStore {
    fn is_empty(&self) -> bool;
    fn torpedo_count(&self) -> u32;
    fn fire(&mut self, count: u32) -> Result<bool, FireError>;
}

impl<T: TorpedoStore + ?Sized> TorpedoStore for &mut T {
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn torpedo_count(&self) -> u32 {
        (**self).torpedo_count()
    }

    fn fire(&mut self, count: u32) -> Result<bool, FireError> {
        (**self).fire(count)
    }
}

impl<T: TorpedoStore + ?Sized> TorpedoStore for Box<T> {
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn torpedo_count(&self) -> u32 {
        (**self).torpedo_count()
    }

    fn fire(&mut self, count: u32) -> Result<bool, FireError> {
        (**self).fire(count)
    }
}

/// Torpedo store with a fixed capacity that misfires with a given probability.
#[derive(Debug, Clone)]
pub struct Magazine {
    capacity: u32,
    remaining: u32,
    misfire_rate: f64,
    fired: u32,
    misfired: u32,
    rng: SeededRng,
}

impl Magazine {
    /// A full magazine. `misfire_rate` is clamped to [0, 1].
    pub fn new(capacity: u32, misfire_rate: f64, seed: u32) -> Magazine {
        Magazine {
            capacity,
            remaining: capacity,
            misfire_rate: misfire_rate.clamp(0.0, 1.0),
            fired: 0,
            misfired: 0,
            rng: new_rng(seed),
        }
    }

    /// A magazine that never misfires.
    pub fn reliable(capacity: u32) -> Magazine {
        Magazine::new(capacity, 0.0, 0)
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn misfire_rate(&self) -> f64 {
        self.misfire_rate
    }

    /// Torpedoes successfully launched from this magazine.
    pub fn fired(&self) -> u32 {
        self.fired
    }

    /// Valid fire requests that failed without consuming anything.
    pub fn misfired(&self) -> u32 {
        self.misfired
    }
}

impl TorpedoStore for Magazine {
    fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    fn torpedo_count(&self) -> u32 {
        self.remaining
    }

    fn fire(&mut self, count: u32) -> Result<bool, FireError> {
        if count == 0 || count > self.remaining {
            return Err(FireError::InvalidCount {
                requested: count,
                available: self.remaining,
            });
        }

        // gen::<f64>() is in [0, 1), so a rate of 1.0 always misfires.
        if self.rng.gen::<f64>() < self.misfire_rate {
            self.misfired += 1;
            log::debug!("Magazine misfired, {} remaining", self.remaining);
            return Ok(false);
        }

        self.remaining -= count;
        self.fired += count;
        Ok(true)
    }
}
