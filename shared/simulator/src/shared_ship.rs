use crate::ship::{fire_laser_battery, FiringMode, Ship};
use crate::torpedo_store::TorpedoStore;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// A ship behind one lock, for callers on several threads.
///
/// The alternation state and both store counts share the same mutex, so every
/// shot observes and updates them atomically.
pub struct SharedShip<P, S> {
    inner: Arc<Mutex<Ship<P, S>>>,
}

impl<P, S> Clone for SharedShip<P, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<P: TorpedoStore, S: TorpedoStore> SharedShip<P, S> {
    pub fn new(ship: Ship<P, S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ship)),
        }
    }

    /// Fires the lasers without taking the ship lock.
    pub fn fire_laser(&self, mode: impl Into<Option<FiringMode>>) -> bool {
        fire_laser_battery(mode.into())
    }

    pub fn fire_torpedo(&self, mode: impl Into<Option<FiringMode>>) -> bool {
        self.inner.lock().fire_torpedo(mode)
    }

    pub fn lock(&self) -> MutexGuard<'_, Ship<P, S>> {
        self.inner.lock()
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut Ship<P, S>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<P, S> From<Ship<P, S>> for SharedShip<P, S>
where
    P: TorpedoStore,
    S: TorpedoStore,
{
    fn from(ship: Ship<P, S>) -> Self {
        SharedShip::new(ship)
    }
}
