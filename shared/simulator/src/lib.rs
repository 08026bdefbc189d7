pub mod loadout;
pub mod rng;
pub mod shared_ship;
pub mod ship;
pub mod torpedo_store;

pub use loadout::{Loadout, LoadoutError, StoreConfig};
pub use shared_ship::SharedShip;
pub use ship::{FiringMode, ParseError, Ship, StoreSlot, Weapon};
pub use torpedo_store::{FireError, Magazine, TorpedoStore};
