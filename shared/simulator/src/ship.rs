use crate::torpedo_store::TorpedoStore;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum FiringMode {
    Single,
    All,
}

impl FiringMode {
    pub fn name(&self) -> &'static str {
        match self {
            FiringMode::Single => "single",
            FiringMode::All => "all",
        }
    }
}

#[derive(Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Weapon {
    Laser,
    Torpedo,
}

impl Weapon {
    pub fn name(&self) -> &'static str {
        match self {
            Weapon::Laser => "laser",
            Weapon::Torpedo => "torpedo",
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown firing mode {0:?}")]
    UnknownFiringMode(String),

    #[error("unknown weapon {0:?}")]
    UnknownWeapon(String),
}

impl FromStr for FiringMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(FiringMode::Single),
            "all" => Ok(FiringMode::All),
            _ => Err(ParseError::UnknownFiringMode(s.to_string())),
        }
    }
}

impl FromStr for Weapon {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "laser" => Ok(Weapon::Laser),
            "torpedo" => Ok(Weapon::Torpedo),
            _ => Err(ParseError::UnknownWeapon(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Debug)]
pub enum StoreSlot {
    Primary,
    Secondary,
}

impl StoreSlot {
    pub fn other(self) -> StoreSlot {
        match self {
            StoreSlot::Primary => StoreSlot::Secondary,
            StoreSlot::Secondary => StoreSlot::Primary,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StoreSlot::Primary => "primary",
            StoreSlot::Secondary => "secondary",
        }
    }
}

/// The GT4500: a laser battery and two redundant torpedo stores.
///
/// Stores are injected at construction. Pass `&mut store` to keep ownership
/// with the caller.
#[derive(Debug)]
pub struct Ship<P, S> {
    primary: P,
    secondary: S,
    last_fired: Option<StoreSlot>,
}

impl<P: TorpedoStore, S: TorpedoStore> Ship<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Ship {
            primary,
            secondary,
            last_fired: None,
        }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn secondary(&self) -> &S {
        &self.secondary
    }

    /// Store that landed the most recent single shot, if any.
    pub fn last_fired(&self) -> Option<StoreSlot> {
        self.last_fired
    }

    pub fn torpedo_count(&self) -> u64 {
        u64::from(self.primary.torpedo_count()) + u64::from(self.secondary.torpedo_count())
    }

    pub fn into_stores(self) -> (P, S) {
        (self.primary, self.secondary)
    }

    pub fn fire(&mut self, weapon: Weapon, mode: FiringMode) -> bool {
        match weapon {
            Weapon::Laser => self.fire_laser(mode),
            Weapon::Torpedo => self.fire_torpedo(mode),
        }
    }

    /// Lasers have no ammunition model and always fire.
    pub fn fire_laser(&self, mode: impl Into<Option<FiringMode>>) -> bool {
        fire_laser_battery(mode.into())
    }

    /// Fires torpedoes with the given mode and reports whether anything left
    /// the ship.
    ///
    /// Single mode alternates between the stores, starting with the primary,
    /// and falls back to the other store when the preferred one is empty or
    /// fails to fire. All mode fires every non-empty store once.
    ///
    /// # Panics
    ///
    /// Panics if no firing mode is given.
    pub fn fire_torpedo(&mut self, mode: impl Into<Option<FiringMode>>) -> bool {
        let mode = match mode.into() {
            Some(mode) => mode,
            None => panic!("fire_torpedo called without a firing mode"),
        };

        match mode {
            FiringMode::Single => self.fire_single(),
            FiringMode::All => self.fire_all(),
        }
    }

    fn fire_single(&mut self) -> bool {
        let first = match self.last_fired {
            Some(slot) => slot.other(),
            None => StoreSlot::Primary,
        };

        for slot in [first, first.other()] {
            if self.fire_store(slot) {
                self.last_fired = Some(slot);
                return true;
            }
        }

        log::debug!("Single torpedo shot failed, both stores unavailable");
        false
    }

    fn fire_all(&mut self) -> bool {
        let primary = self.fire_store(StoreSlot::Primary);
        let secondary = self.fire_store(StoreSlot::Secondary);
        primary || secondary
    }

    fn fire_store(&mut self, slot: StoreSlot) -> bool {
        let store = self.store_mut(slot);
        if store.is_empty() {
            return false;
        }
        match store.fire(1) {
            Ok(true) => true,
            Ok(false) => {
                log::debug!("{} torpedo store misfired", slot.name());
                false
            }
            Err(e) => {
                log::warn!("{} torpedo store refused to fire: {}", slot.name(), e);
                false
            }
        }
    }

    fn store_mut(&mut self, slot: StoreSlot) -> &mut dyn TorpedoStore {
        match slot {
            StoreSlot::Primary => &mut self.primary,
            StoreSlot::Secondary => &mut self.secondary,
        }
    }
}

/// The laser battery reads no ship state, so it needs no access to a ship.
pub(crate) fn fire_laser_battery(mode: Option<FiringMode>) -> bool {
    log::trace!("Laser fired ({:?})", mode);
    true
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::torpedo_store::Magazine;
    use test_log::test;

    #[test]
    fn test_parse_firing_mode() {
        assert_eq!("single".parse::<FiringMode>(), Ok(FiringMode::Single));
        assert_eq!(" ALL ".parse::<FiringMode>(), Ok(FiringMode::All));
        assert_eq!(
            "burst".parse::<FiringMode>(),
            Err(ParseError::UnknownFiringMode("burst".to_string()))
        );
        assert!("".parse::<FiringMode>().is_err());
    }

    #[test]
    fn test_parse_weapon() {
        assert_eq!("Laser".parse::<Weapon>(), Ok(Weapon::Laser));
        assert_eq!("torpedo".parse::<Weapon>(), Ok(Weapon::Torpedo));
        assert!("phaser".parse::<Weapon>().is_err());
    }

    #[test]
    fn test_names_match_parser() {
        for mode in [FiringMode::Single, FiringMode::All] {
            assert_eq!(mode.name().parse::<FiringMode>(), Ok(mode));
        }
        for weapon in [Weapon::Laser, Weapon::Torpedo] {
            assert_eq!(weapon.name().parse::<Weapon>(), Ok(weapon));
        }
    }

    #[test]
    fn test_slot_other() {
        assert_eq!(StoreSlot::Primary.other(), StoreSlot::Secondary);
        assert_eq!(StoreSlot::Secondary.other(), StoreSlot::Primary);
    }

    #[test]
    fn test_fire_dispatch() {
        let mut ship = Ship::new(Magazine::reliable(1), Magazine::reliable(0));
        assert!(ship.fire(Weapon::Laser, FiringMode::All));
        assert_eq!(ship.torpedo_count(), 1);
        assert!(ship.fire(Weapon::Torpedo, FiringMode::Single));
        assert!(!ship.fire(Weapon::Torpedo, FiringMode::Single));
        assert!(ship.fire(Weapon::Laser, FiringMode::Single));
        assert_eq!(ship.torpedo_count(), 0);
    }

    #[test]
    fn test_torpedo_count_full_stores() {
        let mut ship = Ship::new(Magazine::reliable(u32::MAX), Magazine::reliable(u32::MAX));
        assert_eq!(ship.torpedo_count(), 2 * u64::from(u32::MAX));
        assert!(ship.fire_torpedo(FiringMode::Single));
        assert_eq!(ship.torpedo_count(), 2 * u64::from(u32::MAX) - 1);

        let ship = Ship::new(Magazine::reliable(u32::MAX), Magazine::reliable(1));
        assert_eq!(ship.torpedo_count(), u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_laser_needs_shared_access() {
        let ship = Ship::new(Magazine::reliable(1), Magazine::reliable(1));
        let ship_ref = &ship;
        assert!(ship_ref.fire_laser(FiringMode::Single));
        assert!(ship.fire_laser(FiringMode::All));
        assert_eq!(ship.torpedo_count(), 2);
        assert_eq!(ship.last_fired(), None);
    }

    #[test]
    fn test_ship_borrows_stores() {
        let mut primary = Magazine::reliable(2);
        let mut secondary = Magazine::reliable(2);
        {
            let mut ship = Ship::new(&mut primary, &mut secondary);
            assert!(ship.fire_torpedo(FiringMode::All));
            assert!(ship.fire_torpedo(FiringMode::Single));
        }
        assert_eq!(primary.torpedo_count(), 0);
        assert_eq!(secondary.torpedo_count(), 1);
    }
}
