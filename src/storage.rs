//! Non-volatile settings.
//!
//! Four independent byte slots mirror the displayed number, the output and
//! count enable flags, and the count direction. Slots are read once at boot
//! and written on every change; there is no batching and no transaction
//! across slots.

use crate::types::CountDirection;

/// Trait for abstracting byte-addressed non-volatile memory (e.g. EEPROM).
///
/// Treated as infallible at this layer.
pub trait NonVolatile {
    /// Reads the byte at `address`.
    fn read_byte(&mut self, address: u16) -> u8;

    /// Writes `value` at `address`.
    fn write_byte(&mut self, address: u16, value: u8);
}

/// Addresses of the persisted slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StorageLayout {
    pub number: u16,
    pub output_enabled: u16,
    pub count_enabled: u16,
    pub direction: u16,
}

impl StorageLayout {
    /// Four consecutive slots starting at `base`.
    pub const fn contiguous(base: u16) -> Self {
        Self {
            number: base,
            output_enabled: base + 1,
            count_enabled: base + 2,
            direction: base + 3,
        }
    }
}

impl Default for StorageLayout {
    fn default() -> Self {
        Self::contiguous(500)
    }
}

/// Decoded snapshot of the persisted slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PersistentRecord {
    pub number: u8,
    pub output_enabled: bool,
    pub count_enabled: bool,
    pub direction: CountDirection,
}

const FLAG_SET: u8 = 1;
const FLAG_CLEAR: u8 = 0;

/// Typed access to the four slots of a [`NonVolatile`] store.
#[derive(Debug)]
pub struct Persistence<S: NonVolatile> {
    store: S,
    layout: StorageLayout,
}

impl<S: NonVolatile> Persistence<S> {
    pub fn new(store: S, layout: StorageLayout) -> Self {
        Self { store, layout }
    }

    /// Reads all four slots. Flags count as set only when stored as 1.
    pub fn load(&mut self) -> PersistentRecord {
        PersistentRecord {
            number: self.store.read_byte(self.layout.number),
            output_enabled: self.store.read_byte(self.layout.output_enabled) == FLAG_SET,
            count_enabled: self.store.read_byte(self.layout.count_enabled) == FLAG_SET,
            direction: CountDirection::from_byte(self.store.read_byte(self.layout.direction)),
        }
    }

    pub fn store_number(&mut self, number: u8) {
        self.store.write_byte(self.layout.number, number);
    }

    pub fn store_output_enabled(&mut self, enabled: bool) {
        self.store.write_byte(self.layout.output_enabled, flag(enabled));
    }

    pub fn store_count_enabled(&mut self, enabled: bool) {
        self.store.write_byte(self.layout.count_enabled, flag(enabled));
    }

    pub fn store_direction(&mut self, direction: CountDirection) {
        self.store.write_byte(self.layout.direction, direction.to_byte());
    }

    pub fn layout(&self) -> StorageLayout {
        self.layout
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

#[inline]
fn flag(enabled: bool) -> u8 {
    if enabled { FLAG_SET } else { FLAG_CLEAR }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ram([u8; 8]);

    impl NonVolatile for Ram {
        fn read_byte(&mut self, address: u16) -> u8 {
            self.0[address as usize]
        }

        fn write_byte(&mut self, address: u16, value: u8) {
            self.0[address as usize] = value;
        }
    }

    #[test]
    fn default_layout_matches_firmware_addresses() {
        let layout = StorageLayout::default();
        assert_eq!(layout.number, 500);
        assert_eq!(layout.output_enabled, 501);
        assert_eq!(layout.count_enabled, 502);
        assert_eq!(layout.direction, 503);
    }

    #[test]
    fn writes_land_in_their_slots() {
        let mut persistence = Persistence::new(Ram([0; 8]), StorageLayout::contiguous(2));
        persistence.store_number(42);
        persistence.store_output_enabled(true);
        persistence.store_count_enabled(false);
        persistence.store_direction(CountDirection::Down);

        assert_eq!(persistence.inner().0, [0, 0, 42, 1, 0, 1, 0, 0]);
    }

    #[test]
    fn erased_memory_decodes_to_safe_defaults() {
        let mut persistence = Persistence::new(Ram([0xFF; 8]), StorageLayout::contiguous(0));
        let record = persistence.load();

        assert_eq!(record.number, 0xFF);
        assert!(!record.output_enabled);
        assert!(!record.count_enabled);
        assert_eq!(record.direction, CountDirection::Up);
    }

    #[test]
    fn load_reads_back_stored_values() {
        let mut persistence = Persistence::new(Ram([0; 8]), StorageLayout::contiguous(4));
        persistence.store_number(7);
        persistence.store_output_enabled(true);
        persistence.store_count_enabled(true);
        persistence.store_direction(CountDirection::Down);

        assert_eq!(
            persistence.load(),
            PersistentRecord {
                number: 7,
                output_enabled: true,
                count_enabled: true,
                direction: CountDirection::Down,
            }
        );
    }
}
