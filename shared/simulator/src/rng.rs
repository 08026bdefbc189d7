pub use rand_chacha::ChaCha8Rng as SeededRng;

pub fn new_rng(seed: u32) -> SeededRng {
    rand_seeder::Seeder::from(seed).make_rng()
}

/// Seed for one store of a ship, so that the two stores of a ship never
/// share a misfire sequence.
pub fn store_seed(base: u32, slot: u32) -> u32 {
    base.wrapping_mul(0x9e37_79b9) ^ slot.wrapping_add(1).rotate_left(16)
}
