//! Seeded pseudo-random numbers for terrain generation
//!
//! Seeds are arbitrary strings. They are hashed with 32-bit FNV-1a over
//! UTF-16 code units and fed to mulberry32, so a seed shared in a frame URL
//! always redraws the same terrain.

use uuid::Uuid;

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// Characters in a freshly drawn seed
const SEED_LEN: usize = 8;
const SEED_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Hash a seed string to the generator's 32-bit state
pub fn seed_from_str(seed: &str) -> u32 {
    seed.encode_utf16().fold(FNV_OFFSET_BASIS, |h, unit| {
        (h ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// mulberry32: tiny 32-bit generator, uniform in [0, 1)
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(seed_from_str(seed))
    }

    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }
}

/// Fresh 8-character base-36 seed, independent of any previous seed
pub fn random_seed() -> String {
    // Low 62 bits of a v4 UUID are random; 36^8 needs about 42 of them
    let mut bits = Uuid::new_v4().as_u128();
    let mut seed = String::with_capacity(SEED_LEN);
    for _ in 0..SEED_LEN {
        seed.push(char::from(SEED_ALPHABET[(bits % 36) as usize]));
        bits /= 36;
    }
    seed
}
