//! Deterministic lattice hashing for seeded per-cell randomness.

/// Deterministic 3D hash
pub fn hash_3d(x: i32, y: i32, z: i32, seed: u32) -> u32 {
    let mut h = seed;
    h ^= x as u32;
    h = h.wrapping_mul(0x45d9f3b);
    h ^= h >> 16;
    h ^= y as u32;
    h = h.wrapping_mul(0x45d9f3b);
    h ^= h >> 16;
    h ^= z as u32;
    h = h.wrapping_mul(0x45d9f3b);
    h ^= h >> 16;
    h
}

/// Hash mapped into [0, 1).
pub fn unit_3d(x: i32, y: i32, z: i32, seed: u32) -> f64 {
    let mut h = hash_3d(x, y, z, seed);
    // fmix32 finalizer so low bits avalanche
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    (h >> 8) as f64 / 16_777_216.0
}

/// Fold a 64-bit seed into the 32-bit hash seed.
pub fn fold_seed(seed: u64) -> u32 {
    (seed ^ (seed >> 32)) as u32
}
