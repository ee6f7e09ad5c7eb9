//! Deterministic sample catalogs.
//!
//! Produces shirts with uniformly random colors and sizes from a seeded
//! RNG, so the same (count, seed) pair always yields the same catalog.

use crate::core::types::{Color, Shirt, Size};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

/// Generator for sample catalogs
pub struct SampleCatalogBuilder {
    count: usize,
    rng: ChaCha8Rng,
}

impl SampleCatalogBuilder {
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate a deterministic UUID from the seeded RNG.
    fn next_uuid(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        bytes[6] = (bytes[6] & 0x0f) | 0x40; // Version 4
        bytes[8] = (bytes[8] & 0x3f) | 0x80; // Variant 1
        Uuid::from_bytes(bytes)
    }

    pub fn build(mut self) -> Vec<Shirt> {
        let mut shirts = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let id = self.next_uuid();
            let color = Color::ALL[self.rng.gen_range(0..Color::ALL.len())];
            let size = Size::ALL[self.rng.gen_range(0..Size::ALL.len())];
            shirts.push(Shirt::new(id, format!("{color} - {size}"), size, color));
        }

        tracing::debug!("Generated sample catalog of {} shirts", shirts.len());
        shirts
    }
}
