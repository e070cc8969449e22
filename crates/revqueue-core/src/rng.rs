// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::types::item::ItemId;

/// A minimal, zero-dependency, completely insecure PRNG used to mint item
/// ids. Ids only have to be unique within one collection.
pub struct TinyRng {
    state: u64,
}

const A: u64 = 6364136223846793005;
const C: u64 = 1442695040888963407;

/// Length of a generated id.
pub const ID_LENGTH: usize = 7;

const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

impl TinyRng {
    /// Initialize the RNG from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        let new = self.state.wrapping_mul(A).wrapping_add(C);
        self.state = new;
        (new >> 32) as u32
    }

    // Generate random number in range [0, max).
    pub fn generate(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Mints base-36 ids, skipping any the caller reports as taken.
pub struct IdGenerator {
    rng: TinyRng,
}

impl IdGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: TinyRng::from_seed(seed),
        }
    }

    pub fn next_id(&mut self, taken: impl Fn(&ItemId) -> bool) -> ItemId {
        loop {
            let id: String = (0..ID_LENGTH)
                .map(|_| ID_ALPHABET[self.rng.generate(36) as usize] as char)
                .collect();
            let id = ItemId::new(id);
            if !taken(&id) {
                return id;
            }
            log::debug!("Generated id {id} is already taken, drawing another");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = TinyRng::from_seed(42);
        let mut b = TinyRng::from_seed(42);
        for _ in 0..10 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_id_shape() {
        let mut ids = IdGenerator::from_seed(1);
        let id = ids.next_id(|_| false);
        assert_eq!(id.as_str().len(), ID_LENGTH);
        assert!(
            id.as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }

    #[test]
    fn test_skips_taken_ids() {
        let first = IdGenerator::from_seed(9).next_id(|_| false);
        let mut ids = IdGenerator::from_seed(9);
        let second = ids.next_id(|id| id == &first);
        assert_ne!(first, second);
    }

    #[test]
    fn test_ids_are_distinct() {
        let mut ids = IdGenerator::from_seed(123);
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let id = ids.next_id(|id| seen.contains(id));
            assert!(seen.insert(id));
        }
    }
}
