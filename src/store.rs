// Copyright (C) 2021 Andreas Doerr
// SPDX-License-Identifier: Apache-2.0

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Merkle-Mountain-Range node storage
//!
//! The MMR owns no node layout of its own: it reads and writes digests through
//! a [`NodeStore`]. The density invariant (every position in `0..=last_pos` has
//! a stored digest) is a contract the MMR upholds against whatever `NodeStore`
//! it is given; the store itself stays a plain position -> digest map.

use std::collections::HashMap;

use crate::Digest;

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

/// Position-keyed digest storage backing a [`crate::MerkleMountainRange`].
pub trait NodeStore {
    /// Return the digest stored at `pos`, if any.
    fn get(&self, pos: u64) -> Option<Digest>;

    /// Store `digest` at `pos`, overwriting whatever was there (the MMR never
    /// actually overwrites an occupied position, but the trait does not need
    /// to assume that of every implementation).
    fn put(&mut self, pos: u64, digest: Digest);
}

/// Default in-memory [`NodeStore`], backed by a [`HashMap`].
#[derive(Default, Clone)]
pub struct HashMapStore {
    hashes: HashMap<u64, Digest>,
}

impl HashMapStore {
    pub fn new() -> Self {
        HashMapStore {
            hashes: HashMap::new(),
        }
    }
}

impl NodeStore for HashMapStore {
    fn get(&self, pos: u64) -> Option<Digest> {
        self.hashes.get(&pos).cloned()
    }

    fn put(&mut self, pos: u64, digest: Digest) {
        self.hashes.insert(pos, digest);
    }
}
