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

//! Merkle inclusion proof for a single MMR leaf.

use std::vec::Vec;

use codec::{Decode, Encode};

use crate::hash::{Digest, Hasher};
use crate::utils::{get_peaks, tree_pos_height};

#[cfg(test)]
#[path = "proof_tests.rs"]
mod tests;

/// An inclusion proof for one leaf of an MMR of a given size.
///
/// `path` carries the authentication path to the leaf's mountain peak,
/// followed by the bagged right-hand peaks (at most one entry), followed by
/// the remaining left-hand peaks in right-to-left order. It carries no
/// reference back to the MMR or store that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct MerkleProof {
    pub mmr_size: u64,
    pub path: Vec<Digest>,
}

impl MerkleProof {
    /// Verify that `leaf_bytes` was recorded at `pos` in an MMR of
    /// `self.mmr_size` leaves whose root is `root`.
    ///
    /// `H` must be the same [`Hasher`] the MMR that produced this proof was
    /// instantiated with; using a different one will simply fail to verify.
    pub fn verify<H: Hasher>(&self, root: &Digest, pos: u64, leaf_bytes: &[u8]) -> bool {
        let peaks = get_peaks(self.mmr_size);

        let mut acc = H::hash_leaf(leaf_bytes);
        let mut pos = pos;
        let mut height = 0u32;

        for p in &self.path {
            if let Ok(idx) = peaks.binary_search(&pos) {
                if idx == peaks.len() - 1 {
                    acc = H::hash_nodes(&acc, p);
                } else {
                    acc = H::hash_nodes(p, &acc);
                    pos = *peaks.last().expect("peaks non-empty: pos was found in it");
                }
                continue;
            }

            let cur_height = tree_pos_height(pos);
            let next_height = tree_pos_height(pos + 1);

            if next_height > cur_height {
                // right child: proof entry is the left sibling
                acc = H::hash_nodes(p, &acc);
                pos += 1;
            } else {
                // left child: proof entry is the right sibling
                acc = H::hash_nodes(&acc, p);
                pos += 1u64 << (height + 1);
            }

            height += 1;
        }

        acc == *root
    }
}
