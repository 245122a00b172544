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

//! Merkle-Mountain-Range accumulator: append leaves, derive a succinct root
//! digest, and produce/verify compact single-leaf inclusion proofs.
//!
//! ```
//! use rangekeep::{DefaultMmr, HashMapStore};
//!
//! let mut mmr = DefaultMmr::new(HashMapStore::new());
//! let pos = mmr.append(b"leaf-0");
//! let root = mmr.root().unwrap();
//! let proof = mmr.proof(pos).unwrap();
//!
//! assert!(proof.verify::<rangekeep::Sha256Hasher>(&root, pos, b"leaf-0"));
//! ```

pub use error::{Error, Result};
pub use hash::{Digest, Hasher, Sha256Hasher, Sha3_256Hasher};
pub use mmr::MerkleMountainRange;
pub use proof::MerkleProof;
pub use store::{HashMapStore, NodeStore};

mod error;
mod hash;
mod mmr;
mod proof;
mod store;
mod utils;

/// An MMR using the defaults most callers want: SHA-256 digests over an
/// in-memory node store.
pub type DefaultMmr = MerkleMountainRange<Sha256Hasher, HashMapStore>;

