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

//! Digest type and the [`Hasher`] capability the MMR is generic over.

use std::fmt::{self, Write};
use std::string::String;
use std::vec::Vec;

use codec::{Decode, Encode};

use crate::Error;

#[cfg(test)]
#[path = "hash_tests.rs"]
mod tests;

macro_rules! to_hex {
    ($bytes:expr) => {{
        let mut s = String::with_capacity($bytes.len() * 2);

        for b in $bytes {
            write!(&mut s, "{:02x}", b)?
        }

        Ok(s)
    }};
}

/// Output of a [`Hasher`]. Stored as a byte vector, rather than a fixed-size
/// array, so the MMR is not pinned to a single digest width: a 32-byte SHA-256
/// digest and a 64-byte hash both fit the same `Digest` type.
#[derive(Clone, PartialEq, Eq, Encode, Decode)]
pub struct Digest(Vec<u8>);

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const DISP_LEN: usize = 6;

        let hex = to_hex!(self.0.iter().take(DISP_LEN))?;
        write!(f, "{}", hex)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Digest {
    /// Build a digest from raw bytes, e.g. the output of a [`Hasher`].
    pub fn from_vec(v: Vec<u8>) -> Digest {
        Digest(v)
    }

    /// Build a digest from a hex string like `"0xcafe"`.
    pub fn from_hex(hex: &str) -> Result<Digest, Error> {
        parse_hex(hex).map(Digest).map_err(Error::ParseHex)
    }
}

fn parse_hex(hex: &str) -> Result<Vec<u8>, String> {
    let hex = hex.trim().trim_start_matches("0x");

    if hex.len() % 2 != 0 {
        Err(hex.into())
    } else {
        (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| hex.to_string()))
            .collect()
    }
}

/// A fixed-output, collision-resistant hash function, parameterized at the
/// MMR's type level.
///
/// No index, position, or domain-separation byte is mixed in: leaves hash as
/// `H(leaf_bytes)` and internal nodes as `H(left ‖ right)`. This is load-bearing
/// for interop with roots computed by other MMR implementations over the same
/// hash family.
pub trait Hasher {
    /// Hash leaf bytes into a digest.
    fn hash_leaf(data: &[u8]) -> Digest;

    /// Hash a pair of sibling digests into their parent's digest.
    fn hash_nodes(left: &Digest, right: &Digest) -> Digest;
}

/// Default [`Hasher`]: SHA-256, 32 byte digests.
#[derive(Default, Clone, Copy)]
pub struct Sha256Hasher;

impl Hasher for Sha256Hasher {
    fn hash_leaf(data: &[u8]) -> Digest {
        use sha2::{Digest as _, Sha256};

        let mut h = Sha256::new();
        h.update(data);
        Digest::from_vec(h.finalize().to_vec())
    }

    fn hash_nodes(left: &Digest, right: &Digest) -> Digest {
        use sha2::{Digest as _, Sha256};

        let mut h = Sha256::new();
        h.update(left.as_ref());
        h.update(right.as_ref());
        Digest::from_vec(h.finalize().to_vec())
    }
}

/// Alternate [`Hasher`]: SHA3-256, 32 byte digests.
///
/// Swapping an MMR's `H` type parameter from [`Sha256Hasher`] to this one
/// changes every digest it ever produces; the two are not interchangeable
/// over the same node store.
#[derive(Default, Clone, Copy)]
pub struct Sha3_256Hasher;

impl Hasher for Sha3_256Hasher {
    fn hash_leaf(data: &[u8]) -> Digest {
        use sha3::{Digest as _, Sha3_256};

        let mut h = Sha3_256::new();
        h.update(data);
        Digest::from_vec(h.finalize().to_vec())
    }

    fn hash_nodes(left: &Digest, right: &Digest) -> Digest {
        use sha3::{Digest as _, Sha3_256};

        let mut h = Sha3_256::new();
        h.update(left.as_ref());
        h.update(right.as_ref());
        Digest::from_vec(h.finalize().to_vec())
    }
}
