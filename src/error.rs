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

//! Merkle-Mountain-Range errors

use std::string::String;

use displaydoc::Display;

/// Errors returned by [`crate::MerkleMountainRange`] and [`crate::MerkleProof`].
///
/// Note that `verify` and `root` never return `Error`: verification failure is a
/// plain `bool`, and an empty root is `None`. `Error` is reserved for precondition
/// violations on `proof`.
#[derive(Debug, Display, PartialEq, Eq, Clone)]
pub enum Error {
    /// position {0} is beyond the current MMR size
    UnknownPosition(u64),
    /// position {0} is not a leaf node
    ExpectingLeafNode(u64),
    /// MMR has no leaves
    EmptyMmr,
    /// node store has no digest at position {0}
    StoreCorrupt(u64),
    /// failed to parse string as hex: `{0}`
    ParseHex(String),
}

pub type Result<T> = core::result::Result<T, Error>;
