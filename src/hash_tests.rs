// Copyright (C) 2021 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Hash type unit tests

use super::{Digest, Error, Hasher, Sha256Hasher};

#[test]
fn from_vec_works() {
    let v = vec![1, 2, 3];
    let h = format!("{}", Digest::from_vec(v));
    assert_eq!(h, "010203");

    let v: Vec<u8> = vec![];
    let h = format!("{}", Digest::from_vec(v));
    assert_eq!(h, "");

    let v = vec![222, 173, 202, 254, 186, 190];
    let h = format!("{}", Digest::from_vec(v));
    assert_eq!(h, "deadca");
}

#[test]
fn from_hex_works() {
    let want = Digest::from_vec(vec![]);
    let got = Digest::from_hex("0x00").unwrap();
    assert_eq!(want, got);

    let want = Digest::from_vec(vec![202, 254]);
    let got = Digest::from_hex("0xcafe").unwrap();
    assert_eq!(want, got);

    let want = Digest::from_vec(vec![222, 173, 202, 254, 186, 190]);
    let got = Digest::from_hex("0xdeadcafebabe").unwrap();
    assert_eq!(want, got);
}

#[test]
fn from_hex_error() {
    let want = Error::ParseHex("000".to_string());
    let got = Digest::from_hex("0x000").err().unwrap();
    assert_eq!(want, got);

    let want = Error::ParseHex("thisisbad".to_string());
    let got = Digest::from_hex("0xthisisbad").err().unwrap();
    assert_eq!(want, got);
}

#[test]
fn leaf_hash_is_deterministic_and_collision_resistant() {
    let h1 = Sha256Hasher::hash_leaf(&[0, 0, 0, 0]);
    let h2 = Sha256Hasher::hash_leaf(&[0, 0, 0, 0]);
    let h3 = Sha256Hasher::hash_leaf(&[0, 0, 0, 1]);

    assert_eq!(h1, h2);
    assert_ne!(h1, h3);
}

#[test]
fn leaf_hash_has_no_domain_prefix() {
    use sha2::{Digest as _, Sha256};

    let data = [9u8, 9, 9];
    let mut h = Sha256::new();
    h.update(data);
    let want = Digest::from_vec(h.finalize().to_vec());

    assert_eq!(want, Sha256Hasher::hash_leaf(&data));
}

#[test]
fn node_hash_orders_left_before_right() {
    let l = Sha256Hasher::hash_leaf(b"left");
    let r = Sha256Hasher::hash_leaf(b"right");

    let lr = Sha256Hasher::hash_nodes(&l, &r);
    let rl = Sha256Hasher::hash_nodes(&r, &l);

    assert_ne!(lr, rl);
    assert_eq!(lr, Sha256Hasher::hash_nodes(&l, &r));
}
