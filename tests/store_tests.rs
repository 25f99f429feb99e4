// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use financefreedom::session::Session;
use financefreedom::store::TokenStore;
use tempfile::{tempdir, NamedTempFile};

#[test]
fn token_survives_reopen() {
    let file = NamedTempFile::new().unwrap();
    {
        let store = TokenStore::open(file.path()).unwrap();
        assert_eq!(store.load_token().unwrap(), None);
        store.save_token("tok-1").unwrap();
        store.save_token("tok-2").unwrap();
    }
    let store = TokenStore::open(file.path()).unwrap();
    assert_eq!(store.load_token().unwrap().as_deref(), Some("tok-2"));

    // primes the in-memory session at startup
    let session = Session::with_token(store.load_token().unwrap().as_deref());
    assert!(session.is_logged_in());
}

#[test]
fn clear_and_blank_tokens() {
    let store = TokenStore::open_in_memory().unwrap();
    store.save_token("tok").unwrap();
    store.clear_token().unwrap();
    assert_eq!(store.load_token().unwrap(), None);

    store.save_token("tok").unwrap();
    store.save_token("  ").unwrap();
    assert_eq!(store.load_token().unwrap(), None);
}

#[test]
fn open_or_init_creates_data_dir() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let store = TokenStore::open_or_init(Some(nested.as_path())).unwrap();
    store.save_token("tok").unwrap();
    assert!(nested.join("financefreedom.sqlite").exists());
}
