// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Arc;
use std::thread;

use financefreedom::session::Session;

#[test]
fn login_flag_follows_token() {
    let s = Session::new();
    assert!(!s.is_logged_in());
    assert_eq!(s.read(), None);

    s.update(Some("abc"));
    assert!(s.is_logged_in());
    assert_eq!(s.read().as_deref(), Some("abc"));

    s.update(None);
    assert!(!s.is_logged_in());
    assert_eq!(s.read(), None);
}

#[test]
fn blank_token_is_no_token() {
    let s = Session::with_token(Some("abc"));
    s.update(Some(""));
    assert!(!s.is_logged_in());
    assert_eq!(s.read(), None);

    s.update(Some("   "));
    assert!(!s.is_logged_in());
}

#[test]
fn clear_ends_session() {
    let s = Session::with_token(Some("tok"));
    assert!(s.is_logged_in());
    s.clear();
    assert!(!s.is_logged_in());
    assert_eq!(s.read(), None);
}

#[test]
fn subscribers_see_each_change() {
    let s = Session::new();
    let mut rx = s.subscribe();
    assert!(!rx.borrow_and_update().logged_in);

    s.update(Some("tok"));
    assert!(rx.has_changed().unwrap());
    let snap = rx.borrow_and_update().clone();
    assert!(snap.logged_in);
    assert_eq!(snap.token.as_deref(), Some("tok"));

    s.clear();
    assert!(rx.has_changed().unwrap());
    assert!(!rx.borrow_and_update().logged_in);
}

#[test]
fn readers_never_see_partial_updates() {
    let s = Arc::new(Session::new());
    let writer = {
        let s = Arc::clone(&s);
        thread::spawn(move || {
            for i in 0..1000 {
                if i % 2 == 0 {
                    s.update(Some("tok"));
                } else {
                    s.clear();
                }
            }
        })
    };
    for _ in 0..1000 {
        let snap = s.snapshot();
        assert_eq!(snap.logged_in, snap.token.is_some());
    }
    writer.join().unwrap();
}
