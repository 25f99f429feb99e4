// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod auth;
pub mod transactions;

pub use auth::AuthRepository;
pub use transactions::TransactionRepository;
