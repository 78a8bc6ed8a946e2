// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutations against the roster tables.
//!
//! Every mutation is a single Diesel statement, so it either commits
//! durably or leaves no partial state behind. Constraint violations
//! surface as typed errors.

pub mod duties;
pub mod employees;
pub mod users;
