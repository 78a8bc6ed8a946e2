// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries against the roster tables.
//!
//! All queries use Diesel DSL over a `SqliteConnection` and return domain
//! records or join projections; no business logic lives here.

pub mod duties;
pub mod employees;
pub mod users;
