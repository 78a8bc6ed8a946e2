// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Application services for the duty roster.
//!
//! Two services sit between the HTTP dispatcher and the Repository:
//!
//! - [`AuthenticationService`] verifies credentials against the stored
//!   password digests and produces the session cookie values.
//! - [`RosterService`] owns the duty-assignment logic, including the
//!   random-employee-selection fallback and the duplicate-name guard.
//!
//! Both are stateless per call; all durable state lives behind the
//! `Persistence` adapter.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod roster;

#[cfg(test)]
mod tests;

pub use auth::{
    AuthenticationService, SESSION_COOKIE_NAME, digest_password, expired_session_cookie,
    session_cookie,
};
pub use error::ApiError;
pub use roster::{AddEmployeeOutcome, RosterService};
