// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain validation errors.

use thiserror::Error;

/// Errors raised by domain rule validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// An employee name was blank after trimming surrounding whitespace.
    #[error("Employee name must not be blank")]
    BlankEmployeeName,
}
