// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A duty row joined with the name of its employee.
///
/// Produced by the joined duty listings. Duties whose `employee_id` no
/// longer resolves to an employee are absent from these listings; the
/// underlying duty row survives regardless.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DutyWithEmployee {
    /// The duty identifier.
    pub id: i64,
    /// The duty date (opaque text).
    pub date: String,
    /// The referenced employee's name.
    pub employee_name: String,
}
