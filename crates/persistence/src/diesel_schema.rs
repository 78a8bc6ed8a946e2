// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    users (id) {
        id -> BigInt,
        username -> Text,
        password_hash -> Text,
    }
}

diesel::table! {
    employees (id) {
        id -> BigInt,
        name -> Text,
    }
}

diesel::table! {
    duties (id) {
        id -> BigInt,
        date -> Text,
        employee_id -> BigInt,
    }
}

// The join is declared for Diesel's benefit only; the schema itself carries
// no foreign key so dangling employee references remain representable.
diesel::joinable!(duties -> employees (employee_id));

diesel::allow_tables_to_appear_in_same_query!(duties, employees, users);
