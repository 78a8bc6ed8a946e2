// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTML page rendering via placeholder substitution.
//!
//! Templates are plain documents containing literal `{{ name }}` tokens;
//! rendering replaces each token with a precomputed HTML fragment. No
//! logic or control flow is supported inside templates.
//!
//! The default templates compile into the binary; a directory passed on
//! the command line overrides them, so pages can be reskinned without a
//! rebuild.

use std::path::Path;

/// Loaded template sources for the three pages.
///
/// The landing page doubles as the login form, so `/` and `/login` both
/// render `index`.
#[derive(Debug, Clone)]
pub struct Renderer {
    index: String,
    register: String,
    calendar: String,
}

impl Renderer {
    /// Creates a renderer from the compiled-in default templates.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            index: String::from(include_str!("../templates/index.html")),
            register: String::from(include_str!("../templates/register.html")),
            calendar: String::from(include_str!("../templates/calendar.html")),
        }
    }

    /// Creates a renderer from template files in a directory.
    ///
    /// Expects `index.html`, `register.html`, and `calendar.html` to be
    /// present in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if any template file cannot be read.
    pub fn from_dir(dir: &Path) -> Result<Self, std::io::Error> {
        Ok(Self {
            index: std::fs::read_to_string(dir.join("index.html"))?,
            register: std::fs::read_to_string(dir.join("register.html"))?,
            calendar: std::fs::read_to_string(dir.join("calendar.html"))?,
        })
    }

    /// Returns the landing/login page source.
    #[must_use]
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Returns the registration page source.
    #[must_use]
    pub fn register(&self) -> &str {
        &self.register
    }

    /// Returns the calendar page source.
    #[must_use]
    pub fn calendar(&self) -> &str {
        &self.calendar
    }
}

/// Substitutes named fragments into a template source.
///
/// Each `(name, html)` pair replaces every `{{ name }}` token in the
/// template. Tokens without a matching fragment are left in place.
#[must_use]
pub fn substitute(template: &str, fragments: &[(&str, &str)]) -> String {
    let mut document: String = template.to_string();
    for (name, html) in fragments {
        document = document.replace(&format!("{{{{ {name} }}}}"), html);
    }
    document
}
