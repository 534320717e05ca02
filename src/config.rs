// config.rs - configuration
//
// soh-logic - Encode propositional formulae as DIMACS CNF
// Copyright (C) 2022  Mateusz Szpakowski
//
// This library is free software; you can redistribute it and/or
// modify it under the terms of the GNU Lesser General Public
// License as published by the Free Software Foundation; either
// version 2.1 of the License, or (at your option) any later version.
//
// This library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public
// License along with this library; if not, write to the Free Software
// Foundation, Inc., 51 Franklin Street, Fifth Floor, Boston, MA  02110-1301  USA

//! Configuration of the CNF conversion.

/// Resource ceilings applied during CNF distribution.
///
/// Default configuration has no ceiling: distribution can be exponential in
/// the size of formula. Set `max_clauses` when formulae come from
/// untrusted or very large sources.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CnfConfig {
    /// Maximal number of clauses of any intermediate or final CNF.
    pub max_clauses: Option<usize>,
}

impl CnfConfig {
    /// Creates new configuration without any ceiling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets maximal number of clauses.
    pub fn with_max_clauses(mut self, max_clauses: usize) -> Self {
        self.max_clauses = Some(max_clauses);
        self
    }

    /// Returns true if `clauses` fits in ceiling. `None` means that count
    /// overflowed `usize` and never fits if any ceiling is set.
    pub(crate) fn allows(&self, clauses: Option<usize>) -> bool {
        match (self.max_clauses, clauses) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(limit), Some(clauses)) => clauses <= limit,
        }
    }
}
