// log.rs - logging targets
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

//! Targets used within calls to [log] macros.
//!
//! The library only calls the [log] facade; no logger implementation is
//! installed, so output depends on the logger chosen by application.

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [simplification](crate::simplify)
    pub const SIMPLIFY: &str = "simplify";

    /// Logs related to [negation normal form](crate::nnf)
    pub const NNF: &str = "nnf";

    /// Logs related to [CNF distribution](crate::cnf)
    pub const CNF: &str = "cnf";

    /// Logs related to [DIMACS serialization](crate::dimacs)
    pub const DIMACS: &str = "dimacs";

    /// Logs related to [solutions](crate::solution)
    pub const SOLUTION: &str = "solution";
}
