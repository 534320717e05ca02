// error.rs - error types
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

//! Errors raised by the formula pipeline.

use crate::formula::Operator;
use crate::writer::CNFError;

#[derive(thiserror::Error, Debug)]
/// An error type of the formula pipeline.
///
/// No stage returns a partial result: either the whole call succeeds or
/// it fails with one of these.
pub enum FormulaError {
    /// It caused if operator got number of operands that is not allowed:
    /// NOT with other than one operand, or any other operator with no operands.
    #[error("Operator `{op}` can not take {count} operand(s)")]
    Arity { op: Operator, count: usize },
    /// It caused if a stage got a shape which previous stage should exclude.
    /// This is always a bug in the pipeline, never a user error.
    #[error("Internal invariant violated: {0}")]
    InternalInvariant(&'static str),
    /// It caused if CNF distribution would exceed the configured clause ceiling.
    #[error("CNF would have {clauses} clauses, limit is {limit}")]
    ResourceLimit { clauses: usize, limit: usize },
    /// It caused if DIMACS writer failed.
    #[error("Writer error: {0}")]
    Writer(#[from] CNFError),
}

impl FormulaError {
    /// Returns true if error is an arity error.
    pub fn is_arity(&self) -> bool {
        matches!(self, FormulaError::Arity { .. })
    }

    /// Returns true if error is a resource limit error.
    pub fn is_resource_limit(&self) -> bool {
        matches!(self, FormulaError::ResourceLimit { .. })
    }
}
