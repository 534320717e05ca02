// dimacs.rs - clause serializer
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

#![cfg_attr(docsrs, feature(doc_cfg))]
//! The module to serialize formula as DIMACS CNF.
//!
//! Every distinct variable gets positive number, from 1, in order of first
//! occurrence in CNF (clauses from left to right, literals from left to right).
//! The mapping is returned as [VarIndex] to translate solver model back to
//! variable names. Each serialization builds own table.
//!
//! ```
//! use soh_logic::formula::Formula;
//! use soh_logic::dimacs::format_clauses;
//! let f = Formula::and([
//!     Formula::or([Formula::leaf("a")]),
//!     Formula::or([Formula::leaf("b")]),
//! ]);
//! let (text, index) = format_clauses(&f).unwrap();
//! assert_eq!("p cnf 2 2\n1 0\n2 0\n", text);
//! assert_eq!(Some(1), index.get("a"));
//! assert_eq!(Some(2), index.get("b"));
//! ```

use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

use crate::cnf::{clauses, cnf_clauses_with, Clause};
use crate::formula::{Assignment, Formula};
use crate::writer::CNFWriter;
use crate::{CnfConfig, FormulaError};

/// A table of variable numbers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VarIndex {
    names: Vec<Arc<str>>,
    numbers: HashMap<Arc<str>, usize>,
}

impl VarIndex {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns number of variable, or assigns next number if variable is new.
    pub fn number_or_insert(&mut self, name: &Arc<str>) -> usize {
        if let Some(&number) = self.numbers.get(name) {
            number
        } else {
            self.names.push(name.clone());
            self.numbers.insert(name.clone(), self.names.len());
            self.names.len()
        }
    }

    /// Returns number of variable.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.numbers.get(name).copied()
    }

    /// Returns name of variable with given number.
    pub fn name(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.names.get(i))
            .map(|name| &**name)
    }

    /// Returns number of variables.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns iterator of pairs (number, name) ordered by number.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (i + 1, &**name))
    }

    /// Returns signed variable literals of clause, adding new variables to table.
    pub fn encode_clause(&mut self, clause: &Clause) -> Vec<isize> {
        clause
            .iter()
            .map(|l| {
                // number of variables is bounded by memory, fits isize
                let v = self.number_or_insert(&l.name) as isize;
                if l.negated {
                    -v
                } else {
                    v
                }
            })
            .collect()
    }

    /// Translates solver model (signed variable literals) to assignment.
    /// Every variable of table is in assignment, false if model doesn't
    /// contain it. Zero and literals out of table are skipped.
    pub fn decode_model(&self, model: &[isize]) -> Assignment {
        let mut assignment: Assignment = self
            .names
            .iter()
            .map(|name| (name.to_string(), false))
            .collect();
        for &lit in model {
            match self.name(lit.unsigned_abs()) {
                Some(name) => {
                    assignment.insert(name.to_string(), lit > 0);
                }
                None if lit != 0 => log::warn!(
                    target: crate::log::targets::DIMACS,
                    "Literal {} out of variable table",
                    lit
                ),
                None => {}
            }
        }
        assignment
    }
}

fn prepare_clauses(formula: &Formula, config: &CnfConfig) -> Result<Vec<Clause>, FormulaError> {
    match clauses(formula) {
        Ok(clauses) => Ok(clauses),
        Err(_) => cnf_clauses_with(formula, config),
    }
}

/// Writes formula as DIMACS CNF with given configuration. Formula is converted
/// to CNF if it is not already in CNF.
pub fn write_clauses_with<W: Write>(
    formula: &Formula,
    writer: W,
    config: &CnfConfig,
) -> Result<VarIndex, FormulaError> {
    let clauses = prepare_clauses(formula, config)?;
    let mut index = VarIndex::new();
    let encoded = clauses
        .iter()
        .map(|c| index.encode_clause(c))
        .collect::<Vec<_>>();
    let mut cnf_writer = CNFWriter::new(writer);
    cnf_writer.write_header(index.len(), encoded.len())?;
    for clause in &encoded {
        cnf_writer.write_clause(clause)?;
    }
    cnf_writer.flush()?;
    log::debug!(
        target: crate::log::targets::DIMACS,
        "Written {} variables and {} clauses",
        index.len(),
        encoded.len()
    );
    Ok(index)
}

/// Writes formula as DIMACS CNF.
pub fn write_clauses<W: Write>(formula: &Formula, writer: W) -> Result<VarIndex, FormulaError> {
    write_clauses_with(formula, writer, &CnfConfig::default())
}

/// Returns DIMACS CNF text of formula and variable table, with given configuration.
pub fn format_clauses_with(
    formula: &Formula,
    config: &CnfConfig,
) -> Result<(String, VarIndex), FormulaError> {
    let mut out = vec![];
    let index = write_clauses_with(formula, &mut out, config)?;
    let text = String::from_utf8(out)
        .map_err(|_| FormulaError::InternalInvariant("DIMACS output is not UTF-8"))?;
    Ok((text, index))
}

/// Returns DIMACS CNF text of formula and variable table.
pub fn format_clauses(formula: &Formula) -> Result<(String, VarIndex), FormulaError> {
    format_clauses_with(formula, &CnfConfig::default())
}
