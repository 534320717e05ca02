// cnf.rs - conjunctive normal form
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

//! Conversion to CNF by distribution.
//!
//! Formula is converted to negation normal form and then distributed bottom-up.
//! A disjunction of conjunctions is expanded by distributive law to
//! conjunction of every combination of clauses, one clause taken from each
//! operand. No auxiliary variables are introduced, so number of clauses is
//! product of operand clause counts and can grow exponentially.
//! Use [CnfConfig] to set ceiling of the clause count.
//!
//! The result has always form `^(v(l, ...), ...)` where every literal `l` is
//! a leaf or negated leaf. Clause and literal order follow operand order; nothing
//! is sorted or deduplicated.

use std::fmt;
use std::sync::Arc;

use crate::formula::{Formula, Operator};
use crate::nnf::nnf;
use crate::{CnfConfig, FormulaError};

/// A literal of clause: a variable or negated variable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    pub name: Arc<str>,
    pub negated: bool,
}

impl Literal {
    pub fn new(name: impl Into<Arc<str>>, negated: bool) -> Self {
        Literal {
            name: name.into(),
            negated,
        }
    }

    /// Returns literal if formula is a leaf or negated leaf.
    pub fn from_formula(formula: &Formula) -> Option<Self> {
        match formula {
            Formula::Leaf(name) => Some(Literal::new(name.clone(), false)),
            Formula::Operation(Operator::Not, operands) if formula.is_literal() => {
                match &operands[0] {
                    Formula::Leaf(name) => Some(Literal::new(name.clone(), true)),
                    Formula::Operation(_, _) => None,
                }
            }
            Formula::Operation(_, _) => None,
        }
    }

    pub fn to_formula(&self) -> Formula {
        let leaf = Formula::Leaf(self.name.clone());
        if self.negated {
            Formula::not(leaf)
        } else {
            leaf
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "!({})", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}

const MAX_PREALLOCATED_CLAUSES: usize = 1 << 16;

/// A clause - disjunction of literals.
pub type Clause = Vec<Literal>;

/// Converts formula to CNF without any ceiling of clause count.
pub fn cnf(formula: &Formula) -> Result<Formula, FormulaError> {
    cnf_with(formula, &CnfConfig::default())
}

/// Converts formula to CNF with given configuration.
pub fn cnf_with(formula: &Formula, config: &CnfConfig) -> Result<Formula, FormulaError> {
    let clauses = cnf_clauses_with(formula, config)?;
    Ok(clauses_to_formula(&clauses))
}

/// Converts formula to CNF and returns its clauses.
pub fn cnf_clauses_with(formula: &Formula, config: &CnfConfig) -> Result<Vec<Clause>, FormulaError> {
    let normal = nnf(formula)?;
    let clauses = distribute(&normal, config)?;
    log::debug!(target: crate::log::targets::CNF, "CNF has {} clauses", clauses.len());
    Ok(clauses)
}

fn limit_error(config: &CnfConfig, clauses: Option<usize>) -> FormulaError {
    FormulaError::ResourceLimit {
        clauses: clauses.unwrap_or(usize::MAX),
        limit: config.max_clauses.unwrap_or(usize::MAX),
    }
}

// formula must be in NNF
fn distribute(formula: &Formula, config: &CnfConfig) -> Result<Vec<Clause>, FormulaError> {
    match formula {
        Formula::Leaf(name) => Ok(vec![vec![Literal::new(name.clone(), false)]]),
        Formula::Operation(Operator::Not, operands) => {
            Operator::Not.check_arity(operands.len())?;
            match &operands[0] {
                Formula::Leaf(name) => Ok(vec![vec![Literal::new(name.clone(), true)]]),
                Formula::Operation(_, _) => Err(FormulaError::InternalInvariant(
                    "negation of non-leaf in CNF distribution",
                )),
            }
        }
        Formula::Operation(Operator::And, operands) => {
            Operator::And.check_arity(operands.len())?;
            let mut clauses = vec![];
            for operand in operands.iter() {
                let sub = distribute(operand, config)?;
                let total = clauses.len().checked_add(sub.len());
                if !config.allows(total) {
                    return Err(limit_error(config, total));
                }
                clauses.extend(sub);
            }
            Ok(clauses)
        }
        Formula::Operation(Operator::Or, operands) => {
            Operator::Or.check_arity(operands.len())?;
            let groups = operands
                .iter()
                .map(|x| distribute(x, config))
                .collect::<Result<Vec<_>, _>>()?;
            distribute_or(&groups, config)
        }
        Formula::Operation(Operator::Implies | Operator::Iff, _) => Err(
            FormulaError::InternalInvariant("implication or equivalence in CNF distribution"),
        ),
    }
}

// (c1 ^ c2) v (c3 ^ c4) = (c1 v c3) ^ (c2 v c3) ^ (c1 v c4) ^ (c2 v c4)
fn distribute_or(groups: &[Vec<Clause>], config: &CnfConfig) -> Result<Vec<Clause>, FormulaError> {
    let product = groups
        .iter()
        .try_fold(1usize, |acc, g| acc.checked_mul(g.len()));
    if !config.allows(product) {
        return Err(limit_error(config, product));
    }
    log::trace!(
        target: crate::log::targets::CNF,
        "Distributing {} groups into {:?} clauses",
        groups.len(),
        product
    );
    if groups.iter().any(|g| g.is_empty()) {
        return Err(FormulaError::InternalInvariant("empty clause group in CNF distribution"));
    }
    let mut clauses = Vec::with_capacity(product.unwrap_or(0).min(MAX_PREALLOCATED_CLAUSES));
    // mixed-radix counter, first position is least significant
    let mut count = vec![0usize; groups.len()];
    loop {
        clauses.push(
            count
                .iter()
                .zip(groups)
                .flat_map(|(&i, g)| g[i].iter().cloned())
                .collect::<Clause>(),
        );
        let mut pos = 0;
        loop {
            if pos == count.len() {
                return Ok(clauses);
            }
            count[pos] += 1;
            if count[pos] < groups[pos].len() {
                break;
            }
            count[pos] = 0;
            pos += 1;
        }
    }
}

/// Builds CNF formula `^(v(...), ...)` from clauses.
pub fn clauses_to_formula(clauses: &[Clause]) -> Formula {
    Formula::and(
        clauses
            .iter()
            .map(|c| Formula::or(c.iter().map(Literal::to_formula))),
    )
}

/// Returns clauses of formula that is already in CNF.
pub fn clauses(formula: &Formula) -> Result<Vec<Clause>, FormulaError> {
    const NOT_CNF: FormulaError = FormulaError::InternalInvariant("formula is not in CNF");
    match formula {
        Formula::Operation(Operator::And, ands) if !ands.is_empty() => ands
            .iter()
            .map(|clause| match clause {
                Formula::Operation(Operator::Or, ors) if !ors.is_empty() => ors
                    .iter()
                    .map(|l| Literal::from_formula(l).ok_or(NOT_CNF))
                    .collect::<Result<Clause, _>>(),
                _ => Err(NOT_CNF),
            })
            .collect(),
        _ => Err(NOT_CNF),
    }
}

/// Returns true if formula has form `^(v(l, ...), ...)`.
pub fn is_cnf(formula: &Formula) -> bool {
    clauses(formula).is_ok()
}

impl Formula {
    /// Converts formula to CNF.
    pub fn cnf(&self) -> Result<Formula, FormulaError> {
        cnf(self)
    }
}
