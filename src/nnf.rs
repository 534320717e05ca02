// nnf.rs - negation normal form
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

//! Negation normal form. Negations are pushed down to leaves by De Morgan's laws.

use crate::formula::{Formula, Operator};
use crate::simplify::simplify;
use crate::FormulaError;

/// Converts formula to negation normal form. Formula is simplified first,
/// so result uses only NOT, AND and OR, and every NOT has a leaf as operand.
pub fn nnf(formula: &Formula) -> Result<Formula, FormulaError> {
    let simplified = simplify(formula)?;
    let normal = push_negations(&simplified)?;
    log::debug!(target: crate::log::targets::NNF, "NNF: {}", normal);
    Ok(normal)
}

// formula must be simplified
fn push_negations(formula: &Formula) -> Result<Formula, FormulaError> {
    match formula {
        Formula::Leaf(_) => Ok(formula.clone()),
        Formula::Operation(Operator::Not, operands) => {
            Operator::Not.check_arity(operands.len())?;
            match &operands[0] {
                Formula::Leaf(_) => Ok(formula.clone()),
                Formula::Operation(op, inner) => {
                    op.check_arity(inner.len())?;
                    match op {
                        Operator::Not => push_negations(&inner[0]),
                        Operator::Or => negate_all(Operator::And, inner),
                        Operator::And => negate_all(Operator::Or, inner),
                        Operator::Implies | Operator::Iff => Err(FormulaError::InternalInvariant(
                            "implication or equivalence under negation in NNF conversion",
                        )),
                    }
                }
            }
        }
        Formula::Operation(op @ (Operator::And | Operator::Or), operands) => {
            op.check_arity(operands.len())?;
            Ok(Formula::operation_unchecked(
                *op,
                operands
                    .iter()
                    .map(push_negations)
                    .collect::<Result<Vec<_>, _>>()?,
            ))
        }
        Formula::Operation(Operator::Implies | Operator::Iff, _) => Err(
            FormulaError::InternalInvariant("implication or equivalence in NNF conversion"),
        ),
    }
}

// De Morgan: !(x1 op x2 ...) = (!x1 dual !x2 ...)
fn negate_all(dual: Operator, operands: &[Formula]) -> Result<Formula, FormulaError> {
    Ok(Formula::operation_unchecked(
        dual,
        operands
            .iter()
            .map(|x| push_negations(&Formula::not(x.clone())))
            .collect::<Result<Vec<_>, _>>()?,
    ))
}

/// Returns true if every NOT of formula has a leaf as operand and
/// formula contains only NOT, AND and OR.
pub fn is_nnf(formula: &Formula) -> bool {
    match formula {
        Formula::Leaf(_) => true,
        Formula::Operation(Operator::Not, _) => formula.is_literal(),
        Formula::Operation(Operator::And | Operator::Or, operands) => {
            operands.iter().all(is_nnf)
        }
        Formula::Operation(Operator::Implies | Operator::Iff, _) => false,
    }
}

impl Formula {
    /// Converts formula to negation normal form.
    pub fn nnf(&self) -> Result<Formula, FormulaError> {
        nnf(self)
    }
}
