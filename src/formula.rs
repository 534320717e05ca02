// formula.rs - formula structures
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
//! The module with formula tree.
//!
//! A formula is either a leaf (propositional variable identified by its name) or
//! an operation: an operator and ordered list of operands. Formula is immutable
//! after construction, operands are shared by reference counting, so cloning
//! a formula or moving a subtree into many clauses is cheap.
//!
//! The sample usage:
//!
//! ```
//! use soh_logic::formula::Formula;
//! let f = Formula::implies([
//!     Formula::leaf("r_0_t=1"),
//!     Formula::and([Formula::leaf("m_0_t=0"), Formula::leaf("m_1_t=0")]),
//! ]);
//! assert_eq!("=>(r_0_t=1, ^(m_0_t=0, m_1_t=0))", f.to_string());
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::FormulaError;

/// An operator of operation node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Negation. Takes exactly one operand.
    Not,
    /// Conjunction of operands.
    And,
    /// Disjunction of operands.
    Or,
    /// Implication, folded from left for more than two operands.
    Implies,
    /// Equivalence, folded from left for more than two operands.
    Iff,
}

impl Operator {
    /// All operators.
    pub const ALL: [Operator; 5] = [
        Operator::Not,
        Operator::And,
        Operator::Or,
        Operator::Implies,
        Operator::Iff,
    ];

    /// Returns canonical token of operator.
    pub fn token(self) -> &'static str {
        match self {
            Operator::Not => "!",
            Operator::And => "^",
            Operator::Or => "v",
            Operator::Implies => "=>",
            Operator::Iff => "<=>",
        }
    }

    /// Checks whether operator can take `count` operands.
    pub fn check_arity(self, count: usize) -> Result<(), FormulaError> {
        let ok = match self {
            Operator::Not => count == 1,
            _ => count != 0,
        };
        if ok {
            Ok(())
        } else {
            Err(FormulaError::Arity { op: self, count })
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
/// An error of parsing operator token.
#[error("Unknown operator token `{0}`")]
pub struct ParseOperatorError(pub String);

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.token() == s)
            .ok_or_else(|| ParseOperatorError(s.to_string()))
    }
}

/// An assignment of boolean values to variables. Variable that is not
/// in assignment has false value.
pub type Assignment = HashMap<String, bool>;

/// A formula tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Formula {
    /// Propositional variable. Two leaves with same name are same variable.
    Leaf(Arc<str>),
    /// Operation with operator and operands.
    Operation(Operator, Arc<[Formula]>),
}

impl Formula {
    /// Creates leaf.
    pub fn leaf(name: impl Into<Arc<str>>) -> Self {
        Formula::Leaf(name.into())
    }

    /// Creates operation and checks number of operands.
    pub fn operation(
        op: Operator,
        operands: impl IntoIterator<Item = Formula>,
    ) -> Result<Self, FormulaError> {
        let operands: Arc<[Formula]> = operands.into_iter().collect();
        op.check_arity(operands.len())?;
        Ok(Formula::Operation(op, operands))
    }

    /// Creates operation without checking number of operands.
    /// Wrong number of operands is reported while evaluating or transforming formula.
    pub fn operation_unchecked(op: Operator, operands: impl IntoIterator<Item = Formula>) -> Self {
        Formula::Operation(op, operands.into_iter().collect())
    }

    /// Creates negation.
    pub fn not(operand: Formula) -> Self {
        Formula::Operation(Operator::Not, Arc::from([operand]))
    }

    pub fn and(operands: impl IntoIterator<Item = Formula>) -> Self {
        Self::operation_unchecked(Operator::And, operands)
    }

    pub fn or(operands: impl IntoIterator<Item = Formula>) -> Self {
        Self::operation_unchecked(Operator::Or, operands)
    }

    pub fn implies(operands: impl IntoIterator<Item = Formula>) -> Self {
        Self::operation_unchecked(Operator::Implies, operands)
    }

    pub fn iff(operands: impl IntoIterator<Item = Formula>) -> Self {
        Self::operation_unchecked(Operator::Iff, operands)
    }

    /// Returns new operation with `extra` operands appended to operands of self.
    /// Returns None for a leaf.
    pub fn push_operands(&self, extra: impl IntoIterator<Item = Formula>) -> Option<Self> {
        match self {
            Formula::Leaf(_) => None,
            Formula::Operation(op, operands) => Some(Formula::operation_unchecked(
                *op,
                operands.iter().cloned().chain(extra),
            )),
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Formula::Leaf(_))
    }

    /// Returns true if formula is a leaf or a negated leaf.
    pub fn is_literal(&self) -> bool {
        match self {
            Formula::Leaf(_) => true,
            Formula::Operation(Operator::Not, operands) => {
                operands.len() == 1 && operands[0].is_leaf()
            }
            Formula::Operation(_, _) => false,
        }
    }

    /// Returns name of leaf.
    pub fn name(&self) -> Option<&str> {
        if let Formula::Leaf(name) = self {
            Some(&**name)
        } else {
            None
        }
    }

    /// Returns operator of operation.
    pub fn operator(&self) -> Option<Operator> {
        if let Formula::Operation(op, _) = self {
            Some(*op)
        } else {
            None
        }
    }

    /// Returns operands. Leaf has no operands.
    pub fn operands(&self) -> &[Formula] {
        match self {
            Formula::Leaf(_) => &[],
            Formula::Operation(_, operands) => &operands[..],
        }
    }

    /// Returns distinct leaf names in order of first occurrence
    /// (pre-order, from left to right).
    pub fn leaf_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut names = vec![];
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Formula::Leaf(name) => {
                    let name: &str = name;
                    if seen.insert(name) {
                        names.push(name);
                    }
                }
                Formula::Operation(_, operands) => stack.extend(operands.iter().rev()),
            }
        }
        names
    }

    /// Returns assignment that sets false to every variable of formula.
    pub fn default_assignment(&self) -> Assignment {
        default_assignment(self)
    }
}

/// Returns assignment that sets false to every variable of formula.
pub fn default_assignment(formula: &Formula) -> Assignment {
    formula
        .leaf_names()
        .into_iter()
        .map(|name| (name.to_string(), false))
        .collect()
}

impl From<&str> for Formula {
    fn from(name: &str) -> Self {
        Formula::leaf(name)
    }
}

impl From<String> for Formula {
    fn from(name: String) -> Self {
        Formula::leaf(name)
    }
}

/// Diagnostic form: `OP(child, child, ...)`. It is not parseable.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Leaf(name) => f.write_str(name),
            Formula::Operation(op, operands) => {
                write!(f, "{}(", op)?;
                for (i, operand) in operands.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", operand)?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_tokens() {
        for (exp, op) in [
            ("!", Operator::Not),
            ("^", Operator::And),
            ("v", Operator::Or),
            ("=>", Operator::Implies),
            ("<=>", Operator::Iff),
        ] {
            assert_eq!(exp, op.token());
            assert_eq!(exp, op.to_string());
            assert_eq!(Ok(op), exp.parse::<Operator>());
        }
        assert_eq!(
            Err(ParseOperatorError("->".to_string())),
            "->".parse::<Operator>()
        );
    }

    #[test]
    fn test_operation_arity() {
        let a = Formula::leaf("a");
        let b = Formula::leaf("b");
        assert!(Formula::operation(Operator::Not, [a.clone()]).is_ok());
        for (op, operands) in [
            (Operator::Not, vec![]),
            (Operator::Not, vec![a.clone(), b.clone()]),
            (Operator::And, vec![]),
            (Operator::Or, vec![]),
            (Operator::Implies, vec![]),
            (Operator::Iff, vec![]),
        ] {
            let count = operands.len();
            match Formula::operation(op, operands) {
                Err(FormulaError::Arity { op: eop, count: ecount }) => {
                    assert_eq!(op, eop);
                    assert_eq!(count, ecount);
                }
                r => panic!("unexpected {:?}", r),
            }
        }
        for op in [Operator::And, Operator::Or, Operator::Implies, Operator::Iff] {
            assert!(Formula::operation(op, [a.clone()]).is_ok());
            assert!(Formula::operation(op, [a.clone(), b.clone(), a.clone()]).is_ok());
        }
        // unchecked builders accept anything
        assert_eq!(0, Formula::and(Vec::<Formula>::new()).operands().len());
    }

    #[test]
    fn test_formula_display() {
        let f = Formula::and([
            Formula::not("a".into()),
            Formula::or(["b".into(), "c".into()]),
            Formula::iff(["a".into(), Formula::implies(["b".into(), "d".into()])]),
        ]);
        assert_eq!("^(!(a), v(b, c), <=>(a, =>(b, d)))", f.to_string());
        assert_eq!("x", Formula::leaf("x").to_string());
        assert_eq!("^()", Formula::and(Vec::<Formula>::new()).to_string());
    }

    #[test]
    fn test_formula_accessors() {
        let a = Formula::leaf("a");
        let na = Formula::not(a.clone());
        let nna = Formula::not(na.clone());
        assert!(a.is_leaf());
        assert_eq!(Some("a"), a.name());
        assert_eq!(None, a.operator());
        assert!(a.operands().is_empty());
        assert!(a.is_literal());
        assert!(na.is_literal());
        assert!(!nna.is_literal());
        assert!(!Formula::or([a.clone()]).is_literal());
        assert_eq!(Some(Operator::Not), na.operator());
        assert_eq!(None, na.name());
        assert_eq!(&[a.clone()], na.operands());
        assert_eq!(Formula::leaf("a"), a);
        assert_ne!(Formula::leaf("b"), a);
    }

    #[test]
    fn test_push_operands() {
        let f = Formula::and([Formula::leaf("a")]);
        let g = f.push_operands(["b".into(), "c".into()]).unwrap();
        assert_eq!("^(a)", f.to_string());
        assert_eq!("^(a, b, c)", g.to_string());
        assert_eq!(None, Formula::leaf("a").push_operands(["b".into()]));
        let empty = Formula::or(Vec::<Formula>::new());
        assert_eq!("v(x)", empty.push_operands(["x".into()]).unwrap().to_string());
    }

    #[test]
    fn test_leaf_names() {
        let f = Formula::and([
            Formula::or(["b".into(), Formula::not("a".into())]),
            Formula::implies(["c".into(), "b".into()]),
            "a".into(),
            "d".into(),
        ]);
        assert_eq!(vec!["b", "a", "c", "d"], f.leaf_names());
        assert_eq!(vec!["z"], Formula::leaf("z").leaf_names());
        assert!(Formula::and(Vec::<Formula>::new()).leaf_names().is_empty());
    }

    #[test]
    fn test_default_assignment() {
        let f = Formula::and([
            Formula::or(["m_0_t=0".into(), Formula::not("m_1_t=0".into())]),
            "m_0_t=0".into(),
        ]);
        let assignment = default_assignment(&f);
        assert_eq!(2, assignment.len());
        assert_eq!(Some(&false), assignment.get("m_0_t=0"));
        assert_eq!(Some(&false), assignment.get("m_1_t=0"));
        assert_eq!(assignment, f.default_assignment());
    }
}
