// eval.rs - formula evaluation
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

//! Evaluation of formula under an assignment.

use crate::formula::{Assignment, Formula, Operator};
use crate::FormulaError;

impl Formula {
    /// Evaluates formula. Variable missing in assignment is false.
    ///
    /// Implication and equivalence are folded from left starting with true:
    /// `acc = !acc || x` and `acc = (acc == x)`. For two operands they are
    /// material implication and biconditional.
    pub fn eval(&self, assignment: &Assignment) -> Result<bool, FormulaError> {
        match self {
            Formula::Leaf(name) => Ok(assignment.get(&**name).copied().unwrap_or(false)),
            Formula::Operation(op, operands) => {
                op.check_arity(operands.len())?;
                match op {
                    Operator::Not => Ok(!operands[0].eval(assignment)?),
                    Operator::And => {
                        for operand in operands.iter() {
                            if !operand.eval(assignment)? {
                                return Ok(false);
                            }
                        }
                        Ok(true)
                    }
                    Operator::Or => {
                        for operand in operands.iter() {
                            if operand.eval(assignment)? {
                                return Ok(true);
                            }
                        }
                        Ok(false)
                    }
                    Operator::Implies => operands
                        .iter()
                        .try_fold(true, |acc, x| Ok(!acc || x.eval(assignment)?)),
                    Operator::Iff => operands
                        .iter()
                        .try_fold(true, |acc, x| Ok(acc == x.eval(assignment)?)),
                }
            }
        }
    }
}

/// Evaluates formula. Variable missing in assignment is false.
pub fn eval(formula: &Formula, assignment: &Assignment) -> Result<bool, FormulaError> {
    formula.eval(assignment)
}

/// Returns all assignments of given variables, in binary counting order
/// (first variable is least significant).
#[cfg(test)]
pub(crate) fn all_assignments<'a>(names: &'a [&'a str]) -> impl Iterator<Item = Assignment> + 'a {
    let count = 1usize << names.len();
    (0..count).map(move |bits| {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), (bits >> i) & 1 != 0))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abcd() -> [Formula; 4] {
        ["a", "b", "c", "d"].map(Formula::leaf)
    }

    #[test]
    fn test_eval_leaf() {
        let mut assignment = Assignment::new();
        assert!(!Formula::leaf("a").eval(&assignment).unwrap());
        assignment.insert("a".to_string(), true);
        assert!(Formula::leaf("a").eval(&assignment).unwrap());
        assert!(!Formula::leaf("b").eval(&assignment).unwrap());
    }

    #[test]
    fn test_eval_not() {
        let f = Formula::not("a".into());
        for assignment in all_assignments(&["a"]) {
            assert_eq!(!assignment["a"], f.eval(&assignment).unwrap());
        }
    }

    #[test]
    fn test_eval_and_or() {
        let and = Formula::and(abcd());
        let or = Formula::or(abcd());
        for m in all_assignments(&["a", "b", "c", "d"]) {
            assert_eq!(m["a"] && m["b"] && m["c"] && m["d"], and.eval(&m).unwrap());
            assert_eq!(m["a"] || m["b"] || m["c"] || m["d"], or.eval(&m).unwrap());
        }
    }

    #[test]
    fn test_eval_implies() {
        let f = Formula::implies(["a".into(), "b".into()]);
        for m in all_assignments(&["a", "b"]) {
            assert_eq!(!m["a"] || m["b"], f.eval(&m).unwrap());
        }
        // more than two operands: left fold from true
        let f = Formula::implies(["a".into(), "b".into(), "c".into()]);
        for m in all_assignments(&["a", "b", "c"]) {
            let exp = !(!(!true || m["a"]) || m["b"]) || m["c"];
            assert_eq!(exp, f.eval(&m).unwrap(), "{:?}", m);
        }
        // single operand: !true || a
        let f = Formula::implies(["a".into()]);
        for m in all_assignments(&["a"]) {
            assert_eq!(m["a"], f.eval(&m).unwrap());
        }
    }

    #[test]
    fn test_eval_iff() {
        let f = Formula::iff(abcd());
        let mut not_all_equal = 0;
        for m in all_assignments(&["a", "b", "c", "d"]) {
            let exp = (((true == m["a"]) == m["b"]) == m["c"]) == m["d"];
            assert_eq!(exp, f.eval(&m).unwrap(), "{:?}", m);
            let all_equal = m["a"] == m["b"] && m["b"] == m["c"] && m["c"] == m["d"];
            if exp != all_equal {
                not_all_equal += 1;
            }
        }
        // fold is not "all equal"
        assert!(not_all_equal > 0);
        let f = Formula::iff(["a".into(), "b".into()]);
        for m in all_assignments(&["a", "b"]) {
            assert_eq!(m["a"] == m["b"], f.eval(&m).unwrap());
        }
    }

    #[test]
    fn test_eval_arity_errors() {
        let m = Assignment::new();
        for f in [
            Formula::and(Vec::<Formula>::new()),
            Formula::or(Vec::<Formula>::new()),
            Formula::implies(Vec::<Formula>::new()),
            Formula::iff(Vec::<Formula>::new()),
            Formula::operation_unchecked(Operator::Not, ["a".into(), "b".into()]),
            Formula::or(["a".into(), Formula::and(Vec::<Formula>::new())]),
        ] {
            assert!(eval(&f, &m).unwrap_err().is_arity(), "{}", f);
        }
    }

    #[test]
    fn test_all_assignments() {
        let all = all_assignments(&["x", "y"]).collect::<Vec<_>>();
        assert_eq!(4, all.len());
        assert_eq!((false, false), (all[0]["x"], all[0]["y"]));
        assert_eq!((true, false), (all[1]["x"], all[1]["y"]));
        assert_eq!((true, true), (all[3]["x"], all[3]["y"]));
        assert_eq!(1, all_assignments(&[]).count());
    }
}
