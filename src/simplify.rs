// simplify.rs - simplification
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

//! Rewrites formula to use only NOT, AND and OR.
//!
//! Rules, applied bottom-up:
//!
//! * operation with one operand other than NOT is replaced by its operand,
//! * `a => b` is rewritten to `v(!(a), b)`,
//! * `a <=> b` is rewritten to `^(a => b, b => a)` and simplified again,
//! * other operations keep operator and simplify operands.
//!
//! Implication and equivalence are rewritten only for their first two
//! operands. Further operands are dropped, so for more than two operands the
//! result is not equivalent to the left fold used by evaluation.

use crate::formula::{Formula, Operator};
use crate::FormulaError;

/// Simplifies formula to operators NOT, AND and OR.
pub fn simplify(formula: &Formula) -> Result<Formula, FormulaError> {
    match formula {
        Formula::Leaf(_) => Ok(formula.clone()),
        Formula::Operation(op, operands) => {
            op.check_arity(operands.len())?;
            if *op != Operator::Not && operands.len() == 1 {
                return simplify(&operands[0]);
            }
            match op {
                Operator::Implies => {
                    let (a, b) = binary_operands(*op, operands);
                    Ok(Formula::or([Formula::not(simplify(a)?), simplify(b)?]))
                }
                Operator::Iff => {
                    // (a => b) ^ (b => a), operands simplified once and shared
                    let (a, b) = binary_operands(*op, operands);
                    let (a, b) = (simplify(a)?, simplify(b)?);
                    Ok(Formula::and([
                        Formula::or([Formula::not(a.clone()), b.clone()]),
                        Formula::or([Formula::not(b), a]),
                    ]))
                }
                Operator::Not | Operator::And | Operator::Or => Ok(Formula::operation_unchecked(
                    *op,
                    operands
                        .iter()
                        .map(simplify)
                        .collect::<Result<Vec<_>, _>>()?,
                )),
            }
        }
    }
}

fn binary_operands(op: Operator, operands: &[Formula]) -> (&Formula, &Formula) {
    if operands.len() > 2 {
        log::warn!(
            target: crate::log::targets::SIMPLIFY,
            "`{}` with {} operands: operands after second are dropped",
            op,
            operands.len()
        );
    }
    (&operands[0], &operands[1])
}

impl Formula {
    /// Simplifies formula to operators NOT, AND and OR.
    pub fn simplify(&self) -> Result<Formula, FormulaError> {
        simplify(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::all_assignments;
    use std::sync::Arc;

    fn uses_only_basic(f: &Formula) -> bool {
        match f {
            Formula::Leaf(_) => true,
            Formula::Operation(op, operands) => {
                matches!(op, Operator::Not | Operator::And | Operator::Or)
                    && operands.iter().all(uses_only_basic)
            }
        }
    }

    #[test]
    fn test_simplify_rules() {
        let a = Formula::leaf("a");
        for (exp, f) in [
            ("a", a.clone()),
            ("!(a)", Formula::not(a.clone())),
            ("a", Formula::and([a.clone()])),
            ("a", Formula::or([Formula::and([Formula::iff([a.clone()])])])),
            ("v(!(a), b)", Formula::implies([a.clone(), "b".into()])),
            (
                "^(v(!(a), b), v(!(b), a))",
                Formula::iff([a.clone(), "b".into()]),
            ),
            (
                "!(v(!(a), ^(b, c)))",
                Formula::not(Formula::implies([
                    a.clone(),
                    Formula::and(["b".into(), "c".into()]),
                ])),
            ),
            (
                "v(!(v(!(a), b)), c)",
                Formula::implies([Formula::implies([a.clone(), "b".into()]), "c".into()]),
            ),
            (
                "^(a, v(b, c), !(d))",
                Formula::and([
                    a.clone(),
                    Formula::or(["b".into(), "c".into()]),
                    Formula::not("d".into()),
                ]),
            ),
        ] {
            assert_eq!(exp, simplify(&f).unwrap().to_string(), "{}", f);
        }
    }

    #[test]
    fn test_simplify_equivalence() {
        let f = Formula::and([
            Formula::iff([
                "a".into(),
                Formula::implies(["b".into(), Formula::or(["c".into(), "a".into()])]),
            ]),
            Formula::not(Formula::iff(["c".into(), "b".into()])),
            Formula::or([Formula::implies(["a".into()])]),
        ]);
        let s = f.simplify().unwrap();
        assert!(uses_only_basic(&s));
        for m in all_assignments(&["a", "b", "c"]) {
            assert_eq!(f.eval(&m).unwrap(), s.eval(&m).unwrap(), "{:?}", m);
        }
    }

    #[test]
    fn test_simplify_idempotent() {
        for f in [
            Formula::leaf("a"),
            Formula::iff(["a".into(), Formula::iff(["b".into(), "c".into()])]),
            Formula::not(Formula::and([Formula::implies(["a".into(), "b".into()])])),
            Formula::or([
                Formula::and(["a".into()]),
                Formula::not(Formula::not("b".into())),
            ]),
        ] {
            let once = simplify(&f).unwrap();
            assert_eq!(once, simplify(&once).unwrap(), "{}", f);
        }
    }

    #[test]
    fn test_simplify_iff_shares_operands() {
        let f = Formula::iff([
            Formula::or(["a".into(), "b".into()]),
            Formula::and(["c".into(), "d".into()]),
        ]);
        let s = simplify(&f).unwrap();
        assert_eq!(
            "^(v(!(v(a, b)), ^(c, d)), v(!(^(c, d)), v(a, b)))",
            s.to_string()
        );
        let (first, second) = (&s.operands()[0], &s.operands()[1]);
        let ab_first = &first.operands()[0].operands()[0];
        let ab_second = &second.operands()[1];
        let cd_first = &first.operands()[1];
        let cd_second = &second.operands()[0].operands()[0];
        for (x, y) in [(ab_first, ab_second), (cd_first, cd_second)] {
            match (x, y) {
                (Formula::Operation(_, xs), Formula::Operation(_, ys)) => {
                    assert!(Arc::ptr_eq(xs, ys), "{} {}", x, y)
                }
                _ => panic!("unexpected {} {}", x, y),
            }
        }
    }

    #[test]
    fn test_simplify_nested_iff_size() {
        // every level doubles its operands in text, but nodes are shared
        let mut f = Formula::leaf("x0");
        for i in 1..=14 {
            f = Formula::iff([f, Formula::leaf(format!("x{}", i))]);
        }
        fn count_distinct(f: &Formula, seen: &mut Vec<*const Formula>) {
            if let Formula::Operation(_, operands) = f {
                let ptr = operands.as_ptr();
                if !seen.contains(&ptr) {
                    seen.push(ptr);
                    operands.iter().for_each(|x| count_distinct(x, seen));
                }
            }
        }
        let s = simplify(&f).unwrap();
        let mut seen = vec![];
        count_distinct(&s, &mut seen);
        // AND, two ORs and two NOTs per level
        assert_eq!(14 * 5, seen.len());
    }

    #[test]
    fn test_simplify_more_than_two_operands() {
        // third operand is dropped
        let f = Formula::implies(["a".into(), "b".into(), "c".into()]);
        assert_eq!("v(!(a), b)", simplify(&f).unwrap().to_string());
        let f = Formula::iff(["a".into(), "b".into(), "c".into()]);
        assert_eq!("^(v(!(a), b), v(!(b), a))", simplify(&f).unwrap().to_string());
        let f = Formula::implies([
            "a".into(),
            Formula::implies(["b".into(), "c".into()]),
            "d".into(),
        ]);
        assert_eq!("v(!(a), v(!(b), c))", simplify(&f).unwrap().to_string());
    }

    #[test]
    fn test_simplify_arity_errors() {
        for f in [
            Formula::and(Vec::<Formula>::new()),
            Formula::not(Formula::or(Vec::<Formula>::new())),
            Formula::operation_unchecked(Operator::Not, Vec::<Formula>::new()),
            Formula::operation_unchecked(Operator::Not, ["a".into(), "b".into()]),
            Formula::implies(["a".into(), Formula::iff(Vec::<Formula>::new())]),
        ] {
            assert!(simplify(&f).unwrap_err().is_arity(), "{}", f);
        }
    }
}
