// solution.rs - solver solutions
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

//! Solutions found by SAT solver and their filtering.
//!
//! A solution is a line of signed variable literals terminated by zero, as
//! printed by most SAT solvers (optionally prefixed by `v`). Only minimal
//! solutions are usually interesting: [filter_solutions] drops solutions
//! without any true variable and every solution that contains another one.

use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
/// An error of parsing solution.
pub enum SolutionError {
    /// It caused if token is not an integer.
    #[error("Invalid literal `{0}`")]
    InvalidLiteral(String),
    /// It caused if variable number of literal exceeds [MAX_VARIABLE].
    #[error("Literal `{0}` out of range")]
    LiteralOutOfRange(isize),
    /// It caused if line has no terminating zero.
    #[error("Missing terminating zero")]
    MissingTerminator,
}

/// Maximal variable number accepted in solution line.
pub const MAX_VARIABLE: usize = 1 << 26;

/// A solution: value of every variable, variable number `i` is at index `i - 1`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution(pub Vec<bool>);

impl Solution {
    /// Parses solution line. Variables not listed in line are false.
    pub fn parse_line(line: &str) -> Result<Self, SolutionError> {
        let mut values = vec![];
        for token in line.split_whitespace() {
            if token == "v" {
                continue;
            }
            let lit = token
                .parse::<isize>()
                .map_err(|_| SolutionError::InvalidLiteral(token.to_string()))?;
            if lit == 0 {
                return Ok(Solution(values));
            }
            if lit.unsigned_abs() > MAX_VARIABLE {
                return Err(SolutionError::LiteralOutOfRange(lit));
            }
            let i = lit.unsigned_abs() - 1;
            if values.len() <= i {
                values.resize(i + 1, false);
            }
            values[i] = lit > 0;
        }
        Err(SolutionError::MissingTerminator)
    }

    /// Returns number of variables.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if solution has no variables.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if no variable is true. Such solution is dropped by
    /// [filter_solutions] even if it has variables.
    pub fn is_all_false(&self) -> bool {
        !self.0.iter().any(|&x| x)
    }

    /// Returns true if every variable true in self is true in other.
    pub fn contains(&self, other: &Solution) -> bool {
        self.0
            .iter()
            .enumerate()
            .all(|(i, &x)| !x || other.0.get(i).copied().unwrap_or(false))
    }

    /// Returns signed variable literals of solution.
    pub fn literals(&self) -> Vec<isize> {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let v = (i + 1) as isize;
                if x {
                    v
                } else {
                    -v
                }
            })
            .collect()
    }
}

impl FromStr for Solution {
    type Err = SolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_line(s)
    }
}

/// Writes literals separated by space, each followed by space.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lit in self.literals() {
            write!(f, "{} ", lit)?;
        }
        Ok(())
    }
}

/// Parses solutions, one per non-empty line.
pub fn parse_solutions(text: &str) -> Result<Vec<Solution>, SolutionError> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(Solution::parse_line)
        .collect()
}

/// Removes empty solutions and solutions that contain other solution.
/// Order of remaining solutions is kept. From equal solutions only first is kept.
pub fn filter_solutions(solutions: Vec<Solution>) -> Vec<Solution> {
    let mut slots = solutions
        .into_iter()
        .map(|s| if s.is_all_false() { None } else { Some(s) })
        .collect::<Vec<_>>();
    for i in 0..slots.len() {
        for j in 0..slots.len() {
            if i == j {
                continue;
            }
            let contained = matches!(
                (&slots[i], &slots[j]),
                (Some(si), Some(sj)) if si.contains(sj)
            );
            if contained {
                slots[j] = None;
            }
        }
    }
    let filtered = slots.into_iter().flatten().collect::<Vec<_>>();
    log::debug!(
        target: crate::log::targets::SOLUTION,
        "{} solutions after filtering",
        filtered.len()
    );
    filtered
}
