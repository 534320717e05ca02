// lib.rs - main library
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
//! The library to encode propositional formulae as DIMACS CNF.
//!
//! Formulae are built from leaves (variables) and operations NOT, AND, OR,
//! IMPLIES and IFF. The pipeline simplifies formula to NOT, AND and OR,
//! pushes negations down to leaves and distributes disjunctions over
//! conjunctions to get CNF. The CNF is written in DIMACS format for
//! external SAT solver.
//!
//! ```
//! use soh_logic::prelude::*;
//! // reaction r_0 at time 1 needs metabolites m_0 and m_1 at time 0
//! let f = Formula::and([
//!     Formula::implies([
//!         Formula::leaf("r_0_t=1"),
//!         Formula::and([Formula::leaf("m_0_t=0"), Formula::leaf("m_1_t=0")]),
//!     ]),
//!     Formula::leaf("r_0_t=1"),
//! ]);
//! let (text, index) = format_clauses(&f).unwrap();
//! assert_eq!("p cnf 3 3\n-1 2 0\n-1 3 0\n1 0\n", text);
//! assert_eq!(Some("m_1_t=0"), index.name(3));
//! ```

pub mod prelude {
    pub use crate::cnf;
    pub use crate::format_clauses;
    pub use crate::format_clauses_with;
    pub use crate::nnf;
    pub use crate::simplify;
    pub use crate::Assignment;
    pub use crate::CnfConfig;
    pub use crate::Formula;
    pub use crate::FormulaError;
    pub use crate::Literal;
    pub use crate::Operator;
    pub use crate::Solution;
    pub use crate::VarIndex;
}

pub mod error;
pub use error::FormulaError;
pub mod config;
pub use config::CnfConfig;
pub mod log;

pub mod formula;
pub use formula::{default_assignment, Assignment, Formula, Operator, ParseOperatorError};
pub mod eval;
pub use eval::eval;
pub mod simplify;
pub use simplify::simplify;
pub mod nnf;
pub use nnf::{is_nnf, nnf};
pub mod cnf;
pub use cnf::{cnf, cnf_with, is_cnf, Clause, Literal};

pub mod writer;
pub use writer::{CNFError, CNFWriter};
pub mod dimacs;
pub use dimacs::{format_clauses, format_clauses_with, write_clauses, write_clauses_with, VarIndex};
pub mod solution;
pub use solution::{filter_solutions, parse_solutions, Solution, SolutionError};
