// writer.rs - writer module
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
//! The module to write DIMACS CNF from clauses.
//!
//! A clause is a slice of variable literals. A variable literal is a signed
//! integer: variable number if it is not negated, negated variable number if
//! it is negated. Zero is not allowed, it terminates clause in output.
//!
//! The sample usage is simple:
//!
//! ```
//! use soh_logic::writer::{CNFError, CNFWriter};
//! fn simple_writer() -> Result<(), CNFError> {
//!     let mut writer = CNFWriter::new(vec![]);
//!     writer.write_header(4, 3)?;
//!     writer.write_clause(&[1, 2, -4])?;
//!     writer.write_clause(&[1, -2, 3])?;
//!     writer.write_clause(&[4, 2, -3])?;
//!     assert_eq!(
//!         "p cnf 4 3\n1 2 -4 0\n1 -2 3 0\n4 2 -3 0\n",
//!         String::from_utf8_lossy(writer.inner())
//!     );
//!     Ok(())
//! }
//! simple_writer().unwrap();
//! ```

use std::io::{self, Write};

#[derive(thiserror::Error, Debug)]
/// An error type.
pub enum CNFError {
    /// It caused if header has already been written.
    #[error("Header has already been written")]
    HeaderAlreadyWritten,
    /// It caused if header has not been written.
    #[error("Header has not been written")]
    HeaderNotWritten,
    /// It caused after write all clauses.
    #[error("Too many clauses to write")]
    TooManyClauses,
    /// It caused if clause have variable literal out of range.
    #[error("Variable literal is out of range")]
    VarLitOutOfRange,
    /// It caused if I/O error encountered.
    #[error("IO error: {0}")]
    IOError(#[from] io::Error),
}

/// CNF file header. It contains a number of variables and a number of clauses.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct CNFHeader {
    /// Number of variables in formula. It can be zero.
    pub var_num: usize,
    /// Number of clauses in formula. It can be zero.
    pub clause_num: usize,
}

/// Checks clause whether it have only allowed variable literals and variables
/// used in this clause doesn't have number greater than var_num.
pub fn check_clause(clause: &[isize], var_num: usize) -> bool {
    clause.iter().all(|&x| x != 0 && x.unsigned_abs() <= var_num)
}

/// A CNF formula writer. This object is used to write CNF header and formula clauses.
pub struct CNFWriter<W: Write> {
    writer: W,
    buf: Vec<u8>,
    header: Option<CNFHeader>,
    clause_count: usize,
}

const DEFAULT_BUF_CAPACITY: usize = 1024;

impl<W: Write> CNFWriter<W> {
    /// Creates new CNF writer. Parameter is writer.
    pub fn new(w: W) -> Self {
        CNFWriter {
            writer: w,
            buf: Vec::with_capacity(DEFAULT_BUF_CAPACITY),
            header: None,
            clause_count: 0,
        }
    }

    /// Returns an inner writer.
    pub fn inner(&self) -> &W {
        &self.writer
    }

    /// Consumes self and returns an inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Returns header if it has been written.
    pub fn header(&self) -> Option<CNFHeader> {
        self.header
    }

    // Returns number of written clauses.
    pub fn written_clauses(&self) -> usize {
        self.clause_count
    }

    /// Writes a CNF header. It returns Ok if no error encountered.
    pub fn write_header(&mut self, var_num: usize, clause_num: usize) -> Result<(), CNFError> {
        if self.header.is_none() {
            self.buf.clear();
            self.buf.extend_from_slice(b"p cnf ");
            itoap::write_to_vec(&mut self.buf, var_num);
            self.buf.push(b' ');
            itoap::write_to_vec(&mut self.buf, clause_num);
            self.buf.push(b'\n');
            self.writer.write_all(&self.buf)?;
            self.header = Some(CNFHeader {
                var_num,
                clause_num,
            });
            Ok(())
        } else {
            Err(CNFError::HeaderAlreadyWritten)
        }
    }

    /// Writes clause. It must be called after header write.
    /// Literals are written in given order, clause is not simplified.
    pub fn write_clause(&mut self, clause: &[isize]) -> Result<(), CNFError> {
        if let Some(ref header) = self.header {
            if self.clause_count == header.clause_num {
                return Err(CNFError::TooManyClauses);
            }
            if !check_clause(clause, header.var_num) {
                return Err(CNFError::VarLitOutOfRange);
            }
            self.buf.clear();
            clause.iter().for_each(|x| {
                itoap::write_to_vec(&mut self.buf, *x);
                self.buf.push(b' ');
            });
            self.buf.extend(b"0\n");
            self.writer.write_all(&self.buf)?;
            self.clause_count += 1;
            Ok(())
        } else {
            Err(CNFError::HeaderNotWritten)
        }
    }

    /// Flushes an inner writer.
    pub fn flush(&mut self) -> Result<(), CNFError> {
        Ok(self.writer.flush()?)
    }
}
