// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module contains everything that is necessary to parse a knapsack
//! instance and turn it into a `Knapsack`. The expected format is:
//!
//! ```plain
//! <item_count> <capacity>
//! <value_0> <weight_0>
//! ...
//! <value_n-1> <weight_n-1>
//! ```
//!
//! The order of the item lines defines the index of each item. Whatever
//! comes after the last expected item line is ignored.

use std::{fs::File, io::Read, num::ParseIntError, path::Path};

use crate::Knapsack;

/// This enumeration simply groups the kind of errors that might occur when
/// parsing a knapsack instance. There can be io errors (file unavailable ?),
/// format errors (e.g. the header is missing or a line lacks a number), or
/// parse int errors (which are actually a variant of the format error since
/// it tells you that the parser expected an integer number but got ...
/// something else).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read something that was an integer but got some garbage
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// The input is empty
    #[error("missing header line")]
    MissingHeader,
    /// A line holds less than the two expected numbers
    #[error("line {line}: expected two integers")]
    MissingField { line: usize },
    /// The header announces more items than there are lines
    #[error("expected {expected} items, found {found}")]
    MissingItems { expected: usize, found: usize },
}

/// Reads the two leading integers of a line (1-based `line` number)
fn pair(text: &str, line: usize) -> Result<(usize, usize), Error> {
    let mut fields = text.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(a), Some(b)) => Ok((a.parse()?, b.parse()?)),
        _ => Err(Error::MissingField { line }),
    }
}

/// This function parses a knapsack instance from its textual representation.
///
/// # Example
/// ```
/// # use knapsack::*;
/// let problem = parse_instance("3 50\n60 10\n100 20\n120 30\n").unwrap();
/// assert_eq!(Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]), problem);
/// ```
pub fn parse_instance(input: &str) -> Result<Knapsack, Error> {
    let mut lines = input.lines();

    let header = lines.next().ok_or(Error::MissingHeader)?;
    if header.trim().is_empty() {
        return Err(Error::MissingHeader);
    }
    let (nb_items, capacity) = pair(header, 1)?;

    let mut items = Vec::with_capacity(nb_items);
    for (i, line) in lines.take(nb_items).enumerate() {
        items.push(pair(line, i + 2)?);
    }
    if items.len() < nb_items {
        return Err(Error::MissingItems { expected: nb_items, found: items.len() });
    }

    Ok(Knapsack::new(capacity, items))
}

/// This function is used to read a knapsack instance from file. It returns
/// either an instance if everything went on well or an error describing the
/// problem.
pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<Knapsack, Error> {
    let mut contents = String::new();
    File::open(fname)?.read_to_string(&mut contents)?;
    parse_instance(&contents)
}
