//! Generalized Fibonacci sequences of arbitrary order
//!
//! A sequence of order `k` starts with `k` ones; every later term is the sum
//! of the `k` terms before it. Order 2 is the classic Fibonacci sequence,
//! order 3 the tribonacci sequence, and so on. These numbers are the weights
//! behind Fibonacci codes of the same order.
//!
//! Terms are generated lazily and an overflowing window sum is only reported
//! when that term is requested, so a `u128` overflow surfaces exactly at the
//! first printed term that does not fit.

use std::collections::VecDeque;
use std::io::{self, Write};
use thiserror::Error;

/// Smallest order for which the recurrence is meaningful
pub const MIN_ORDER: usize = 2;

/// Separator between printed terms
pub const SEPARATOR: &str = ", ";

/// Errors raised while validating or generating a sequence
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Not enough parameters. Please specify the count of Fibonacci numbers and the order!")]
    NotEnoughParameters,

    #[error("The minimum order allowed is 2! (got {0})")]
    OrderTooSmall(usize),

    #[error("The count of Fibonacci numbers must be at least 1!")]
    CountTooSmall,

    #[error("Term {index} of the order-{order} sequence does not fit into 128 bits")]
    Overflow { index: u64, order: usize },
}

/// Result type for sequence operations
pub type Result<T> = std::result::Result<T, SequenceError>;

/// Which term the printed output starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reporting {
    /// Start at the second-to-last seed, matching the historical tables
    /// (`1, 1, 2, 3, 5` for order 2 and `1, 1, 4, 7, 13` for order 4)
    #[default]
    Lagged,
    /// Start at the very first seed
    FromFirstSeed,
}

impl Reporting {
    /// Number of leading terms skipped for a sequence of `order`
    fn skipped_terms(self, order: usize) -> usize {
        match self {
            Reporting::Lagged => order - 2,
            Reporting::FromFirstSeed => 0,
        }
    }
}

/// Rolling-window generator for a sequence of fixed order
///
/// Seeds are never materialized: the window keeps only computed terms plus
/// a count of seeds still inside it, and the window sum is maintained
/// incrementally, so memory grows with the number of computed terms and
/// every step is O(1) regardless of the order.
#[derive(Debug, Clone)]
pub struct FibonacciSequence {
    order: usize,
    /// Seeds not yet handed out
    seeds_left: usize,
    /// Seeds (all 1) still part of the window, oldest first
    seeds_in_window: usize,
    /// Computed terms of the window, oldest first
    computed: VecDeque<u128>,
    /// Sum of the window, i.e. the next computed term; `None` once it overflowed
    sum: Option<u128>,
    /// Index of the next term to be produced
    index: u64,
}

impl FibonacciSequence {
    /// Create a generator for the given order
    pub fn new(order: usize) -> Result<Self> {
        if order < MIN_ORDER {
            return Err(SequenceError::OrderTooSmall(order));
        }

        Ok(Self {
            order,
            seeds_left: order,
            seeds_in_window: order,
            computed: VecDeque::new(),
            sum: Some(order as u128),
            index: 0,
        })
    }

    /// Skip `n` terms without producing them
    pub fn skip_terms(&mut self, n: usize) -> Result<()> {
        let seeds = n.min(self.seeds_left);
        self.seeds_left -= seeds;
        self.index = self.index.saturating_add(seeds as u64);

        for _ in seeds..n {
            self.next_term()?;
        }
        Ok(())
    }

    /// Produce the next term
    pub fn next_term(&mut self) -> Result<u128> {
        let term = if self.seeds_left > 0 {
            self.seeds_left -= 1;
            1
        } else {
            let term = self.sum.ok_or(SequenceError::Overflow {
                index: self.index,
                order: self.order,
            })?;

            let oldest = if self.seeds_in_window > 0 {
                self.seeds_in_window -= 1;
                1
            } else {
                self.computed.pop_front().unwrap_or(0)
            };
            self.computed.push_back(term);
            self.sum = (term - oldest).checked_add(term);
            term
        };

        self.index = self.index.saturating_add(1);
        Ok(term)
    }
}

impl Iterator for FibonacciSequence {
    type Item = Result<u128>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_term())
    }
}

/// Generate `count` printed terms of the order-`order` sequence
pub fn generate(count: u64, order: usize, reporting: Reporting) -> Result<Vec<u128>> {
    let mut sequence = FibonacciSequence::new(order)?;
    if count < 1 {
        return Err(SequenceError::CountTooSmall);
    }

    sequence.skip_terms(reporting.skipped_terms(order))?;

    let mut terms = Vec::with_capacity(usize::try_from(count).unwrap_or(0).min(1024));
    for _ in 0..count {
        terms.push(sequence.next_term()?);
    }

    tracing::debug!(count, order, ?reporting, "generated sequence");
    Ok(terms)
}

/// Join terms into a single output line (without the line terminator)
pub fn format_terms(terms: &[u128]) -> String {
    terms
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Write the terms as one terminated line
pub fn write_terms<W: Write>(out: &mut W, terms: &[u128]) -> io::Result<()> {
    writeln!(out, "{}", format_terms(terms))?;
    out.flush()
}
