//! Shared constructors and sampling utilities used by every category module.
//!
//! The fact constructors compute the answer from the operands, so a category
//! generator can never emit a fact whose stored answer disagrees with its
//! arithmetic relation.
//!
//! Sampling everywhere follows the bounded-candidate-set pattern: build the
//! valid domain (or parameterize a construction whose domain is non-empty by
//! arithmetic), then pick uniformly. No open-ended reject-and-resample loops.

use rand::Rng;

use crate::fact_engine::models::{Category, FactQuestion};

/// Build an addition fact; `answer` is derived.
pub fn addition(category: Category, operand1: i32, operand2: i32) -> FactQuestion {
    FactQuestion::Addition {
        operand1,
        operand2,
        answer: operand1 + operand2,
        category,
    }
}

/// Build a subtraction fact; `answer` is derived.
///
/// Panics in debug builds if the difference would be negative — every current
/// category keeps `minuend >= subtrahend`.
pub fn subtraction(category: Category, minuend: i32, subtrahend: i32) -> FactQuestion {
    debug_assert!(minuend >= subtrahend, "{minuend} - {subtrahend} would go negative");
    FactQuestion::Subtraction {
        minuend,
        subtrahend,
        answer: minuend - subtrahend,
        category,
    }
}

/// Build a multi-addend fact; `answer` is derived.
pub fn multi_addend(category: Category, operands: Vec<i32>) -> FactQuestion {
    debug_assert!(operands.len() >= 2, "multi-addend fact needs at least 2 operands");
    let answer = operands.iter().sum();
    FactQuestion::MultiAddend { operands, answer, category }
}

/// Uniform pick from a non-empty slice.
pub fn pick<'a, T, R: Rng>(rng: &mut R, pool: &'a [T]) -> &'a T {
    &pool[rng.gen_range(0..pool.len())]
}

/// Uniform pick from an inclusive integer range.
pub fn pick_in<R: Rng>(rng: &mut R, low: i32, high: i32) -> i32 {
    rng.gen_range(low..=high)
}
