//! Addition fact families.
//!
//! Limited families return their complete enumeration in a stable order;
//! unlimited families return one fresh uniform sample per call. Every sampler
//! constructs its valid domain directly, so no call can loop.

use rand::Rng;

use crate::fact_engine::helpers::{addition, pick_in};
use crate::fact_engine::models::{Category, FactQuestion};

// ---------------------------------------------------------------------------
// Limited families
// ---------------------------------------------------------------------------

/// `0 + n` for n = 1..=9.
pub fn plus_zero() -> Vec<FactQuestion> {
    (1..=9).map(|n| addition(Category::PlusZero, 0, n)).collect()
}

/// `n + 1` for n = 1..=9.
pub fn plus_one() -> Vec<FactQuestion> {
    (1..=9).map(|n| addition(Category::PlusOne, n, 1)).collect()
}

/// `n + 2` for n = 1..=9.
pub fn plus_two() -> Vec<FactQuestion> {
    (1..=9).map(|n| addition(Category::PlusTwo, n, 2)).collect()
}

/// `n + n` for n = 1..=9.
pub fn doubles() -> Vec<FactQuestion> {
    (1..=9).map(|n| addition(Category::Doubles, n, n)).collect()
}

/// `n + (n + 1)` for n = 1..=8.
pub fn near_doubles() -> Vec<FactQuestion> {
    (1..=8).map(|n| addition(Category::NearDoubles, n, n + 1)).collect()
}

/// The two pairs of distinct positive addends summing to 5: `1+4`, `2+3`.
pub fn sums_to_five() -> Vec<FactQuestion> {
    vec![
        addition(Category::SumsToFive, 1, 4),
        addition(Category::SumsToFive, 2, 3),
    ]
}

/// The 9 pairs summing to 10, largest first addend first: `9+1` down to `1+9`.
pub fn make_ten() -> Vec<FactQuestion> {
    (1..=9).rev().map(|n| addition(Category::MakeTen, n, 10 - n)).collect()
}

// ---------------------------------------------------------------------------
// Unlimited families
// ---------------------------------------------------------------------------

/// Single-digit pair whose sum crosses 10: both addends in 1..=9, sum > 10.
///
/// Picking the first addend in 2..=9 guarantees a partner exists
/// (`operand2 > 10 - operand1` has solutions in 1..=9 exactly when
/// `operand1 >= 2`).
pub fn sample_bridge_ten<R: Rng>(rng: &mut R) -> FactQuestion {
    let operand1 = pick_in(rng, 2, 9);
    let operand2 = pick_in(rng, 11 - operand1, 9);
    addition(Category::BridgeTen, operand1, operand2)
}

/// Any single-digit pair, addends in 1..=9.
pub fn sample_sums_within_twenty<R: Rng>(rng: &mut R) -> FactQuestion {
    addition(
        Category::SumsWithinTwenty,
        pick_in(rng, 1, 9),
        pick_in(rng, 1, 9),
    )
}

/// Two-digit number plus a positive multiple of 10, sum staying two-digit.
pub fn sample_two_digit_plus_tens<R: Rng>(rng: &mut R) -> FactQuestion {
    // operand1 in 10..=89 always leaves room for at least one ten.
    let operand1 = pick_in(rng, 10, 89);
    let max_tens = (99 - operand1) / 10;
    let operand2 = pick_in(rng, 1, max_tens) * 10;
    addition(Category::TwoDigitPlusTens, operand1, operand2)
}

/// Two-digit number plus a one-digit number with no carry:
/// `(operand1 % 10) + operand2 < 10`.
///
/// The two-digit operand's ones digit is drawn from 0..=8 so a valid
/// one-digit addend always exists.
pub fn sample_two_digit_plus_one_digit<R: Rng>(rng: &mut R) -> FactQuestion {
    let tens = pick_in(rng, 1, 9) * 10;
    let ones = pick_in(rng, 0, 8);
    let operand1 = tens + ones;
    let operand2 = pick_in(rng, 1, 9 - ones);
    addition(Category::TwoDigitPlusOneDigit, operand1, operand2)
}

/// Two two-digit numbers with no carry in either column.
pub fn sample_two_digit_no_carry<R: Rng>(rng: &mut R) -> FactQuestion {
    // Tens digits sum to at most 9 and ones digits sum to at most 9, so the
    // total never carries and stays two-digit.
    let tens1 = pick_in(rng, 1, 8);
    let tens2 = pick_in(rng, 1, 9 - tens1);
    let ones1 = pick_in(rng, 0, 9);
    let ones2 = pick_in(rng, 0, 9 - ones1);
    addition(
        Category::TwoDigitNoCarry,
        tens1 * 10 + ones1,
        tens2 * 10 + ones2,
    )
}
