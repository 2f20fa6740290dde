//! Subtraction fact families.
//!
//! Same shape as the addition module: limited families enumerate, unlimited
//! families sample from a directly constructed domain.

use rand::Rng;

use crate::fact_engine::helpers::{pick_in, subtraction};
use crate::fact_engine::models::{Category, FactQuestion};

// ---------------------------------------------------------------------------
// Limited families
// ---------------------------------------------------------------------------

/// `n - 0` for n = 1..=9.
pub fn minus_zero() -> Vec<FactQuestion> {
    (1..=9).map(|n| subtraction(Category::MinusZero, n, 0)).collect()
}

/// `n - 1` for n = 1..=9.
pub fn minus_one() -> Vec<FactQuestion> {
    (1..=9).map(|n| subtraction(Category::MinusOne, n, 1)).collect()
}

/// `n - n` for n = 1..=9.
pub fn minus_all() -> Vec<FactQuestion> {
    (1..=9).map(|n| subtraction(Category::MinusAll, n, n)).collect()
}

/// `10 - n` for n = 1..=9.
pub fn take_from_ten() -> Vec<FactQuestion> {
    (1..=9).map(|n| subtraction(Category::TakeFromTen, 10, n)).collect()
}

/// `2n - n` for n = 1..=9, the inverse of the doubles family.
pub fn halves() -> Vec<FactQuestion> {
    (1..=9).map(|n| subtraction(Category::Halves, 2 * n, n)).collect()
}

// ---------------------------------------------------------------------------
// Unlimited families
// ---------------------------------------------------------------------------

/// Any pair within 20: minuend 2..=18, subtrahend 1..=(minuend - 1).
pub fn sample_differences_within_twenty<R: Rng>(rng: &mut R) -> FactQuestion {
    let minuend = pick_in(rng, 2, 18);
    let subtrahend = pick_in(rng, 1, minuend - 1);
    subtraction(Category::DifferencesWithinTwenty, minuend, subtrahend)
}

/// Teens minuend crossing back over 10: minuend 11..=18, answer 1..=9.
///
/// The subtrahend must exceed `minuend - 10` to force the borrow, and stay
/// below the minuend so the answer is positive. That window is non-empty for
/// every minuend in 11..=18.
pub fn sample_bridge_ten_subtraction<R: Rng>(rng: &mut R) -> FactQuestion {
    let minuend = pick_in(rng, 11, 18);
    let subtrahend = pick_in(rng, minuend - 9, 9);
    subtraction(Category::BridgeTenSubtraction, minuend, subtrahend)
}

/// Two-digit number minus a positive multiple of 10, answer still positive.
pub fn sample_two_digit_minus_tens<R: Rng>(rng: &mut R) -> FactQuestion {
    // Minuend at least 21 guarantees a ten can be removed without reaching 0.
    let minuend = pick_in(rng, 21, 99);
    let max_tens = (minuend - 1) / 10;
    let subtrahend = pick_in(rng, 1, max_tens) * 10;
    subtraction(Category::TwoDigitMinusTens, minuend, subtrahend)
}

/// Two-digit number minus a one-digit number with no borrow:
/// `(minuend % 10) >= subtrahend >= 1`.
pub fn sample_two_digit_minus_one_digit<R: Rng>(rng: &mut R) -> FactQuestion {
    let tens = pick_in(rng, 1, 9) * 10;
    // Ones digit at least 1 so a valid subtrahend exists.
    let ones = pick_in(rng, 1, 9);
    let minuend = tens + ones;
    let subtrahend = pick_in(rng, 1, ones);
    subtraction(Category::TwoDigitMinusOneDigit, minuend, subtrahend)
}

/// Subtraction that borrows across a multiple of 10: the minuend's ones digit
/// is strictly smaller than the one-digit subtrahend.
pub fn sample_across_zero<R: Rng>(rng: &mut R) -> FactQuestion {
    // Two-digit minuend with ones digit 0..=8 and at least 2 tens, so the
    // borrow never drops the answer below 1.
    let tens = pick_in(rng, 2, 9) * 10;
    let ones = pick_in(rng, 0, 8);
    let minuend = tens + ones;
    let subtrahend = pick_in(rng, ones + 1, 9);
    subtraction(Category::AcrossZero, minuend, subtrahend)
}
