//! Multi-addend fact families.
//!
//! Drills the "make 10 first" strategy: three single-digit addends where two
//! of them pair to 10, presented in a shuffled order so the learner has to
//! spot the pair.

use rand::Rng;

use crate::fact_engine::helpers::{multi_addend, pick_in};
use crate::fact_engine::models::{Category, FactQuestion};

/// Three addends in 1..=9 of which two sum to exactly 10.
pub fn sample_three_addends_make_ten<R: Rng>(rng: &mut R) -> FactQuestion {
    let a = pick_in(rng, 1, 9);
    let b = 10 - a;
    let c = pick_in(rng, 1, 9);

    // Place the distractor at a random position so the ten-pair is not
    // always adjacent.
    let operands = match rng.gen_range(0..3) {
        0 => vec![c, a, b],
        1 => vec![a, c, b],
        _ => vec![a, b, c],
    };
    multi_addend(Category::ThreeAddendsMakeTen, operands)
}
