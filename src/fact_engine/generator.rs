use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::fact_engine::categories::{addition, multi_addend, subtraction};
use crate::fact_engine::helpers::pick;
use crate::fact_engine::models::{Category, FactQuestion, FactRequest};

/// Generate one fact for `request.category`.
///
/// Seeding with `Some(u64)` reproduces the exact same fact; `None` draws from
/// entropy. For limited categories the fact is a uniform pick from the
/// family's enumeration; for unlimited categories it is a fresh sample.
pub fn generate_fact(request: FactRequest) -> FactQuestion {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    sample_fact(request.category, &mut rng)
}

/// Core dispatch: routes to the correct category module.
pub fn sample_fact<R: Rng>(category: Category, rng: &mut R) -> FactQuestion {
    match category {
        // Limited families: uniform pick from the enumeration.
        Category::PlusZero => pick(rng, &addition::plus_zero()).clone(),
        Category::PlusOne => pick(rng, &addition::plus_one()).clone(),
        Category::PlusTwo => pick(rng, &addition::plus_two()).clone(),
        Category::Doubles => pick(rng, &addition::doubles()).clone(),
        Category::NearDoubles => pick(rng, &addition::near_doubles()).clone(),
        Category::SumsToFive => pick(rng, &addition::sums_to_five()).clone(),
        Category::MakeTen => pick(rng, &addition::make_ten()).clone(),
        Category::MinusZero => pick(rng, &subtraction::minus_zero()).clone(),
        Category::MinusOne => pick(rng, &subtraction::minus_one()).clone(),
        Category::MinusAll => pick(rng, &subtraction::minus_all()).clone(),
        Category::TakeFromTen => pick(rng, &subtraction::take_from_ten()).clone(),
        Category::Halves => pick(rng, &subtraction::halves()).clone(),

        // Unlimited families: fresh sample.
        Category::BridgeTen => addition::sample_bridge_ten(rng),
        Category::SumsWithinTwenty => addition::sample_sums_within_twenty(rng),
        Category::TwoDigitPlusTens => addition::sample_two_digit_plus_tens(rng),
        Category::TwoDigitPlusOneDigit => addition::sample_two_digit_plus_one_digit(rng),
        Category::TwoDigitNoCarry => addition::sample_two_digit_no_carry(rng),
        Category::ThreeAddendsMakeTen => multi_addend::sample_three_addends_make_ten(rng),
        Category::DifferencesWithinTwenty => subtraction::sample_differences_within_twenty(rng),
        Category::BridgeTenSubtraction => subtraction::sample_bridge_ten_subtraction(rng),
        Category::TwoDigitMinusTens => subtraction::sample_two_digit_minus_tens(rng),
        Category::TwoDigitMinusOneDigit => subtraction::sample_two_digit_minus_one_digit(rng),
        Category::AcrossZero => subtraction::sample_across_zero(rng),
    }
}

/// Complete enumeration for a limited category, `None` for unlimited ones.
///
/// Orders are stable and specified per family (see the category modules);
/// tests and sequential drills rely on them.
pub fn enumerate_facts(category: Category) -> Option<Vec<FactQuestion>> {
    match category {
        Category::PlusZero => Some(addition::plus_zero()),
        Category::PlusOne => Some(addition::plus_one()),
        Category::PlusTwo => Some(addition::plus_two()),
        Category::Doubles => Some(addition::doubles()),
        Category::NearDoubles => Some(addition::near_doubles()),
        Category::SumsToFive => Some(addition::sums_to_five()),
        Category::MakeTen => Some(addition::make_ten()),
        Category::MinusZero => Some(subtraction::minus_zero()),
        Category::MinusOne => Some(subtraction::minus_one()),
        Category::MinusAll => Some(subtraction::minus_all()),
        Category::TakeFromTen => Some(subtraction::take_from_ten()),
        Category::Halves => Some(subtraction::halves()),
        Category::BridgeTen
        | Category::SumsWithinTwenty
        | Category::TwoDigitPlusTens
        | Category::TwoDigitPlusOneDigit
        | Category::TwoDigitNoCarry
        | Category::ThreeAddendsMakeTen
        | Category::DifferencesWithinTwenty
        | Category::BridgeTenSubtraction
        | Category::TwoDigitMinusTens
        | Category::TwoDigitMinusOneDigit
        | Category::AcrossZero => None,
    }
}

/// Build a question pool of up to `size` key-distinct facts for a category.
///
/// Limited categories return their full enumeration truncated to `size`.
/// Unlimited categories sample until `size` distinct keys are collected, with
/// a bounded attempt budget so a small domain (relative to `size`) returns a
/// shorter pool instead of spinning.
pub fn build_pool<R: Rng>(category: Category, rng: &mut R, size: usize) -> Vec<FactQuestion> {
    if let Some(mut facts) = enumerate_facts(category) {
        facts.truncate(size);
        return facts;
    }

    let mut pool = Vec::with_capacity(size);
    let mut seen = HashSet::new();
    let budget = size.saturating_mul(20).max(64);
    for _ in 0..budget {
        if pool.len() == size {
            break;
        }
        let fact = sample_fact(category, rng);
        if seen.insert(fact.key()) {
            pool.push(fact);
        }
    }
    pool
}
