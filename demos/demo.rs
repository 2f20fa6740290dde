//! Full demo of every fact family in the catalogue.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `math_fact_gen` works end to end:
//!
//! 1. **Minimal API** — `FactRequest::new(category)` generates one fact with
//!    everything defaulted (entropy seed).
//!
//! 2. **Determinism** — the same category + the same seed produces the exact
//!    same fact, twice.
//!
//! 3. **The whole catalogue** — one fact per family with fixed seeds, so the
//!    output is reproducible. Limited families also print their complete
//!    enumeration.
//!
//! ## Key concepts demonstrated
//!
//! - `FactRequest::new(category)` — minimal one-argument constructor.
//! - `rng_seed: Some(u64)` makes the output fully deterministic.
//! - `Category::is_limited()` — limited families enumerate a small fixed
//!   sequence; unlimited families sample from a constrained domain.
//! - `FactQuestion::key()` — the compact identity used for no-repeat
//!   bookkeeping and mastery records.

use math_fact_gen::{enumerate_facts, generate_fact, Category, FactRequest, CATALOGUE};

/// Generate and print one fact for a family.
fn print_fact(category: Category, seed: u64) {
    let fact = generate_fact(FactRequest {
        category,
        rng_seed: Some(seed),
    });
    let kind = if category.is_limited() { "limited  " } else { "unlimited" };
    println!(
        "  {:<28} [{kind}]  {:<10}  key: {}",
        category.label(),
        fact.to_string(),
        fact.key()
    );
}

fn main() {
    // ── Minimal API ────────────────────────────────────────────────────────
    // FactRequest::new() only requires a category — the seed defaults to
    // entropy, so this line prints a different make-ten pair on every run.
    println!();
    println!("══ Minimal API: FactRequest::new() ══");
    println!();
    let fact = generate_fact(FactRequest::new(Category::MakeTen));
    println!("  Random make-ten fact: {fact}");
    println!();

    // ── Determinism ──────────────────────────────────────────────────────────
    // Same category + same seed = same fact.
    println!("══ Determinism: two_digit_no_carry seed=4004 ══");
    println!();
    for _ in 0..2 {
        let fact = generate_fact(FactRequest {
            category: Category::TwoDigitNoCarry,
            rng_seed: Some(4004),
        });
        println!("  {fact}");
    }
    println!();

    // ── The whole catalogue ──────────────────────────────────────────────────
    // One fact per family, fixed seeds for reproducible output. Families are
    // listed in presentation order: addition first, then subtraction.
    println!("══ All {} fact families ══", CATALOGUE.len());
    println!();
    for (i, descriptor) in CATALOGUE.iter().enumerate() {
        print_fact(descriptor.key, 1000 + i as u64);
    }
    println!();

    // ── Limited enumerations ─────────────────────────────────────────────────
    // A limited family is its enumeration; print two in full.
    println!("══ Limited enumerations ══");
    println!();
    for category in [Category::MakeTen, Category::SumsToFive] {
        let facts = enumerate_facts(category).expect("limited family");
        let rendered: Vec<String> = facts.iter().map(|f| f.key()).collect();
        println!(
            "  {:<12} ({} facts): {}",
            category.label(),
            facts.len(),
            rendered.join(", ")
        );
    }
    println!();
}
