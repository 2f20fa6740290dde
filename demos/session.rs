//! A complete scripted drill session, start to finish.
//!
//! Run with: `cargo run --example session`
//!
//! Walks through the adaptive selection loop the way a game host would drive
//! it:
//!
//! 1. Build the topic menu a host renders before a session starts.
//! 2. Run a seeded make-ten session with a simulated student who misses
//!    every fact containing a 7, and watch the missed facts come back for
//!    remediation after the fresh pool runs out.
//! 3. Re-run with a candidate filter and see `FilteredOut` (recoverable)
//!    versus `Exhausted` (terminal).
//! 4. Export the mastery records a host would persist between sessions.

use math_fact_gen::host_adapter::{to_host_progress, to_host_question, to_host_topic_menu};
use math_fact_gen::{
    filters, FactQuestion, QuestionSelector, Selection, SelectorConfig, StudentResponse,
};

/// The simulated student: wrong whenever a 7 appears, otherwise right.
fn student_answers(question: &FactQuestion) -> bool {
    !question.operands().contains(&7)
}

fn main() {
    // ── Topic menu ─────────────────────────────────────────────────────────
    // The JSON payload a host renders as its topic picker.
    println!();
    println!("══ Topic menu (first 5 entries) ══");
    println!();
    let menu = to_host_topic_menu();
    for item in menu.as_array().expect("menu is an array").iter().take(5) {
        println!(
            "  {:<12} {:<16} limited: {}",
            item["key"].as_str().unwrap_or("?"),
            item["label"].as_str().unwrap_or("?"),
            item["limited"]
        );
    }
    println!("  …");
    println!();

    // ── A full session ───────────────────────────────────────────────────────
    // Nine make-ten questions, seeded so every run of this demo is identical.
    println!("══ Make 10 session, 9 questions, seed=42 ══");
    println!();
    let config = SelectorConfig {
        total_questions: 9,
        rng_seed: Some(42),
        ..SelectorConfig::default()
    };
    let mut selector =
        QuestionSelector::for_topic("make_ten", config.clone()).expect("known topic key");

    let mut prior: Option<StudentResponse> = None;
    let mut turn = 0;
    loop {
        match selector.next_question(prior.take(), None) {
            Selection::Question(question) => {
                turn += 1;
                let correct = student_answers(&question);
                let mark = if correct { "✓" } else { "✗ (queued for retry)" };
                println!("  Q{turn}: {} = ?   student: {mark}", question.prompt());
                prior = Some(StudentResponse::new(&question, correct, 1800));
            }
            Selection::FilteredOut => unreachable!("no filter active"),
            Selection::Exhausted => break,
        }
    }
    // The final response is still pending; hand it in.
    if let Some(response) = prior.take() {
        selector.next_question(Some(response), None);
    }
    println!();
    println!("  Progress payload: {}", to_host_progress(&selector));
    println!();
    let mastery_items = selector.mastery().to_items();

    // ── Filters ──────────────────────────────────────────────────────────────
    // The same session with an operand allow-list. When the filter rejects
    // every remaining candidate the selector says FilteredOut, not Exhausted:
    // the host may relax the filter and continue.
    println!("══ Filtered session: operands in {{2, 4, 6, 8}} only ══");
    println!();
    let mut selector = QuestionSelector::for_topic("make_ten", config).expect("known topic key");
    let filter = filters::operand_allowlist(&[2, 4, 6, 8]);
    loop {
        match selector.next_question(None, Some(&filter)) {
            Selection::Question(question) => {
                println!("  drew {}", question.key());
            }
            Selection::FilteredOut => {
                println!("  FilteredOut — candidates remain, the filter rejects them all");
                break;
            }
            Selection::Exhausted => {
                println!("  Exhausted");
                break;
            }
        }
    }
    // Dropping the filter resumes the same session.
    if let Selection::Question(question) = selector.next_question(None, None) {
        println!("  filter dropped, session resumes with {}", question.key());
        println!("  host payload: {}", to_host_question(&question));
    }
    println!();

    // ── Mastery export ───────────────────────────────────────────────────────
    // What the host persists between sessions.
    println!("══ Mastery records after the first session ══");
    println!();
    for item in mastery_items {
        println!(
            "  {:<8} correct: {}  incorrect: {}  mastered: {}",
            item.question_text, item.correct_count, item.incorrect_count, item.mastered
        );
    }
    println!();
}
