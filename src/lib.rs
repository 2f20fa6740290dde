//! # math_fact_gen
//!
//! A fully offline math-fact drill engine: arithmetic fact generators for a
//! catalogue of pedagogical fact families, plus an adaptive question selector
//! that runs one learner's drill session.
//!
//! This library backs browser-based educational mini-games. The games own all
//! rendering, audio, and accessibility; this crate owns the questions — what
//! to ask, in what order, and when the session is over.
//!
//! ## How it works
//!
//! 1. Pick a [`Category`] (or parse a topic key from game configuration —
//!    unknown keys fail fast with [`TopicError`]).
//! 2. Limited families like Make 10 enumerate their complete fact set via
//!    [`enumerate_facts`]; unlimited families like Bridge 10 produce one
//!    fresh constraint-satisfying sample per [`generate_fact`] call.
//! 3. Build a [`QuestionSelector`] over a pool and call
//!    [`QuestionSelector::next_question`] in a loop: it avoids repeats within
//!    the session, honors an optional candidate filter, recycles missed facts
//!    for remediation, and signals the end of the session with
//!    [`Selection::Exhausted`].
//! 4. Report each outcome back as a [`StudentResponse`] (or via the explicit
//!    scoring hooks) to keep the progress counters and the
//!    [`MasteryTracker`] current.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same fact or tie-break sequence every time — useful for tests and for
//!   replaying sessions.
//! - **Bounded sampling**: every randomized generator constructs its valid
//!   domain directly and picks uniformly; there are no reject-and-resample
//!   loops that could spin on an empty domain.
//! - **Distinct terminal signals**: a filter that rejects every candidate
//!   yields [`Selection::FilteredOut`], genuine pool exhaustion yields
//!   [`Selection::Exhausted`] — hosts can relax a filter without ending the
//!   session.
//!
//! ## Quick start
//!
//! ```rust
//! use math_fact_gen::{
//!     enumerate_facts, generate_fact, Category, FactRequest, QuestionSelector,
//!     Selection, SelectorConfig, StudentResponse,
//! };
//!
//! // One fresh Bridge 10 fact, reproducible from a seed:
//! let fact = generate_fact(FactRequest {
//!     category: Category::BridgeTen,
//!     rng_seed: Some(42),
//! });
//! println!("Q: {} = ?", fact.prompt());
//!
//! // A five-question Make 10 session:
//! let pool = enumerate_facts(Category::MakeTen).unwrap();
//! let mut selector = QuestionSelector::new(pool, SelectorConfig {
//!     total_questions: 5,
//!     rng_seed: Some(7),
//!     ..SelectorConfig::default()
//! });
//!
//! let mut prior = None;
//! while let Selection::Question(q) = selector.next_question(prior.take(), None) {
//!     // the learner answers...
//!     prior = Some(StudentResponse::new(&q, true, 1800));
//! }
//! println!("{}/{} correct", selector.total_correct(), selector.total_questions_answered());
//! ```

pub mod fact_engine;
pub mod host_adapter;

// Convenience re-exports so callers can use `math_fact_gen::generate_fact`
// directly without reaching into `fact_engine::`.
pub use fact_engine::{
    build_pool, enumerate_facts, filters, generate_fact, parse_math_fact, sample_fact, Category,
    FactFilter, FactMasteryItem, FactQuestion, FactRequest, MasteryTracker, Operation,
    QuestionBank, QuestionSelector, Selection, SelectorConfig, SessionPhase, StudentResponse,
    TopicDescriptor, TopicError, CATALOGUE,
};
