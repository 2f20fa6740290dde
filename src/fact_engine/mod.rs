//! Core fact engine — fact generation, adaptive selection, mastery tracking.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | All shared types: facts, categories, catalogue, responses |
//! | `helpers`    | Fact constructors and bounded-domain sampling utilities |
//! | `categories` | One generator per fact family, grouped by operation |
//! | `generator`  | Dispatch entry points `generate_fact` / `enumerate_facts` / `build_pool` |
//! | `selector`   | `QuestionSelector` — adaptive per-session question selection |
//! | `mastery`    | `FactMasteryItem`, `parse_math_fact`, `MasteryTracker` |
//! | `bank`       | Question banks parsed from host-persisted mastery items |

pub mod bank;
pub mod categories;
pub mod generator;
pub mod helpers;
pub mod mastery;
pub mod models;
pub mod selector;

// Re-export the public API surface so callers can use
// `fact_engine::generate_fact` without reaching into sub-modules.
pub use bank::QuestionBank;
pub use generator::{build_pool, enumerate_facts, generate_fact, sample_fact};
pub use mastery::{parse_math_fact, FactMasteryItem, MasteryTracker};
pub use models::{
    Category, FactQuestion, FactRequest, Operation, StudentResponse, TopicDescriptor, TopicError,
    CATALOGUE,
};
pub use selector::{filters, FactFilter, QuestionSelector, Selection, SelectorConfig, SessionPhase};
