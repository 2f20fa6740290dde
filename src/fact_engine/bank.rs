//! Static question banks built from host-persisted mastery items.
//!
//! A bank is just a parsed, deduplicated pool plus a count of the entries
//! that failed to parse. One malformed entry must never halt a session, so
//! bad entries are dropped — each with a `log::warn!` so bank quality can be
//! monitored by whatever logger the host installs.

use std::collections::HashSet;

use log::warn;

use crate::fact_engine::mastery::{parse_math_fact, FactMasteryItem};
use crate::fact_engine::models::FactQuestion;

#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    facts: Vec<FactQuestion>,
    excluded: usize,
}

impl QuestionBank {
    /// Parse every item's question text into a fact; exclude what does not
    /// parse and deduplicate by fact key, keeping first occurrence order.
    pub fn from_mastery_items(items: &[FactMasteryItem]) -> Self {
        let mut facts = Vec::with_capacity(items.len());
        let mut seen = HashSet::new();
        let mut excluded = 0usize;

        for item in items {
            match parse_math_fact(&item.question_text) {
                Some(fact) => {
                    if seen.insert(fact.key()) {
                        facts.push(fact);
                    }
                }
                None => {
                    excluded += 1;
                    warn!(
                        "excluding malformed question bank entry: {:?}",
                        item.question_text
                    );
                }
            }
        }

        QuestionBank { facts, excluded }
    }

    pub fn facts(&self) -> &[FactQuestion] {
        &self.facts
    }

    /// Move the parsed pool out, ready for `QuestionSelector::new`.
    pub fn into_pool(self) -> Vec<FactQuestion> {
        self.facts
    }

    /// How many entries were dropped as malformed.
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}
