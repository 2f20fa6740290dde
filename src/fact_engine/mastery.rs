//! Long-term mastery tracking across sessions.
//!
//! The rendering host persists [`FactMasteryItem`] records between sessions
//! (storage is its concern, not ours) and hands them back when a new session
//! starts. `parse_math_fact` turns the item's encoded question text back into
//! a [`FactQuestion`]; [`MasteryTracker`] keeps the per-fact counters the
//! selector updates as responses come in.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::fact_engine::models::{Category, FactQuestion};

/// Consecutive correct answers required before a fact counts as mastered.
pub const DEFAULT_MASTERY_STREAK: u32 = 3;

/// One fact's persisted mastery record, as stored by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactMasteryItem {
    /// Encoded question text, e.g. `"7+5"` or `"12-4"`.
    pub question_text: String,
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub mastered: bool,
}

/// Parse an encoded question text (`"7+5"`, `"12-4"`, `"2+8+3"`) into a fact.
///
/// Whitespace around operands is tolerated. Returns `None` for anything that
/// does not scan: empty operands, non-numeric text, a lone number, negative
/// operands, negative differences, sums that overflow `i32`, or mixed
/// operators. The original family tag is not recoverable from the text, so
/// parsed facts land in the generic `sums_within_twenty` /
/// `differences_within_twenty` families.
pub fn parse_math_fact(text: &str) -> Option<FactQuestion> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    // Subtraction first: a '-' only ever appears as the single operator
    // (operands are non-negative).
    if text.contains('-') {
        let mut parts = text.splitn(2, '-');
        let minuend: i32 = parts.next()?.trim().parse().ok().filter(|n| *n >= 0)?;
        let subtrahend: i32 = parts.next()?.trim().parse().ok().filter(|n| *n >= 0)?;
        if subtrahend > minuend {
            return None;
        }
        return Some(FactQuestion::Subtraction {
            minuend,
            subtrahend,
            answer: minuend - subtrahend,
            category: Category::DifferencesWithinTwenty,
        });
    }

    if text.contains('+') {
        let operands: Option<Vec<i32>> = text
            .split('+')
            .map(|p| p.trim().parse::<i32>().ok().filter(|n| *n >= 0))
            .collect();
        let operands = operands?;
        if operands.len() < 2 {
            return None;
        }
        // Checked sum: an out-of-range entry is malformed, not a panic.
        let answer = operands
            .iter()
            .try_fold(0i32, |acc, n| acc.checked_add(*n))?;
        return Some(match operands.as_slice() {
            [operand1, operand2] => FactQuestion::Addition {
                operand1: *operand1,
                operand2: *operand2,
                answer,
                category: Category::SumsWithinTwenty,
            },
            _ => FactQuestion::MultiAddend {
                operands,
                answer,
                category: Category::SumsWithinTwenty,
            },
        });
    }

    None
}

// ---------------------------------------------------------------------------
// Tracker
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FactRecord {
    correct: u32,
    incorrect: u32,
    streak: u32,
}

/// Per-fact correctness counters with a consecutive-correct mastery rule.
///
/// Owned by the selector; survives soft resets, cleared by hard resets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasteryTracker {
    records: HashMap<String, FactRecord>,
    streak_to_master: u32,
}

impl Default for MasteryTracker {
    fn default() -> Self {
        MasteryTracker::new(DEFAULT_MASTERY_STREAK)
    }
}

impl MasteryTracker {
    pub fn new(streak_to_master: u32) -> Self {
        MasteryTracker {
            records: HashMap::new(),
            streak_to_master,
        }
    }

    /// Rebuild a tracker from the host's persisted items. Malformed entries
    /// are skipped here too; the bank module reports them.
    pub fn from_items(items: &[FactMasteryItem], streak_to_master: u32) -> Self {
        let mut tracker = MasteryTracker::new(streak_to_master);
        for item in items {
            let Some(fact) = parse_math_fact(&item.question_text) else {
                continue;
            };
            tracker.records.insert(
                fact.key(),
                FactRecord {
                    correct: item.correct_count,
                    incorrect: item.incorrect_count,
                    // Persisted items carry a flag, not the streak; treat a
                    // mastered item as already at threshold.
                    streak: if item.mastered { streak_to_master } else { 0 },
                },
            );
        }
        tracker
    }

    /// Record one response for a fact key.
    pub fn record(&mut self, fact_key: &str, correct: bool) {
        let record = self.records.entry(fact_key.to_string()).or_default();
        if correct {
            record.correct += 1;
            record.streak += 1;
        } else {
            record.incorrect += 1;
            record.streak = 0;
        }
    }

    pub fn is_mastered(&self, fact_key: &str) -> bool {
        self.records
            .get(fact_key)
            .map(|r| r.streak >= self.streak_to_master)
            .unwrap_or(false)
    }

    /// Keys currently at or past the mastery threshold.
    pub fn mastered_keys(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|(_, r)| r.streak >= self.streak_to_master)
            .map(|(k, _)| k.clone())
            .collect()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Export for host persistence.
    pub fn to_items(&self) -> Vec<FactMasteryItem> {
        let mut items: Vec<FactMasteryItem> = self
            .records
            .iter()
            .map(|(key, r)| FactMasteryItem {
                question_text: key.clone(),
                correct_count: r.correct,
                incorrect_count: r.incorrect,
                mastered: r.streak >= self.streak_to_master,
            })
            .collect();
        items.sort_by(|a, b| a.question_text.cmp(&b.question_text));
        items
    }
}
