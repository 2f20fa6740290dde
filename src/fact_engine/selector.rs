//! Adaptive question selection for one drill session.
//!
//! A [`QuestionSelector`] owns its whole session: the immutable fact pool it
//! was built over, the asked-this-session key set, progress counters, a
//! remediation queue of missed facts, and the long-term [`MasteryTracker`].
//! There is no global state; a host that wants two concurrent sessions
//! constructs two selectors.
//!
//! ## Counters
//!
//! Two counters advance at different moments and both are exposed:
//!
//! - *issued* — incremented every time a question is handed out. Drives the
//!   session ceiling: once `issued == total_questions` the session is over,
//!   answered or not. Calling [`QuestionSelector::next_question`] twice
//!   without an intervening response advances it twice.
//! - *answered* (and *correct*) — incremented when a response is recorded,
//!   either via the `prior` parameter or the explicit scoring hooks.

use std::collections::{HashSet, VecDeque};
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::fact_engine::generator::build_pool;
use crate::fact_engine::mastery::{MasteryTracker, DEFAULT_MASTERY_STREAK};
use crate::fact_engine::models::{Category, FactQuestion, StudentResponse, TopicError};

/// Candidate predicate applied before selection. `true` keeps the fact.
pub type FactFilter = dyn Fn(&FactQuestion) -> bool;

/// Why `next_question` did or did not produce a question.
///
/// `FilteredOut` and `Exhausted` are deliberately distinct: a filter that
/// rejects every remaining candidate is recoverable (relax the filter and ask
/// again), genuine exhaustion is not. Callers that do not care collapse both
/// with [`Selection::into_question`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Question(FactQuestion),
    /// Unseen candidates remain, but the active filter rejected all of them.
    FilteredOut,
    /// The session ceiling was reached or no unseen candidate is left.
    Exhausted,
}

impl Selection {
    pub fn into_question(self) -> Option<FactQuestion> {
        match self {
            Selection::Question(q) => Some(q),
            Selection::FilteredOut | Selection::Exhausted => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Selection::Exhausted)
    }
}

/// Session lifecycle. `Exhausted` is terminal until a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Idle,
    InProgress,
    Exhausted,
}

/// Selector construction parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Session ends after this many questions have been issued.
    pub total_questions: usize,
    /// `Some(seed)` makes tie-breaks reproducible; `None` uses entropy.
    pub rng_seed: Option<u64>,
    /// Consecutive correct answers before a fact counts as mastered.
    pub mastery_streak: u32,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            total_questions: 10,
            rng_seed: None,
            mastery_streak: DEFAULT_MASTERY_STREAK,
        }
    }
}

impl SelectorConfig {
    pub fn with_total(total_questions: usize) -> Self {
        SelectorConfig {
            total_questions,
            ..SelectorConfig::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct QuestionSelector {
    pool: Vec<FactQuestion>,
    config: SelectorConfig,
    rng: StdRng,
    phase: SessionPhase,
    asked: HashSet<String>,
    last_issued: Option<String>,
    issued: usize,
    answered: usize,
    correct: usize,
    retry_queue: VecDeque<FactQuestion>,
    mastery: MasteryTracker,
}

impl QuestionSelector {
    /// Build a selector over an explicit pool (a static question bank or the
    /// output of the fact generators).
    pub fn new(pool: Vec<FactQuestion>, config: SelectorConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mastery = MasteryTracker::new(config.mastery_streak);
        QuestionSelector {
            pool,
            config,
            rng,
            phase: SessionPhase::Idle,
            asked: HashSet::new(),
            last_issued: None,
            issued: 0,
            answered: 0,
            correct: 0,
            retry_queue: VecDeque::new(),
            mastery,
        }
    }

    /// Build a selector for a single category.
    ///
    /// Limited categories contribute their full enumeration; unlimited ones a
    /// freshly sampled pool of `total_questions` key-distinct facts.
    pub fn for_category(category: Category, config: SelectorConfig) -> Self {
        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let pool = build_pool(category, &mut rng, config.total_questions);
        let mut selector = QuestionSelector::new(pool, config);
        selector.rng = rng;
        selector
    }

    /// Build a selector from an externally supplied topic key.
    ///
    /// Fails fast on an unrecognized key instead of defaulting — topic keys
    /// come from game configuration, and a typo there is a bug worth
    /// surfacing at construction.
    pub fn for_topic(topic_key: &str, config: SelectorConfig) -> Result<Self, TopicError> {
        let category = Category::from_str(topic_key)?;
        Ok(QuestionSelector::for_category(category, config))
    }

    /// Resume with mastery data carried over from an earlier session.
    pub fn with_mastery(mut self, mastery: MasteryTracker) -> Self {
        self.mastery = mastery;
        self
    }

    // -- selection ----------------------------------------------------------

    /// Pick the next question to present.
    ///
    /// Records `prior` (if given) against the previously issued fact first,
    /// then selects: uniform-random among unseen candidates passing `filter`;
    /// once no unseen candidate remains, missed facts are recycled from the
    /// remediation queue; otherwise a terminal [`Selection`] is returned.
    ///
    /// Not idempotent — every `Question` returned advances the session.
    pub fn next_question(
        &mut self,
        prior: Option<StudentResponse>,
        filter: Option<&FactFilter>,
    ) -> Selection {
        if let Some(response) = prior {
            self.record_response(&response);
        }

        if self.phase == SessionPhase::Exhausted {
            return Selection::Exhausted;
        }
        if self.issued >= self.config.total_questions {
            self.phase = SessionPhase::Exhausted;
            return Selection::Exhausted;
        }

        let unseen: Vec<usize> = (0..self.pool.len())
            .filter(|&i| !self.asked.contains(&self.pool[i].key()))
            .collect();
        let eligible: Vec<usize> = unseen
            .iter()
            .copied()
            .filter(|&i| filter.map_or(true, |f| f(&self.pool[i])))
            .collect();

        if !eligible.is_empty() {
            let index = eligible[self.rng.gen_range(0..eligible.len())];
            let question = self.pool[index].clone();
            return Selection::Question(self.issue(question));
        }

        // No fresh candidate: remediate the oldest missed fact that still
        // passes the filter.
        let retry = self
            .retry_queue
            .iter()
            .position(|q| filter.map_or(true, |f| f(q)))
            .and_then(|i| self.retry_queue.remove(i));
        if let Some(question) = retry {
            return Selection::Question(self.issue(question));
        }

        if !unseen.is_empty() || !self.retry_queue.is_empty() {
            // Candidates exist; only the filter stands in the way.
            return Selection::FilteredOut;
        }
        self.phase = SessionPhase::Exhausted;
        Selection::Exhausted
    }

    fn issue(&mut self, question: FactQuestion) -> FactQuestion {
        self.asked.insert(question.key());
        self.last_issued = Some(question.key());
        self.issued += 1;
        self.phase = SessionPhase::InProgress;
        question
    }

    // -- scoring ------------------------------------------------------------

    fn record_response(&mut self, response: &StudentResponse) {
        self.answered += 1;
        if response.correct {
            self.correct += 1;
        } else if let Some(fact) = self
            .pool
            .iter()
            .find(|q| q.key() == response.fact_key)
            .cloned()
        {
            self.retry_queue.push_back(fact);
        }
        self.mastery.record(&response.fact_key, response.correct);
    }

    /// Score the most recently issued question as correct.
    ///
    /// For hosts that do their own bookkeeping instead of passing a
    /// [`StudentResponse`] into `next_question`.
    pub fn answer_correctly(&mut self) {
        self.answered += 1;
        self.correct += 1;
        if let Some(key) = self.last_issued.clone() {
            self.mastery.record(&key, true);
        }
    }

    /// Score `question` as missed and queue it for remediation.
    pub fn answer_incorrectly(&mut self, question: &FactQuestion) {
        self.answered += 1;
        self.mastery.record(&question.key(), false);
        self.retry_queue.push_back(question.clone());
    }

    // -- lifecycle ----------------------------------------------------------

    /// Return to `Idle`, clearing session progress. The no-repeat constraint
    /// applies only between resets, so a fresh session may re-draw facts
    /// asked before the reset. A hard reset additionally wipes the mastery
    /// tracker; a soft reset keeps it for cross-session continuity.
    pub fn reset(&mut self, hard: bool) {
        self.phase = SessionPhase::Idle;
        self.asked.clear();
        self.last_issued = None;
        self.issued = 0;
        self.answered = 0;
        self.correct = 0;
        self.retry_queue.clear();
        if hard {
            self.mastery.clear();
        }
    }

    // -- read-only accessors ------------------------------------------------

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Questions answered so far (progress-bar numerator for hosts that
    /// advance on answers).
    pub fn total_questions_answered(&self) -> usize {
        self.answered
    }

    /// Configured session length.
    pub fn total_questions(&self) -> usize {
        self.config.total_questions
    }

    pub fn total_questions_issued(&self) -> usize {
        self.issued
    }

    pub fn total_correct(&self) -> usize {
        self.correct
    }

    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    pub fn retry_pending(&self) -> usize {
        self.retry_queue.len()
    }

    pub fn mastery(&self) -> &MasteryTracker {
        &self.mastery
    }
}

// ---------------------------------------------------------------------------
// Filter builders
// ---------------------------------------------------------------------------

/// Ready-made candidate filters for `next_question`.
pub mod filters {
    use super::MasteryTracker;
    use crate::fact_engine::models::FactQuestion;
    use std::collections::HashSet;

    /// Reject facts with any zero operand.
    pub fn no_zero_operand() -> impl Fn(&FactQuestion) -> bool {
        |q: &FactQuestion| !q.has_zero_operand()
    }

    /// Keep only facts whose operands all appear in `allowed` — the
    /// topic-specific operand allow-list used by instructional sequences.
    pub fn operand_allowlist(allowed: &[i32]) -> impl Fn(&FactQuestion) -> bool {
        let allowed: HashSet<i32> = allowed.iter().copied().collect();
        move |q: &FactQuestion| q.operands().iter().all(|n| allowed.contains(n))
    }

    /// Keep only facts not yet mastered. Snapshots the tracker's mastered
    /// keys, so build it fresh when mastery may have advanced.
    pub fn unmastered(tracker: &MasteryTracker) -> impl Fn(&FactQuestion) -> bool {
        let mastered: HashSet<String> = tracker.mastered_keys().into_iter().collect();
        move |q: &FactQuestion| !mastered.contains(&q.key())
    }
}
