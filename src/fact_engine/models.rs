use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Which arithmetic operation a category drills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Addition,
    Subtraction,
}

/// One pedagogical fact family.
///
/// Every category is either *limited* (a small, fully enumerable set of
/// facts, e.g. the 9 make-ten pairs) or *unlimited* (a sampling rule over a
/// large domain, e.g. random two-digit no-carry pairs). The flag drives
/// whether [`enumerate_facts`](crate::fact_engine::generator::enumerate_facts)
/// returns a sequence or the caller must sample repeatedly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    // Addition, limited
    PlusZero,
    PlusOne,
    PlusTwo,
    Doubles,
    NearDoubles,
    SumsToFive,
    MakeTen,
    // Addition, unlimited
    BridgeTen,
    SumsWithinTwenty,
    TwoDigitPlusTens,
    TwoDigitPlusOneDigit,
    TwoDigitNoCarry,
    ThreeAddendsMakeTen,
    // Subtraction, limited
    MinusZero,
    MinusOne,
    MinusAll,
    TakeFromTen,
    Halves,
    // Subtraction, unlimited
    DifferencesWithinTwenty,
    BridgeTenSubtraction,
    TwoDigitMinusTens,
    TwoDigitMinusOneDigit,
    AcrossZero,
}

impl Category {
    /// Stable snake_case key, as used in game configuration and URLs.
    pub fn key(self) -> &'static str {
        match self {
            Category::PlusZero              => "plus_zero",
            Category::PlusOne               => "plus_one",
            Category::PlusTwo               => "plus_two",
            Category::Doubles               => "doubles",
            Category::NearDoubles           => "near_doubles",
            Category::SumsToFive            => "sums_to_five",
            Category::MakeTen               => "make_ten",
            Category::BridgeTen             => "bridge_ten",
            Category::SumsWithinTwenty      => "sums_within_twenty",
            Category::TwoDigitPlusTens      => "two_digit_plus_tens",
            Category::TwoDigitPlusOneDigit  => "two_digit_plus_one_digit",
            Category::TwoDigitNoCarry       => "two_digit_no_carry",
            Category::ThreeAddendsMakeTen   => "three_addends_make_ten",
            Category::MinusZero             => "minus_zero",
            Category::MinusOne              => "minus_one",
            Category::MinusAll              => "minus_all",
            Category::TakeFromTen           => "take_from_ten",
            Category::Halves                => "halves",
            Category::DifferencesWithinTwenty => "differences_within_twenty",
            Category::BridgeTenSubtraction  => "bridge_ten_subtraction",
            Category::TwoDigitMinusTens     => "two_digit_minus_tens",
            Category::TwoDigitMinusOneDigit => "two_digit_minus_one_digit",
            Category::AcrossZero            => "across_zero",
        }
    }

    /// Human-readable label for topic menus.
    pub fn label(self) -> &'static str {
        match self {
            Category::PlusZero              => "Plus 0",
            Category::PlusOne               => "Plus 1",
            Category::PlusTwo               => "Plus 2",
            Category::Doubles               => "Doubles",
            Category::NearDoubles           => "Near Doubles",
            Category::SumsToFive            => "Sums to 5",
            Category::MakeTen               => "Make 10",
            Category::BridgeTen             => "Bridge 10",
            Category::SumsWithinTwenty      => "Sums Within 20",
            Category::TwoDigitPlusTens      => "Two-Digit Plus Tens",
            Category::TwoDigitPlusOneDigit  => "Two-Digit Plus One-Digit",
            Category::TwoDigitNoCarry       => "Two-Digit No Carry",
            Category::ThreeAddendsMakeTen   => "Three Addends (Make 10 First)",
            Category::MinusZero             => "Minus 0",
            Category::MinusOne              => "Minus 1",
            Category::MinusAll              => "Minus All",
            Category::TakeFromTen           => "Take From 10",
            Category::Halves                => "Halves",
            Category::DifferencesWithinTwenty => "Differences Within 20",
            Category::BridgeTenSubtraction  => "Bridge 10 Subtraction",
            Category::TwoDigitMinusTens     => "Two-Digit Minus Tens",
            Category::TwoDigitMinusOneDigit => "Two-Digit Minus One-Digit",
            Category::AcrossZero            => "Across Zero",
        }
    }

    /// True for categories whose full fact set is small and enumerable.
    pub fn is_limited(self) -> bool {
        matches!(
            self,
            Category::PlusZero
                | Category::PlusOne
                | Category::PlusTwo
                | Category::Doubles
                | Category::NearDoubles
                | Category::SumsToFive
                | Category::MakeTen
                | Category::MinusZero
                | Category::MinusOne
                | Category::MinusAll
                | Category::TakeFromTen
                | Category::Halves
        )
    }

    pub fn operation(self) -> Operation {
        match self {
            Category::PlusZero
            | Category::PlusOne
            | Category::PlusTwo
            | Category::Doubles
            | Category::NearDoubles
            | Category::SumsToFive
            | Category::MakeTen
            | Category::BridgeTen
            | Category::SumsWithinTwenty
            | Category::TwoDigitPlusTens
            | Category::TwoDigitPlusOneDigit
            | Category::TwoDigitNoCarry
            | Category::ThreeAddendsMakeTen => Operation::Addition,
            Category::MinusZero
            | Category::MinusOne
            | Category::MinusAll
            | Category::TakeFromTen
            | Category::Halves
            | Category::DifferencesWithinTwenty
            | Category::BridgeTenSubtraction
            | Category::TwoDigitMinusTens
            | Category::TwoDigitMinusOneDigit
            | Category::AcrossZero => Operation::Subtraction,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Unrecognized topic key supplied by game configuration.
///
/// Topic keys arrive from outside (URL query parameters, game config) and the
/// recognized set is closed, so an unknown key is a caller bug — surfaced
/// immediately rather than silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicError {
    #[error("unrecognized topic key: {0:?}")]
    UnknownTopic(String),
}

impl FromStr for Category {
    type Err = TopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOGUE
            .iter()
            .find(|d| d.key.key() == s)
            .map(|d| d.key)
            .ok_or_else(|| TopicError::UnknownTopic(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Topic catalogue
// ---------------------------------------------------------------------------

/// Static metadata describing one category, used to build topic menus and to
/// decide how many unique questions a category can supply before repeats
/// become unavoidable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicDescriptor {
    pub key: Category,
    pub label: &'static str,
    pub limited: bool,
}

const fn descriptor(key: Category, label: &'static str, limited: bool) -> TopicDescriptor {
    TopicDescriptor { key, label, limited }
}

/// Every category in presentation order: addition families first (easiest to
/// hardest), then subtraction.
pub const CATALOGUE: &[TopicDescriptor] = &[
    descriptor(Category::PlusZero, "Plus 0", true),
    descriptor(Category::PlusOne, "Plus 1", true),
    descriptor(Category::PlusTwo, "Plus 2", true),
    descriptor(Category::Doubles, "Doubles", true),
    descriptor(Category::NearDoubles, "Near Doubles", true),
    descriptor(Category::SumsToFive, "Sums to 5", true),
    descriptor(Category::MakeTen, "Make 10", true),
    descriptor(Category::BridgeTen, "Bridge 10", false),
    descriptor(Category::SumsWithinTwenty, "Sums Within 20", false),
    descriptor(Category::TwoDigitPlusTens, "Two-Digit Plus Tens", false),
    descriptor(Category::TwoDigitPlusOneDigit, "Two-Digit Plus One-Digit", false),
    descriptor(Category::TwoDigitNoCarry, "Two-Digit No Carry", false),
    descriptor(Category::ThreeAddendsMakeTen, "Three Addends (Make 10 First)", false),
    descriptor(Category::MinusZero, "Minus 0", true),
    descriptor(Category::MinusOne, "Minus 1", true),
    descriptor(Category::MinusAll, "Minus All", true),
    descriptor(Category::TakeFromTen, "Take From 10", true),
    descriptor(Category::Halves, "Halves", true),
    descriptor(Category::DifferencesWithinTwenty, "Differences Within 20", false),
    descriptor(Category::BridgeTenSubtraction, "Bridge 10 Subtraction", false),
    descriptor(Category::TwoDigitMinusTens, "Two-Digit Minus Tens", false),
    descriptor(Category::TwoDigitMinusOneDigit, "Two-Digit Minus One-Digit", false),
    descriptor(Category::AcrossZero, "Across Zero", false),
];

// ---------------------------------------------------------------------------
// Facts
// ---------------------------------------------------------------------------

/// One arithmetic fact instance, tagged by operation shape.
///
/// The category is carried as a discriminant field so callers dispatch with
/// an exhaustive `match`, never by probing for the presence of an operand
/// field. Invariants (upheld by the constructors in `helpers`):
///
/// - `Addition`: `answer == operand1 + operand2`
/// - `Subtraction`: `answer == minuend - subtrahend`, `minuend >= subtrahend`
/// - `MultiAddend`: `answer == operands.iter().sum()`, `operands.len() >= 2`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FactQuestion {
    Addition {
        operand1: i32,
        operand2: i32,
        answer: i32,
        category: Category,
    },
    Subtraction {
        minuend: i32,
        subtrahend: i32,
        answer: i32,
        category: Category,
    },
    MultiAddend {
        operands: Vec<i32>,
        answer: i32,
        category: Category,
    },
}

impl FactQuestion {
    pub fn category(&self) -> Category {
        match self {
            FactQuestion::Addition { category, .. }
            | FactQuestion::Subtraction { category, .. }
            | FactQuestion::MultiAddend { category, .. } => *category,
        }
    }

    pub fn answer(&self) -> i32 {
        match self {
            FactQuestion::Addition { answer, .. }
            | FactQuestion::Subtraction { answer, .. }
            | FactQuestion::MultiAddend { answer, .. } => *answer,
        }
    }

    /// Operands in presentation order.
    pub fn operands(&self) -> Vec<i32> {
        match self {
            FactQuestion::Addition { operand1, operand2, .. } => vec![*operand1, *operand2],
            FactQuestion::Subtraction { minuend, subtrahend, .. } => vec![*minuend, *subtrahend],
            FactQuestion::MultiAddend { operands, .. } => operands.clone(),
        }
    }

    /// Compact identity key (`"7+5"`, `"12-4"`, `"2+8+3"`).
    ///
    /// Used for no-repeat bookkeeping within a session and as the mastery
    /// tracker's record key. Two facts with the same operands in the same
    /// order share a key even across categories — a learner who has seen
    /// `7+5` has seen it regardless of which family produced it.
    pub fn key(&self) -> String {
        match self {
            FactQuestion::Addition { operand1, operand2, .. } => {
                format!("{}+{}", operand1, operand2)
            }
            FactQuestion::Subtraction { minuend, subtrahend, .. } => {
                format!("{}-{}", minuend, subtrahend)
            }
            FactQuestion::MultiAddend { operands, .. } => operands
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join("+"),
        }
    }

    /// Prompt text for display (`"7 + 5"`).
    pub fn prompt(&self) -> String {
        match self {
            FactQuestion::Addition { operand1, operand2, .. } => {
                format!("{} + {}", operand1, operand2)
            }
            FactQuestion::Subtraction { minuend, subtrahend, .. } => {
                format!("{} - {}", minuend, subtrahend)
            }
            FactQuestion::MultiAddend { operands, .. } => operands
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(" + "),
        }
    }

    /// True if any operand is zero. Several games exclude zero-operand facts
    /// from their pools; see `selector::filters::no_zero_operand`.
    pub fn has_zero_operand(&self) -> bool {
        self.operands().iter().any(|&n| n == 0)
    }
}

impl fmt::Display for FactQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.prompt(), self.answer())
    }
}

// ---------------------------------------------------------------------------
// Student responses
// ---------------------------------------------------------------------------

/// Outcome of one presented question, reported back by the rendering host.
///
/// Latency is measured by the host (wall-clock between display and answer)
/// and passed in as a plain value. Created once per answered question,
/// consumed by the selector, then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentResponse {
    pub fact_key: String,
    pub correct: bool,
    pub elapsed_ms: u32,
}

impl StudentResponse {
    pub fn new(question: &FactQuestion, correct: bool, elapsed_ms: u32) -> Self {
        StudentResponse {
            fact_key: question.key(),
            correct,
            elapsed_ms,
        }
    }
}

// ---------------------------------------------------------------------------
// Generation requests
// ---------------------------------------------------------------------------

/// Request for one generated fact.
///
/// `rng_seed: Some(u64)` reproduces the exact same fact every time — useful
/// for tests and for replaying a session. `None` draws from entropy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactRequest {
    pub category: Category,
    pub rng_seed: Option<u64>,
}

impl FactRequest {
    /// Minimal constructor: entropy seed.
    pub fn new(category: Category) -> Self {
        FactRequest { category, rng_seed: None }
    }
}
