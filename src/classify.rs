//! Rule-based intent classification.
//!
//! Maps message text to exactly one [`Intent`] using ordered keyword rules:
//! zero latency, zero cost, fully deterministic. This trades accuracy for
//! predictability and is intended for triage-grade filtering, not semantic
//! understanding. Matching is substring/prefix based on the trimmed,
//! lower-cased content; there is no stemming and no word-boundary check, so
//! a keyword inside a longer word still matches. That is documented
//! behavior, kept compatible with what callers already observe.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TriageError;

/// Closed set of conversational intents. Every message maps to exactly one;
/// [`Intent::General`] is the catch-all and classification is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Question,
    Answer,
    ProjectShowcase,
    BugReport,
    Feedback,
    General,
}

impl Intent {
    /// All intents, in classifier priority order.
    pub const ALL: [Intent; 6] = [
        Intent::Question,
        Intent::Answer,
        Intent::ProjectShowcase,
        Intent::BugReport,
        Intent::Feedback,
        Intent::General,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Question => "question",
            Intent::Answer => "answer",
            Intent::ProjectShowcase => "project_showcase",
            Intent::BugReport => "bug_report",
            Intent::Feedback => "feedback",
            Intent::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = TriageError;

    /// Case-insensitive boundary parse. String labels are accepted only
    /// here; everything internal works on the enum.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "question" => Ok(Intent::Question),
            "answer" => Ok(Intent::Answer),
            "project_showcase" => Ok(Intent::ProjectShowcase),
            "bug_report" => Ok(Intent::BugReport),
            "feedback" => Ok(Intent::Feedback),
            "general" => Ok(Intent::General),
            other => Err(TriageError::InvalidArgument(format!(
                "Unrecognized intent '{other}'. Expected one of: question, answer, \
                 project_showcase, bug_report, feedback, general"
            ))),
        }
    }
}

// Keyword lexicons. Kept as tables so rules can be extended without touching
// the control flow in `classify`. English and German, matched on the
// normalized content.

/// Interrogative sentence openers (prefix match).
const QUESTION_OPENERS: &[&str] = &["wie", "warum", "wieso", "welche", "was ist", "kann "];

/// Affirmative-response openers (prefix match).
const ANSWER_OPENERS: &[&str] = &["you can", "du kannst"];

/// Explicit solution indicators.
const ANSWER_KEYWORDS: &[&str] = &["answer", "antwort", "solution", "lösung"];

/// Attempt indicators; only count as an answer in long messages.
const ATTEMPT_KEYWORDS: &[&str] = &["try", "versuch"];

/// Recognized code-hosting domains.
const CODE_HOST_DOMAINS: &[&str] = &["github.com", "gitlab.com"];

/// Self-promotion phrases.
const SHOWCASE_PHRASES: &[&str] = &["check out my", "checke aus", "my project", "mein projekt"];

/// Failure indicators.
const BUG_KEYWORDS: &[&str] = &[
    "error",
    "fehler",
    "bug",
    "doesn't work",
    "funktioniert nicht",
    "nicht funktioniert",
    "exception",
    "crash",
];

/// Feedback indicators.
const FEEDBACK_KEYWORDS: &[&str] = &["feedback", "vorschlag", "suggestion"];

/// Message length above which an attempt indicator counts as an answer.
const LONG_ANSWER_LEN: usize = 100;

/// Message length above which "fix" counts as a bug report and "should" as
/// feedback.
const LONG_REPORT_LEN: usize = 50;

fn contains_any(content: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| content.contains(kw))
}

fn starts_with_any(content: &str, openers: &[&str]) -> bool {
    openers.iter().any(|op| content.starts_with(op))
}

/// Rule 1: interrogative content.
fn is_question(content: &str) -> bool {
    content.contains('?') || starts_with_any(content, QUESTION_OPENERS)
}

/// Rule 2: a reply that offers a solution.
fn is_answer(content: &str) -> bool {
    starts_with_any(content, ANSWER_OPENERS)
        || contains_any(content, ANSWER_KEYWORDS)
        || (content.chars().count() > LONG_ANSWER_LEN && contains_any(content, ATTEMPT_KEYWORDS))
}

/// Rule 3: someone presenting their own work.
fn is_project_showcase(content: &str) -> bool {
    contains_any(content, CODE_HOST_DOMAINS)
        || contains_any(content, SHOWCASE_PHRASES)
        || (content.contains("https://")
            && (content.contains("project") || content.contains("projekt")))
}

/// Rule 4: something is broken.
fn is_bug_report(content: &str) -> bool {
    contains_any(content, BUG_KEYWORDS)
        || (content.contains("fix") && content.chars().count() > LONG_REPORT_LEN)
}

/// Rule 5: a suggestion about how things ought to work.
fn is_feedback(content: &str) -> bool {
    contains_any(content, FEEDBACK_KEYWORDS)
        || (content.contains("should")
            && (content.contains("be able") || content.chars().count() > LONG_REPORT_LEN))
}

/// Classify message content into exactly one [`Intent`].
///
/// Total over all strings: empty or whitespace-only content is
/// [`Intent::General`]. Rules are evaluated in a fixed priority order with
/// first-match-wins semantics; the order is part of the contract, since text
/// matching several rules takes the earliest ("why does it crash?" is a
/// question, not a bug report). Deterministic, no side effects.
#[must_use]
pub fn classify(content: &str) -> Intent {
    let normalized = content.trim().to_lowercase();
    if normalized.is_empty() {
        return Intent::General;
    }

    if is_question(&normalized) {
        Intent::Question
    } else if is_answer(&normalized) {
        Intent::Answer
    } else if is_project_showcase(&normalized) {
        Intent::ProjectShowcase
    } else if is_bug_report(&normalized) {
        Intent::BugReport
    } else if is_feedback(&normalized) {
        Intent::Feedback
    } else {
        Intent::General
    }
}
