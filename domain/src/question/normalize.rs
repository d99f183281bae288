//! Normalization: raw upstream record → [`Question`]
//!
//! ```text
//! RawQuestionRecord
//!        ↓  decode HTML entities, trim
//!   type == "boolean" ?
//!     yes → options ["True", "False"], correct re-derived if casing is off
//!     no  → options incorrect ++ [correct], dedup (first wins), shuffle
//!        ↓
//!     Question
//! ```
//!
//! Missing fields never fail: absent text becomes an empty string and an
//! absent answer list becomes empty. Whether the result is worth asking is
//! decided later via [`Question::is_playable`].

use super::entities::Question;
use super::raw::RawQuestionRecord;
use crate::core::html::decode_entities;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

const TRUE: &str = "True";
const FALSE: &str = "False";

/// Normalize a record, shuffling multiple-choice options with the
/// thread-local random source
pub fn normalize(record: RawQuestionRecord) -> Question {
    normalize_with_rng(record, &mut rand::thread_rng())
}

/// Normalize a record using the given random source for option order
pub fn normalize_with_rng<R: Rng + ?Sized>(record: RawQuestionRecord, rng: &mut R) -> Question {
    let prompt = clean(record.question());
    let correct = clean(record.correct_answer());

    let question = if record.kind().is_boolean() {
        let correct = boolean_answer(correct);
        Question::from_parts(prompt, vec![TRUE.to_string(), FALSE.to_string()], correct)
    } else {
        let mut options: Vec<String> = record
            .incorrect_answers()
            .iter()
            .map(|a| clean(a))
            .collect();
        options.push(correct.clone());
        dedup_in_order(&mut options);
        options.shuffle(rng);
        Question::from_parts(prompt, options, correct)
    };

    let category = record.category.as_deref().map(clean);
    question.with_metadata(category, record.difficulty)
}

fn clean(text: &str) -> String {
    decode_entities(text).trim().to_string()
}

/// Upstream occasionally sends `"true"`/`"TRUE"`; anything that is not
/// some casing of "true" counts as False.
fn boolean_answer(correct: String) -> String {
    if correct == TRUE || correct == FALSE {
        correct
    } else if correct.eq_ignore_ascii_case("true") {
        TRUE.to_string()
    } else {
        FALSE.to_string()
    }
}

fn dedup_in_order(options: &mut Vec<String>) {
    let mut seen = HashSet::new();
    options.retain(|o| seen.insert(o.clone()));
}
