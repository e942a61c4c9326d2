//! Transport-agnostic response payloads.

use crate::catalog::{CatalogRecord, CatalogStore, Difficulty, Tier};
use crate::selector::SelectError;

pub const NO_MATCH_MESSAGE: &str =
    "Couldn't find a problem with what you gave me. Maybe try something less specific, or give up?";
pub const NOT_READY_MESSAGE: &str =
    "The problem catalog is still loading. Try again in a moment.";

pub const PROBLEM_OF_THE_DAY: &str = "Problem of the Day";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Problem(ProblemPayload),
    Info(InfoPayload),
    Help(HelpPayload),
    Message(String),
    /// Not a command; nothing is sent.
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemPayload {
    /// Optional banner above the title (used by the problem of the day).
    pub headline: Option<String>,
    pub id: u64,
    pub title: String,
    pub url: String,
    pub difficulty: Difficulty,
    pub tier_phrase: &'static str,
}

impl ProblemPayload {
    /// e.g. "Medium difficulty unlocked/free problem."
    pub fn description(&self) -> String {
        format!(
            "{} difficulty {} problem.",
            self.difficulty.label(),
            self.tier_phrase
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoPayload {
    pub total_count: u64,
    pub free: usize,
    pub paid: usize,
}

impl InfoPayload {
    pub fn summary(&self) -> String {
        format!(
            "LeetCode currently has a total of {} problems of which {} are free, and {} are paid.",
            self.total_count, self.free, self.paid
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HelpPayload {
    pub title: String,
    /// `(usage, description)` pairs.
    pub entries: Vec<(String, String)>,
}

pub fn problem(record: &CatalogRecord, problem_url_base: &str) -> Response {
    Response::Problem(problem_payload(record, problem_url_base, None))
}

pub fn problem_of_the_day(record: &CatalogRecord, problem_url_base: &str) -> Response {
    Response::Problem(problem_payload(
        record,
        problem_url_base,
        Some(PROBLEM_OF_THE_DAY.to_string()),
    ))
}

fn problem_payload(
    record: &CatalogRecord,
    problem_url_base: &str,
    headline: Option<String>,
) -> ProblemPayload {
    ProblemPayload {
        headline,
        id: record.id,
        title: record.title.clone(),
        url: record.url(problem_url_base),
        difficulty: record.difficulty,
        tier_phrase: record.tier_phrase(),
    }
}

/// Map a selection outcome to what the user sees.
pub fn selection(result: Result<&CatalogRecord, SelectError>, problem_url_base: &str) -> Response {
    match result {
        Ok(record) => problem(record, problem_url_base),
        Err(e) => select_error(&e),
    }
}

pub fn select_error(err: &SelectError) -> Response {
    match err {
        SelectError::NoMatch => Response::Message(NO_MATCH_MESSAGE.to_string()),
        SelectError::EmptyCatalog => not_ready(),
    }
}

pub fn not_ready() -> Response {
    Response::Message(NOT_READY_MESSAGE.to_string())
}

pub fn info(store: &CatalogStore) -> Response {
    Response::Info(InfoPayload {
        total_count: store.total_count(),
        free: store.size(Tier::Free),
        paid: store.size(Tier::Paid),
    })
}

pub fn help(prefix: &str) -> Response {
    let entries = [
        (
            "problem".to_string(),
            "gives you a random problem of any difficulty.",
        ),
        (
            "problem <easy | medium | hard>".to_string(),
            "gives you a random problem of the specified difficulty.",
        ),
        (
            "problem [easy | medium | hard] <title words>".to_string(),
            "gives you a random problem whose title contains the given words.",
        ),
        (
            "info".to_string(),
            "returns data on LeetCode problems.",
        ),
        ("help".to_string(), "shows this message."),
    ]
    .into_iter()
    .map(|(usage, desc)| (format!("{prefix}{usage}"), desc.to_string()))
    .collect();

    Response::Help(HelpPayload {
        title: "Usage:".to_string(),
        entries,
    })
}

pub fn unrecognized(prefix: &str) -> Response {
    Response::Message(format!(
        "Invalid command! Feel free to do {prefix}help for a list of the commands."
    ))
}
