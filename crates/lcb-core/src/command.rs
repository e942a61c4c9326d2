//! Command grammar: `<prefix><name> [easy|medium|hard] [search words...]`.

use crate::catalog::Difficulty;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lower-cased command keyword (empty if nothing followed the prefix).
    pub name: String,
    pub difficulty: Option<Difficulty>,
    /// Remaining tokens joined by single spaces.
    pub search_text: String,
}

/// What the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Problem {
        difficulty: Option<Difficulty>,
        search_text: String,
    },
    Info,
    Help,
    Unrecognized(String),
}

/// Parse raw message text. `None` means "not a command": ignore it entirely.
///
/// A leading difficulty word is always consumed as a filter, so a search for
/// a title starting with "easy"/"medium"/"hard" loses that first word.
pub fn parse(text: &str, prefix: &str) -> Option<ParsedCommand> {
    let rest = text.strip_prefix(prefix)?;
    let mut tokens = rest.split_whitespace();

    let name = tokens.next().unwrap_or("").to_lowercase();
    let mut args: Vec<&str> = tokens.collect();

    let difficulty = args.first().and_then(|t| Difficulty::parse(t));
    if difficulty.is_some() {
        args.remove(0);
    }

    Some(ParsedCommand {
        name,
        difficulty,
        search_text: args.join(" "),
    })
}

impl ParsedCommand {
    pub fn intent(&self) -> Intent {
        match self.name.as_str() {
            "problem" => Intent::Problem {
                difficulty: self.difficulty,
                search_text: self.search_text.clone(),
            },
            "info" => Intent::Info,
            "help" => Intent::Help,
            other => Intent::Unrecognized(other.to_string()),
        }
    }
}
