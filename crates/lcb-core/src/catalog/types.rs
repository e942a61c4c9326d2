use std::fmt;

/// Problem difficulty as shown to users.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Map the dataset's numeric level.
    ///
    /// The source is not contiguous: only 3 is Hard and 2 is Medium, every
    /// other value (including 0 and out-of-range levels) is Easy.
    pub fn from_level(level: i64) -> Self {
        match level {
            3 => Difficulty::Hard,
            2 => Difficulty::Medium,
            _ => Difficulty::Easy,
        }
    }

    /// Case-insensitive match against the three difficulty names.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Access tier partition of the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    All,
    Free,
    Paid,
}

impl Tier {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(Tier::All),
            "free" => Some(Tier::Free),
            "paid" => Some(Tier::Paid),
            _ => None,
        }
    }
}

/// One normalized problem entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogRecord {
    pub id: u64,
    pub title: String,
    pub title_slug: String,
    pub difficulty: Difficulty,
    pub paid_only: bool,
}

impl CatalogRecord {
    /// Canonical problem link: `base + slug + "/"`.
    pub fn url(&self, problem_url_base: &str) -> String {
        format!("{problem_url_base}{}/", self.title_slug)
    }

    /// "locked/paid" or "unlocked/free".
    pub fn tier_phrase(&self) -> &'static str {
        if self.paid_only {
            "locked/paid"
        } else {
            "unlocked/free"
        }
    }
}
