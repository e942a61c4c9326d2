use std::{env, fs, path::Path, time::Duration};

use crate::{catalog::Tier, domain::ChatId, errors::Error, Result};

pub const DEFAULT_PREFIX: &str = "?";
pub const DEFAULT_PROBLEM_URL_BASE: &str = "https://leetcode.com/problems/";
pub const DEFAULT_LEETCODE_API_URL: &str = "https://leetcode.com/api/problems/all/";

const MIN_QOTD_INTERVAL_SECS: u64 = 60;
const MAX_QOTD_INTERVAL_SECS: u64 = 30 * 86_400;

/// Typed configuration, read from the environment (and `.env`).
#[derive(Clone, Debug)]
pub struct Config {
    // Transport
    pub telegram_bot_token: String,
    pub command_prefix: String,

    // Catalog
    pub problem_url_base: String,
    pub leetcode_api_url: String,
    pub fetch_timeout: Duration,
    pub problem_tier: Tier,

    // Problem of the day
    pub qotd_chat_id: Option<ChatId>,
    pub qotd_interval: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let telegram_bot_token = get("TELEGRAM_BOT_TOKEN").unwrap_or_default();
        if telegram_bot_token.trim().is_empty() {
            return Err(Error::Config(
                "TELEGRAM_BOT_TOKEN environment variable is required".to_string(),
            ));
        }

        let command_prefix = get("COMMAND_PREFIX")
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string());
        if command_prefix.is_empty() {
            return Err(Error::Config("COMMAND_PREFIX must not be empty".to_string()));
        }

        let problem_url_base = get("PROBLEM_URL_BASE")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_PROBLEM_URL_BASE.to_string());
        let leetcode_api_url = get("LEETCODE_API_URL")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_LEETCODE_API_URL.to_string());
        let fetch_timeout =
            Duration::from_millis(parse_u64(get("FETCH_TIMEOUT_MS")).unwrap_or(15_000));

        let problem_tier = match get("PROBLEM_TIER").and_then(non_empty) {
            None => Tier::Free,
            Some(s) => Tier::parse(&s).ok_or_else(|| {
                Error::Config(format!("PROBLEM_TIER must be all, free or paid (got {s:?})"))
            })?,
        };

        let qotd_chat_id = match get("QOTD_CHAT_ID").and_then(non_empty) {
            None => None,
            Some(s) => Some(ChatId(s.trim().parse::<i64>().map_err(|_| {
                Error::Config(format!("QOTD_CHAT_ID must be a numeric chat id (got {s:?})"))
            })?)),
        };
        let qotd_interval = Duration::from_secs(
            parse_u64(get("QOTD_INTERVAL_SECS"))
                .unwrap_or(86_400)
                .clamp(MIN_QOTD_INTERVAL_SECS, MAX_QOTD_INTERVAL_SECS),
        );

        Ok(Self {
            telegram_bot_token,
            command_prefix,
            problem_url_base,
            leetcode_api_url,
            fetch_timeout,
            problem_tier,
            qotd_chat_id,
            qotd_interval,
        })
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for (key, val) in parse_dotenv(&contents) {
        if env::var_os(&key).is_some() {
            continue; // do not override existing env
        }
        env::set_var(key, val);
    }
}

fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        out.push((key.to_string(), val));
    }
    out
}

fn parse_u64(v: Option<String>) -> Option<u64> {
    v.and_then(|s| s.trim().parse::<u64>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn cfg(pairs: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults() {
        let c = cfg(&[("TELEGRAM_BOT_TOKEN", "t")]).unwrap();
        assert_eq!(c.command_prefix, "?");
        assert_eq!(c.problem_url_base, DEFAULT_PROBLEM_URL_BASE);
        assert_eq!(c.leetcode_api_url, DEFAULT_LEETCODE_API_URL);
        assert_eq!(c.fetch_timeout, Duration::from_secs(15));
        assert_eq!(c.problem_tier, Tier::Free);
        assert_eq!(c.qotd_chat_id, None);
        assert_eq!(c.qotd_interval, Duration::from_secs(86_400));
    }

    #[test]
    fn token_is_required() {
        assert!(matches!(cfg(&[]), Err(Error::Config(_))));
        assert!(matches!(
            cfg(&[("TELEGRAM_BOT_TOKEN", "  ")]),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn overrides() {
        let c = cfg(&[
            ("TELEGRAM_BOT_TOKEN", "t"),
            ("COMMAND_PREFIX", " ! "),
            ("PROBLEM_TIER", "ALL"),
            ("QOTD_CHAT_ID", "-100123"),
            ("QOTD_INTERVAL_SECS", "5"),
            ("FETCH_TIMEOUT_MS", "250"),
        ])
        .unwrap();
        assert_eq!(c.command_prefix, "!");
        assert_eq!(c.problem_tier, Tier::All);
        assert_eq!(c.qotd_chat_id, Some(ChatId(-100123)));
        assert_eq!(c.qotd_interval, Duration::from_secs(60));
        assert_eq!(c.fetch_timeout, Duration::from_millis(250));
    }

    #[test]
    fn caps_qotd_interval() {
        let c = cfg(&[
            ("TELEGRAM_BOT_TOKEN", "t"),
            ("QOTD_INTERVAL_SECS", &u64::MAX.to_string()),
        ])
        .unwrap();
        assert_eq!(c.qotd_interval, Duration::from_secs(30 * 86_400));
        // Must stay addable to a clock reading.
        assert!(std::time::Instant::now().checked_add(c.qotd_interval).is_some());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(cfg(&[("TELEGRAM_BOT_TOKEN", "t"), ("COMMAND_PREFIX", " ")]).is_err());
        assert!(cfg(&[("TELEGRAM_BOT_TOKEN", "t"), ("PROBLEM_TIER", "gold")]).is_err());
        assert!(cfg(&[("TELEGRAM_BOT_TOKEN", "t"), ("QOTD_CHAT_ID", "general")]).is_err());
    }

    #[test]
    fn parses_dotenv_lines() {
        let parsed = parse_dotenv(
            "# comment\n\nTELEGRAM_BOT_TOKEN=\"abc\"\nCOMMAND_PREFIX = '!'\nnot a pair\n=orphan\n",
        );
        assert_eq!(
            parsed,
            vec![
                ("TELEGRAM_BOT_TOKEN".to_string(), "abc".to_string()),
                ("COMMAND_PREFIX".to_string(), "!".to_string()),
            ]
        );
    }
}
