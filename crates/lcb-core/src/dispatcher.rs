//! Command → selection → response, over the shared catalog.

use std::sync::Arc;

use tracing::debug;

use crate::{
    catalog::{SharedCatalog, Tier},
    command::{self, Intent},
    config::Config,
    messaging::types::IncomingText,
    response::{self, Response},
    selector::{self, IndexSource},
};

#[derive(Clone)]
pub struct Dispatcher {
    catalog: Arc<SharedCatalog>,
    source: Arc<dyn IndexSource>,
    prefix: String,
    problem_url_base: String,
    problem_tier: Tier,
}

impl Dispatcher {
    pub fn new(cfg: &Config, catalog: Arc<SharedCatalog>, source: Arc<dyn IndexSource>) -> Self {
        Self {
            catalog,
            source,
            prefix: cfg.command_prefix.clone(),
            problem_url_base: cfg.problem_url_base.clone(),
            problem_tier: cfg.problem_tier,
        }
    }

    /// Bot-authored messages are never answered.
    pub fn handle(&self, msg: &IncomingText) -> Response {
        if msg.author_is_bot {
            return Response::Ignored;
        }
        self.resolve(&msg.text)
    }

    pub fn resolve(&self, text: &str) -> Response {
        let Some(parsed) = command::parse(text, &self.prefix) else {
            return Response::Ignored;
        };

        match parsed.intent() {
            Intent::Problem {
                difficulty,
                search_text,
            } => {
                let Some(store) = self.catalog.get() else {
                    return response::not_ready();
                };
                let result = selector::select(
                    store.query(self.problem_tier),
                    difficulty,
                    &search_text,
                    self.source.as_ref(),
                );
                response::selection(result, &self.problem_url_base)
            }
            Intent::Info => match self.catalog.get() {
                Some(store) => response::info(store),
                None => response::not_ready(),
            },
            Intent::Help => response::help(&self.prefix),
            Intent::Unrecognized(name) => {
                debug!(command = %name, "unrecognized command");
                response::unrecognized(&self.prefix)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::{store::tests::sample_store, CatalogStore, Difficulty},
        config::DEFAULT_PROBLEM_URL_BASE,
        domain::ChatId,
        response::{NOT_READY_MESSAGE, NO_MATCH_MESSAGE},
        selector::FixedIndex,
    };

    fn cfg(tier: &str) -> Config {
        Config::from_lookup(|k| match k {
            "TELEGRAM_BOT_TOKEN" => Some("t".to_string()),
            "PROBLEM_TIER" => Some(tier.to_string()),
            _ => None,
        })
        .unwrap()
    }

    fn dispatcher(store: Option<CatalogStore>, tier: &str) -> Dispatcher {
        let shared = Arc::new(SharedCatalog::new());
        if let Some(s) = store {
            shared.publish(s);
        }
        Dispatcher::new(&cfg(tier), shared, Arc::new(FixedIndex(0)))
    }

    fn problem(resp: Response) -> response::ProblemPayload {
        match resp {
            Response::Problem(p) => p,
            other => panic!("expected problem, got {other:?}"),
        }
    }

    #[test]
    fn problem_draws_from_free_tier_by_default() {
        let d = dispatcher(Some(sample_store()), "free");
        let p = problem(d.resolve("?problem"));
        assert_eq!(p.title, "Two Sum");
        assert_eq!(p.url, format!("{DEFAULT_PROBLEM_URL_BASE}two-sum/"));
        assert_eq!(p.tier_phrase, "unlocked/free");

        // "Binary Tree Upside Down" is paid-only.
        assert_eq!(
            d.resolve("?problem upside down"),
            Response::Message(NO_MATCH_MESSAGE.to_string())
        );
    }

    #[test]
    fn paid_tier_can_be_configured() {
        let d = dispatcher(Some(sample_store()), "paid");
        let p = problem(d.resolve("?problem upside down"));
        assert_eq!(p.tier_phrase, "locked/paid");
    }

    #[test]
    fn difficulty_and_search_flow_through() {
        let d = dispatcher(Some(sample_store()), "free");
        let p = problem(d.resolve("?problem HARD"));
        assert_eq!(p.difficulty, Difficulty::Hard);

        let p = problem(d.resolve("?problem hard regular"));
        assert_eq!(p.title, "Regular Expression Matching");
    }

    #[test]
    fn unready_catalog_answers_not_ready() {
        let d = dispatcher(None, "free");
        let not_ready = Response::Message(NOT_READY_MESSAGE.to_string());
        assert_eq!(d.resolve("?problem"), not_ready);
        assert_eq!(d.resolve("?problem hard two"), not_ready);
        assert_eq!(d.resolve("?info"), not_ready);
        assert!(matches!(d.resolve("?help"), Response::Help(_)));
    }

    #[test]
    fn empty_catalog_answers_not_ready() {
        let d = dispatcher(Some(CatalogStore::default()), "free");
        assert_eq!(
            d.resolve("?problem"),
            Response::Message(NOT_READY_MESSAGE.to_string())
        );
    }

    #[test]
    fn info_help_unknown_and_plain_text() {
        let d = dispatcher(Some(sample_store()), "free");
        assert!(matches!(d.resolve("?info"), Response::Info(_)));
        assert!(matches!(d.resolve("?help"), Response::Help(_)));
        assert!(matches!(d.resolve("?dance"), Response::Message(m) if m.contains("?help")));
        assert_eq!(d.resolve("hello"), Response::Ignored);
    }

    #[test]
    fn ignores_bot_authors() {
        let d = dispatcher(Some(sample_store()), "free");
        let mut msg = IncomingText {
            chat_id: ChatId(1),
            author_is_bot: true,
            text: "?problem".to_string(),
        };
        assert_eq!(d.handle(&msg), Response::Ignored);
        msg.author_is_bot = false;
        assert!(matches!(d.handle(&msg), Response::Problem(_)));
    }
}
