//! Problem of the day: a periodic post of a random free problem to one chat.

use std::{sync::Arc, time::Duration};

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::{
    catalog::{SharedCatalog, Tier},
    domain::ChatId,
    messaging::port::MessagingPort,
    response,
    selector::{self, IndexSource, SelectError},
    Result,
};

#[derive(Clone)]
pub struct ProblemOfTheDay {
    pub catalog: Arc<SharedCatalog>,
    pub source: Arc<dyn IndexSource>,
    pub messenger: Arc<dyn MessagingPort>,
    pub chat_id: ChatId,
    pub problem_url_base: String,
    pub interval: Duration,
}

impl ProblemOfTheDay {
    /// Post once. Returns `false` when nothing was sent (catalog not ready).
    pub async fn post_once(&self) -> Result<bool> {
        let Some(store) = self.catalog.get() else {
            debug!("problem of the day skipped: catalog not ready");
            return Ok(false);
        };

        let record = match selector::select(store.query(Tier::Free), None, "", self.source.as_ref())
        {
            Ok(r) => r,
            Err(SelectError::EmptyCatalog) | Err(SelectError::NoMatch) => {
                debug!("problem of the day skipped: no free problems");
                return Ok(false);
            }
        };

        let resp = response::problem_of_the_day(record, &self.problem_url_base);
        self.messenger.send_response(self.chat_id, &resp).await?;
        info!(id = record.id, chat = self.chat_id.0, "posted problem of the day");
        Ok(true)
    }

    /// Post every `interval` (first post after one full interval) until cancelled.
    pub fn spawn(self, cancel: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        if let Err(e) = self.post_once().await {
                            warn!("problem of the day failed: {e}");
                        }
                    }
                }
            }
            debug!("problem of the day stopped");
        })
    }
}
