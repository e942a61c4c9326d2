use std::sync::Arc;

use teloxide::{dispatching::Dispatcher as UpdateDispatcher, dptree, prelude::*};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use lcb_core::{
    catalog::SharedCatalog, config::Config, dispatcher::Dispatcher,
    messaging::port::MessagingPort, qotd::ProblemOfTheDay, selector::IndexSource,
};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub dispatcher: Dispatcher,
    pub messenger: Arc<dyn MessagingPort>,
}

/// Run the bot until the process is interrupted.
///
/// The catalog may still be loading when this starts; commands answer
/// "not ready" until it is published.
pub async fn run_polling(
    cfg: Arc<Config>,
    catalog: Arc<SharedCatalog>,
    source: Arc<dyn IndexSource>,
) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    match bot.get_me().await {
        Ok(me) => info!("lcb started: @{}", me.username()),
        Err(e) => warn!("could not fetch bot identity: {e}"),
    }
    info!("Command prefix: {}", cfg.command_prefix);
    info!("Problems drawn from tier: {:?}", cfg.problem_tier);

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));

    let cancel = CancellationToken::new();
    let qotd = cfg.qotd_chat_id.map(|chat_id| {
        info!(
            chat = chat_id.0,
            every_secs = cfg.qotd_interval.as_secs(),
            "problem of the day enabled"
        );
        ProblemOfTheDay {
            catalog: catalog.clone(),
            source: source.clone(),
            messenger: messenger.clone(),
            chat_id,
            problem_url_base: cfg.problem_url_base.clone(),
            interval: cfg.qotd_interval,
        }
        .spawn(cancel.clone())
    });

    let state = Arc::new(AppState {
        cfg: cfg.clone(),
        dispatcher: Dispatcher::new(&cfg, catalog, source),
        messenger,
    });

    let handler = dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    UpdateDispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    cancel.cancel();
    if let Some(handle) = qotd {
        join_background("problem of the day", handle).await;
    }

    Ok(())
}

/// Wait for a background task; a panic or abort is logged, not propagated.
async fn join_background(name: &str, handle: JoinHandle<()>) -> bool {
    match handle.await {
        Ok(()) => true,
        Err(e) => {
            warn!("{name} task ended abnormally: {e}");
            false
        }
    }
}
