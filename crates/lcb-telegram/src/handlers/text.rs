use std::sync::Arc;

use teloxide::prelude::*;
use tracing::{debug, warn};

use lcb_core::{domain::ChatId, messaging::types::IncomingText, response::Response};

use crate::router::AppState;

/// Telegram may send `<prefix>cmd@botname arg1 ...` in groups; drop the `@botname`.
pub(crate) fn strip_bot_mention(text: &str, prefix: &str) -> String {
    let Some(rest) = text.strip_prefix(prefix) else {
        return text.to_string();
    };
    let rest = rest.trim_start();
    let (first, tail) = match rest.find(char::is_whitespace) {
        Some(idx) => rest.split_at(idx),
        None => (rest, ""),
    };
    let name = first.split('@').next().unwrap_or(first);
    format!("{prefix}{name}{tail}")
}

pub(crate) fn incoming_text(msg: &Message, prefix: &str) -> Option<IncomingText> {
    let text = msg.text()?;
    Some(IncomingText {
        chat_id: ChatId(msg.chat.id.0),
        author_is_bot: msg.from().map(|u| u.is_bot).unwrap_or(false),
        text: strip_bot_mention(text, prefix),
    })
}

pub async fn handle_text(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(incoming) = incoming_text(&msg, &state.cfg.command_prefix) else {
        return Ok(());
    };

    let response = state.dispatcher.handle(&incoming);
    if response == Response::Ignored {
        return Ok(());
    }

    debug!(chat = incoming.chat_id.0, "answering command");
    if let Err(e) = state
        .messenger
        .send_response(incoming.chat_id, &response)
        .await
    {
        warn!(chat = incoming.chat_id.0, "failed to deliver response: {e}");
    }

    Ok(())
}
