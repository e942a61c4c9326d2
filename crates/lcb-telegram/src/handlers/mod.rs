//! Telegram update handlers.
//!
//! Each handler converts the Telegram update into the core's incoming model,
//! asks the dispatcher for a response and delivers it through the messenger.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use crate::router::AppState;

mod text;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    // Photos, stickers, joins, ... carry no command.
    if msg.text().is_none() {
        return Ok(());
    }
    text::handle_text(msg, state).await
}
