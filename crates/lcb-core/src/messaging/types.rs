use crate::domain::ChatId;

/// Incoming text message, reduced to what command handling needs.
///
/// Platform-specific fields stay in the adapter.
#[derive(Clone, Debug)]
pub struct IncomingText {
    pub chat_id: ChatId,
    pub author_is_bot: bool,
    pub text: String,
}
