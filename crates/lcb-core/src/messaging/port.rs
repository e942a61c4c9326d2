use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageRef},
    formatting::render_html,
    response::Response,
    Result,
};

/// Cross-messenger delivery port.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_html(&self, chat_id: ChatId, html: &str) -> Result<MessageRef>;

    /// Render and deliver a response. Ignored responses send nothing.
    async fn send_response(
        &self,
        chat_id: ChatId,
        response: &Response,
    ) -> Result<Option<MessageRef>> {
        let Some(html) = render_html(response) else {
            return Ok(None);
        };
        self.send_html(chat_id, &html).await.map(Some)
    }
}
