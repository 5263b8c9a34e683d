use futures::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::message::ChatMessage;
use crate::sse::{self, SseEvent};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("chat API returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("malformed chat response: {0}")]
    Malformed(String),
}

/// Thin client for the remote chat completion collaborator.
///
/// Accepts the ordered conversation history and returns either one complete
/// assistant message or, in streaming mode, incremental fragments surfaced
/// through a callback and concatenated into the returned message.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl ChatClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Points the client at a different endpoint (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn send(
        &self,
        messages: &[ChatMessage],
        stream: bool,
    ) -> Result<reqwest::Response, ChatError> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(model = %self.model, count = messages.len(), stream, "sending chat request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&ChatRequest {
                model: &self.model,
                messages,
                stream,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %body, "chat API error");
            return Err(ChatError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// One complete assistant message for the given history.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<ChatMessage, ChatError> {
        let response = self.send(messages, false).await?;
        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Malformed(e.to_string()))?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message)
            .ok_or_else(|| ChatError::Malformed("no choices in response".to_string()))
    }

    /// Streams the assistant reply, invoking `on_fragment` for each content
    /// fragment in arrival order, and returns the concatenated message.
    pub async fn complete_streaming<F>(
        &self,
        messages: &[ChatMessage],
        mut on_fragment: F,
    ) -> Result<ChatMessage, ChatError>
    where
        F: FnMut(&str),
    {
        let response = self.send(messages, true).await?;
        let mut stream = response.bytes_stream();
        let mut buffer: Vec<u8> = Vec::new();
        let mut content = String::new();

        'outer: while let Some(chunk) = stream.next().await {
            buffer.extend_from_slice(&chunk?);
            for event in sse::drain_events(&mut buffer) {
                match event {
                    SseEvent::Fragment(text) => {
                        on_fragment(&text);
                        content.push_str(&text);
                    }
                    SseEvent::Done => break 'outer,
                    SseEvent::Ignored => {}
                }
            }
        }

        Ok(ChatMessage::assistant(content))
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
