//! Notification API operations, including the live SSE feed.

use super::EventhubClient;
use crate::error::{ClientError, Result};
use eventhub_core::models::Notification;
use uuid::Uuid;

impl EventhubClient {
    /// List the caller's notifications.
    pub async fn list_notifications(&self) -> Result<Vec<Notification>> {
        let response = self.get("/api/notifications").send().await?;
        self.handle_response(response).await
    }

    /// Mark a notification as read.
    pub async fn mark_notification_read(&self, id: Uuid) -> Result<Notification> {
        let response = self
            .put(&format!("/api/notifications/{}/read", id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Watch notifications as they are delivered.
    /// Returns a stream of notifications.
    pub async fn watch_notifications(
        &self,
        last_event_id: Option<u64>,
    ) -> Result<impl futures_core::Stream<Item = Result<Notification>>> {
        let mut request = self
            .get("/api/notifications/stream")
            .header("Accept", "text/event-stream");
        if let Some(id) = last_event_id {
            request = request.header("Last-Event-ID", id.to_string());
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(ClientError::ServerError {
                status: response.status().as_u16(),
                message: "Failed to connect to notification stream".to_string(),
            });
        }

        let stream = async_stream::stream! {
            use tokio_stream::StreamExt;

            let mut byte_stream = response.bytes_stream();
            let mut buffer = SseBuffer::default();

            while let Some(chunk_result) = byte_stream.next().await {
                match chunk_result {
                    Ok(chunk) => {
                        for block in buffer.push(&chunk) {
                            if let Some(notification) = parse_sse_event(&block) {
                                yield Ok(notification);
                            }
                        }
                    }
                    Err(e) => {
                        yield Err(ClientError::Connection(e.to_string()));
                        break;
                    }
                }
            }
        };

        Ok(stream)
    }
}

/// Raw SSE bytes waiting for the blank line that ends an event.
///
/// Bytes are only decoded once a whole block has arrived, so a multi-byte
/// character split across network chunks stays intact.
#[derive(Debug, Default)]
struct SseBuffer {
    bytes: Vec<u8>,
}

impl SseBuffer {
    /// Appends `chunk` and drains every complete event block, with `\r\n`
    /// line endings normalised to `\n`.
    fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.bytes.extend_from_slice(chunk);

        let mut blocks = Vec::new();
        while let Some((end, delimiter_len)) = find_event_end(&self.bytes) {
            let raw: Vec<u8> = self.bytes.drain(..end + delimiter_len).collect();
            let block = raw[..end].strip_suffix(b"\r").unwrap_or(&raw[..end]);
            blocks.push(String::from_utf8_lossy(block).replace("\r\n", "\n"));
        }
        blocks
    }
}

/// Position of the first blank line (`\n\n` or `\n\r\n`) and its length.
fn find_event_end(bytes: &[u8]) -> Option<(usize, usize)> {
    bytes
        .iter()
        .enumerate()
        .filter(|(_, byte)| **byte == b'\n')
        .find_map(|(i, _)| {
            let rest = &bytes[i + 1..];
            if rest.starts_with(b"\n") {
                Some((i, 2))
            } else if rest.starts_with(b"\r\n") {
                Some((i, 3))
            } else {
                None
            }
        })
}

/// Parse a notification from one SSE event block.
/// Multi-line `data:` fields are joined with newlines; keep-alives yield `None`.
fn parse_sse_event(event_str: &str) -> Option<Notification> {
    let data: Vec<&str> = event_str
        .lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .map(|value| value.strip_prefix(' ').unwrap_or(value))
        .collect();

    if data.is_empty() {
        return None;
    }

    match serde_json::from_str(&data.join("\n")) {
        Ok(notification) => Some(notification),
        Err(e) => {
            tracing::warn!(error = %e, "skipping unparsable notification event");
            None
        }
    }
}
