use serde::Deserialize;
use tracing::debug;

/// Outcome of parsing one server-sent event block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseEvent {
    /// Incremental content fragment, to be concatenated in order.
    Fragment(String),
    /// End-of-stream sentinel.
    Done,
    /// Comment, empty delta, or malformed chunk; skipped.
    Ignored,
}

#[derive(Debug, Deserialize)]
struct StreamChunk {
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: StreamDelta,
}

#[derive(Debug, Default, Deserialize)]
struct StreamDelta {
    content: Option<String>,
}

/// Parses one event block (the text between blank-line separators).
pub fn parse_event(event: &str) -> SseEvent {
    let Some(data) = event.trim_start().strip_prefix("data: ") else {
        return SseEvent::Ignored;
    };
    if data.trim() == "[DONE]" {
        return SseEvent::Done;
    }
    match serde_json::from_str::<StreamChunk>(data) {
        Ok(chunk) => chunk
            .choices
            .first()
            .and_then(|c| c.delta.content.clone())
            .map(SseEvent::Fragment)
            .unwrap_or(SseEvent::Ignored),
        Err(e) => {
            // Some providers interleave empty or keep-alive chunks.
            debug!(error = %e, "skipping malformed SSE chunk");
            SseEvent::Ignored
        }
    }
}

/// Drains every complete event from the byte buffer, leaving any trailing
/// partial event (including a split multi-byte character) for the next call.
/// Events end at a blank line in either LF or CRLF form, whichever comes
/// first; some proxies rewrite line endings.
pub fn drain_events(buffer: &mut Vec<u8>) -> Vec<SseEvent> {
    let mut events = Vec::new();
    while let Some((end, sep_len)) = find_separator(buffer) {
        let block: Vec<u8> = buffer.drain(..end + sep_len).collect();
        let text = String::from_utf8_lossy(&block[..end]);
        events.push(parse_event(&text));
    }
    events
}

/// Position and length of the earliest blank-line separator in the buffer.
fn find_separator(buffer: &[u8]) -> Option<(usize, usize)> {
    let lf = buffer
        .windows(2)
        .position(|w| w == b"\n\n")
        .map(|i| (i, 2));
    let crlf = buffer
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .map(|i| (i, 4));
    match (lf, crlf) {
        (Some(a), Some(b)) => Some(if a.0 <= b.0 { a } else { b }),
        (a, b) => a.or(b),
    }
}
