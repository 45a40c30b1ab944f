//! Scripted LLM provider — replays queued canned replies.
//!
//! Used for testing the full request pipeline without a real API key. Clones
//! share the reply queue and the call counter, so a test can keep one handle
//! and hand another to the server state, then assert on call counts.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::llm::ProviderError;

/// Reply returned when the queue is empty — a complete, well-formed scheme
/// so the default path exercises the happy case.
const DEFAULT_REPLY: &str = r##"{"primary":"#1a1a2e","secondary":"#16213e","accent":"#e94560","background":"#f5f5f5","text":"#0f0f0f"}"##;

#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    replies: Arc<Mutex<VecDeque<Result<String, String>>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply to be returned by the next unanswered `complete` call.
    pub fn push_reply(&self, text: impl Into<String>) {
        self.queue().push_back(Ok(text.into()));
    }

    /// Queue a failure — the next `complete` call returns a `ProviderError`.
    pub fn push_failure(&self, message: impl Into<String>) {
        self.queue().push_back(Err(message.into()));
    }

    // Poisoning only happens if a panic fired mid-push; the queue itself is
    // still structurally sound, so recover the guard rather than propagate.
    fn queue(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<String, String>>> {
        self.replies.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Number of `complete` calls made so far, across all clones.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn complete(&self, _content: &str, _system: Option<&str>) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.queue().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(ProviderError::Request(message)),
            None => Ok(DEFAULT_REPLY.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_are_returned_in_order() {
        let p = ScriptedProvider::new();
        p.push_reply("one");
        p.push_reply("two");
        assert_eq!(p.complete("x", None).await.unwrap(), "one");
        assert_eq!(p.complete("x", None).await.unwrap(), "two");
        assert_eq!(p.call_count(), 2);
    }

    #[tokio::test]
    async fn empty_queue_returns_default_scheme() {
        let p = ScriptedProvider::new();
        let reply = p.complete("x", None).await.unwrap();
        assert!(reply.contains("\"primary\""));
    }

    #[tokio::test]
    async fn queued_failure_surfaces_as_error() {
        let p = ScriptedProvider::new();
        p.push_failure("quota exceeded");
        let err = p.complete("x", None).await.unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let p = ScriptedProvider::new();
        let q = p.clone();
        q.push_reply("shared");
        assert_eq!(p.complete("x", None).await.unwrap(), "shared");
        assert_eq!(q.call_count(), 1);
    }
}
