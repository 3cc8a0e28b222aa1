//! AI caseworker chat
//!
//! Keeps the transcript and the backend-issued session id. When a reply
//! flags that the dossier changed, an info signal lets the shell prompt the
//! user to review it.

use std::sync::{Arc, RwLock};

use brick_domain::{ChatReply, ChatRequest, Result};

use crate::gateway_ports::ChatGateway;
use crate::session::ports::UiSignal;

/// One transcript line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEntry {
    User(String),
    Assistant(String),
}

#[derive(Debug, Default, Clone)]
struct ChatState {
    transcript: Vec<ChatEntry>,
    session_id: Option<String>,
}

pub struct ChatService {
    gateway: Arc<dyn ChatGateway>,
    signals: Arc<dyn UiSignal>,
    state: RwLock<ChatState>,
}

impl ChatService {
    pub fn new(gateway: Arc<dyn ChatGateway>, signals: Arc<dyn UiSignal>) -> Self {
        Self { gateway, signals, state: RwLock::new(ChatState::default()) }
    }

    /// `POST /chat/message`
    ///
    /// The transcript only grows on success; a failed send leaves it
    /// untouched so the user can retry the same message.
    pub async fn send(&self, message: &str) -> Result<ChatReply> {
        let request = ChatRequest {
            message: message.to_string(),
            session_id: self.read().session_id,
        };

        match self.gateway.send(&request).await {
            Ok(reply) => {
                let mut state = self.write();
                state.transcript.push(ChatEntry::User(message.to_string()));
                state.transcript.push(ChatEntry::Assistant(reply.response.clone()));
                state.session_id = Some(reply.session_id.clone());
                drop(state);

                if reply.dossier_updated {
                    self.signals.info("Your dossier was updated from this conversation");
                }
                Ok(reply)
            }
            Err(err) => {
                self.signals.error("Failed to send message");
                Err(err)
            }
        }
    }

    pub fn transcript(&self) -> Vec<ChatEntry> {
        self.read().transcript
    }

    pub fn session_id(&self) -> Option<String> {
        self.read().session_id
    }

    fn read(&self) -> ChatState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, ChatState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use brick_domain::BrickError;

    use super::*;

    #[derive(Default)]
    struct FakeGateway {
        requests: Mutex<Vec<ChatRequest>>,
        fail: std::sync::atomic::AtomicBool,
    }

    #[async_trait]
    impl ChatGateway for FakeGateway {
        async fn send(&self, request: &ChatRequest) -> Result<ChatReply> {
            if self.fail.load(std::sync::atomic::Ordering::SeqCst) {
                return Err(BrickError::Network("down".into()));
            }
            self.requests.lock().unwrap().push(request.clone());
            Ok(ChatReply {
                response: "I can help with that.".into(),
                session_id: "sess-1".into(),
                dossier_updated: false,
            })
        }
    }

    struct NullSignal;

    impl UiSignal for NullSignal {
        fn success(&self, _message: &str) {}
        fn info(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
    }

    #[tokio::test]
    async fn session_id_is_reused_after_first_reply() {
        let gateway = Arc::new(FakeGateway::default());
        let service = ChatService::new(gateway.clone(), Arc::new(NullSignal));

        service.send("I need housing help").await.unwrap();
        service.send("What shelters are open?").await.unwrap();

        let requests = gateway.requests.lock().unwrap();
        assert_eq!(requests[0].session_id, None);
        assert_eq!(requests[1].session_id.as_deref(), Some("sess-1"));
        assert_eq!(service.transcript().len(), 4);
    }

    #[tokio::test]
    async fn failed_send_leaves_the_transcript_untouched() {
        let gateway = Arc::new(FakeGateway::default());
        gateway.fail.store(true, std::sync::atomic::Ordering::SeqCst);
        let service = ChatService::new(gateway, Arc::new(NullSignal));

        assert!(service.send("hello").await.is_err());
        assert!(service.transcript().is_empty());
    }
}
