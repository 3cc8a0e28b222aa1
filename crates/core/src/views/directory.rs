//! Directory page: static partner organizations with search and messaging
//!
//! Organizations are data shipped with the client, loaded once; search and
//! category filtering happen entirely client-side against name and services.

use std::sync::{Arc, RwLock};

use brick_domain::{DirectoryMessage, Organization, Result};
use tracing::debug;

use crate::aggregate::filter_organizations;
use crate::fetch::LoadState;
use crate::gateway_ports::DirectoryGateway;
use crate::session::ports::UiSignal;

#[derive(Debug, Default, Clone)]
struct DirectoryState {
    organizations: Vec<Organization>,
    load: LoadState,
}

pub struct DirectoryService {
    gateway: Arc<dyn DirectoryGateway>,
    signals: Arc<dyn UiSignal>,
    state: RwLock<DirectoryState>,
}

impl DirectoryService {
    pub fn new(gateway: Arc<dyn DirectoryGateway>, signals: Arc<dyn UiSignal>) -> Self {
        Self { gateway, signals, state: RwLock::new(DirectoryState::default()) }
    }

    /// Load the organization list (embedded data, no network involved)
    pub async fn load(&self) {
        let result = self.gateway.organizations().await;
        let mut state = self.write();
        match result {
            Ok(organizations) => {
                state.organizations = organizations;
                state.load = LoadState::Ready;
            }
            Err(err) => {
                state.load = LoadState::Failed;
                drop(state);
                debug!(error = %err, "Failed to load organization directory");
                self.signals.error("Failed to load the directory");
            }
        }
    }

    /// Organizations matching the query and category
    pub fn filtered(&self, query: &str, category: &str) -> Vec<Organization> {
        let state = self.read();
        filter_organizations(&state.organizations, query, category)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn organizations(&self) -> Vec<Organization> {
        self.read().organizations
    }

    pub fn load_state(&self) -> LoadState {
        self.read().load
    }

    /// `POST /directory/message`
    ///
    /// Empty messages are rejected before any request is issued.
    pub async fn send_message(&self, organization: &Organization, message: &str) -> Result<()> {
        if message.trim().is_empty() {
            self.signals.error("Please enter a message");
            return Err(brick_domain::BrickError::InvalidInput("empty message".into()));
        }

        let payload = DirectoryMessage {
            organization_id: organization.id.clone(),
            organization_name: organization.name.clone(),
            message: message.to_string(),
        };

        match self.gateway.send_message(&payload).await {
            Ok(()) => {
                self.signals.success(&format!(
                    "Message sent to {}! They will respond to your account.",
                    organization.name
                ));
                Ok(())
            }
            Err(err) => {
                self.signals.error("Failed to send message. Please try again.");
                Err(err)
            }
        }
    }

    fn read(&self) -> DirectoryState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, DirectoryState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    #[derive(Default)]
    struct FakeGateway {
        sent: Mutex<Vec<DirectoryMessage>>,
    }

    fn org(id: &str, name: &str, category: &str, services: &[&str]) -> Organization {
        Organization {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            description: String::new(),
            services: services.iter().map(|s| s.to_string()).collect(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            hours: String::new(),
            website: String::new(),
            color: "blue".into(),
            icon: "home".into(),
            applications: Vec::new(),
        }
    }

    #[async_trait]
    impl DirectoryGateway for FakeGateway {
        async fn organizations(&self) -> Result<Vec<Organization>> {
            Ok(vec![
                org("help-sn", "H.E.L.P. of Southern Nevada", "shelter", &["Emergency Shelter"]),
                org("three-square", "Three Square Food Bank", "food", &["Food Pantries"]),
            ])
        }

        async fn send_message(&self, message: &DirectoryMessage) -> Result<()> {
            self.sent.lock().unwrap().push(message.clone());
            Ok(())
        }
    }

    struct NullSignal;

    impl UiSignal for NullSignal {
        fn success(&self, _message: &str) {}
        fn info(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
    }

    #[tokio::test]
    async fn filters_by_search_and_category() {
        let service = DirectoryService::new(Arc::new(FakeGateway::default()), Arc::new(NullSignal));
        service.load().await;

        assert_eq!(service.filtered("", "all").len(), 2);
        assert_eq!(service.filtered("shelter", "all").len(), 1);
        assert_eq!(service.filtered("", "food")[0].id, "three-square");
    }

    #[tokio::test]
    async fn empty_message_is_rejected_without_a_request() {
        let gateway = Arc::new(FakeGateway::default());
        let service = DirectoryService::new(gateway.clone(), Arc::new(NullSignal));
        service.load().await;

        let target = service.organizations().remove(0);
        assert!(service.send_message(&target, "   ").await.is_err());
        assert!(gateway.sent.lock().unwrap().is_empty());

        service.send_message(&target, "Do you have space tonight?").await.unwrap();
        assert_eq!(gateway.sent.lock().unwrap().len(), 1);
    }
}
