//! Notification feed endpoints

use std::sync::Arc;

use async_trait::async_trait;
use brick_core::NotificationGateway;
use brick_domain::{NotificationFeed, Result};
use serde_json::json;

use crate::api::client::ApiClient;

pub struct HttpNotificationGateway {
    api: Arc<ApiClient>,
}

impl HttpNotificationGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl NotificationGateway for HttpNotificationGateway {
    async fn feed(&self) -> Result<NotificationFeed> {
        Ok(self.api.get("/notifications").await?)
    }

    async fn mark_read(&self, id: &str) -> Result<()> {
        let _: serde_json::Value =
            self.api.patch(&format!("/notifications/{id}/read"), &json!({})).await?;
        Ok(())
    }

    async fn mark_all_read(&self) -> Result<()> {
        let _: serde_json::Value = self.api.patch("/notifications/read-all", &json!({})).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.api.delete(&format!("/notifications/{id}")).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::client::ApiClient;
    use crate::api::token::StaticTokenProvider;

    use super::*;

    fn gateway(server: &MockServer) -> HttpNotificationGateway {
        let api = ApiClient::builder()
            .base_url(server.uri())
            .build(Arc::new(StaticTokenProvider::new(Some("tok".into()))))
            .unwrap();
        HttpNotificationGateway::new(Arc::new(api))
    }

    #[tokio::test]
    async fn feed_deserializes_notifications_and_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/notifications"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "notifications": [{
                    "id": "n1",
                    "notification_type": "sweep_alert",
                    "priority": "urgent",
                    "title": "Cleanup scheduled",
                    "message": "A sweep is scheduled near your recorded location",
                    "read": false,
                    "created_at": "2025-01-15T10:00:00Z"
                }],
                "unread_count": 1
            })))
            .mount(&server)
            .await;

        let feed = gateway(&server).feed().await.unwrap();
        assert_eq!(feed.unread_count, 1);
        assert_eq!(feed.notifications[0].id, "n1");
    }

    #[tokio::test]
    async fn mark_read_tolerates_an_empty_ok_body() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/notifications/n1/read"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        gateway(&server).mark_read("n1").await.unwrap();
    }
}
