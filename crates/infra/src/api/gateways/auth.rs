//! Authentication endpoints

use std::sync::Arc;

use async_trait::async_trait;
use brick_core::AuthGateway;
use brick_domain::{LoginRequest, RegisterRequest, Result, TokenResponse, User};

use crate::api::client::ApiClient;

pub struct HttpAuthGateway {
    api: Arc<ApiClient>,
}

impl HttpAuthGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse> {
        Ok(self.api.post("/auth/register", request).await?)
    }

    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse> {
        Ok(self.api.post("/auth/login", request).await?)
    }

    async fn me(&self) -> Result<User> {
        Ok(self.api.get("/auth/me").await?)
    }
}

#[cfg(test)]
mod tests {
    use brick_domain::Role;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::client::ApiClient;
    use crate::api::token::StaticTokenProvider;

    use super::*;

    fn gateway(server: &MockServer) -> HttpAuthGateway {
        let api = ApiClient::builder()
            .base_url(server.uri())
            .build(Arc::new(StaticTokenProvider::new(None)))
            .unwrap();
        HttpAuthGateway::new(Arc::new(api))
    }

    #[tokio::test]
    async fn login_posts_credentials_and_returns_token() {
        let server = MockServer::start().await;
        let request =
            LoginRequest { email: "vet@example.org".into(), password: "hunter2".into() };

        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(&request))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "tok-abc",
                "token_type": "bearer",
                "user": {
                    "id": "u1",
                    "email": "vet@example.org",
                    "full_name": "Pat Doe",
                    "role": "user",
                    "is_veteran": true
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = gateway(&server).login(&request).await.unwrap();
        assert_eq!(response.access_token, "tok-abc");
        assert_eq!(response.user.role, Role::User);
        assert!(response.user.is_veteran);
    }

    #[tokio::test]
    async fn bad_credentials_surface_the_backend_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "detail": "Incorrect email or password"
            })))
            .mount(&server)
            .await;

        let request = LoginRequest { email: "x@example.org".into(), password: "wrong".into() };
        let err = gateway(&server).login(&request).await.unwrap_err();
        assert_eq!(err.to_string(), "Authentication error: Incorrect email or password");
    }
}
