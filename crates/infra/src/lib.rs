//! # BRICK Infrastructure Layer
//!
//! This crate contains every adapter that touches the outside world:
//!
//! - **api**: HTTP client for the backend plus one gateway per API area
//! - **config**: configuration loading from environment or file
//! - **scheduling**: the background notification poller
//! - **storage**: durable bearer-token persistence
//! - **signal**: user-facing signal sink backed by tracing
//!
//! ## Architecture Principles
//!
//! Infra implements the ports defined in `brick-core` and never contains
//! business rules of its own. Services in core decide *what* to do; this
//! crate decides *how* the bytes move.

pub mod api;
pub mod config;
pub mod scheduling;
pub mod signal;
pub mod storage;

pub use api::client::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use api::errors::{ApiError, ApiErrorCategory};
pub use api::gateways::{
    HttpAuthGateway, HttpCaseworkGateway, HttpChatGateway, HttpDossierGateway,
    HttpFlashcardGateway, HttpHmisGateway, HttpLegalGateway, HttpNotificationGateway,
    HttpResourceGateway, HttpSweepGateway, HttpVaultGateway, HttpWorkbookGateway,
    StaticDirectoryGateway,
};
pub use api::token::{AccessTokenProvider, StoreTokenProvider};
pub use scheduling::notification_poller::{NotificationPoller, NotificationPollerConfig};
pub use scheduling::{SchedulerError, SchedulerResult};
pub use signal::TracingSignal;
pub use storage::token_file::FileTokenStore;
