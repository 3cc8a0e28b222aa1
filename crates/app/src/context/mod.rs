//! Application context - dependency injection container

use std::sync::Arc;
use std::time::Duration;

use brick_core::{
    AgencyService, CaseworkerService, ChatService, DirectoryService, DossierService,
    FlashcardService, HmisService, LegalService, NotificationFeedService, ResourceService,
    SessionService, SweepService, TokenStore, UiSignal, VaultService, WorkbookService,
};
use brick_domain::{BrickError, Config, Result};
use brick_infra::scheduling::SchedulerError;
use brick_infra::{
    AccessTokenProvider, ApiClient, FileTokenStore, HttpAuthGateway, HttpCaseworkGateway,
    HttpChatGateway, HttpDossierGateway, HttpFlashcardGateway, HttpHmisGateway, HttpLegalGateway,
    HttpNotificationGateway, HttpResourceGateway, HttpSweepGateway, HttpVaultGateway,
    HttpWorkbookGateway, NotificationPoller, NotificationPollerConfig, StaticDirectoryGateway,
    StoreTokenProvider, TracingSignal,
};
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Type alias for the token store trait object
type DynTokenStore = dyn TokenStore;

/// Type alias for the user signal trait object
type DynUiSignal = dyn UiSignal;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub session: Arc<SessionService>,
    pub notifications: Arc<NotificationFeedService>,

    // Per-page view services
    pub dossier: Arc<DossierService>,
    pub workbook: Arc<WorkbookService>,
    pub flashcards: Arc<FlashcardService>,
    pub vault: Arc<VaultService>,
    pub resources: Arc<ResourceService>,
    pub directory: Arc<DirectoryService>,
    pub caseworker: Arc<CaseworkerService>,
    pub agency: Arc<AgencyService>,
    pub legal: Arc<LegalService>,
    pub sweeps: Arc<SweepService>,
    pub hmis: Arc<HmisService>,
    pub chat: Arc<ChatService>,

    poller: Mutex<NotificationPoller>,
}

impl AppContext {
    /// Wire up every service against the real adapters
    ///
    /// # Errors
    ///
    /// Returns `BrickError::Config` if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let token_store: Arc<DynTokenStore> =
            Arc::new(FileTokenStore::new(&config.session.token_path));
        let token_provider: Arc<dyn AccessTokenProvider> =
            Arc::new(StoreTokenProvider::new(Arc::clone(&token_store)));

        let api = Arc::new(
            ApiClient::builder()
                .base_url(config.api.base_url.clone())
                .timeout(Duration::from_secs(config.api.timeout_seconds.max(1)))
                .build(token_provider)?,
        );

        let signals: Arc<DynUiSignal> = Arc::new(TracingSignal);

        let session = Arc::new(SessionService::new(
            token_store,
            Arc::new(HttpAuthGateway::new(Arc::clone(&api))),
            Arc::clone(&signals),
        ));

        let notifications = Arc::new(NotificationFeedService::new(
            Arc::new(HttpNotificationGateway::new(Arc::clone(&api))),
            Arc::clone(&signals),
        ));

        let poller = Mutex::new(NotificationPoller::new(
            Arc::clone(&notifications),
            NotificationPollerConfig {
                interval: Duration::from_secs(config.notifications.interval_seconds.max(1)),
                ..Default::default()
            },
        ));

        Ok(Self {
            session,
            notifications,
            dossier: Arc::new(DossierService::new(
                Arc::new(HttpDossierGateway::new(Arc::clone(&api))),
                Arc::clone(&signals),
            )),
            workbook: Arc::new(WorkbookService::new(
                Arc::new(HttpWorkbookGateway::new(Arc::clone(&api))),
                Arc::clone(&signals),
            )),
            flashcards: Arc::new(FlashcardService::new(
                Arc::new(HttpFlashcardGateway::new(Arc::clone(&api))),
                Arc::clone(&signals),
            )),
            vault: Arc::new(VaultService::new(
                Arc::new(HttpVaultGateway::new(Arc::clone(&api))),
                Arc::clone(&signals),
            )),
            resources: Arc::new(ResourceService::new(
                Arc::new(HttpResourceGateway::new(Arc::clone(&api))),
                Arc::clone(&signals),
            )),
            directory: Arc::new(DirectoryService::new(
                Arc::new(StaticDirectoryGateway::new(Arc::clone(&api))),
                Arc::clone(&signals),
            )),
            caseworker: Arc::new(CaseworkerService::new(
                Arc::new(HttpCaseworkGateway::new(Arc::clone(&api))),
                Arc::clone(&signals),
            )),
            agency: Arc::new(AgencyService::new(
                Arc::new(HttpCaseworkGateway::new(Arc::clone(&api))),
                Arc::clone(&signals),
            )),
            legal: Arc::new(LegalService::new(
                Arc::new(HttpLegalGateway::new(Arc::clone(&api))),
                Arc::clone(&signals),
            )),
            sweeps: Arc::new(SweepService::new(
                Arc::new(HttpSweepGateway::new(Arc::clone(&api))),
                Arc::clone(&signals),
            )),
            hmis: Arc::new(HmisService::new(
                Arc::new(HttpHmisGateway::new(Arc::clone(&api))),
                Arc::clone(&signals),
            )),
            chat: Arc::new(ChatService::new(
                Arc::new(HttpChatGateway::new(Arc::clone(&api))),
                signals,
            )),
            poller,
            config,
        })
    }

    /// Resolve identity and start background work
    ///
    /// Identity resolves before the poller starts, so the first
    /// notification fetch already carries a token when one was persisted.
    ///
    /// # Errors
    ///
    /// Returns `BrickError::Internal` if the poller fails to start.
    pub async fn startup(&self) -> Result<()> {
        self.session.bootstrap().await;

        self.poller.lock().await.start().await.map_err(|e| {
            BrickError::Internal(format!("Failed to start notification poller: {e}"))
        })?;

        info!("Application context started");
        Ok(())
    }

    /// Stop background work
    ///
    /// # Errors
    ///
    /// Returns `BrickError::Internal` if the poller does not shut down in
    /// time.
    pub async fn shutdown(&self) -> Result<()> {
        match self.poller.lock().await.stop().await {
            Ok(()) | Err(SchedulerError::NotRunning) => {}
            Err(e) => {
                warn!(error = %e, "Notification poller did not stop cleanly");
                return Err(BrickError::Internal(format!(
                    "Failed to stop notification poller: {e}"
                )));
            }
        }

        info!("Application context stopped");
        Ok(())
    }
}
