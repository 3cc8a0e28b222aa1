//! Port interfaces for the REST data gateways
//!
//! One trait per API area. Infra implements each over the shared HTTP
//! client; tests substitute in-memory fakes. Every method maps to exactly
//! one request.

use async_trait::async_trait;
use brick_domain::{
    ChatReply, ChatRequest, CleanupSweep, CleanupSweepCreate, DirectoryMessage, DossierItem,
    DossierItemCreate, Flashcard, HmisArchive, HmisClientProfile, HmisEnrollment, HudReport,
    LegalCase, LegalForm, NotificationFeed, Organization, Resource, Result, UnifiedClientList,
    User, VaultDocument, Workbook, WorkbookProgressUpdate, WorkbookStats, WorkbookTask,
};

/// `GET/POST /dossier`
#[async_trait]
pub trait DossierGateway: Send + Sync {
    async fn items(&self) -> Result<Vec<DossierItem>>;
    async fn add_item(&self, item: &DossierItemCreate) -> Result<DossierItem>;
}

/// Workbook tasks, stats, and generated workbooks
#[async_trait]
pub trait WorkbookGateway: Send + Sync {
    /// `GET /workbook/tasks`
    async fn tasks(&self) -> Result<Vec<WorkbookTask>>;

    /// `PATCH /workbook/tasks/{id}/complete`
    async fn complete_task(&self, id: &str, answer: Option<&str>) -> Result<WorkbookTask>;

    /// `GET /workbook/stats`
    async fn stats(&self) -> Result<WorkbookStats>;

    /// `GET /workbooks`
    async fn workbooks(&self) -> Result<Vec<Workbook>>;

    /// `POST /workbooks/generate`
    async fn generate(&self) -> Result<Workbook>;

    /// `GET /workbooks/{id}`
    async fn workbook(&self, id: &str) -> Result<Workbook>;

    /// `PATCH /workbooks/{id}/progress`
    async fn update_progress(&self, id: &str, update: &WorkbookProgressUpdate)
        -> Result<Workbook>;
}

/// `GET /flashcards`, `POST /flashcards/{id}/answer`
#[async_trait]
pub trait FlashcardGateway: Send + Sync {
    async fn cards(&self) -> Result<Vec<Flashcard>>;
    async fn answer(&self, id: &str, answer: &str) -> Result<Flashcard>;
}

/// Document vault endpoints
#[async_trait]
pub trait VaultGateway: Send + Sync {
    /// `GET /vault/documents`
    async fn documents(&self) -> Result<Vec<VaultDocument>>;

    /// `POST /vault/upload`; the adapter base64-encodes `bytes` for transport
    async fn upload(
        &self,
        document_type: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<VaultDocument>;
}

/// `GET /resources?category=`
#[async_trait]
pub trait ResourceGateway: Send + Sync {
    async fn resources(&self, category: Option<&str>) -> Result<Vec<Resource>>;
}

/// Notification feed endpoints
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// `GET /notifications`
    async fn feed(&self) -> Result<NotificationFeed>;

    /// `PATCH /notifications/{id}/read`
    async fn mark_read(&self, id: &str) -> Result<()>;

    /// `PATCH /notifications/read-all`
    async fn mark_all_read(&self) -> Result<()>;

    /// `DELETE /notifications/{id}`
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Caseworker and agency reporting endpoints
#[async_trait]
pub trait CaseworkGateway: Send + Sync {
    /// `GET /caseworker/clients`
    async fn clients(&self) -> Result<Vec<User>>;

    /// `GET /caseworker/hud-report`
    async fn hud_report(&self) -> Result<HudReport>;

    /// `GET /agency/clients/unified`
    async fn unified_clients(&self) -> Result<UnifiedClientList>;
}

/// HMIS intake and export endpoints
#[async_trait]
pub trait HmisGateway: Send + Sync {
    /// `POST /hmis/client-profile`
    async fn submit_client_profile(&self, profile: &HmisClientProfile) -> Result<()>;

    /// `POST /hmis/enrollments`
    async fn submit_enrollment(&self, enrollment: &HmisEnrollment) -> Result<()>;

    /// `GET /hmis/export/csv`; the adapter decodes the base64 payload
    async fn export_archive(&self) -> Result<HmisArchive>;
}

/// `GET /legal/forms`, `GET /legal/cases`
#[async_trait]
pub trait LegalGateway: Send + Sync {
    async fn forms(&self) -> Result<Vec<LegalForm>>;
    async fn cases(&self) -> Result<Vec<LegalCase>>;
}

/// `GET/POST /cleanup/sweeps`
#[async_trait]
pub trait SweepGateway: Send + Sync {
    async fn sweeps(&self) -> Result<Vec<CleanupSweep>>;
    async fn post_sweep(&self, sweep: &CleanupSweepCreate) -> Result<CleanupSweep>;
}

/// Partner directory: static organization data plus outbound messages
#[async_trait]
pub trait DirectoryGateway: Send + Sync {
    /// Organizations ship with the client as embedded data, not an API call
    async fn organizations(&self) -> Result<Vec<Organization>>;

    /// `POST /directory/message`
    async fn send_message(&self, message: &DirectoryMessage) -> Result<()>;
}

/// `POST /chat/message`
#[async_trait]
pub trait ChatGateway: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply>;
}
