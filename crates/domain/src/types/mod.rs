//! REST data types consumed by the client core
//!
//! These mirror the shapes returned by the case-management API. The backend
//! is the authority for all of them; the client never derives state the
//! server already supplies.

pub mod casework;
pub mod chat;
pub mod dossier;
pub mod flashcard;
pub mod hmis;
pub mod legal;
pub mod notification;
pub mod organization;
pub mod resource;
pub mod session;
pub mod sweep;
pub mod user;
pub mod vault;
pub mod workbook;

pub use casework::{ClientEngagement, HudDataQuality, HudReport, InterAgencyData, UnifiedClient, UnifiedClientList};
pub use chat::{ChatReply, ChatRequest};
pub use dossier::{DossierItem, DossierItemCreate};
pub use flashcard::{Flashcard, FlashcardAnswer};
pub use hmis::{HmisArchive, HmisClientProfile, HmisEnrollment, HmisExportPayload};
pub use legal::{LegalCase, LegalForm};
pub use notification::{Notification, NotificationFeed, NotificationPriority};
pub use organization::{DirectoryMessage, Organization};
pub use resource::{Coordinates, Resource};
pub use session::Session;
pub use sweep::{CleanupSweep, CleanupSweepCreate};
pub use user::{LoginRequest, RegisterRequest, Role, TokenResponse, User};
pub use vault::{DocumentUpload, VaultDocument};
pub use workbook::{Workbook, WorkbookProgressUpdate, WorkbookStats, WorkbookTask};
