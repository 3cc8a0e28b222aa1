//! Gateway implementations of the core ports
//!
//! One adapter per API area, each a thin wrapper over the shared
//! [`ApiClient`](crate::api::client::ApiClient). Conversions between wire
//! payloads and domain types (base64 file data, embedded directory data)
//! live here so core stays transport-free.

mod auth;
mod casework;
mod chat;
mod directory;
mod dossier;
mod flashcards;
mod hmis;
mod legal;
mod notifications;
mod resources;
mod sweeps;
mod vault;
mod workbook;

pub use auth::HttpAuthGateway;
pub use casework::HttpCaseworkGateway;
pub use chat::HttpChatGateway;
pub use directory::StaticDirectoryGateway;
pub use dossier::HttpDossierGateway;
pub use flashcards::HttpFlashcardGateway;
pub use hmis::HttpHmisGateway;
pub use legal::HttpLegalGateway;
pub use notifications::HttpNotificationGateway;
pub use resources::HttpResourceGateway;
pub use sweeps::HttpSweepGateway;
pub use vault::HttpVaultGateway;
pub use workbook::HttpWorkbookGateway;
