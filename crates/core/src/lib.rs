//! # BRICK Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The session service and router gate
//! - Per-page view services with their mutation actions
//! - Aggregation rules (search, category filter, grouping, level derivation)
//! - Port/adapter interfaces (traits)
//!
//! ## Architecture Principles
//! - Only depends on `brick-common` and `brick-domain`
//! - No HTTP, filesystem, or timer code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod aggregate;
pub mod fetch;
pub mod gateway_ports;
pub mod notify;
pub mod routing;
pub mod session;
pub mod views;

// Re-export specific items to avoid ambiguity
pub use fetch::{FetchGeneration, LoadState};
pub use gateway_ports::{
    CaseworkGateway, ChatGateway, DirectoryGateway, DossierGateway, FlashcardGateway,
    HmisGateway, LegalGateway, NotificationGateway, ResourceGateway, SweepGateway,
    VaultGateway, WorkbookGateway,
};
pub use notify::NotificationFeedService;
pub use routing::{Navigation, Route, RouterGate};
pub use session::ports::{AuthGateway, TokenStore, UiSignal};
pub use session::SessionService;
pub use views::agency::AgencyService;
pub use views::caseworker::CaseworkerService;
pub use views::chat::ChatService;
pub use views::directory::DirectoryService;
pub use views::dossier::DossierService;
pub use views::flashcards::FlashcardService;
pub use views::hmis::HmisService;
pub use views::legal::LegalService;
pub use views::resources::ResourceService;
pub use views::sweeps::SweepService;
pub use views::vault::VaultService;
pub use views::workbook::WorkbookService;
