//! Core domain layer of the SpaceLink storage-rental marketplace demo:
//! listing browsing, simulated AR item scanning, storage-fit planning,
//! booking quotes and the chat assistant. All catalog data is built in;
//! the only persistence is the application settings file and the audit
//! log, and the only network call is the assistant webhook (which falls
//! back to local canned replies on any failure).

pub mod catalog;
pub mod domain;
pub mod sequence;
pub mod services;

pub use domain::models::{
    AppSettings, AssistantConfig, ChatMessage, Dimensions, FitReport, HostProfile, InsurancePlan,
    ListingDetails, ListingRecord, QuoteBreakdown, RentalRecord, RentalStatus, Review, ScannedItem,
    StorageUnitTier, UtilizationBand,
};
pub use sequence::SeededSequence;
pub use services::assistant::Conversation;
pub use services::i18n::Language;
pub use services::listings::ListingFilter;
pub use services::scanner::{ScanProfile, ScanSession};
pub use services::visualizer::{VisualizerFlow, VisualizerStep};
