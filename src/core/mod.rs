pub mod catalog;
pub mod file_ops;
pub mod label_store;
pub mod organizer;
pub mod session;

pub use catalog::Catalog;
pub use label_store::LabelStore;
pub use organizer::{OrganizeMode, OrganizeSummary};
pub use session::{LabelOutcome, LabelSession, NavOutcome, TrashOutcome, UndoOutcome};
