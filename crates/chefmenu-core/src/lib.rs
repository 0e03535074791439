pub mod catalogs;
pub mod error;
pub mod ffi;
pub mod session;
pub mod store;
pub mod types;
pub mod validator;
pub mod views;

pub use catalogs::seed_menu;
pub use error::CatalogError;
pub use ffi::{favorites_to_json, filter_to_json, search_to_json, validate_draft_to_json};
pub use session::{NavEvent, Screen, Session, Tab};
pub use store::MenuStore;
pub use types::*;
pub use validator::{
    validate_draft, validate_items, CatalogReport, Diagnostic, DiagnosticSeverity, MenuItemDraft,
    ValidationErrors, ValidationIssue,
};
pub use views::{favorites_view, filter, search, summary, FilterCriteria, MenuSummary};
