use thiserror::Error;

use crate::validator::ValidationErrors;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Invalid menu item: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error("Duplicate menu item id \"{0}\"")]
    DuplicateId(String),
}
