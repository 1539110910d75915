use thiserror::Error;

use crate::model::MemberId;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("No member with ID {id} exists")]
    NotFound { id: MemberId },

    #[error("Invalid parent: {0}")]
    InvalidParent(String),

    #[error("No common ancestor exists")]
    NoCommonAncestor,

    #[error("File is in invalid format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
