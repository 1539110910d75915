//! Core genealogy graph engine.
//!
//! A [`FamilyTree`] holds members linked by father/mother references and a
//! derived children index, hands out reusable integer identities, answers
//! kinship queries ("second cousin twice removed"), and persists itself to a
//! compact binary file in topological order.

pub mod codec;
pub mod error;
pub mod model;
pub mod relation;
pub mod tree;

pub use error::TreeError;
pub use model::{Gender, Member, MemberId};
pub use tree::FamilyTree;
