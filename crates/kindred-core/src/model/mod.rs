pub mod member;

pub use member::{Gender, Member, MemberId};
