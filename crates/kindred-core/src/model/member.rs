use serde::{Deserialize, Serialize};

/// Identity of a live member of a [`crate::FamilyTree`].
///
/// Always ≥ 1; "no member" is `Option::None` everywhere in the API. The raw
/// value 0 exists only in the binary file format, where it encodes a missing
/// parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(pub u32);

impl MemberId {
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Decode a wire value: 0 means "no member".
    pub fn from_raw(raw: u32) -> Option<Self> {
        (raw != 0).then_some(Self(raw))
    }

    /// Encode an optional identity as a wire value (None → 0).
    pub fn to_raw(id: Option<Self>) -> u32 {
        id.map_or(0, |m| m.0)
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MemberId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// The model records binary gender only — a documented limitation inherited
/// from the on-disk format, which spends a single byte on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// The single-byte wire encoding (0 = male, 1 = female).
    pub fn to_byte(self) -> u8 {
        match self {
            Gender::Male => 0,
            Gender::Female => 1,
        }
    }

    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            0 => Some(Gender::Male),
            1 => Some(Gender::Female),
            _ => None,
        }
    }
}

/// One genealogical record. Parent links reference other live members by
/// identity; the derived children index lives on the owning tree, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father: Option<MemberId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother: Option<MemberId>,
}
