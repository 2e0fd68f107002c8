use crate::types::{EntityId, Timestamp};

/// A film director.
///
/// Directors know nothing about their movies; the relationship is stored on
/// the movie side only.
#[derive(Debug, Clone, PartialEq)]
pub struct Director {
    pub id: EntityId,
    pub first_name: String,
    pub second_name: String,
    pub birth_date: Timestamp,
    pub bio: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a director (server-assigned fields excluded).
#[derive(Debug, Clone, PartialEq)]
pub struct NewDirector {
    pub first_name: String,
    pub second_name: String,
    pub birth_date: Timestamp,
    pub bio: String,
}
