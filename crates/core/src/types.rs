/// Primary keys are application-generated UUIDs (v7, time-ordered).
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh identifier for a new row.
pub fn new_entity_id() -> EntityId {
    uuid::Uuid::now_v7()
}
