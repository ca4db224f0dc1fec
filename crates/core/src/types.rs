/// Topic and resource identifiers are opaque strings (UUIDv7 text when
/// generated here).
pub type TopicId = String;
pub type ResourceId = String;

/// Topic version numbers start at 1.
pub type Version = i32;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh, time-ordered identifier.
pub fn new_id() -> String {
    uuid::Uuid::now_v7().to_string()
}
