/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Identifier for one dashboard session (one screen lifetime).
pub type SessionId = uuid::Uuid;
