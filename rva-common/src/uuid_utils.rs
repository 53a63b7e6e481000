//! UUID utilities

use uuid::Uuid;

/// Generate a new UUIDv4
pub fn generate() -> Uuid {
    Uuid::new_v4()
}

/// Generate a new review identifier in its wire form (hyphenated UUIDv4)
pub fn generate_review_id() -> String {
    generate().to_string()
}
