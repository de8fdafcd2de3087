use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const PROJECT_DELETED_MESSAGE: &str = "Project deleted successfully";
pub const CONTACT_RECEIVED_MESSAGE: &str = "Message sent successfully!";
pub const INVALID_PASSWORD_MESSAGE: &str = "Invalid password";
