use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Upper bound for an entire multipart create request (text fields plus image).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
