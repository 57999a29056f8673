/// Id and timestamp helpers
/// 
/// Habit ids are plain strings so clients may supply their own. Generated ids
/// look like `h_<base36 epoch millis>_<10 hex chars of a v4 uuid>`.

use chrono::Utc;
use uuid::Uuid;

/// Prefix shared by every generated habit id
pub const HABIT_ID_PREFIX: &str = "h_";

/// Number of uuid characters appended to a generated id
const RANDOM_SUFFIX_LEN: usize = 10;

/// Generator for habit identifiers
pub struct HabitId;

impl HabitId {
    /// Generate a new habit id from the current time and a random suffix
    /// 
    /// Uniqueness is probabilistic; callers do not check for collisions.
    pub fn generate() -> String {
        Self::generate_at(now_millis())
    }
    
    /// Generate a habit id for a given epoch-millisecond timestamp
    pub fn generate_at(millis: i64) -> String {
        let uuid = Uuid::new_v4().simple().to_string();
        format!(
            "{}{}_{}",
            HABIT_ID_PREFIX,
            to_base36(millis.max(0) as u64),
            &uuid[..RANDOM_SUFFIX_LEN]
        )
    }
    
    /// Whether an id needs to be generated (absent or blank)
    pub fn is_blank(id: &str) -> bool {
        id.trim().is_empty()
    }
}

/// Current wall-clock time in epoch milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Lowercase base-36 encoding of an unsigned integer
pub fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    
    if value == 0 {
        return "0".to_string();
    }
    
    let mut buf = Vec::with_capacity(13);
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();
    
    // Only ASCII digits were pushed
    String::from_utf8(buf).unwrap_or_default()
}
