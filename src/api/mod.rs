/// HTTP adapter
/// 
/// This module maps JSON-over-HTTP requests onto the tracker: routing,
/// body parsing, validation errors and CORS. It holds no state of its own.

pub mod protocol;
pub mod server;

// Re-export main types
pub use protocol::ApiError;
pub use server::router;
