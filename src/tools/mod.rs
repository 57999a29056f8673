/// Request handlers for the habit tracker
/// 
/// Each handler is a plain function over the stores, so the HTTP layer only
/// has to parse requests and map results to responses.

pub mod create;
pub mod list;
pub mod delete;
pub mod completion;
pub mod seed;
pub mod dashboard;

// Re-export tool functions for easy access
pub use create::*;
pub use list::*;
pub use delete::*;
pub use completion::*;
pub use seed::*;
pub use dashboard::*;
