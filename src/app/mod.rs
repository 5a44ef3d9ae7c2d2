//! Application module - dashboard state and its transitions.
//!
//! - `state` - The immutable `AppState`, `Action` and the `reduce` function
//! - `uploads` - Generation counter guarding against stale upload results

mod state;
mod uploads;

pub use state::{Action, AppState, reduce};
pub use uploads::{UploadTicket, UploadTracker};
