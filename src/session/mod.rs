//! Host session
//!
//! Screen routing around the health check, ownership of the finished
//! profile, alert dismissal and reporting.

mod error;
mod screen;
mod state;
mod summary;

pub use error::{SessionError, SessionResult};
pub use screen::Screen;
pub use state::{AlertsView, ProfileEdit, Progress, WellnessSession};
pub use summary::{HealthReport, HealthSummary};
