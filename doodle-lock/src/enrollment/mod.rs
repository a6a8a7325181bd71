//! Training-session control
//!
//! Policy and state for collecting a user's training doodles. The session is
//! an owned value passed around explicitly; nothing here is global.

pub mod policy;
pub mod session;

pub use policy::EnrollmentPolicy;
pub use session::{EnrollmentSession, SubmitOutcome};
