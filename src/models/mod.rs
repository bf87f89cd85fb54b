pub mod application;
pub mod status;

pub use application::{ApplicationDraft, ApplicationPatch, JobApplication};
pub use status::Status;
