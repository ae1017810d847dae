pub mod application;
pub mod form_state;
pub mod job;

pub use application::{ApplicationSubmission, MatchPrediction, MatchRequest};
pub use form_state::FormState;
pub use job::{EmploymentType, Job, JobFilters, JOB_CATEGORIES};
