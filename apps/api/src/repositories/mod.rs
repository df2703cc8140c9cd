//! In-memory repositories carried on `AppState`.
//!
//! Each repository is cheap to clone (shared `Arc`) and exposes explicit
//! update methods; handlers never reach for ambient global state.

pub mod analytics;
pub mod feedback;
pub mod jobs;
pub mod resumes;

pub use analytics::AnalyticsRepository;
pub use feedback::FeedbackRepository;
pub use jobs::JobRepository;
pub use resumes::ResumeRepository;
