pub mod analytics;
pub mod feedback;
pub mod job;
pub mod resume;
