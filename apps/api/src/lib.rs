//! Hireforge: job description authoring with resume-to-posting matching.
//!
//! `matching` is the pure scoring core; everything else is the HTTP service
//! wrapped around it.

pub mod authoring;
pub mod config;
pub mod errors;
pub mod llm_client;
pub mod matching;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
