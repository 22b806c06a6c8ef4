//! Shared types and view logic for the loan risk frontend.
//!
//! The payload structs mirror the prediction backend's JSON. Everything that
//! turns those payloads into what the pages show (aggregation, formatting,
//! request state) lives here so it can be tested without a browser.

mod error;
mod fetch_state;
mod session;

pub mod dashboard;
pub mod format;
pub mod history;
pub mod prediction;
pub mod submission;

pub use dashboard::{DashboardStats, RiskDistribution};
pub use error::{FetchError, Result};
pub use fetch_state::FetchState;
pub use history::{HistoryRow, HistoryView, TrendSeries};
pub use prediction::{
    PredictionRecord, PredictionRequest, PredictionResponse, RecordId, RiskClassification,
};
pub use session::{CurrentUser, SessionContext};
pub use submission::{RequestGeneration, RequestTicket, SubmissionState, SubmissionTracker};
