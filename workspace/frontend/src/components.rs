pub mod dashboard;
pub mod history;
pub mod layout;
pub mod prediction;
