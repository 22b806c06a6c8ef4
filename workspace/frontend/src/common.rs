pub mod error;
pub mod fetch_hook;
pub mod loading;
pub mod plot;
pub mod toast;
