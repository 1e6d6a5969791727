pub mod error;
pub mod results;
pub mod setup;
