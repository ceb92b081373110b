pub mod error;
pub mod export;
pub mod grading;
pub mod models;
pub mod report;
pub mod session;
pub mod slots;
pub mod validate;
