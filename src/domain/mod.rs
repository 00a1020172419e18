pub mod session;
pub mod submission;
