pub mod attendance;
pub mod reporting;
