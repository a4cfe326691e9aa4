pub mod admin;
pub mod assignment;
pub mod attendance;
pub mod responses;
pub mod scores;
