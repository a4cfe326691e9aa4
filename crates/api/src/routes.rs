pub mod admin;
pub mod attendance;
pub mod health;
pub mod responses;
pub mod scores;
