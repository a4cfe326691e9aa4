pub mod assignment;
pub mod attendance;
pub mod participant;
pub mod score;
