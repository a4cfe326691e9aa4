//! # Courtside Core
//!
//! Domain types and logic for the lunchtime badminton tracker: the roster and
//! attendance model, the court assignment engine, the store abstraction, the
//! session reconciler that keeps a working copy in step with the stores, and
//! the admin gate guarding elevated operations.

pub mod admin;
pub mod assignment;
pub mod errors;
pub mod export;
pub mod models;
pub mod session;
pub mod store;

pub use admin::{AdminGate, AdminGrant, CredentialCheck};
pub use assignment::assign;
pub use errors::{CourtError, CourtResult};
pub use session::{Availability, Receipt, Session};
pub use store::{AbsenceStore, AttendanceStore, RosterStore, Stores};
