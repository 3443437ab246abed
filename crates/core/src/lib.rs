//! Domain types for the SlotBook booking service.
//!
//! This crate holds the pieces of the system with no I/O attached: the
//! appointment and schedule models, the error taxonomy shared by every other
//! crate, and the availability-resolution logic that decides whether a
//! provider is bookable at a given instant.

pub mod availability;
pub mod errors;
pub mod models;
