//! Best-effort event notification for SlotBook.
//!
//! After a booking transaction commits, the API announces the outcome on a
//! message bus so downstream consumers (reminders, analytics) can react.
//! Delivery is at-least-once-attempted with a bounded retry budget and never
//! blocks or fails the booking itself. There is no durable outbox: an event
//! is lost if the process dies between commit and a successful publish.

pub mod bus;
pub mod config;
pub mod events;
pub mod notifier;

pub mod mock;

pub use bus::{MessageBus, RedisBus};
pub use notifier::Notifier;
