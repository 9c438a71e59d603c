//! # Hospico Core
//!
//! Domain types and pure logic for the appointment-booking flow: the fixed
//! daily session schedule, booked-time extraction, availability merging and
//! booking-form validation. Nothing in this crate performs I/O; the current
//! time is read through the [`clock::Clock`] trait so every calculation can be
//! driven from tests.

/// Slot availability: booked-time extraction and merging
pub mod availability;
/// Booking form validation and wire request construction
pub mod booking;
/// Injected wall clock
pub mod clock;
/// Domain error types
pub mod errors;
/// Upcoming and past appointments of one patient
pub mod history;
/// Wire and domain models
pub mod models;
/// Fixed weekly session schedule and slot generation
pub mod schedule;
