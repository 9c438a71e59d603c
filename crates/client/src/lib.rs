//! # Hospico Client
//!
//! Client side of the appointment-booking flow. The backend owns
//! persistence, authentication and the final word on every booking; this
//! crate fetches what it needs to show bookable slots, keeps the slot list
//! consistent as the doctor and date change, and forwards bookings.
//!
//! - **api**: `reqwest` wrapper with typed, user-facing errors
//! - **resolver**: booked-time lookup with a fail-open fallback
//! - **picker**: slot list state guarded against stale lookups
//! - **booking**: booking submission and profile prefill
//! - **cli**: command-line front end

pub mod api;
pub mod booking;
pub mod cli;
pub mod config;
pub mod picker;
pub mod resolver;
