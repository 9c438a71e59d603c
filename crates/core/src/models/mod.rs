pub mod appointment;
pub mod patient;
pub mod time_slot;
