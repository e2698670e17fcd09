//! Pibrella Core - LED- und Pin-Zuordnung des Pibrella-Boards
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur die feste Zuordnung LED → Anschluss → GPIO.

#![no_std]

pub mod pins;
pub mod types;

// Re-exports für einfachen Zugriff
pub use pins::PibrellaPin;
pub use types::{PibrellaLed, UnknownLed};
