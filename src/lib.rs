//! Single-loop temperature controller.
//!
//! Samples a linear temperature sensor, classifies the reading into an
//! [`OperatingState`](state::OperatingState), drives the heater and buzzer lines and reports a
//! status line over serial once per cycle. The drivers are written against `embedded-hal`
//! traits so the loop can run against the board or against test doubles.

#![cfg_attr(not(test), no_std)]

pub mod actuators;
pub mod config;
pub mod sensor;
pub mod serial;
pub mod state;
pub mod status;
pub mod system;
pub mod temperature;

#[cfg(test)]
mod mock;

pub use actuators::Actuators;
pub use sensor::{AnalogChannel, TemperatureSensor};
pub use serial::SerialWriter;
pub use system::System;
