//! Classification of a temperature into an operating state

use ufmt::{uDisplay, uWrite};

use crate::{
	config::{HEATING_TEMP_HIGH, HEATING_TEMP_LOW, OVERHEAT_TEMP},
	temperature::Temperature,
};

/// What the controller is currently doing
///
/// Recomputed from scratch every cycle. There is no hysteresis, so a temperature sitting on a
/// threshold may flip the state on every cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingState {
	/// Below [`HEATING_TEMP_LOW`] - Everything off
	Idle,
	/// From [`HEATING_TEMP_LOW`] up to [`HEATING_TEMP_HIGH`] - Heater on
	Heating,
	/// From [`HEATING_TEMP_HIGH`] up to [`OVERHEAT_TEMP`] - Everything off
	TargetReached,
	/// [`OVERHEAT_TEMP`] and above - Buzzer on
	Overheat,
}

impl OperatingState {
	/// Classify a temperature. Ranges are checked from low to high and the first match wins.
	pub fn classify(temperature: Temperature) -> Self {
		match temperature.celsius() {
			celsius if celsius < HEATING_TEMP_LOW => Self::Idle,
			celsius if celsius < HEATING_TEMP_HIGH => Self::Heating,
			celsius if celsius < OVERHEAT_TEMP => Self::TargetReached,
			_ => Self::Overheat,
		}
	}

	/// Name used in the status output
	pub fn name(self) -> &'static str {
		match self {
			Self::Idle => "IDLE",
			Self::Heating => "HEATING",
			Self::TargetReached => "TARGET REACHED",
			Self::Overheat => "OVERHEAT",
		}
	}

	/// Outputs to drive while in this state
	pub fn actuators(self) -> ActuatorState {
		match self {
			Self::Idle | Self::TargetReached => ActuatorState::OFF,
			Self::Heating => ActuatorState {
				heater: true,
				buzzer: false,
			},
			Self::Overheat => ActuatorState {
				heater: false,
				buzzer: true,
			},
		}
	}

	pub fn is_heating(self) -> bool {
		matches!(self, Self::Heating)
	}

	pub fn is_overheat(self) -> bool {
		matches!(self, Self::Overheat)
	}
}

impl uDisplay for OperatingState {
	fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
	where
		W: uWrite + ?Sized,
	{
		f.write_str(self.name())
	}
}

/// On/off status of the heater and buzzer lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuatorState {
	pub heater: bool,
	pub buzzer: bool,
}

impl ActuatorState {
	pub const OFF: Self = Self {
		heater: false,
		buzzer: false,
	};
}
