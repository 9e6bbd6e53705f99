//! Compile-time configuration. Nothing here can be changed at runtime.

/// Lowest temperature (°C) at which the heater is switched on
pub const HEATING_TEMP_LOW: u16 = 30;
/// Temperature (°C) at which the target is considered reached and the heater is switched off
pub const HEATING_TEMP_HIGH: u16 = 60;
/// Temperature (°C) at which the buzzer sounds
pub const OVERHEAT_TEMP: u16 = 75;

/// Baud rate of the status output, 8N1 without flow control
pub const BAUD_RATE: u32 = 9600;

/// Time in milliseconds to wait between two control cycles
pub const LOOP_PERIOD_MS: u16 = 1000;

/// Largest value the 10-bit converter can produce
pub const ADC_FULL_SCALE: u32 = 1023;
/// Temperature (°C) at full scale: a 3.3 V reference over a 10 mV/°C sensor
pub const SENSOR_SPAN_C: u32 = 330;
/// Bits of a raw converter word which hold the result
pub const SAMPLE_MASK: u16 = 0x3FF;
