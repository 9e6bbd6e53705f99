#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
mod board;

#[cfg(target_arch = "avr")]
#[arduino_hal::entry]
fn main() -> ! {
	let dp = arduino_hal::Peripherals::take().unwrap();

	// No interrupts are enabled: every wait in the loop is a busy-wait.
	board::init(dp).run()
}

#[cfg(target_arch = "avr")]
#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
	loop {}
}

/// The firmware only exists for AVR. On any other target there is nothing to run, which keeps
/// `cargo test` for the library working on the host.
#[cfg(not(target_arch = "avr"))]
fn main() {}
