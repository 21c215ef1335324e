/*
 * Fatal Halt
 *
 * The absorbing state entered after a fatal error. Only an external reset
 * (watchdog, reset line, power cycle) leaves it.
 */

/// Spins forever without yielding.
///
/// No cleanup is attempted and nothing unwinds. Interrupt handlers may still
/// run if the platform has them enabled, but control never comes back here.
#[inline(never)]
pub fn halt() -> ! {
    loop {
        core::hint::spin_loop();
    }
}
