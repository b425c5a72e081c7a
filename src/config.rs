//! Compile-time configuration constants for the console firmware.
//!
//! Everything here is resolved at compile time; there is no runtime
//! configuration surface on the device.

// =============================================================================
// Console Output Configuration
// =============================================================================

/// Line terminator appended by the `*ln` writers.
/// Serial console convention (CR+LF) so output renders correctly in
/// terminal emulators and in the host-side capture tooling.
pub const LINE_END: &str = "\r\n";

// =============================================================================
// Serial Channel Configuration
// =============================================================================

/// Baud rate of the primary debug UART (bridged to USB on the host side).
/// The host capture tooling opens the port at this rate.
pub const PRIMARY_BAUD: u32 = 9600;

/// Baud rate of the auxiliary UART (accessory header).
pub const AUX_BAUD: u32 = 115_200;

/// Whether the auxiliary UART is brought up at boot.
/// When `false` the auxiliary channel reports itself not ready and all
/// console output to it is silently skipped.
pub const AUX_ENABLED: bool = true;

// =============================================================================
// Heartbeat Configuration
// =============================================================================

/// Seconds between heartbeat messages emitted by the firmware main loop.
pub const HEARTBEAT_SECS: u64 = 1;
