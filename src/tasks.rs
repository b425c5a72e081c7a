//! Firmware tasks.

use defmt::info;
use embassy_time::Timer;

use dosimeter_console::config::HEARTBEAT_SECS;
use dosimeter_console::console::{Radix, Severity};

use crate::serial::Console;

/// Heartbeat task - periodically reports uptime on both console channels.
///
/// Output shape per tick: `[#] uptime <seconds>` followed by the line
/// terminator, mirrored to whichever channels are ready.
#[embassy_executor::task]
pub async fn heartbeat_task(console: &'static mut Console) {
    info!("Heartbeat task started");

    let mut uptime_secs: u32 = 0;
    loop {
        Timer::after_secs(HEARTBEAT_SECS).await;
        uptime_secs = uptime_secs.wrapping_add(HEARTBEAT_SECS as u32);

        console.log("uptime ", Severity::Info);
        console.println_uint(uptime_secs, Radix::DEC);
    }
}
