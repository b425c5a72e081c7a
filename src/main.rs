//! Dual-channel console firmware for the Raspberry Pi Pico (RP2040).
//!
//! Mirrors every console message to two serial interfaces: the primary
//! debug UART (bridged to USB on the host side) and an auxiliary UART on
//! the accessory header. Either channel can be absent; output to an
//! unready channel is silently skipped.
//!
//! The console core lives in the library crate and is tested on the host;
//! this binary adds the RP2040-specific wiring (UART setup, embassy tasks).

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]

// Modules only used by the firmware (not buildable on host)
#[cfg(target_arch = "arm")]
mod serial;
#[cfg(target_arch = "arm")]
mod tasks;

#[cfg(target_arch = "arm")]
mod firmware {
    use defmt::info;
    use embassy_executor::Spawner;
    use embassy_rp::uart::{self, Uart};
    use static_cell::StaticCell;
    use {defmt_rtt as _, panic_probe as _};

    use dosimeter_console::config::{AUX_BAUD, AUX_ENABLED, PRIMARY_BAUD};
    use dosimeter_console::console::{DualConsole, Severity};

    use crate::serial::{Console, UartChannel};
    use crate::tasks::heartbeat_task;

    // Program metadata for `picotool info`
    #[unsafe(link_section = ".bi_entries")]
    #[used]
    pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
        embassy_rp::binary_info::rp_program_name!(c"dosimeter-console"),
        embassy_rp::binary_info::rp_program_description!(c"Dual-channel serial console for the dosimeter"),
        embassy_rp::binary_info::rp_cargo_version!(),
        embassy_rp::binary_info::rp_program_build_attribute!(),
    ];

    /// The console outlives main so tasks can borrow it as `'static`.
    static CONSOLE: StaticCell<Console> = StaticCell::new();

    #[embassy_executor::main]
    async fn main(spawner: Spawner) {
        info!("Dosimeter console starting...");

        let p = embassy_rp::init(Default::default());

        // UART0 on GP0/GP1 is bridged to USB by the debug header
        let mut primary_config = uart::Config::default();
        primary_config.baudrate = PRIMARY_BAUD;
        let primary = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, primary_config);

        // UART1 on GP4/GP5 feeds the accessory header
        let mut aux_config = uart::Config::default();
        aux_config.baudrate = AUX_BAUD;
        let aux = Uart::new_blocking(p.UART1, p.PIN_4, p.PIN_5, aux_config);

        let console = CONSOLE.init(DualConsole::new(
            UartChannel::new(primary, true),
            UartChannel::new(aux, AUX_ENABLED),
        ));

        console.logln("boot ok", Severity::Info);
        info!("Console channels up");

        spawner.spawn(heartbeat_task(console)).unwrap();
        info!("Heartbeat task spawned");
    }
}

// Host builds get a stub entry so `cargo test` can build the whole package;
// the real entry above is ARM-only.
#[cfg(not(target_arch = "arm"))]
fn main() {}
