//! Dual-channel console writer.
//!
//! Fans every message out to two serial interfaces: a primary USB/debug
//! channel and a secondary auxiliary channel. Each channel is checked for
//! readiness independently at every call; an absent or disconnected channel
//! silently produces no output on that channel only.
//!
//! # Usage
//!
//! ```ignore
//! let mut console = DualConsole::new(primary, auxiliary);
//!
//! console.println("boot sequence start");
//! console.logln("boot ok", Severity::Info);
//! console.logln("sensor fail", Severity::Error);
//! console.println_uint(0x2e, Radix::HEX);
//! ```
//!
//! The writer is stateless between calls and never signals failure: the only
//! policy is "never write to a channel unless it reports itself ready at the
//! moment of the call".

pub mod channel;

pub use channel::{Channel, Radix};

use channel::format_uint;

/// Message severity for tagged output.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Severity {
    /// Informational, tagged `[#]`.
    #[default]
    Info,
    /// Error, tagged `[!]`.
    Error,
}

impl Severity {
    /// The fixed marker prepended to tagged output.
    #[inline]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Info => "[#] ",
            Self::Error => "[!] ",
        }
    }
}

/// Fan-out writer over a primary and an auxiliary output channel.
///
/// The channels are injected at construction and only borrowed for writing;
/// the writer never creates, reconfigures, or tears them down.
pub struct DualConsole<P, A> {
    primary: P,
    auxiliary: A,
}

impl<P: Channel, A: Channel> DualConsole<P, A> {
    /// Create a writer over the two injected channels.
    pub const fn new(primary: P, auxiliary: A) -> Self {
        Self { primary, auxiliary }
    }

    /// Write `text` to each ready channel, without a terminator.
    pub fn print(&mut self, text: &str) {
        if self.primary.is_ready() {
            self.primary.write_str(text);
        }
        if self.auxiliary.is_ready() {
            self.auxiliary.write_str(text);
        }
    }

    /// Write `text` followed by the line terminator to each ready channel.
    pub fn println(&mut self, text: &str) {
        if self.primary.is_ready() {
            self.primary.write_str(text);
            self.primary.end_line();
        }
        if self.auxiliary.is_ready() {
            self.auxiliary.write_str(text);
            self.auxiliary.end_line();
        }
    }

    /// Write `value` rendered in `radix` to each ready channel.
    pub fn print_uint(&mut self, value: u32, radix: Radix) {
        if self.primary.is_ready() {
            self.primary.write_uint(value, radix);
        }
        if self.auxiliary.is_ready() {
            self.auxiliary.write_uint(value, radix);
        }
    }

    /// Write `value` rendered in `radix`, then the line terminator, to each
    /// ready channel.
    pub fn println_uint(&mut self, value: u32, radix: Radix) {
        if self.primary.is_ready() {
            self.primary.write_uint(value, radix);
            self.primary.end_line();
        }
        if self.auxiliary.is_ready() {
            self.auxiliary.write_uint(value, radix);
            self.auxiliary.end_line();
        }
    }

    /// Write `text` prefixed with the severity marker to each ready channel.
    pub fn log(&mut self, text: &str, severity: Severity) {
        if self.primary.is_ready() {
            self.primary.write_str(severity.prefix());
            self.primary.write_str(text);
        }
        if self.auxiliary.is_ready() {
            self.auxiliary.write_str(severity.prefix());
            self.auxiliary.write_str(text);
        }
    }

    /// Write `text` prefixed with the severity marker, followed by the line
    /// terminator, to each ready channel.
    pub fn logln(&mut self, text: &str, severity: Severity) {
        if self.primary.is_ready() {
            self.primary.write_str(severity.prefix());
            self.primary.write_str(text);
            self.primary.end_line();
        }
        if self.auxiliary.is_ready() {
            self.auxiliary.write_str(severity.prefix());
            self.auxiliary.write_str(text);
            self.auxiliary.end_line();
        }
    }

    /// Write `value` in decimal, prefixed with the severity marker.
    /// Delegates to the text-based tagged writer.
    pub fn log_uint(&mut self, value: u32, severity: Severity) {
        self.log(format_uint(value, Radix::DEC).as_str(), severity);
    }

    /// Write `value` in decimal, prefixed with the severity marker and
    /// followed by the line terminator.
    pub fn logln_uint(&mut self, value: u32, severity: Severity) {
        self.logln(format_uint(value, Radix::DEC).as_str(), severity);
    }

    /// Borrow the primary channel.
    #[inline]
    pub fn primary(&self) -> &P { &self.primary }

    /// Borrow the auxiliary channel.
    #[inline]
    pub fn auxiliary(&self) -> &A { &self.auxiliary }

    /// Mutably borrow the primary channel.
    #[inline]
    pub fn primary_mut(&mut self) -> &mut P { &mut self.primary }

    /// Mutably borrow the auxiliary channel.
    #[inline]
    pub fn auxiliary_mut(&mut self) -> &mut A { &mut self.auxiliary }

    /// Give the channels back to the caller.
    pub fn into_parts(self) -> (P, A) {
        (self.primary, self.auxiliary)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LINE_END;

    /// Recording channel with a switchable ready flag.
    struct MockChannel {
        ready: bool,
        output: String,
    }

    impl MockChannel {
        fn ready() -> Self {
            Self { ready: true, output: String::new() }
        }

        fn not_ready() -> Self {
            Self { ready: false, output: String::new() }
        }
    }

    impl Channel for MockChannel {
        fn is_ready(&self) -> bool {
            self.ready
        }

        fn write_str(&mut self, text: &str) {
            self.output.push_str(text);
        }
    }

    fn both_ready() -> DualConsole<MockChannel, MockChannel> {
        DualConsole::new(MockChannel::ready(), MockChannel::ready())
    }

    #[test]
    fn test_print_mirrors_to_both_channels() {
        let mut console = both_ready();
        console.print("boot sequence start");
        let (primary, aux) = console.into_parts();
        assert_eq!(primary.output, "boot sequence start");
        assert_eq!(aux.output, "boot sequence start");
    }

    #[test]
    fn test_println_appends_terminator() {
        let mut console = both_ready();
        console.println("calibration done");
        let expected = format!("calibration done{LINE_END}");
        let (primary, aux) = console.into_parts();
        assert_eq!(primary.output, expected);
        assert_eq!(aux.output, expected);
    }

    #[test]
    fn test_unready_channel_is_skipped() {
        let mut console = DualConsole::new(MockChannel::not_ready(), MockChannel::ready());
        console.println("spectrum saved");
        let (primary, aux) = console.into_parts();
        assert_eq!(primary.output, "");
        assert_eq!(aux.output, format!("spectrum saved{LINE_END}"));
    }

    #[test]
    fn test_channel_readiness_is_independent() {
        // Primary only
        let mut console = DualConsole::new(MockChannel::ready(), MockChannel::not_ready());
        console.print("a");
        let (primary, aux) = console.into_parts();
        assert_eq!(primary.output, "a");
        assert_eq!(aux.output, "");

        // Neither
        let mut console = DualConsole::new(MockChannel::not_ready(), MockChannel::not_ready());
        console.print("a");
        let (primary, aux) = console.into_parts();
        assert_eq!(primary.output, "");
        assert_eq!(aux.output, "");
    }

    #[test]
    fn test_log_info_tag() {
        let mut console = both_ready();
        console.log("boot ok", Severity::Info);
        assert_eq!(console.primary().output, "[#] boot ok");
        assert_eq!(console.auxiliary().output, "[#] boot ok");
    }

    #[test]
    fn test_log_error_tag() {
        let mut console = both_ready();
        console.log("sensor fail", Severity::Error);
        assert_eq!(console.primary().output, "[!] sensor fail");
    }

    #[test]
    fn test_logln_appends_terminator_after_message() {
        let mut console = both_ready();
        console.logln("low battery", Severity::Error);
        assert_eq!(console.primary().output, format!("[!] low battery{LINE_END}"));
    }

    #[test]
    fn test_print_uint_hex_and_decimal() {
        let mut console = both_ready();
        console.print_uint(255, Radix::HEX);
        assert_eq!(console.primary().output, "ff");

        let mut console = both_ready();
        console.print_uint(255, Radix::DEC);
        assert_eq!(console.primary().output, "255");
    }

    #[test]
    fn test_println_uint_appends_terminator() {
        let mut console = both_ready();
        console.println_uint(1024, Radix::DEC);
        assert_eq!(console.primary().output, format!("1024{LINE_END}"));
    }

    #[test]
    fn test_log_uint_renders_decimal() {
        let mut console = both_ready();
        console.log_uint(42, Severity::Info);
        assert_eq!(console.primary().output, "[#] 42");
        assert_eq!(console.auxiliary().output, "[#] 42");
    }

    #[test]
    fn test_logln_uint_renders_decimal_with_terminator() {
        let mut console = both_ready();
        console.logln_uint(7, Severity::Error);
        assert_eq!(console.primary().output, format!("[!] 7{LINE_END}"));
    }

    #[test]
    fn test_repeated_writes_are_idempotent() {
        let mut console = both_ready();
        console.println("tick");
        console.println("tick");
        let expected = format!("tick{LINE_END}tick{LINE_END}");
        assert_eq!(console.primary().output, expected);
        assert_eq!(console.auxiliary().output, expected);
    }

    #[test]
    fn test_severity_prefixes() {
        assert_eq!(Severity::Info.prefix(), "[#] ");
        assert_eq!(Severity::Error.prefix(), "[!] ");
        assert_eq!(Severity::default(), Severity::Info);
    }
}
