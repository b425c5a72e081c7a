//! Output channel capability surface.
//!
//! A [`Channel`] is an abstracted serial/console sink: a readiness check plus
//! best-effort write primitives. The console writer never owns the underlying
//! hardware; channels are constructed by the firmware (or by tests) and
//! injected into [`crate::console::DualConsole`].

use heapless::String;

use crate::config::LINE_END;

/// Maximum digits a formatted `u32` can take (32 binary digits).
pub const UINT_BUF_LEN: usize = 32;

/// Numeric base for integer rendering.
///
/// Out-of-range bases are clamped to decimal at construction, so a `Radix`
/// always holds a value in `2..=36`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Radix(u32);

impl Radix {
    /// Binary (base 2).
    pub const BIN: Self = Self(2);
    /// Decimal (base 10).
    pub const DEC: Self = Self(10);
    /// Hexadecimal (base 16).
    pub const HEX: Self = Self(16);

    /// Create a radix from a raw base, clamping out-of-range bases to decimal.
    #[inline]
    pub const fn new(base: u32) -> Self {
        if base >= 2 && base <= 36 { Self(base) } else { Self(10) }
    }

    /// The numeric base, guaranteed to be in `2..=36`.
    #[inline]
    pub const fn base(self) -> u32 { self.0 }
}

impl Default for Radix {
    fn default() -> Self { Self::DEC }
}

/// Render `value` in `radix` with lowercase digits, most significant first.
pub fn format_uint(value: u32, radix: Radix) -> String<UINT_BUF_LEN> {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let base = radix.base();
    let mut buf = [0u8; UINT_BUF_LEN];
    let mut pos = UINT_BUF_LEN;
    let mut rest = value;
    loop {
        pos -= 1;
        buf[pos] = DIGITS[(rest % base) as usize];
        rest /= base;
        if rest == 0 {
            break;
        }
    }

    let mut out: String<UINT_BUF_LEN> = String::new();
    // Digits are ASCII and fit the buffer, so push cannot fail
    for &b in &buf[pos..] {
        let _ = out.push(b as char);
    }
    out
}

/// An output sink the console can fan out to.
///
/// All writes are best-effort: implementations signal nothing on failure,
/// and callers must consult [`Channel::is_ready`] before writing.
pub trait Channel {
    /// Whether the channel can accept output at this moment.
    fn is_ready(&self) -> bool;

    /// Write `text` to the channel without a terminator.
    fn write_str(&mut self, text: &str);

    /// Write an unsigned integer rendered in `radix`.
    ///
    /// The default rendering uses lowercase digits. A channel with its own
    /// native integer formatter may override this.
    fn write_uint(&mut self, value: u32, radix: Radix) {
        self.write_str(format_uint(value, radix).as_str());
    }

    /// Terminate the current line.
    fn end_line(&mut self) {
        self.write_str(LINE_END);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
