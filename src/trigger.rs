// src/trigger.rs

use crate::gpio::InputPin;

/// Debounced trigger input.
///
/// Keeps a shift register of the last `WINDOW` raw samples and treats
/// the input as asserted only once all of them read active (logic low).
/// The return value edge-detects the debounced signal, not the raw one,
/// so a press reports exactly once until the signal releases.
///
/// Must be sampled at a fixed external rate for `WINDOW` to describe a
/// consistent real-time span.
pub struct DebouncedTrigger<P, const WINDOW: u32> {
    pin: P,

    /// Raw sample history, newest sample in the low bit.
    state: u32,

    /// Debounced level after the previous sample.
    triggered: bool,
}

impl<P: InputPin, const WINDOW: u32> DebouncedTrigger<P, WINDOW> {
    const MASK: u32 = !(u32::MAX << WINDOW);

    /// Forces the window bound at monomorphization time; the shift
    /// register is a single u32.
    const WINDOW_FITS: () =
        assert!(WINDOW >= 1 && WINDOW <= 31, "debounce window must be 1..=31 samples");

    pub fn new(pin: P) -> Self {
        let () = Self::WINDOW_FITS;
        Self {
            pin,
            state: 0,
            triggered: false,
        }
    }

    /// Sample the pin once.
    ///
    /// Returns true exactly on the transition from released to stably
    /// pressed; all other samples return false.
    pub fn triggered(&mut self) -> bool {
        self.state = (self.state << 1) | self.pin.is_low() as u32;

        let stable = self.state & Self::MASK == Self::MASK;
        let rising_edge = stable && !self.triggered;
        self.triggered = stable;
        rising_edge
    }
}
