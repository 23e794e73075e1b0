// src/encoder.rs

use crate::gpio::InputPin;

const PHASE_A: u8 = 0x1;
const PHASE_B: u8 = 0x2;

/// Quadrature encoder decoder.
///
/// Samples its two pins once per tick and reports rotation as a per-tick
/// delta. This is the simplified single-edge decode: only A becoming
/// active produces a step, and B's level at that instant picks the
/// direction, so direction correctness depends on consistent wiring
/// polarity. Detents between A edges are not resolved.
pub struct Encoder<A, B> {
    pin_a: A,
    pin_b: B,

    /// Previous sample of both pins, one bit each.
    phase: u8,

    delta: i32,
}

impl<A: InputPin, B: InputPin> Encoder<A, B> {
    pub fn new(pin_a: A, pin_b: B) -> Self {
        Self {
            pin_a,
            pin_b,
            phase: 0,
            delta: 0,
        }
    }

    /// Sample both pins. Called once per scheduling tick.
    pub fn tick(&mut self) {
        self.delta = 0;

        let mut pins = 0;
        if self.pin_a.is_low() {
            pins |= PHASE_A;
        }
        if self.pin_b.is_low() {
            pins |= PHASE_B;
        }

        // A edge only; B decides the direction.
        if (pins & PHASE_A) != 0 && (self.phase & PHASE_A) == 0 {
            self.delta = if pins & PHASE_B != 0 { -1 } else { 1 };
        }

        self.phase = pins;
    }

    /// Step delta computed by the last `tick()`: -1, 0 or +1.
    ///
    /// Per-tick, not cumulative; the next `tick()` overwrites it.
    #[inline]
    pub fn delta(&self) -> i32 {
        self.delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct TestPin(Rc<Cell<bool>>);

    impl TestPin {
        fn set_active(&self, active: bool) {
            self.0.set(active);
        }
    }

    impl InputPin for TestPin {
        fn is_low(&self) -> bool {
            self.0.get()
        }
    }

    fn make_encoder() -> (Encoder<TestPin, TestPin>, TestPin, TestPin) {
        let pin_a = TestPin::default();
        let pin_b = TestPin::default();
        let encoder = Encoder::new(pin_a.clone(), pin_b.clone());
        (encoder, pin_a, pin_b)
    }

    #[test]
    fn test_edge_with_b_inactive_is_clockwise() {
        let (mut encoder, pin_a, _pin_b) = make_encoder();

        pin_a.set_active(true);
        encoder.tick();
        assert_eq!(encoder.delta(), 1);
    }

    #[test]
    fn test_edge_with_b_active_is_counter_clockwise() {
        let (mut encoder, pin_a, pin_b) = make_encoder();

        pin_b.set_active(true);
        encoder.tick();
        assert_eq!(encoder.delta(), 0);

        pin_a.set_active(true);
        encoder.tick();
        assert_eq!(encoder.delta(), -1);
    }

    #[test]
    fn test_no_edge_yields_zero() {
        let (mut encoder, _pin_a, pin_b) = make_encoder();

        encoder.tick();
        assert_eq!(encoder.delta(), 0);

        // B moving alone is not a rotation.
        pin_b.set_active(true);
        encoder.tick();
        assert_eq!(encoder.delta(), 0);
    }

    #[test]
    fn test_held_a_counts_once() {
        let (mut encoder, pin_a, _pin_b) = make_encoder();

        pin_a.set_active(true);
        encoder.tick();
        assert_eq!(encoder.delta(), 1);

        // Still held: the delta is per-edge, not per-level.
        encoder.tick();
        assert_eq!(encoder.delta(), 0);
        encoder.tick();
        assert_eq!(encoder.delta(), 0);
    }

    #[test]
    fn test_release_and_turn_again() {
        let (mut encoder, pin_a, pin_b) = make_encoder();

        pin_a.set_active(true);
        encoder.tick();
        assert_eq!(encoder.delta(), 1);

        pin_a.set_active(false);
        encoder.tick();
        assert_eq!(encoder.delta(), 0);

        // Opposite direction on the next detent.
        pin_b.set_active(true);
        pin_a.set_active(true);
        encoder.tick();
        assert_eq!(encoder.delta(), -1);
    }
}
