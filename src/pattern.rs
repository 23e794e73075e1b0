// src/pattern.rs
//
// One playable pattern: five parameter lanes advanced in lock-step.

use crate::track::{RangeError, StepTrack};

/// Current values of every lane at the pattern cursor.
///
/// A plain snapshot for downstream gate/CV generation; holds no
/// references back into the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepValues {
    pub note: i32,
    pub octave: i32,
    pub gate: i32,
    pub accent: i32,
    pub slide: i32,
}

/// An aggregate of five step tracks sharing one length but independent
/// value ranges.
///
/// Each lane stores its cursor independently; `step()` and `reset()`
/// move all five together, and keeping them aligned is this type's
/// contract with its callers. Code that advances a single lane through
/// the `*_mut` accessors takes responsibility for re-syncing.
pub struct Pattern<const LENGTH: usize> {
    notes: StepTrack<LENGTH, 0, 11>,
    octave: StepTrack<LENGTH, 0, 2>,
    gate: StepTrack<LENGTH, 0, 2>,
    accent: StepTrack<LENGTH, 0, 4>,
    slide: StepTrack<LENGTH, 0, 4>,
}

impl<const LENGTH: usize> Pattern<LENGTH> {
    /// A pattern with every lane filled from the given per-lane default.
    pub fn new(note: i32, octave: i32, gate: i32, accent: i32, slide: i32) -> Self {
        Self {
            notes: StepTrack::new(note),
            octave: StepTrack::new(octave),
            gate: StepTrack::new(gate),
            accent: StepTrack::new(accent),
            slide: StepTrack::new(slide),
        }
    }

    /// Advance every lane by exactly one step.
    pub fn step(&mut self) {
        self.notes.step();
        self.octave.step();
        self.gate.step();
        self.accent.step();
        self.slide.step();
    }

    /// Return every lane's cursor to the start of its range. Values
    /// stay.
    pub fn reset(&mut self) {
        self.notes.reset();
        self.octave.reset();
        self.gate.reset();
        self.accent.reset();
        self.slide.reset();
    }

    /// Snapshot the five current lane values.
    pub fn values(&self) -> StepValues {
        StepValues {
            note: self.notes.value(),
            octave: self.octave.value(),
            gate: self.gate.value(),
            accent: self.accent.value(),
            slide: self.slide.value(),
        }
    }

    /// Restrict every lane's playable range to `[start, end]`.
    ///
    /// Applied to all lanes so the shared-cursor contract holds; lanes
    /// already validated the range when the first one accepted it.
    pub fn set_range(&mut self, start: usize, end: usize) -> Result<(), RangeError> {
        self.notes.set_range(start, end)?;
        self.octave.set_range(start, end)?;
        self.gate.set_range(start, end)?;
        self.accent.set_range(start, end)?;
        self.slide.set_range(start, end)?;
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Lane access (for per-step editing)
    // ───────────────────────────────────────────────────────────────

    pub fn notes(&self) -> &StepTrack<LENGTH, 0, 11> {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut StepTrack<LENGTH, 0, 11> {
        &mut self.notes
    }

    pub fn octave(&self) -> &StepTrack<LENGTH, 0, 2> {
        &self.octave
    }

    pub fn octave_mut(&mut self) -> &mut StepTrack<LENGTH, 0, 2> {
        &mut self.octave
    }

    pub fn gate(&self) -> &StepTrack<LENGTH, 0, 2> {
        &self.gate
    }

    pub fn gate_mut(&mut self) -> &mut StepTrack<LENGTH, 0, 2> {
        &mut self.gate
    }

    pub fn accent(&self) -> &StepTrack<LENGTH, 0, 4> {
        &self.accent
    }

    pub fn accent_mut(&mut self) -> &mut StepTrack<LENGTH, 0, 4> {
        &mut self.accent
    }

    pub fn slide(&self) -> &StepTrack<LENGTH, 0, 4> {
        &self.slide
    }

    pub fn slide_mut(&mut self) -> &mut StepTrack<LENGTH, 0, 4> {
        &mut self.slide
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_pattern() -> Pattern<8> {
        Pattern::new(0, 1, 1, 0, 0)
    }

    #[test]
    fn test_step_advances_all_five_lanes() {
        let mut pattern = make_pattern();
        pattern.step();

        assert_eq!(pattern.notes().current_step(), 1);
        assert_eq!(pattern.octave().current_step(), 1);
        assert_eq!(pattern.gate().current_step(), 1);
        assert_eq!(pattern.accent().current_step(), 1);
        assert_eq!(pattern.slide().current_step(), 1);
    }

    #[test]
    fn test_lanes_stay_in_sync_over_many_steps() {
        let mut pattern = make_pattern();

        for _ in 0..23 {
            pattern.step();
            let step = pattern.notes().current_step();
            assert_eq!(pattern.octave().current_step(), step);
            assert_eq!(pattern.gate().current_step(), step);
            assert_eq!(pattern.accent().current_step(), step);
            assert_eq!(pattern.slide().current_step(), step);
        }
    }

    #[test]
    fn test_reset_returns_all_lanes_to_start() {
        let mut pattern = make_pattern();
        pattern.notes_mut().edit(0, 3);

        pattern.step();
        pattern.step();
        pattern.reset();

        assert_eq!(pattern.notes().current_step(), 0);
        assert_eq!(pattern.gate().current_step(), 0);
        // Reset moves cursors, not values.
        assert_eq!(pattern.notes().value(), 3);
    }

    #[test]
    fn test_restricted_range_never_leaves_window() {
        let mut pattern = make_pattern();
        pattern.set_range(2, 5).unwrap();

        for _ in 0..16 {
            let step = pattern.notes().current_step();
            assert!((2..=5).contains(&step), "cursor escaped to {}", step);
            pattern.step();
        }
    }

    #[test]
    fn test_values_snapshot_follows_cursor() {
        let mut pattern = make_pattern();
        pattern.notes_mut().edit(1, 7);
        pattern.accent_mut().edit(1, 2);

        assert_eq!(
            pattern.values(),
            StepValues { note: 0, octave: 1, gate: 1, accent: 0, slide: 0 }
        );

        pattern.step();
        assert_eq!(
            pattern.values(),
            StepValues { note: 7, octave: 1, gate: 1, accent: 2, slide: 0 }
        );
    }

    #[test]
    fn test_lane_edit_leaves_other_lanes_alone() {
        let mut pattern = make_pattern();
        pattern.gate_mut().edit(0, 1);

        let values = pattern.values();
        assert_eq!(values.gate, 2);
        assert_eq!(values.note, 0);
        assert_eq!(values.octave, 1);
    }

    #[test]
    fn test_set_range_rejects_bad_window() {
        let mut pattern = make_pattern();
        assert!(pattern.set_range(4, 12).is_err());
        assert!(pattern.set_range(5, 2).is_err());
    }
}
