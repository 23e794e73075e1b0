// src/event.rs

/// ===============================
/// UI events
/// ===============================

/// What a physical control reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Invalid,
    ButtonPress,
    EncoderDelta,
}

/// One UI event, copied whole through the event queue.
///
/// These events:
/// - are produced in the sampling/interrupt context
/// - are consumed by the main control loop
/// - carry no timestamp; the queue's tick counter covers that
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiEvent {
    pub kind: EventKind,

    /// Which physical control produced the event.
    pub sender: i16,

    /// Direction or magnitude, control-specific.
    pub value: i32,
}

impl UiEvent {
    #[inline]
    pub fn new(kind: EventKind, sender: i16, value: i32) -> Self {
        Self { kind, sender, value }
    }
}

impl Default for UiEvent {
    /// The invalid event; what a never-written queue slot reads as.
    fn default() -> Self {
        Self {
            kind: EventKind::Invalid,
            sender: -1,
            value: 0,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Sender IDs
// ═══════════════════════════════════════════════════════════════════

/// Sender identifiers for the physical controls on the panel.
pub mod sender {
    pub const ENCODER: i16 = 0;
    pub const TRIGGER: i16 = 1;
}
