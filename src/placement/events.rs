//! Placement progress events
//!
//! The generator reports its progress through a [`PlacementObserver`] instead
//! of printing. [`TracingObserver`] turns events into log records,
//! [`RecordingObserver`] keeps them for later inspection and [`NullObserver`]
//! ignores them.

use crate::geometry::GridCell;
use crate::types::PlacementCheck;
use serde::Serialize;
use tracing::{info, warn};

/// A single step of the generation process
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PlacementEvent {
    /// A facility is tried at its requested origin
    Attempt {
        /// Facility name
        facility: String,
        /// Requested origin
        origin: GridCell,
    },
    /// A rejected facility is tried at a candidate cell
    Relocating {
        /// Facility name
        facility: String,
        /// Candidate origin
        origin: GridCell,
        /// Candidates left after this one
        remaining: usize,
    },
    /// An attempt was rejected
    Rejected {
        /// Facility name
        facility: String,
        /// Origin that was tried
        origin: GridCell,
        /// Check that failed
        check: PlacementCheck,
        /// Diagnostic message
        message: String,
        /// Number of viable cells reported with the rejection
        available: usize,
    },
    /// The facility was committed
    Placed {
        /// Facility name
        facility: String,
        /// Final origin
        origin: GridCell,
        /// True if the facility ended up away from its requested origin
        relocated: bool,
    },
    /// Every candidate was exhausted; the generation is aborted
    Failed {
        /// Facility name
        facility: String,
    },
}

impl PlacementEvent {
    /// Name of the facility this event is about
    pub fn facility(&self) -> &str {
        match self {
            PlacementEvent::Attempt { facility, .. }
            | PlacementEvent::Relocating { facility, .. }
            | PlacementEvent::Rejected { facility, .. }
            | PlacementEvent::Placed { facility, .. }
            | PlacementEvent::Failed { facility } => facility,
        }
    }
}

/// Receives progress events from the generator
pub trait PlacementObserver {
    /// Called for every event in the order they happen
    fn on_event(&mut self, event: &PlacementEvent);
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl PlacementObserver for NullObserver {
    fn on_event(&mut self, _event: &PlacementEvent) {}
}

/// Emits every event as a structured log record
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl PlacementObserver for TracingObserver {
    fn on_event(&mut self, event: &PlacementEvent) {
        match event {
            PlacementEvent::Attempt { facility, origin } => {
                info!(facility = %facility, origin = %origin, "Attempting facility");
            }
            PlacementEvent::Relocating { facility, origin, remaining } => {
                info!(
                    facility = %facility,
                    origin = %origin,
                    remaining = remaining,
                    "Attempt shift to {}",
                    origin
                );
            }
            PlacementEvent::Rejected { facility, check, message, available, .. } => {
                info!(
                    facility = %facility,
                    check = %check,
                    available = available,
                    "{}",
                    message
                );
            }
            PlacementEvent::Placed { facility, origin, relocated } => {
                info!(
                    facility = %facility,
                    origin = %origin,
                    relocated = relocated,
                    "Successfully added facility {}",
                    facility
                );
            }
            PlacementEvent::Failed { facility } => {
                warn!(facility = %facility, "Failed to add facility {}", facility);
            }
        }
    }
}

/// Keeps every event in order
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    events: Vec<PlacementEvent>,
}

impl RecordingObserver {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events in order
    pub fn events(&self) -> &[PlacementEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the recorder empty
    pub fn take_events(&mut self) -> Vec<PlacementEvent> {
        std::mem::take(&mut self.events)
    }
}

impl PlacementObserver for RecordingObserver {
    fn on_event(&mut self, event: &PlacementEvent) {
        self.events.push(event.clone());
    }
}

impl<O: PlacementObserver + ?Sized> PlacementObserver for &mut O {
    fn on_event(&mut self, event: &PlacementEvent) {
        (**self).on_event(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_observer_keeps_order() {
        let mut recorder = RecordingObserver::new();
        let attempt =
            PlacementEvent::Attempt { facility: "A".to_string(), origin: GridCell::new(1, 1) };
        let placed = PlacementEvent::Placed {
            facility: "A".to_string(),
            origin: GridCell::new(1, 1),
            relocated: false,
        };

        recorder.on_event(&attempt);
        recorder.on_event(&placed);

        assert_eq!(recorder.events(), &[attempt.clone(), placed.clone()]);
        assert_eq!(recorder.take_events(), vec![attempt, placed]);
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_event_facility_name() {
        let failed = PlacementEvent::Failed { facility: "Silo".to_string() };
        assert_eq!(failed.facility(), "Silo");
    }

    #[test]
    fn test_observer_through_mutable_reference() {
        fn notify(mut observer: impl PlacementObserver) {
            observer.on_event(&PlacementEvent::Failed { facility: "X".to_string() });
        }

        let mut recorder = RecordingObserver::new();
        notify(&mut recorder);
        assert_eq!(recorder.events().len(), 1);
    }
}
