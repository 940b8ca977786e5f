//! Generation statistics
//!
//! Aggregates the events of one generation run into counters for reporting.

use crate::placement::events::PlacementEvent;
use crate::types::PlacementCheck;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Counters describing a single generation run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerationStatistics {
    /// Facilities committed at their requested origin
    pub placed_directly: usize,
    /// Facilities committed at a candidate cell
    pub relocated: usize,
    /// Facilities that exhausted their candidates
    pub failed: usize,
    /// Insertion attempts, direct and relocated
    pub total_attempts: usize,
    /// Rejections keyed by the check that failed
    pub rejections: BTreeMap<PlacementCheck, usize>,
    /// Wall-clock duration of the run
    #[serde(skip)]
    pub duration: Option<Duration>,
}

impl GenerationStatistics {
    /// Build statistics from an ordered event log
    pub fn from_events(events: &[PlacementEvent]) -> Self {
        let mut stats = Self::default();
        for event in events {
            stats.record(event);
        }
        stats
    }

    /// Fold a single event into the counters
    pub fn record(&mut self, event: &PlacementEvent) {
        match event {
            PlacementEvent::Attempt { .. } | PlacementEvent::Relocating { .. } => {
                self.total_attempts += 1;
            }
            PlacementEvent::Rejected { check, .. } => {
                *self.rejections.entry(*check).or_insert(0) += 1;
            }
            PlacementEvent::Placed { relocated: true, .. } => self.relocated += 1,
            PlacementEvent::Placed { relocated: false, .. } => self.placed_directly += 1,
            PlacementEvent::Failed { .. } => self.failed += 1,
        }
    }

    /// Set the run duration
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = Some(duration);
    }

    /// Total facilities committed
    pub fn total_placed(&self) -> usize {
        self.placed_directly + self.relocated
    }

    /// Number of rejections for a given check
    pub fn rejections_for(&self, check: PlacementCheck) -> usize {
        self.rejections.get(&check).copied().unwrap_or(0)
    }

    /// Total rejections across all checks
    pub fn total_rejections(&self) -> usize {
        self.rejections.values().sum()
    }

    /// Multi-line human-readable summary
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Generation Statistics:".to_string(),
            format!("  Facilities Placed: {}", self.total_placed()),
            format!("    At Requested Origin: {}", self.placed_directly),
            format!("    Relocated: {}", self.relocated),
            format!("  Failed Facilities: {}", self.failed),
            format!("  Placement Attempts: {}", self.total_attempts),
            format!("  Rejections: {}", self.total_rejections()),
        ];

        for (check, count) in &self.rejections {
            lines.push(format!("    {}: {}", check, count));
        }

        if let Some(duration) = self.duration {
            lines.push(format!("  Runtime: {:.3} ms", duration.as_secs_f64() * 1000.0));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GridCell;

    fn rejected(check: PlacementCheck) -> PlacementEvent {
        PlacementEvent::Rejected {
            facility: "A".to_string(),
            origin: GridCell::new(1, 1),
            check,
            message: String::new(),
            available: 0,
        }
    }

    #[test]
    fn test_statistics_from_events() {
        let events = vec![
            PlacementEvent::Attempt { facility: "A".to_string(), origin: GridCell::new(1, 1) },
            PlacementEvent::Placed {
                facility: "A".to_string(),
                origin: GridCell::new(1, 1),
                relocated: false,
            },
            PlacementEvent::Attempt { facility: "B".to_string(), origin: GridCell::new(1, 1) },
            rejected(PlacementCheck::Overlap),
            PlacementEvent::Relocating {
                facility: "B".to_string(),
                origin: GridCell::new(2, 1),
                remaining: 0,
            },
            PlacementEvent::Placed {
                facility: "B".to_string(),
                origin: GridCell::new(2, 1),
                relocated: true,
            },
        ];

        let stats = GenerationStatistics::from_events(&events);
        assert_eq!(stats.placed_directly, 1);
        assert_eq!(stats.relocated, 1);
        assert_eq!(stats.total_placed(), 2);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.total_attempts, 3);
        assert_eq!(stats.rejections_for(PlacementCheck::Overlap), 1);
        assert_eq!(stats.rejections_for(PlacementCheck::Radius), 0);
        assert_eq!(stats.total_rejections(), 1);
    }

    #[test]
    fn test_summary_lists_only_seen_checks() {
        let stats = GenerationStatistics::from_events(&[
            rejected(PlacementCheck::Boundary),
            rejected(PlacementCheck::Boundary),
            PlacementEvent::Failed { facility: "A".to_string() },
        ]);

        let summary = stats.summary();
        assert!(summary.contains("Failed Facilities: 1"));
        assert!(summary.contains("Boundary: 2"));
        assert!(!summary.contains("Radius:"));
        assert!(!summary.contains("Runtime"));
    }

    #[test]
    fn test_rejections_follow_check_order() {
        let stats = GenerationStatistics::from_events(&[
            rejected(PlacementCheck::Edge),
            rejected(PlacementCheck::Radius),
            rejected(PlacementCheck::Boundary),
            rejected(PlacementCheck::Radius),
        ]);

        let order: Vec<PlacementCheck> = stats.rejections.keys().copied().collect();
        assert_eq!(
            order,
            vec![PlacementCheck::Boundary, PlacementCheck::Radius, PlacementCheck::Edge]
        );

        let summary = stats.summary();
        let boundary = summary.find("Boundary: 1").unwrap();
        let radius = summary.find("Radius: 2").unwrap();
        let edge = summary.find("Edge: 1").unwrap();
        assert!(boundary < radius && radius < edge);

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["rejections"]["Radius"], 2);
        assert_eq!(value["rejections"]["Edge"], 1);
    }
}
