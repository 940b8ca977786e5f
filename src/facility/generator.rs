//! Site generation with first-fit repair
//!
//! This module contains the SiteGenerator, which inserts a batch of
//! facilities into a fresh site in input order. A facility rejected at its
//! requested origin is retried at the candidate cells reported with the
//! rejection, first to last, until one succeeds. If every candidate fails the
//! whole generation fails and no site is returned.
//!
//! Placement is greedy: a committed facility is never moved again, even when
//! it blocks every viable cell of a later facility.

use crate::facility::{facility::Facility, registry::Site};
use crate::geometry::GridCell;
use crate::placement::error::{LayoutError, LayoutResult, PlacementError};
use crate::placement::events::{NullObserver, PlacementEvent, PlacementObserver, TracingObserver};
use std::collections::VecDeque;
use tracing::{debug, debug_span};

/// Builds sites from a site description and an ordered list of facilities
#[derive(Debug, Default, Clone, Copy)]
pub struct SiteGenerator;

impl SiteGenerator {
    /// Generate a site with every hard constraint met
    ///
    /// With `verbose` set, progress is reported through [`TracingObserver`].
    /// Returns [`LayoutError::ImpossibleSite`] naming the first facility that
    /// could not be placed anywhere.
    pub fn generate(
        width: i64,
        height: i64,
        exclusion_cells: &[(i64, i64)],
        facilities: Vec<Facility>,
        verbose: bool,
    ) -> LayoutResult<Site> {
        if verbose {
            Self::generate_with_observer(
                width,
                height,
                exclusion_cells,
                facilities,
                &mut TracingObserver,
            )
        } else {
            Self::generate_with_observer(width, height, exclusion_cells, facilities, &mut NullObserver)
        }
    }

    /// Generate a site, reporting every attempt, rejection, relocation,
    /// success and failure to `observer`
    pub fn generate_with_observer<O>(
        width: i64,
        height: i64,
        exclusion_cells: &[(i64, i64)],
        facilities: Vec<Facility>,
        observer: &mut O,
    ) -> LayoutResult<Site>
    where
        O: PlacementObserver + ?Sized,
    {
        let span = debug_span!("generate", width, height, facilities = facilities.len());
        let _entered = span.enter();

        let mut site = Site::new(width, height)?;
        site.add_exclusion_zones(exclusion_cells)?;

        for facility in facilities {
            Self::place(&mut site, facility, observer)?;
        }

        debug!(placed = site.facility_count(), "Generation completed");
        Ok(site)
    }

    /// Place one facility, relocating it on rejection
    fn place<O>(site: &mut Site, facility: Facility, observer: &mut O) -> LayoutResult<()>
    where
        O: PlacementObserver + ?Sized,
    {
        let name = facility.name().to_string();
        let requested = origin_of(&facility);
        observer.on_event(&PlacementEvent::Attempt { facility: name.clone(), origin: requested });

        let rejection = match site.add_facility(facility) {
            Ok(()) => {
                observer.on_event(&PlacementEvent::Placed {
                    facility: name,
                    origin: requested,
                    relocated: false,
                });
                return Ok(());
            }
            Err(rejection) => rejection,
        };
        observer.on_event(&rejected_event(&rejection));

        let (facility, candidates) = rejection.into_parts();
        let mut candidates = VecDeque::from(candidates);
        debug!(facility = %name, candidates = candidates.len(), "Repairing facility");

        while let Some(cell) = candidates.pop_front() {
            observer.on_event(&PlacementEvent::Relocating {
                facility: name.clone(),
                origin: cell,
                remaining: candidates.len(),
            });

            match site.add_facility(facility.relocated(cell.x, cell.y)) {
                Ok(()) => {
                    observer.on_event(&PlacementEvent::Placed {
                        facility: name,
                        origin: cell,
                        relocated: true,
                    });
                    return Ok(());
                }
                Err(rejection) => observer.on_event(&rejected_event(&rejection)),
            }
        }

        observer.on_event(&PlacementEvent::Failed { facility: name.clone() });
        Err(LayoutError::impossible_site(name))
    }
}

fn origin_of(facility: &Facility) -> GridCell {
    GridCell::new(facility.left_x(), facility.top_y())
}

fn rejected_event(rejection: &PlacementError) -> PlacementEvent {
    PlacementEvent::Rejected {
        facility: rejection.facility().name().to_string(),
        origin: origin_of(rejection.facility()),
        check: rejection.check(),
        message: rejection.message().to_string(),
        available: rejection.available_cells().len(),
    }
}
