//! Site registry and placement validation
//!
//! This module contains the Site struct, which owns a fixed-size grid, an
//! immutable list of exclusion zones and the growing list of committed
//! facilities. Every insertion runs the full validation pipeline; a rejected
//! insertion leaves the site untouched and reports the cells that are
//! currently viable for a relocation.

use crate::facility::constraints::{edges_compatible, radii_compatible};
use crate::facility::facility::Facility;
use crate::geometry::{GridCell, Point, Rect};
use crate::placement::error::{LayoutError, LayoutResult, PlacementError};
use crate::types::PlacementCheck;
use serde::Serialize;
use tracing::debug;

/// A unit cell permanently off-limits to facilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExclusionZone {
    /// Top-left corner of the excluded cell
    pub cell: GridCell,
}

impl ExclusionZone {
    /// Create a new exclusion zone at `cell`
    pub fn new(cell: GridCell) -> Self {
        Self { cell }
    }

    /// Footprint of the zone
    pub fn rect(&self) -> Rect {
        Rect::new(self.cell.x as f64, self.cell.y as f64, 1.0, 1.0)
    }

    /// Half-open containment test
    pub fn contains_point(&self, point: &Point) -> bool {
        self.rect().contains_point(point)
    }

    /// Strict overlap test against a facility
    pub fn overlaps(&self, facility: &Facility) -> bool {
        self.rect().overlaps(&facility.rect())
    }
}

/// A bounded grid holding committed facilities and exclusion zones
#[derive(Debug, Clone, Serialize)]
pub struct Site {
    width: i64,
    height: i64,
    exclusion_zones: Vec<ExclusionZone>,
    facilities: Vec<Facility>,
}

impl Site {
    /// Create a new empty site
    pub fn new(width: i64, height: i64) -> LayoutResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(LayoutError::invalid_site(format!(
                "site dimensions must be positive, got {} x {}",
                width, height
            )));
        }

        Ok(Self { width, height, exclusion_zones: Vec::new(), facilities: Vec::new() })
    }

    /// Register exclusion zones
    ///
    /// Every cell must satisfy `0 <= x <= width` and `0 <= y <= height`. The
    /// whole batch is validated before any zone is registered, and zones can
    /// only be added while the site holds no facilities.
    pub fn add_exclusion_zones(&mut self, cells: &[(i64, i64)]) -> LayoutResult<()> {
        if !self.facilities.is_empty() {
            return Err(LayoutError::invalid_site(
                "exclusion zones must be registered before any facility",
            ));
        }

        let cells: Vec<GridCell> = cells.iter().copied().map(GridCell::from).collect();
        if let Some(&cell) = cells.iter().find(|cell| !self.cell_within_boundaries(**cell)) {
            return Err(LayoutError::ExclusionOutOfBounds {
                cell,
                width: self.width,
                height: self.height,
            });
        }

        self.exclusion_zones.extend(cells.into_iter().map(ExclusionZone::new));
        Ok(())
    }

    /// Attempt to commit a facility
    ///
    /// Runs boundary, overlap, exclusion, radius and edge checks in that order
    /// and stops at the first failure. On success the facility is appended;
    /// on failure the site is unchanged and the facility is handed back inside
    /// the error together with the currently available cells.
    pub fn add_facility(&mut self, facility: Facility) -> Result<(), PlacementError> {
        match self.check_facility(&facility) {
            Ok(()) => {
                debug!(facility = %facility, "Committed facility");
                self.facilities.push(facility);
                Ok(())
            }
            Err(check) => {
                debug!(facility = %facility, check = %check, "Rejected facility");
                let available_cells = self.available_cells();
                Err(PlacementError::new(check, facility, available_cells))
            }
        }
    }

    /// Run the validation pipeline without modifying the site
    ///
    /// Returns the first check the facility fails.
    pub fn check_facility(&self, facility: &Facility) -> Result<(), PlacementCheck> {
        if !self.facility_within_boundaries(facility) {
            return Err(PlacementCheck::Boundary);
        }
        if self.facility_overlap(facility) {
            return Err(PlacementCheck::Overlap);
        }
        if self.in_exclusion_zone(facility) {
            return Err(PlacementCheck::Exclusion);
        }
        if !self.check_radii(facility) {
            return Err(PlacementCheck::Radius);
        }
        if !self.check_edges(facility) {
            return Err(PlacementCheck::Edge);
        }
        Ok(())
    }

    /// Each edge of the facility lies within `[0, dimension + 1]`
    pub fn facility_within_boundaries(&self, facility: &Facility) -> bool {
        let horizontal = 0..=self.width + 1;
        let vertical = 0..=self.height + 1;

        horizontal.contains(&facility.left_x())
            && horizontal.contains(&facility.right_x())
            && vertical.contains(&facility.top_y())
            && vertical.contains(&facility.btm_y())
    }

    /// The cell satisfies `0 <= x <= width` and `0 <= y <= height`
    pub fn cell_within_boundaries(&self, cell: GridCell) -> bool {
        (0..=self.width).contains(&cell.x) && (0..=self.height).contains(&cell.y)
    }

    /// The facility overlaps a committed facility
    pub fn facility_overlap(&self, facility: &Facility) -> bool {
        self.facilities.iter().any(|f| f.overlaps(facility))
    }

    /// The facility overlaps an exclusion zone
    pub fn in_exclusion_zone(&self, facility: &Facility) -> bool {
        self.exclusion_zones.iter().any(|zone| zone.overlaps(facility))
    }

    /// Radius bounds hold in both directions against every committed facility
    pub fn check_radii(&self, facility: &Facility) -> bool {
        self.facilities.iter().all(|f| radii_compatible(f, facility))
    }

    /// Edge bounds hold in both directions against every committed facility
    pub fn check_edges(&self, facility: &Facility) -> bool {
        self.facilities.iter().all(|f| edges_compatible(f, facility))
    }

    /// Every grid cell currently viable for a relocation, in row-major order
    ///
    /// A cell qualifies if it is not covered by a committed facility or an
    /// exclusion zone and an unbounded 1x1 facility placed there passes the
    /// radius and edge checks. The scan is exhaustive and is recomputed on
    /// every call.
    pub fn available_cells(&self) -> Vec<GridCell> {
        let mut cells = Vec::new();

        for y in 1..=self.height {
            for x in 1..=self.width {
                let cell = GridCell::new(x, y);
                let point = cell.to_point();
                if self.facility_at(&point).is_some() || self.is_exclusion_zone(&point) {
                    continue;
                }

                let occupant = Facility::unit_cell(x, y);
                if self.check_radii(&occupant) && self.check_edges(&occupant) {
                    cells.push(cell);
                }
            }
        }

        debug!(available = cells.len(), "Scanned site for available cells");
        cells
    }

    /// The committed facility covering `point`, if any
    pub fn facility_at(&self, point: &Point) -> Option<&Facility> {
        self.facilities.iter().find(|f| f.contains_point(point))
    }

    /// True if `point` falls inside an exclusion zone
    pub fn is_exclusion_zone(&self, point: &Point) -> bool {
        self.exclusion_zones.iter().any(|zone| zone.contains_point(point))
    }

    /// Site width
    pub fn width(&self) -> i64 {
        self.width
    }

    /// Site height
    pub fn height(&self) -> i64 {
        self.height
    }

    /// Committed facilities in placement order
    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    /// Exclusion zones in registration order
    pub fn exclusion_zones(&self) -> &[ExclusionZone] {
        &self.exclusion_zones
    }

    /// Number of committed facilities
    pub fn facility_count(&self) -> usize {
        self.facilities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::facility::Bounds;

    fn demo_site() -> Site {
        let mut site = Site::new(5, 7).unwrap();
        site.add_exclusion_zones(&[(5, 6), (2, 7), (3, 7), (4, 7), (5, 7)]).unwrap();
        site
    }

    #[test]
    fn test_site_creation() {
        let site = Site::new(5, 7).unwrap();
        assert_eq!(site.width(), 5);
        assert_eq!(site.height(), 7);
        assert_eq!(site.facility_count(), 0);
        assert!(site.exclusion_zones().is_empty());

        assert!(matches!(Site::new(0, 7), Err(LayoutError::InvalidSite(_))));
        assert!(matches!(Site::new(5, -1), Err(LayoutError::InvalidSite(_))));
    }

    #[test]
    fn test_exclusion_zones_preserve_input_order() {
        let site = demo_site();
        let cells: Vec<GridCell> = site.exclusion_zones().iter().map(|z| z.cell).collect();
        assert_eq!(
            cells,
            vec![
                GridCell::new(5, 6),
                GridCell::new(2, 7),
                GridCell::new(3, 7),
                GridCell::new(4, 7),
                GridCell::new(5, 7),
            ]
        );
    }

    #[test]
    fn test_exclusion_zone_bounds() {
        let mut site = Site::new(5, 7).unwrap();

        // Zero and the dimension itself are accepted
        site.add_exclusion_zones(&[(0, 0), (5, 7)]).unwrap();

        let error = site.add_exclusion_zones(&[(1, 1), (6, 1)]).unwrap_err();
        assert!(matches!(
            error,
            LayoutError::ExclusionOutOfBounds { cell: GridCell { x: 6, y: 1 }, .. }
        ));
        // Nothing from the rejected batch was registered
        assert_eq!(site.exclusion_zones().len(), 2);

        assert!(site.add_exclusion_zones(&[(1, -1)]).is_err());
    }

    #[test]
    fn test_exclusion_zones_locked_after_first_facility() {
        let mut site = Site::new(5, 5).unwrap();
        site.add_facility(Facility::new("A", 1, 1, 1, 1).unwrap()).unwrap();
        assert!(matches!(site.add_exclusion_zones(&[(3, 3)]), Err(LayoutError::InvalidSite(_))));
    }

    #[test]
    fn test_boundary_check_is_inclusive_of_dimension_plus_one() {
        let site = Site::new(5, 7).unwrap();

        // right_x == width + 1 hangs one unit past the nominal edge and is accepted
        let overhang = Facility::new("A", 5, 1, 1, 1).unwrap();
        assert_eq!(overhang.right_x(), 6);
        assert_eq!(site.check_facility(&overhang), Ok(()));

        let too_far = Facility::new("B", 5, 1, 2, 1).unwrap();
        assert_eq!(site.check_facility(&too_far), Err(PlacementCheck::Boundary));

        let bottom_overhang = Facility::new("C", 1, 7, 1, 1).unwrap();
        assert_eq!(site.check_facility(&bottom_overhang), Ok(()));

        let origin = Facility::new("D", 0, 0, 1, 1).unwrap();
        assert_eq!(site.check_facility(&origin), Ok(()));

        let negative = Facility::new("E", -1, 1, 2, 1).unwrap();
        assert_eq!(site.check_facility(&negative), Err(PlacementCheck::Boundary));
    }

    #[test]
    fn test_pipeline_order() {
        let mut site = demo_site();
        let anchor = Facility::new("A", 1, 1, 2, 2)
            .unwrap()
            .with_bounds(Bounds::new().with_max_radius(2.0))
            .unwrap();
        site.add_facility(anchor).unwrap();

        // Out of bounds and overlapping: boundary wins
        let both = Facility::new("B", 0, 0, 7, 1).unwrap();
        assert_eq!(site.check_facility(&both), Err(PlacementCheck::Boundary));

        let overlapping = Facility::new("B", 2, 2, 1, 1).unwrap();
        assert_eq!(site.check_facility(&overlapping), Err(PlacementCheck::Overlap));

        let excluded = Facility::new("B", 5, 6, 1, 1).unwrap();
        assert_eq!(site.check_facility(&excluded), Err(PlacementCheck::Exclusion));

        let too_far = Facility::new("B", 4, 4, 1, 1).unwrap();
        assert_eq!(site.check_facility(&too_far), Err(PlacementCheck::Radius));
    }

    #[test]
    fn test_edge_check() {
        let mut site = Site::new(6, 6).unwrap();
        let anchor = Facility::new("A", 1, 1, 1, 1)
            .unwrap()
            .with_bounds(Bounds::new().with_min_edge_bound(1.0))
            .unwrap();
        site.add_facility(anchor).unwrap();

        let adjacent = Facility::new("B", 2, 1, 1, 1).unwrap();
        assert_eq!(site.check_facility(&adjacent), Err(PlacementCheck::Edge));

        let clear = Facility::new("B", 3, 1, 1, 1).unwrap();
        assert_eq!(site.check_facility(&clear), Ok(()));
    }

    #[test]
    fn test_rejection_is_atomic() {
        let mut site = demo_site();
        site.add_facility(Facility::new("A", 1, 1, 2, 2).unwrap()).unwrap();

        let error = site.add_facility(Facility::new("B", 2, 2, 2, 2).unwrap()).unwrap_err();
        assert_eq!(error.check(), PlacementCheck::Overlap);
        assert_eq!(error.facility().name(), "B");

        assert_eq!(site.facility_count(), 1);
        assert!(site.facilities().iter().all(|f| f.name() != "B"));
        assert!(site.facility_at(&Point::new(3.0, 3.0)).is_none());
    }

    #[test]
    fn test_available_cells_row_major() {
        let mut site = Site::new(3, 2).unwrap();
        site.add_exclusion_zones(&[(2, 1)]).unwrap();
        site.add_facility(Facility::new("A", 3, 2, 1, 1).unwrap()).unwrap();

        assert_eq!(
            site.available_cells(),
            vec![GridCell::new(1, 1), GridCell::new(3, 1), GridCell::new(1, 2), GridCell::new(2, 2)]
        );
    }

    #[test]
    fn test_available_cells_respect_committed_bounds() {
        let mut site = demo_site();
        let anchor = Facility::new("1", 3, 3, 2, 1)
            .unwrap()
            .with_bounds(Bounds::new().with_min_radius(1.0).with_max_radius(3.0))
            .unwrap();
        site.add_facility(anchor).unwrap();

        assert_eq!(
            site.available_cells(),
            vec![
                GridCell::new(3, 1),
                GridCell::new(4, 1),
                GridCell::new(2, 2),
                GridCell::new(5, 2),
                GridCell::new(2, 3),
                GridCell::new(5, 3),
                GridCell::new(2, 4),
                GridCell::new(5, 4),
                GridCell::new(3, 5),
                GridCell::new(4, 5),
            ]
        );
    }

    #[test]
    fn test_available_cells_are_fresh_per_rejection() {
        let mut site = Site::new(2, 1).unwrap();
        let first = site.add_facility(Facility::new("A", 3, 3, 1, 1).unwrap()).unwrap_err();
        assert_eq!(first.available_cells(), &[GridCell::new(1, 1), GridCell::new(2, 1)]);

        site.add_facility(Facility::new("B", 1, 1, 1, 1).unwrap()).unwrap();
        let second = site.add_facility(Facility::new("C", 1, 1, 1, 1).unwrap()).unwrap_err();
        assert_eq!(second.available_cells(), &[GridCell::new(2, 1)]);
        assert_eq!(first.available_cells().len(), 2);
    }

    #[test]
    fn test_occupancy_queries() {
        let mut site = demo_site();
        site.add_facility(Facility::new("Tank", 1, 1, 2, 1).unwrap()).unwrap();

        assert_eq!(site.facility_at(&Point::new(2.0, 1.0)).map(Facility::name), Some("Tank"));
        assert!(site.facility_at(&Point::new(3.0, 1.0)).is_none());
        assert!(site.is_exclusion_zone(&Point::new(5.0, 6.0)));
        assert!(!site.is_exclusion_zone(&Point::new(1.0, 6.0)));
    }
}
