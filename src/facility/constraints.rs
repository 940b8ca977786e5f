//! Pairwise constraint predicates
//!
//! Each predicate is evaluated from the point of view of the facility that
//! carries the bound (`self`) against another facility. An unset bound always
//! passes. Two facilities are compatible only when the predicates hold in both
//! directions, since either side may carry bounds the other lacks.

use crate::facility::facility::Facility;

impl Facility {
    /// True if the nearest corner of `other` is at least `min_radius` from this center
    pub fn outside_min_radius(&self, other: &Facility) -> bool {
        let Some(min_radius) = self.bounds().min_radius else {
            return true;
        };
        let center = self.center();
        let nearest = other
            .corners()
            .iter()
            .map(|corner| corner.distance(&center))
            .fold(f64::INFINITY, f64::min);
        nearest >= min_radius
    }

    /// True if the farthest corner of `other` is at most `max_radius` from this center
    pub fn within_max_radius(&self, other: &Facility) -> bool {
        let Some(max_radius) = self.bounds().max_radius else {
            return true;
        };
        let center = self.center();
        let farthest = other
            .corners()
            .iter()
            .map(|corner| corner.distance(&center))
            .fold(f64::NEG_INFINITY, f64::max);
        farthest <= max_radius
    }

    /// True if `other` stays clear of this facility grown by `min_edge_bound`
    pub fn outside_min_edge_bound(&self, other: &Facility) -> bool {
        match self.bounds().min_edge_bound {
            Some(bound) => !self.rect().expanded(bound).overlaps(&other.rect()),
            None => true,
        }
    }

    /// True if `other` reaches into this facility grown by `max_edge_bound`
    pub fn within_max_edge_bound(&self, other: &Facility) -> bool {
        match self.bounds().max_edge_bound {
            Some(bound) => self.rect().expanded(bound).overlaps(&other.rect()),
            None => true,
        }
    }
}

/// Both facilities' radius bounds hold against each other
pub fn radii_compatible(a: &Facility, b: &Facility) -> bool {
    a.outside_min_radius(b)
        && b.outside_min_radius(a)
        && a.within_max_radius(b)
        && b.within_max_radius(a)
}

/// Both facilities' edge bounds hold against each other
pub fn edges_compatible(a: &Facility, b: &Facility) -> bool {
    a.outside_min_edge_bound(b)
        && b.outside_min_edge_bound(a)
        && a.within_max_edge_bound(b)
        && b.within_max_edge_bound(a)
}
