//! Text rendering of a site
//!
//! A site prints as a three-line header followed by an ASCII picture. Each
//! grid cell shows the first character of the facility covering it, `X` for
//! an exclusion zone or a blank.

use crate::facility::registry::Site;
use crate::geometry::GridCell;
use crate::placement::error::LayoutResult;
use std::fmt;

impl Site {
    /// Character shown for a cell in the picture
    pub fn cell_symbol(&self, cell: GridCell) -> char {
        let point = cell.to_point();
        match self.facility_at(&point) {
            Some(facility) => facility.symbol(),
            None if self.is_exclusion_zone(&point) => 'X',
            None => ' ',
        }
    }

    /// The grid picture without the header
    pub fn picture(&self) -> String {
        let width = self.width() as usize;
        let mut picture = "_".repeat(width * 2 + 1);
        picture.push('\n');

        for y in 1..=self.height() {
            picture.push('|');
            for x in 1..=self.width() {
                picture.push(self.cell_symbol(GridCell::new(x, y)));
                picture.push('|');
            }
            picture.push_str("\n|");
            picture.push_str(&"-+".repeat(width.saturating_sub(1)));
            picture.push_str("-|\n");
        }

        picture
    }

    /// Pretty-printed JSON document of the site
    pub fn to_json(&self) -> LayoutResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn quoted_list<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let quoted: Vec<String> = items.into_iter().map(|item| format!("'{}'", item)).collect();
    format!("[{}]", quoted.join(", "))
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Site with dimensions {} x {}", self.width(), self.height())?;
        writeln!(f, "Facilities: {}", quoted_list(self.facilities()))?;
        writeln!(f, "Exclusion zones: {}", quoted_list(self.exclusion_zones().iter().map(|z| z.cell)))?;
        write!(f, "{}", self.picture())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::facility::{Bounds, Facility};
    use crate::facility::generator::SiteGenerator;

    #[test]
    fn test_empty_site_rendering() {
        let site = Site::new(2, 1).unwrap();
        let expected = "Site with dimensions 2 x 1\n\
                        Facilities: []\n\
                        Exclusion zones: []\n\
                        _____\n\
                        | | |\n\
                        |-+-|\n";
        assert_eq!(site.to_string(), expected);
    }

    #[test]
    fn test_json_document() {
        let mut site = Site::new(3, 2).unwrap();
        site.add_facility(Facility::new("Pump", 2, 1, 1, 2).unwrap()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&site.to_json().unwrap()).unwrap();
        assert_eq!(value["height"], 2);
        assert_eq!(value["facilities"][0]["name"], "Pump");
        assert_eq!(value["facilities"][0]["y"], 1);
        assert!(value["exclusion_zones"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_cell_symbols() {
        let mut site = Site::new(3, 1).unwrap();
        site.add_exclusion_zones(&[(3, 1)]).unwrap();
        site.add_facility(Facility::new("Pump", 1, 1, 1, 1).unwrap()).unwrap();

        assert_eq!(site.cell_symbol(GridCell::new(1, 1)), 'P');
        assert_eq!(site.cell_symbol(GridCell::new(2, 1)), ' ');
        assert_eq!(site.cell_symbol(GridCell::new(3, 1)), 'X');
    }

    #[test]
    fn test_demo_site_rendering() {
        let facilities = vec![
            Facility::new("1", 3, 3, 2, 1)
                .unwrap()
                .with_bounds(Bounds::new().with_min_radius(1.0).with_max_radius(3.0))
                .unwrap(),
            Facility::new("2", 3, 5, 1, 2).unwrap(),
            Facility::new("3", 5, 6, 2, 1).unwrap(),
            Facility::new("4", 4, 2, 1, 1).unwrap(),
        ];
        let site = SiteGenerator::generate(
            5,
            7,
            &[(5, 6), (2, 7), (3, 7), (4, 7), (5, 7)],
            facilities,
            false,
        )
        .unwrap();

        let expected = [
            "Site with dimensions 5 x 7",
            "Facilities: ['Facility 1 at (3, 3) with dimensions 2 x 1', \
             'Facility 2 at (2, 2) with dimensions 1 x 2', \
             'Facility 3 at (3, 1) with dimensions 2 x 1', \
             'Facility 4 at (5, 2) with dimensions 1 x 1']",
            "Exclusion zones: ['(5, 6)', '(2, 7)', '(3, 7)', '(4, 7)', '(5, 7)']",
            "___________",
            "| | |3|3| |",
            "|-+-+-+-+-|",
            "| |2| | |4|",
            "|-+-+-+-+-|",
            "| |2|1|1| |",
            "|-+-+-+-+-|",
            "| | | | | |",
            "|-+-+-+-+-|",
            "| | | | | |",
            "|-+-+-+-+-|",
            "| | | | |X|",
            "|-+-+-+-+-|",
            "| |X|X|X|X|",
            "|-+-+-+-+-|",
            "",
        ]
        .join("\n");

        assert_eq!(site.to_string(), expected);
    }
}
