//! Point-of-interest categories and plan modes.
//!
//! The category list is static configuration: each entry maps a display
//! label to the OpenStreetMap tag that identifies the feature class.

/// One searchable category: display label plus the tag filter that selects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySpec {
    pub label: &'static str,
    pub tag_key: &'static str,
    pub tag_value: &'static str,
}

/// All categories queried in full mode, in display order.
pub const CATEGORIES: [CategorySpec; 6] = [
    CategorySpec {
        label: "Tourist Attraction",
        tag_key: "tourism",
        tag_value: "attraction",
    },
    CategorySpec {
        label: "Restaurant",
        tag_key: "amenity",
        tag_value: "restaurant",
    },
    CategorySpec {
        label: "Hotel",
        tag_key: "tourism",
        tag_value: "hotel",
    },
    CategorySpec {
        label: "Hospital",
        tag_key: "amenity",
        tag_value: "hospital",
    },
    CategorySpec {
        label: "Fuel Station",
        tag_key: "amenity",
        tag_value: "fuel",
    },
    CategorySpec {
        label: "Bike Rental",
        tag_key: "amenity",
        tag_value: "bicycle_rental",
    },
];

/// How much of the category list a plan covers.
///
/// `Attractions` is the short form: tourist attractions only, a tighter
/// radius, and a top-5 result list. `Full` queries every category over a
/// wider radius and returns the whole ranked table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanMode {
    Attractions,
    Full,
}

impl PlanMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "attractions" => Some(PlanMode::Attractions),
            "full" => Some(PlanMode::Full),
            _ => None,
        }
    }

    pub fn categories(&self) -> &'static [CategorySpec] {
        match self {
            PlanMode::Attractions => &CATEGORIES[..1],
            PlanMode::Full => &CATEGORIES[..],
        }
    }

    /// Cap on the number of rows returned, after ranking. `None` = no cap.
    pub fn result_limit(&self) -> Option<usize> {
        match self {
            PlanMode::Attractions => Some(5),
            PlanMode::Full => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_mode_covers_all_six_categories() {
        assert_eq!(PlanMode::Full.categories().len(), 6);
    }

    #[test]
    fn attractions_mode_is_the_tourism_attraction_tag_only() {
        let cats = PlanMode::Attractions.categories();
        assert_eq!(cats.len(), 1);
        assert_eq!(cats[0].tag_key, "tourism");
        assert_eq!(cats[0].tag_value, "attraction");
        assert_eq!(PlanMode::Attractions.result_limit(), Some(5));
    }

    #[test]
    fn parses_known_modes_only() {
        assert_eq!(PlanMode::parse("attractions"), Some(PlanMode::Attractions));
        assert_eq!(PlanMode::parse("full"), Some(PlanMode::Full));
        assert_eq!(PlanMode::parse("bogus"), None);
    }
}
