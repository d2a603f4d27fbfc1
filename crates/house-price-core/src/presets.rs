//! Named house presets for quick predictions

use serde::Serialize;

use crate::record::{FurnishingStatus, HouseRecord, YesNo};

/// A named, ready-made house record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub values: HouseRecord,
}

/// The preset catalogue
pub fn presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "Luxury Villa",
            values: HouseRecord {
                area: 3500.0,
                bedrooms: 5,
                bathrooms: 4.5,
                stories: 2.0,
                mainroad: YesNo::Yes,
                guestroom: YesNo::Yes,
                basement: YesNo::Yes,
                hotwaterheating: YesNo::Yes,
                airconditioning: YesNo::Yes,
                parking: 3,
                prefarea: YesNo::Yes,
                furnishingstatus: FurnishingStatus::Furnished,
            },
        },
        Preset {
            name: "Standard Apartment",
            values: HouseRecord {
                area: 1200.0,
                bedrooms: 2,
                bathrooms: 1.0,
                stories: 1.0,
                mainroad: YesNo::Yes,
                guestroom: YesNo::No,
                basement: YesNo::No,
                hotwaterheating: YesNo::No,
                airconditioning: YesNo::Yes,
                parking: 1,
                prefarea: YesNo::No,
                furnishingstatus: FurnishingStatus::SemiFurnished,
            },
        },
        Preset {
            name: "Budget Home",
            values: HouseRecord {
                area: 800.0,
                bedrooms: 1,
                bathrooms: 1.0,
                stories: 1.0,
                mainroad: YesNo::No,
                guestroom: YesNo::No,
                basement: YesNo::No,
                hotwaterheating: YesNo::No,
                airconditioning: YesNo::No,
                parking: 0,
                prefarea: YesNo::No,
                furnishingstatus: FurnishingStatus::Unfurnished,
            },
        },
    ]
}

/// Find a preset by name, ignoring case
pub fn find_preset(name: &str) -> Option<Preset> {
    presets()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}
