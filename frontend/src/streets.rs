// Street names offered by the address autocomplete. Opaque reference data,
// not part of the registry logic.
pub const STREETS: &[&str] = &[
    "Main St",
    "Oak Ave",
    "Elm St",
    "Maple Ave",
    "Cedar St",
    "Pine St",
    "Birch Ln",
    "Willow Way",
    "Chestnut St",
    "Walnut St",
    "Park Ave",
    "Lake St",
    "River Rd",
    "Hill St",
    "Church St",
    "School St",
    "Mill Rd",
    "Spring St",
    "Garden Ln",
    "Meadow Dr",
    "Orchard Rd",
    "Sunset Blvd",
    "Highland Ave",
    "Valley View Rd",
    "Forest Dr",
    "Franklin St",
    "Washington Ave",
    "Lincoln St",
    "Jefferson Ave",
    "Madison St",
    "Monroe Dr",
    "Victory Ave",
    "Union St",
    "Station Rd",
    "Bridge St",
    "Market St",
];
