use crate::domain::model::{Level, Plant};

// Load classes published by the backend. Each scale is ascending; a count is
// classified by the highest threshold it reaches.
const GRASS_SCALE: &[(u32, Level)] = &[
    (1, Level::Low),
    (20, Level::Medium),
    (50, Level::High),
    (150, Level::VeryHigh),
];

const TREE_SCALE: &[(u32, Level)] = &[
    (1, Level::Low),
    (11, Level::Medium),
    (70, Level::High),
    (250, Level::VeryHigh),
];

static SCALES: &[(Plant, &[(u32, Level)])] = &[
    (Plant::Alder, TREE_SCALE),
    (Plant::Ash, TREE_SCALE),
    (Plant::Beech, TREE_SCALE),
    (Plant::Birch, TREE_SCALE),
    (Plant::Grasses, GRASS_SCALE),
    (Plant::Hazel, TREE_SCALE),
    (Plant::Oak, TREE_SCALE),
];

/// Classify a raw pollen count for the given plant.
///
/// Panics if the plant has no scale in the table; that means the enum and
/// the table went out of sync and must be fixed in code.
pub fn classify(plant: Plant, value: u32) -> Level {
    let scale = SCALES
        .iter()
        .find(|(candidate, _)| *candidate == plant)
        .map(|(_, scale)| *scale)
        .unwrap_or_else(|| panic!("no classification scale configured for plant '{}'", plant));

    scale
        .iter()
        .rev()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(_, level)| *level)
        .unwrap_or(Level::None)
}
