//! A collection of constants.

/// Column holding the character name in the wide input.
pub const NAME_COLUMN: &str = "Name";

/// Volume columns in canonical order.  Records are always emitted in this
/// order, whatever order the input columns come in.
pub const VOLUME_COLUMNS: [&str; 9] = [
    "Trailers",
    "Volume 1",
    "Volume 2",
    "Volume 3",
    "Volume 4",
    "Volume 5",
    "Volume 6",
    "Volume 7",
    "Volume 8",
];

/// Header of the long-format table, fixed column order.
pub const APPEARANCE_HEADER: [&str; 3] = ["name", "volume", "appearance_type"];

/// Appearance kinds ranked from most present to least present.
pub const APPEARANCE_TYPES: [&str; 9] = [
    "Main",
    "Secondary",
    "Minor",
    "One Appearance",
    "Voice Cameos",
    "Voice Cameo",
    "Cameo",
    "Cameo (Corpse)",
    "Mentioned",
];

/// Values that are not actual appearances and never reach a chart.
pub const EXCLUDED_APPEARANCE_TYPES: [&str; 3] = ["No Appearance", "???", "Deceased"];

pub const DEFAULT_APPEARANCES_CSV: &str = "character_appearances.csv";
pub const DEFAULT_VOLUME_COUNTS_PLOT: &str = "num_characters_by_volume.png";
pub const DEFAULT_CHARACTER_TILES_PLOT: &str = "characters_appearances.png";

/// Charts are laid out in inches and rasterised at this density.
pub const DEFAULT_DPI: u32 = 300;
/// Bar chart is 8 in wide, 9 in tall
pub const VOLUME_COUNTS_INCHES: (u32, u32) = (8, 9);
/// Tile chart is 8 in wide, 45 in tall
pub const CHARACTER_TILES_INCHES: (u32, u32) = (8, 45);

/// Preview falls back to this width when stdout is not a terminal.
pub const FALLBACK_TERMINAL_WIDTH: u16 = 80;
