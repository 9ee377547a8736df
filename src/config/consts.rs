// src/config/consts.rs

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_EXPORT_FILE: &str = "ranking.txt";

// The 16 PSL teams preloaded by --seed.
pub const DEFAULT_TEAMS: &[&str] = &[
    "Mamelodi Sundowns",
    "Kaizer Chiefs",
    "Orlando Pirates",
    "SuperSport United",
    "Cape Town City",
    "Stellenbosch",
    "Sekhukhune United",
    "Maritzburg United",
    "Moroka Swallows",
    "Chippa United",
    "Richards Bay",
    "Golden Arrows",
    "AmaZulu",
    "Polokwane City",
    "Black Leopards",
    "Tuks",
];
