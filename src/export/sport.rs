//! Device sport codes to TCX sport categories

use serde::Serialize;
use std::fmt;
use tracing::warn;

/// The three sport categories TCX knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TcxSport {
    Running,
    Biking,
    Other,
}

impl TcxSport {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TcxSport::Running => "Running",
            TcxSport::Biking => "Biking",
            TcxSport::Other => "Other",
        }
    }
}

impl fmt::Display for TcxSport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use TcxSport::{Biking, Other, Running};

/// Known sport codes, sorted by code.
const SPORTS: &[(u64, TcxSport)] = &[
    (1, Running), // Running
    (2, Biking),  // Cycling
    (3, Other),   // Walking
    (4, Other),   // Jogging
    (5, Biking),  // Mountain biking
    (6, Other),   // Skiing
    (7, Other),   // Downhill skiing
    (8, Other),   // Rowing
    (9, Other),   // Nordic walking
    (10, Other),  // Skating
    (11, Other),  // Hiking
    (12, Other),  // Tennis
    (13, Other),  // Squash
    (14, Other),  // Badminton
    (15, Other),  // Strength training
    (16, Other),  // Other outdoor
    (17, Running), // Treadmill running
    (18, Biking), // Indoor cycling
    (19, Running), // Road running
    (20, Other),  // Circuit training
    (22, Other),  // Snowboarding
    (23, Other),  // Swimming
    (24, Other),  // Freestyle XC skiing
    (25, Other),  // Classic XC skiing
    (27, Running), // Trail running
    (28, Other),  // Ice skating
    (29, Other),  // Inline skating
    (30, Other),  // Roller skating
    (32, Other),  // Group exercise
    (33, Other),  // Yoga
    (34, Other),  // Crossfit
    (35, Other),  // Golf
    (36, Running), // Track and field running
    (38, Biking), // Road biking
    (39, Other),  // Soccer
    (40, Other),  // Cricket
    (41, Other),  // Basketball
    (42, Other),  // Baseball
    (43, Other),  // Rugby
    (44, Other),  // Field hockey
    (45, Other),  // Volleyball
    (46, Other),  // Ice hockey
    (47, Other),  // Football
    (48, Other),  // Handball
    (49, Other),  // Beach volley
    (50, Other),  // Futsal
    (51, Other),  // Floorball
    (52, Other),  // Dancing
    (53, Other),  // Trotting
    (54, Other),  // Riding
    (55, Other),  // Cross-trainer
    (56, Other),  // Fitness martial arts
    (57, Other),  // Functional training
    (58, Other),  // Bootcamp
    (59, Other),  // Freestyle roller skiing
    (60, Other),  // Classic roller skiing
    (61, Other),  // Aerobics
    (62, Other),  // Aqua fitness
    (63, Other),  // Step workout
    (64, Other),  // Body and mind
    (65, Other),  // Pilates
    (66, Other),  // Stretching
    (67, Other),  // Fitness dancing
    (68, Other),  // Triathlon
    (69, Other),  // Duathlon
    (70, Other),  // Off-road triathlon
    (71, Other),  // Off-road duathlon
    (82, Other),  // Multisport
    (83, Other),  // Other indoor
];

/// Look up a sport code without logging.
pub fn lookup_sport(code: u64) -> Option<TcxSport> {
    SPORTS
        .binary_search_by_key(&code, |(c, _)| *c)
        .ok()
        .map(|index| SPORTS[index].1)
}

/// Map a sport code to its TCX category; unknown codes become `Other`.
pub fn tcx_sport(code: u64) -> TcxSport {
    lookup_sport(code).unwrap_or_else(|| {
        warn!(code, "Unknown sport code");
        TcxSport::Other
    })
}
