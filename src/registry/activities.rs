// ABOUTME: Workout activity catalog mapping semantic activity keys to vendor activity constants
// ABOUTME: Forward lookup falls back to the unknown sentinel; reverse lookup is first-match by catalog order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout activity catalog.
//!
//! Activity names arrive as free-form caller strings, so the forward
//! lookup degrades to [`VENDOR_ACTIVITY_UNKNOWN`] instead of failing.
//! The reverse lookup walks the catalog in declaration order and returns
//! the first match; where several keys share a vendor constant this makes
//! the winner deterministic (accepted ambiguity, not an error).

/// Vendor sentinel for activities outside the catalog.
pub const VENDOR_ACTIVITY_UNKNOWN: &str = "unknown";

/// Semantic activity key emitted when a vendor constant has no catalog entry.
pub const ACTIVITY_KEY_OTHER: &str = "OTHER";

/// Ordered catalog of (semantic key, vendor activity constant).
pub const ACTIVITY_CATALOG: &[(&str, &str)] = &[
    ("AEROBICS", "aerobics"),
    ("AMERICAN_FOOTBALL", "football.american"),
    ("ARCHERY", "archery"),
    ("AUSTRALIAN_FOOTBALL", "football.australian"),
    ("BADMINTON", "badminton"),
    ("BASEBALL", "baseball"),
    ("BASKETBALL", "basketball"),
    ("BIATHLON", "biathlon"),
    ("BIKING", "biking"),
    ("BOXING", "boxing"),
    ("CALISTHENICS", "calisthenics"),
    ("CIRCUIT_TRAINING", "circuit_training"),
    ("CRICKET", "cricket"),
    ("CROSS_COUNTRY_SKIING", "skiing.cross_country"),
    ("CROSS_FIT", "crossfit"),
    ("CURLING", "curling"),
    ("DANCING", "dancing"),
    ("DIVING", "diving"),
    ("DOWNHILL_SKIING", "skiing.downhill"),
    ("ELEVATOR", "elevator"),
    ("ELLIPTICAL", "elliptical"),
    ("ERGOMETER", "ergometer"),
    ("ESCALATOR", "escalator"),
    ("FENCING", "fencing"),
    ("FRISBEE_DISC", "frisbee.disc"),
    ("GARDENING", "gardening"),
    ("GOLF", "golf"),
    ("GUIDED_BREATHING", "guided_breathing"),
    ("GYMNASTICS", "gymnastics"),
    ("HANDBALL", "handball"),
    ("HIGH_INTENSITY_INTERVAL_TRAINING", "interval_training.high_intensity"),
    ("HIKING", "hiking"),
    ("HOCKEY", "hockey"),
    ("HORSEBACK_RIDING", "horseback_riding"),
    ("HOUSEWORK", "housework"),
    ("IN_VEHICLE", "in_vehicle"),
    ("INTERVAL_TRAINING", "interval_training"),
    ("JUMP_ROPE", "jump_rope"),
    ("KAYAKING", "kayaking"),
    ("KETTLEBELL_TRAINING", "kettlebell_training"),
    ("KICK_SCOOTER", "kick_scooter"),
    ("KICKBOXING", "kickboxing"),
    ("KITE_SURFING", "kitesurfing"),
    ("MARTIAL_ARTS", "martial_arts"),
    ("MEDITATION", "meditation"),
    ("MIXED_MARTIAL_ARTS", "martial_arts.mixed"),
    ("P90X", "p90x"),
    ("PARAGLIDING", "paragliding"),
    ("PILATES", "pilates"),
    ("POLO", "polo"),
    ("RACQUETBALL", "racquetball"),
    ("ROCK_CLIMBING", "rock_climbing"),
    ("ROWING", "rowing"),
    ("RUGBY", "rugby"),
    ("RUNNING_JOGGING", "running.jogging"),
    ("RUNNING_SAND", "running.sand"),
    ("RUNNING_TREADMILL", "running.treadmill"),
    ("RUNNING", "running"),
    ("SAILING", "sailing"),
    ("SCUBA_DIVING", "scuba_diving"),
    ("SKATING_CROSS", "skating.cross"),
    ("SKATING_INDOOR", "skating.indoor"),
    ("SKATING_INLINE", "skating.inline"),
    ("SKATING", "skating"),
    ("SKIING_BACK_COUNTRY", "skiing.back_country"),
    ("SKIING_KITE", "skiing.kite"),
    ("SKIING_ROLLER", "skiing.roller"),
    ("SLEDDING", "sledding"),
    ("SNOWBOARDING", "snowboarding"),
    ("SOCCER", "football.soccer"),
    ("SOFTBALL", "softball"),
    ("SQUASH", "squash"),
    ("STAIR_CLIMBING_MACHINE", "stair_climbing.machine"),
    ("STAIR_CLIMBING", "stair_climbing"),
    ("STANDUP_PADDLEBOARDING", "standup_paddleboarding"),
    ("STILL", "still"),
    ("STRENGTH_TRAINING", "strength_training"),
    ("SURFING", "surfing"),
    ("SWIMMING_OPEN_WATER", "swimming.open_water"),
    ("SWIMMING_POOL", "swimming.pool"),
    ("SWIMMING", "swimming"),
    ("TABLE_TENNIS", "table_tennis"),
    ("TEAM_SPORTS", "team_sports"),
    ("TENNIS", "tennis"),
    ("TILTING", "tilting"),
    ("VOLLEYBALL_BEACH", "volleyball.beach"),
    ("VOLLEYBALL_INDOOR", "volleyball.indoor"),
    ("VOLLEYBALL", "volleyball"),
    ("WAKEBOARDING", "wakeboarding"),
    ("WALKING_FITNESS", "walking.fitness"),
    ("WALKING_NORDIC", "walking.nordic"),
    ("WALKING_STROLLER", "walking.stroller"),
    ("WALKING_TREADMILL", "walking.treadmill"),
    ("WALKING", "walking"),
    ("WATER_POLO", "water_polo"),
    ("WEIGHTLIFTING", "weightlifting"),
    ("WHEELCHAIR", "wheelchair"),
    ("WINDSURFING", "windsurfing"),
    ("YOGA", "yoga"),
    ("ZUMBA", "zumba"),
    ("OTHER", "other"),
];

/// Map a caller-supplied activity key to the vendor activity constant.
///
/// Keys outside the catalog map to [`VENDOR_ACTIVITY_UNKNOWN`]; activity
/// names are free-form user input, so this never fails.
#[must_use]
pub fn vendor_activity_for_key(key: &str) -> &'static str {
    ACTIVITY_CATALOG
        .iter()
        .find(|(semantic, _)| *semantic == key)
        .map_or(VENDOR_ACTIVITY_UNKNOWN, |(_, vendor)| vendor)
}

/// Reverse-map a vendor activity constant to a semantic activity key.
///
/// Returns the first catalog entry whose vendor constant matches;
/// `None` when the vendor constant has no catalog entry at all.
#[must_use]
pub fn activity_key_for_vendor(vendor: &str) -> Option<&'static str> {
    ACTIVITY_CATALOG
        .iter()
        .find(|(_, constant)| *constant == vendor)
        .map(|(semantic, _)| *semantic)
}
