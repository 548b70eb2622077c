//! Learning path catalogue.
//!
//! Static metadata for the eleven levels of the documentation learning
//! path. This table is the canonical source of truth for level cards:
//! the engine itself only ever consults the successor chain (see
//! [`LevelId::successor`]); everything else here exists for rendering.

use crate::level::LevelId;

/// Card metadata for a single level.
#[derive(Debug, Clone, Copy)]
pub struct LevelInfo {
    /// Which level this entry describes.
    pub level: LevelId,
    /// Short slug used by the site content (`"alfavitarion"`).
    pub slug: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Card icon glyph.
    pub icon: &'static str,
    /// Page the level starts at.
    pub entry_point: &'static str,
    /// Rough reading time shown on the card.
    pub estimated_time: &'static str,
    /// Difficulty label shown on the card.
    pub difficulty: &'static str,
}

/// All levels in path order.
pub const LEVELS: [LevelInfo; 11] = [
    LevelInfo {
        level: LevelId::Level0,
        slug: "alfavitarion",
        title: "Το Αλφαβητάριον",
        icon: "●",
        entry_point: "ai-smart-dummies-guide.html",
        estimated_time: "45 λεπτά",
        difficulty: "Αρχάριος",
    },
    LevelInfo {
        level: LevelId::Level1,
        slug: "egkolpion",
        title: "Το Εγκόλπιον",
        icon: "►",
        entry_point: "quick_reference_guide.html",
        estimated_time: "30 λεπτά",
        difficulty: "Αρχάριος",
    },
    LevelInfo {
        level: LevelId::Level2,
        slug: "vivliothiki",
        title: "Η Βιντεοθήκη",
        icon: "●",
        entry_point: "videos.html",
        estimated_time: "2-4 ώρες",
        difficulty: "Αρχάριος-Μέσος",
    },
    LevelInfo {
        level: LevelId::Level3,
        slug: "epoptika_mesa",
        title: "Εποπτικά Μέσα",
        icon: "◉",
        entry_point: "digital_assets/index.html",
        estimated_time: "1-2 ώρες",
        difficulty: "Μέσος",
    },
    LevelInfo {
        level: LevelId::Level4,
        slug: "tetradion",
        title: "Τετράδιον Εργασιών",
        icon: "▪",
        entry_point: "student_workbook_enhanced.html",
        estimated_time: "3-5 ώρες",
        difficulty: "Μέσος",
    },
    LevelInfo {
        level: LevelId::Level5,
        slug: "kyrion_vivlion",
        title: "Κύριο Βιβλίον",
        icon: "■",
        entry_point: "main-book.html",
        estimated_time: "8-12 ώρες",
        difficulty: "Μέσος-Προχωρημένος",
    },
    LevelInfo {
        level: LevelId::Level6,
        slug: "odigos_ekpaideuton",
        title: "Οδηγός Εκπαιδευτών",
        icon: "◆",
        entry_point: "instructor_implementation_guide_parts_1_2.html",
        estimated_time: "2-3 ώρες",
        difficulty: "Προχωρημένος",
    },
    LevelInfo {
        level: LevelId::Level7,
        slug: "diadrastiki_platforma",
        title: "Διαδραστική Πλατφόρμα",
        icon: "★",
        entry_point: "neo/index.html",
        estimated_time: "1-2 ώρες",
        difficulty: "Προχωρημένος",
    },
    LevelInfo {
        level: LevelId::Level8,
        slug: "didaskalia",
        title: "Neo-Monday Διδασκαλία",
        icon: "◈",
        entry_point: "didaskalia.html",
        estimated_time: "2-4 ώρες",
        difficulty: "Προχωρημένος",
    },
    LevelInfo {
        level: LevelId::Level9,
        slug: "themelion",
        title: "Θεμέλιον",
        icon: "⬟",
        entry_point: "themelion.html",
        estimated_time: "3-5 ώρες",
        difficulty: "Εξπέρ",
    },
    LevelInfo {
        level: LevelId::Level10,
        slug: "agogi",
        title: "Neo-Monday Αγωγή",
        icon: "▲",
        entry_point: "https://deefunxion.github.io/AILEADER/",
        estimated_time: "4-6 ώρες",
        difficulty: "Εξπέρ",
    },
];

/// Look up the card metadata for a level.
pub fn info(level: LevelId) -> &'static LevelInfo {
    &LEVELS[level.index()]
}

/// Metadata for the level unlocked after `level`, if any.
pub fn next_info(level: LevelId) -> Option<&'static LevelInfo> {
    level.successor().map(info)
}

/// Total number of levels in the path.
pub fn total_levels() -> usize {
    LEVELS.len()
}

/// How far along the path a level sits, as a rounded percentage.
/// Reaching `level_0` already counts as one step of eleven.
pub fn progress_percent(level: LevelId) -> u8 {
    let reached = level.index() + 1;
    ((reached as f64 / total_levels() as f64) * 100.0).round() as u8
}

/// Whether `check` is at or below the frontier `current`.
pub fn is_reached(check: LevelId, current: LevelId) -> bool {
    check.index() <= current.index()
}
