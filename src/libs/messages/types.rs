//! Message type definitions for the satchel application.
//!
//! Every piece of user-facing text is a variant of [`Message`]; the text
//! itself lives in the `Display` implementation in `display.rs`.

#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleRoster,
    ConfigModuleStrip,
    StripWindowCapped(u32),        // max days per side

    // === ROSTER MESSAGES ===
    RosterPathMissing,
    RosterLoaded(usize, String),   // children, path
    RosterReadFailed(String),      // path
    RosterParseFailed(String),     // path
    RosterEmpty,
    ChildNotFound(String),         // child id

    // === DATE STRIP MESSAGES ===
    StripHeader(String),           // today
    SelectedDateOutsideStrip(String),
    TodayIsWeekend(String),

    // === ATTENDANCE MESSAGES ===
    WeekHeader(String, String),    // child name, week label
    WeekSoFar(u32, u32),           // percentage, considered days
    NoRecordsForWeek,
    StatusHeader(String),          // date
    ChildrenHeader(String),        // week label

    // === BROWSE MESSAGES ===
    BrowseHeader,
    BrowseChild(String, usize, usize), // name, position, total
    BrowseSelectedDate(String),
    BrowseActionPrompt,
    BrowsePreviousChild,
    BrowseNextChild,
    BrowsePreviousDay,
    BrowseNextDay,
    BrowsePreviousWeek,
    BrowseNextWeek,
    BrowseToday,
    BrowseQuit,
    BrowseNoMove,
    BrowseGoodbye,

    // === EXPORT MESSAGES ===
    ExportingData(String, String), // week, format
    ExportCompleted(String),       // path

    // === INPUT MESSAGES ===
    InvalidDate(String),
}
