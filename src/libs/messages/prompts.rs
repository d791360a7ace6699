// Roster prompts
pub const PROMPT_ROSTER_PATH: &str = "Enter the path of the roster JSON file";

// Date strip prompts
pub const PROMPT_STRIP_PAST_DAYS: &str = "Days to show before today";
pub const PROMPT_STRIP_FUTURE_DAYS: &str = "Days to show after today";

// General prompts
pub const PROMPT_SELECT_MODULES: &str = "Select settings to configure";
