/// DOM contract and frame-loop tuning for the web glue.
///
/// Attribute names are the only coupling between markup and engines.
// Tilt cards
pub const TILT_SELECTOR: &str = "[data-tilt]";
pub const TILT_BODY_SELECTOR: &str = "[data-tilt-body]";
pub const TILT_CAPTION_SELECTOR: &str = "[data-tilt-caption]";

// Follow cursor and the elements that restyle it
pub const CURSOR_SELECTOR: &str = "[data-cursor]";
pub const CURSOR_KIND_SELECTOR: &str = "[data-cursor-kind]";
pub const CURSOR_KIND_ATTR: &str = "data-cursor-kind";

// Scroll-tracked sections and their nav buttons
pub const SECTION_SELECTOR: &str = "[data-section]";
pub const SECTION_ID_ATTR: &str = "data-section";
pub const SECTION_TITLE_ATTR: &str = "data-title";
pub const NAV_TARGET_SELECTOR: &str = "[data-nav-target]";
pub const NAV_TARGET_ATTR: &str = "data-nav-target";
pub const NAV_ACTIVE_CLASS: &str = "active";

// Spotlight groups
pub const SPOTLIGHT_SELECTOR: &str = "[data-spotlight]";
pub const SPOTLIGHT_ITEM_SELECTOR: &str = ".nav-link";

// Reveal blocks
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const REVEAL_DIRECTION_ATTR: &str = "data-reveal-direction";
pub const REVEAL_DELAY_ATTR: &str = "data-reveal-delay";
pub const REVEAL_THRESHOLD_ATTR: &str = "data-reveal-threshold";
pub const REVEAL_TRANSITION: &str =
    "opacity 0.6s cubic-bezier(0.22, 1, 0.36, 1), transform 0.6s cubic-bezier(0.22, 1, 0.36, 1)";

// Frame loop
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after a hidden tab resumes
