/// Interaction tuning constants shared by the core engines.
///
/// These express intended behavior (spring constants, offsets, time
/// windows) and keep magic numbers out of the engines.
// Tilt card defaults
pub const TILT_ROTATE_AMPLITUDE_DEG: f32 = 14.0;
pub const TILT_SCALE_ON_HOVER: f32 = 1.1;
pub const CAPTION_VELOCITY_GAIN: f32 = 0.6;

// Image tilt: raw pixel offsets, no normalisation
pub const IMAGE_TILT_DEG_PER_PX: f32 = 0.01;
pub const IMAGE_TILT_SCALE: f32 = 1.02;
pub const IMAGE_TILT_MAX_DEG_PER_PX: f32 = 1.0;

// Spring profiles as (stiffness, damping, mass)
pub const BODY_SPRING: (f32, f32, f32) = (100.0, 30.0, 2.0); // heavy: rotation + scale
pub const CAPTION_SPRING: (f32, f32, f32) = (350.0, 30.0, 1.0); // light: caption whip
pub const TOOLTIP_SPRING: (f32, f32, f32) = (100.0, 10.0, 1.0); // default profile for opacity
pub const IMAGE_SPRING: (f32, f32, f32) = (150.0, 20.0, 1.0);
pub const CURSOR_SPRING: (f32, f32, f32) = (400.0, 50.0, 1.0);

// Spring integration
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const SPRING_MAX_FRAME_SEC: f32 = 0.1; // long frames (hidden tab) are clamped
pub const SPRING_REST_DELTA: f32 = 0.001;
pub const SPRING_REST_SPEED: f32 = 0.01;

// Scroll tracking (px / ms)
pub const SCROLL_PROBE_OFFSET_PX: f64 = 120.0; // probe sits below the viewport top
pub const SECTION_TOP_OFFSET_PX: f64 = 150.0; // sections activate this early
pub const NAV_SCROLL_OFFSET_PX: f64 = 100.0; // room for the fixed header
pub const NAV_TIMEOUT_MS: u64 = 1000; // expected smooth-scroll duration
pub const SCROLL_THROTTLE_MS: u64 = 100;

// Spotlight
pub const SPOTLIGHT_DIM_OPACITY: f32 = 0.2;
pub const SPOTLIGHT_FADE_TAU_SEC: f32 = 0.1;

// Reveal
pub const REVEAL_THRESHOLD: f32 = 0.1;
pub const REVEAL_OFFSET_PX: f32 = 30.0;

// Follow cursor as (size px, opacity, border px) per kind
pub const CURSOR_DEFAULT_STYLE: (f32, f32, f32) = (16.0, 0.5, 0.0);
pub const CURSOR_EXPAND_STYLE: (f32, f32, f32) = (40.0, 0.2, 1.0);
pub const CURSOR_LINK_STYLE: (f32, f32, f32) = (24.0, 0.7, 0.0);
pub const CURSOR_TEXT_STYLE: (f32, f32, f32) = (40.0, 0.2, 0.0);
