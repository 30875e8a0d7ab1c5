pub mod config;
pub mod constants;
pub mod cursor;
pub mod geometry;
pub mod reveal;
pub mod scroll;
pub mod spotlight;
pub mod spring;
pub mod tilt;

pub use config::{SpotlightConfig, TiltConfig, TrackerConfig};
pub use cursor::{CursorFollower, CursorKind, CursorStyle};
pub use geometry::{visible_fraction, Rect, SectionBounds};
pub use reveal::{Reveal, RevealDirection, RevealSet, RevealStyle};
pub use scroll::{ScrollTracker, Section};
pub use spotlight::{Spotlight, SpotlightItem};
pub use tilt::{TiltEngine, TiltFrame};
