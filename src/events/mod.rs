pub mod cursor;
pub mod pointer;
pub mod scroll;
pub mod spotlight;

pub use cursor::wire_cursor;
pub use pointer::wire_tilt_cards;
pub use scroll::{wire_reveal_scans, wire_scroll_tracking};
pub use spotlight::wire_spotlights;
