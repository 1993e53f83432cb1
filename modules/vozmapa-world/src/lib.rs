pub mod districts;
pub mod names;
pub mod text;
pub mod themes;

pub use districts::*;
pub use names::FEMALE_NAMES;
pub use text::title_case;
pub use themes::{Icon, Theme};
