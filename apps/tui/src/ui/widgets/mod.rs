pub mod filters;
pub mod list;
pub mod map;
pub mod palette;
pub mod popup;
