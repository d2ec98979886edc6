pub mod animation;
pub mod lifecycle;
pub mod list_layout;
pub mod now_button;
pub mod schedule;
pub mod scroll;
