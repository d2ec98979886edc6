pub mod event_info;
pub mod navbar;
pub mod now_button;
pub mod schedule_view;
pub mod splash;
pub mod status_bar;
pub mod talk_detail;
pub mod talk_row;
