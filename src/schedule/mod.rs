pub mod grouping;
pub mod talk;
pub mod time;
