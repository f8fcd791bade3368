pub mod time_utils;

pub use time_utils::relative_time_from;
