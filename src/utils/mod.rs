pub mod fmt;
pub mod time;
