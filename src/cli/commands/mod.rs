pub mod balance;
pub mod check;
pub mod config;
pub mod export;
