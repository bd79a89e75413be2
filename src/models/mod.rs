pub mod company;
pub mod daily_balance;
pub mod dataset;
pub mod employee;
pub mod event;
pub mod event_kind;
