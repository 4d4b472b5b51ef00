pub mod countries;
pub mod map;
pub mod ui;
