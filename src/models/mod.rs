pub mod conversion;
pub mod country;
pub mod history;
pub mod map_view;
pub mod session;
