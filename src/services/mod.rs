pub mod country_service;
pub mod currency_service;
pub mod explore_service;
pub mod fact_service;
pub mod flag_service;
pub mod geocode_service;
pub mod map_service;
pub mod normalize;
