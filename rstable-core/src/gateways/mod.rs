pub mod geocode;
pub mod sheet;
