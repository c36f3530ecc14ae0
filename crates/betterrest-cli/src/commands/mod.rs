pub mod config;
pub mod estimate;
pub mod form;
pub mod model;
pub mod sweep;
