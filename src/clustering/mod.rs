pub mod states;
pub mod params;
pub mod metric;
pub mod random;
pub mod connectivity;
pub mod engine;
pub mod error;
pub mod scenario;
