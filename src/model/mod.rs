pub mod entry;
pub mod geometry;
pub mod trend;
