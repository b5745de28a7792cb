//! Model layer: validated station and track records plus record loading

pub mod loader;
pub mod station;
pub mod track;

pub use station::Station;
pub use track::Track;
