pub mod states;
pub mod params;
pub mod engine;
pub mod fields;
pub mod integrator;
pub mod trail;
pub mod particles;
pub mod preview;
pub mod scenario;
