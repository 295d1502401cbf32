pub mod vector;
pub mod world;
pub mod params;
pub mod particle;
pub mod spring;
pub mod rope;
pub mod engine;
pub mod scenario;
