pub mod clock;
pub mod constants;
pub mod curve;
pub mod error;
pub mod governor;
pub mod quality;
pub mod scene;
pub mod spring;
pub mod telemetry;

pub use clock::*;
pub use constants::*;
pub use curve::{TangentSample, TangentSamples};
pub use error::*;
pub use governor::*;
pub use quality::*;
pub use scene::*;
pub use spring::*;
pub use telemetry::*;
