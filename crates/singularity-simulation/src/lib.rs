//! # Singularity Simulation
//!
//! Scene state for the explainers: the parameter store behind the sliders,
//! the double slit particle session, and the animation driver that advances
//! them one frame at a time.

pub mod big_bang;
pub mod black_hole;
pub mod double_slit;
pub mod driver;
pub mod histogram;
pub mod params;
pub mod sampler;

pub use big_bang::*;
pub use black_hole::*;
pub use double_slit::*;
pub use driver::*;
pub use histogram::*;
pub use params::*;
pub use sampler::*;
