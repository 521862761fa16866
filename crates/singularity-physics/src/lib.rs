//! # Singularity Physics
//!
//! Closed-form physics and geometry for the explainer scenes: cosmic expansion,
//! spacetime warping around a black hole, and double-slit interference.
//!
//! Everything here is a pure function of its inputs. Randomness is left to the
//! caller so the formulas can be tested directly.

pub mod color;
pub mod constants;
pub mod expansion;
pub mod interference;
pub mod particle;
pub mod slits;
pub mod spacetime;

pub use color::*;
pub use constants::*;
pub use expansion::*;
pub use interference::*;
pub use particle::*;
pub use slits::*;
pub use spacetime::*;
