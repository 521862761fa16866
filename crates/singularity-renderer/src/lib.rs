//! # Singularity Renderer
//!
//! Painters for the 2D scenes and the wgpu line renderer for the spacetime funnel.

pub mod camera;
pub mod canvas;
pub mod expansion;
pub mod experiment;
pub mod funnel;
pub mod mesh;
pub mod palette;
pub mod renderer;

pub use camera::*;
pub use canvas::*;
pub use expansion::*;
pub use experiment::*;
pub use funnel::*;
pub use mesh::*;
pub use renderer::*;
