//! Line geometry of the warped spacetime funnel
//!
//! World space is y-up: the flat grid lies in the xz-plane and the funnel
//! depth is written into y.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use singularity_physics::{
    funnel_depth, horizon_marker_radius, Rgba, GRID_DIVISIONS, GRID_SIZE, THROAT_DEPTH,
};

use crate::palette;

const RING_COUNT: u32 = 10;
const RING_SEGMENTS: u32 = 64;
const SPOKE_COUNT: u32 = 24;
const SPOKE_STEP: f32 = 0.5;
const SPHERE_RINGS: u32 = 8;
const SPHERE_MERIDIANS: u32 = 12;
const SPHERE_SEGMENTS: u32 = 32;
const GLOW_SCALE: f32 = 1.5;

/// Vertex of the funnel line list (matches WGSL)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Line list for one black hole mass. Rebuilt whenever the mass changes.
#[derive(Debug, Clone, PartialEq)]
pub struct FunnelMesh {
    mass: f32,
    vertices: Vec<LineVertex>,
}

impl FunnelMesh {
    pub fn build(mass: f32) -> Self {
        let mut mesh = Self {
            mass,
            vertices: Vec::new(),
        };

        let half = GRID_SIZE / 2.0;
        let cell = GRID_SIZE / GRID_DIVISIONS as f32;

        // Wireframe grid: lines of constant z, then of constant x
        let grid = palette::FUNNEL_GRID.to_linear();
        for i in 0..=GRID_DIVISIONS {
            let fixed = -half + i as f32 * cell;
            let along = (0..=GRID_DIVISIONS).map(|j| -half + j as f32 * cell);
            mesh.push_strip(along.clone().map(|x| mesh.surface(x, fixed)).collect(), grid);
            mesh.push_strip(along.map(|z| mesh.surface(fixed, z)).collect(), grid);
        }

        let rings = palette::FUNNEL_RINGS.to_linear();
        let ring_step = half / RING_COUNT as f32;
        for ring in 1..=RING_COUNT {
            let radius = ring as f32 * ring_step;
            let points = (0..=RING_SEGMENTS)
                .map(|s| {
                    let angle = s as f32 / RING_SEGMENTS as f32 * std::f32::consts::TAU;
                    mesh.surface(radius * angle.cos(), radius * angle.sin())
                })
                .collect();
            mesh.push_strip(points, rings);
        }

        let samples = (half / SPOKE_STEP).round() as u32;
        for spoke in 0..SPOKE_COUNT {
            let angle = spoke as f32 / SPOKE_COUNT as f32 * std::f32::consts::TAU;
            let points = (0..=samples)
                .map(|s| {
                    let r = s as f32 * SPOKE_STEP;
                    mesh.surface(r * angle.cos(), r * angle.sin())
                })
                .collect();
            mesh.push_strip(points, rings);
        }

        let center = mesh.horizon_center();
        let radius = horizon_marker_radius(mass);
        mesh.push_sphere(center, radius, palette::HORIZON);
        mesh.push_sphere(center, radius * GLOW_SCALE, palette::HORIZON_GLOW);

        log::debug!(
            "Built funnel mesh for mass {:.1}: {} vertices",
            mass,
            mesh.vertices.len()
        );
        mesh
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Bottom of the throat, where the horizon marker sits
    pub fn horizon_center(&self) -> Vec3 {
        Vec3::new(0.0, -self.mass * THROAT_DEPTH, 0.0)
    }

    fn surface(&self, x: f32, z: f32) -> Vec3 {
        let distance = (x * x + z * z).sqrt();
        Vec3::new(x, funnel_depth(self.mass, distance, GRID_SIZE / 2.0), z)
    }

    /// Append a polyline as independent segments
    fn push_strip(&mut self, points: Vec<Vec3>, color: [f32; 4]) {
        for pair in points.windows(2) {
            self.vertices.push(LineVertex {
                position: pair[0].to_array(),
                color,
            });
            self.vertices.push(LineVertex {
                position: pair[1].to_array(),
                color,
            });
        }
    }

    fn push_sphere(&mut self, center: Vec3, radius: f32, color: Rgba) {
        let color = color.to_linear();
        let circle = |s: u32| {
            let angle = s as f32 / SPHERE_SEGMENTS as f32 * std::f32::consts::TAU;
            (angle.cos(), angle.sin())
        };

        for ring in 1..SPHERE_RINGS {
            let polar = ring as f32 / SPHERE_RINGS as f32 * std::f32::consts::PI;
            let (y, r) = (radius * polar.cos(), radius * polar.sin());
            let points = (0..=SPHERE_SEGMENTS)
                .map(|s| {
                    let (c, s) = circle(s);
                    center + Vec3::new(r * c, y, r * s)
                })
                .collect();
            self.push_strip(points, color);
        }

        for meridian in 0..SPHERE_MERIDIANS {
            let azimuth = meridian as f32 / SPHERE_MERIDIANS as f32 * std::f32::consts::TAU;
            let (ax, az) = (azimuth.cos(), azimuth.sin());
            let points = (0..=SPHERE_SEGMENTS / 2)
                .map(|s| {
                    let polar = s as f32 / (SPHERE_SEGMENTS / 2) as f32 * std::f32::consts::PI;
                    let r = radius * polar.sin();
                    center + Vec3::new(r * ax, radius * polar.cos(), r * az)
                })
                .collect();
            self.push_strip(points, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid_vertex_count() -> usize {
        let lines = 2 * (GRID_DIVISIONS as usize + 1);
        lines * GRID_DIVISIONS as usize * 2
    }

    #[test]
    fn test_vertex_budget() {
        let mesh = FunnelMesh::build(5.0);
        let grid = grid_vertex_count();
        let rings = (RING_COUNT * RING_SEGMENTS * 2) as usize;
        let spokes = (SPOKE_COUNT * 20 * 2) as usize;
        let sphere = ((SPHERE_RINGS - 1) * SPHERE_SEGMENTS * 2
            + SPHERE_MERIDIANS * (SPHERE_SEGMENTS / 2) * 2) as usize;
        assert_eq!(mesh.vertices().len(), grid + rings + spokes + 2 * sphere);
        assert_eq!(mesh.vertices().len() % 2, 0);
    }

    #[test]
    fn test_grid_follows_depth_field() {
        let mass = 7.0;
        let mesh = FunnelMesh::build(mass);
        for vertex in &mesh.vertices()[..grid_vertex_count()] {
            let [x, y, z] = vertex.position;
            let expected = funnel_depth(mass, (x * x + z * z).sqrt(), GRID_SIZE / 2.0);
            assert_relative_eq!(y, expected);
        }
    }

    #[test]
    fn test_center_sample_is_throat() {
        let mesh = FunnelMesh::build(3.0);
        let center = mesh
            .vertices()
            .iter()
            .find(|v| v.position[0] == 0.0 && v.position[2] == 0.0)
            .expect("grid has a center vertex");
        assert_relative_eq!(center.position[1], -24.0);
        assert_eq!(mesh.horizon_center(), Vec3::new(0.0, -24.0, 0.0));
    }

    #[test]
    fn test_heavier_mass_is_deeper() {
        let light = FunnelMesh::build(2.0);
        let heavy = FunnelMesh::build(12.0);
        let lowest = |mesh: &FunnelMesh| {
            mesh.vertices()
                .iter()
                .map(|v| v.position[1])
                .fold(f32::INFINITY, f32::min)
        };
        assert!(lowest(&heavy) < lowest(&light));
        assert_eq!(light.vertex_count(), heavy.vertex_count());
    }
}
