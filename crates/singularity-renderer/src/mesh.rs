//! Ownership of the uploaded funnel mesh
//!
//! At most one mesh is resident at a time. Replacing the mesh releases the old
//! resources before the new ones are allocated, and dropping the slot releases
//! whatever it still holds.

use wgpu::util::DeviceExt;

use crate::funnel::{FunnelMesh, LineVertex};

/// Allocates and frees vertex storage for line meshes
pub trait MeshAllocator {
    type Handle;

    fn allocate(&mut self, vertices: &[LineVertex]) -> Self::Handle;

    fn release(&mut self, handle: Self::Handle);
}

pub struct MeshSlot<A: MeshAllocator> {
    allocator: A,
    current: Option<A::Handle>,
    vertex_count: u32,
}

impl<A: MeshAllocator> MeshSlot<A> {
    pub fn new(allocator: A) -> Self {
        Self {
            allocator,
            current: None,
            vertex_count: 0,
        }
    }

    pub fn replace(&mut self, mesh: &FunnelMesh) {
        self.clear();
        self.current = Some(self.allocator.allocate(mesh.vertices()));
        self.vertex_count = mesh.vertex_count();
    }

    pub fn clear(&mut self) {
        if let Some(handle) = self.current.take() {
            self.allocator.release(handle);
        }
        self.vertex_count = 0;
    }

    pub fn current(&self) -> Option<&A::Handle> {
        self.current.as_ref()
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

impl<A: MeshAllocator> Drop for MeshSlot<A> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Uploads meshes into wgpu vertex buffers
pub struct GpuMeshAllocator {
    device: wgpu::Device,
}

impl GpuMeshAllocator {
    pub fn new(device: wgpu::Device) -> Self {
        Self { device }
    }
}

impl MeshAllocator for GpuMeshAllocator {
    type Handle = wgpu::Buffer;

    fn allocate(&mut self, vertices: &[LineVertex]) -> wgpu::Buffer {
        self.device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Funnel Vertex Buffer"),
                contents: bytemuck::cast_slice(vertices),
                usage: wgpu::BufferUsages::VERTEX,
            })
    }

    fn release(&mut self, handle: wgpu::Buffer) {
        handle.destroy();
    }
}
