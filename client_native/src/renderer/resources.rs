use crate::camera::{Camera, CameraUniform};
use wgpu::util::DeviceExt;
use wgpu::*;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub left_cowboy: Buffer,
    pub right_cowboy: Buffer,
    pub tumbleweed: Buffer,
    pub left_banner: Buffer,
    pub right_banner: Buffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    // Camera buffer
    let camera_uniform = CameraUniform::from_camera(camera);

    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    GameBuffers {
        camera: camera_buffer,
        left_cowboy: instance_buffer(device, "Left Cowboy Instance Buffer"),
        right_cowboy: instance_buffer(device, "Right Cowboy Instance Buffer"),
        tumbleweed: instance_buffer(device, "Tumbleweed Instance Buffer"),
        left_banner: instance_buffer(device, "Left Banner Instance Buffer"),
        right_banner: instance_buffer(device, "Right Banner Instance Buffer"),
    }
}

fn instance_buffer(device: &Device, label: &str) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<InstanceData>() as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
