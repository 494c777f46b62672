use bytemuck::{Pod, Zeroable};
use wgpu;
use std::num::NonZeroU64;
use torus_life::{GameBoard, Shade};

// Values the fragment shader keys its colors off
pub const CELL_DEAD: u32 = 0;
pub const CELL_YOUNG: u32 = 1;
pub const CELL_MATURE: u32 = 2;

// Uniforms specific to rendering
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct RenderParams {
    pub rows: u32,
    pub cols: u32,
    pub cell_size: f32,
    pub _padding: f32, // Ensure 16-byte alignment
}

impl From<&GameBoard> for RenderParams {
    fn from(board: &GameBoard) -> Self {
        Self {
            rows: board.rows() as u32,
            cols: board.cols() as u32,
            cell_size: board.cell_pixel_size(),
            _padding: 0.0,
        }
    }
}

/// Flatten the board into one shade value per cell, row-major.
pub fn cell_shades(board: &GameBoard) -> Vec<u32> {
    board
        .iter()
        .map(|(_, _, cell)| match cell.shade() {
            Shade::Dead => CELL_DEAD,
            Shade::Young => CELL_YOUNG,
            Shade::Mature => CELL_MATURE,
        })
        .collect()
}

pub fn create_cell_buffer(device: &wgpu::Device, board: &GameBoard) -> wgpu::Buffer {
    let size = (board.rows() * board.cols() * std::mem::size_of::<u32>()) as u64;
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Cell Shade Buffer"),
        size,
        usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub fn create_render_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Render Bind Group Layout"),
        entries: &[
            // RenderParams Uniform (Binding 0)
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: NonZeroU64::new(std::mem::size_of::<RenderParams>() as u64),
                },
                count: None,
            },
            // Cell Shade Buffer (Binding 1)
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Storage { read_only: true },
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
    })
}

pub fn create_render_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    render_param_buffer: &wgpu::Buffer,
    cell_buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Render Bind Group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry { binding: 0, resource: render_param_buffer.as_entire_binding() },
            wgpu::BindGroupEntry { binding: 1, resource: cell_buffer.as_entire_binding() },
        ],
    })
}
