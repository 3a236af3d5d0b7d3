//! GPU implementation of [`RenderBackend`] built on [`wgpu`].
//!
//! Compiles the WGSL kernel once at startup and dispatches it as a compute
//! pass, one invocation per pixel, then blocks on a staging-buffer readback
//! so `dispatch` keeps the full-barrier contract. Initialization fails if no
//! compute-capable adapter is found.

use crate::backend::{FrameInput, RenderBackend};
use crate::records::GlobalsRecord;
use crate::RenderError;
use anyhow::{Context, Result};
use wgpu::util::DeviceExt;

const WORKGROUP_SIZE: u32 = 64;

/// GPU backend: storage buffers for objects, lights and output, a uniform
/// for the globals, and a single compute pipeline.
pub struct WgpuBackend {
    device: wgpu::Device,
    queue: wgpu::Queue,
    pipeline: wgpu::ComputePipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    globals_buffer: wgpu::Buffer,
    objects_buffer: wgpu::Buffer,
    lights_buffer: wgpu::Buffer,
    output_buffer: wgpu::Buffer,
    staging_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    pixels: Vec<u32>,
}

impl WgpuBackend {
    /// Creates a backend on the system's default high-performance adapter.
    pub fn new() -> Result<Self> {
        let instance = wgpu::Instance::default();
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            compatible_surface: None,
        }))
        .context("failed to find a compute-capable adapter")?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("raymarch device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults(),
            },
            None,
        ))
        .context("failed to request device")?;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("raymarch"),
            source: wgpu::ShaderSource::Wgsl(include_str!("raymarch.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("raymarch bind layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 3,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: false },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("raymarch pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
            label: Some("raymarch pipeline"),
            layout: Some(&pipeline_layout),
            module: &shader,
            entry_point: "main",
        });

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<GlobalsRecord>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let objects_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("objects"),
            size: 1024,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let lights_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("lights"),
            size: 1024,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let output_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("output"),
            size: 4,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC,
            mapped_at_creation: false,
        });
        let staging_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("staging"),
            size: 4,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = Self::create_bind_group(
            &device,
            &bind_group_layout,
            &globals_buffer,
            &objects_buffer,
            &lights_buffer,
            &output_buffer,
        );

        Ok(Self {
            device,
            queue,
            pipeline,
            bind_group_layout,
            globals_buffer,
            objects_buffer,
            lights_buffer,
            output_buffer,
            staging_buffer,
            bind_group,
            pixels: Vec::new(),
        })
    }

    fn create_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        globals: &wgpu::Buffer,
        objects: &wgpu::Buffer,
        lights: &wgpu::Buffer,
        output: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("raymarch bind group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: globals.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: objects.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: lights.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: output.as_entire_binding(),
                },
            ],
        })
    }
}

/// Grow-or-write upload for one record slice. Returns whether the buffer was
/// recreated, in which case the bind group is stale.
fn upload_records(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    buffer: &mut wgpu::Buffer,
    label: &str,
    bytes: &[u8],
) -> bool {
    if buffer.size() < bytes.len() as u64 {
        *buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytes,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
        });
        true
    } else {
        queue.write_buffer(buffer, 0, bytes);
        false
    }
}

impl RenderBackend for WgpuBackend {
    fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        tracing::debug!(width, height, "reallocating gpu output buffers");
        let size = (u64::from(width) * u64::from(height) * 4).max(4);

        self.device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);
        self.output_buffer.destroy();
        self.staging_buffer.destroy();
        self.output_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("output"),
            size,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC,
            mapped_at_creation: false,
        });
        self.staging_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("staging"),
            size,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        if let Some(error) = pollster::block_on(self.device.pop_error_scope()) {
            return Err(RenderError::Allocation(error.to_string()));
        }

        self.bind_group = Self::create_bind_group(
            &self.device,
            &self.bind_group_layout,
            &self.globals_buffer,
            &self.objects_buffer,
            &self.lights_buffer,
            &self.output_buffer,
        );
        self.pixels = vec![0; width as usize * height as usize];
        Ok(())
    }

    fn dispatch(&mut self, frame: &FrameInput<'_>) -> Result<(), RenderError> {
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&frame.globals));

        let objects_grew = upload_records(
            &self.device,
            &self.queue,
            &mut self.objects_buffer,
            "objects",
            bytemuck::cast_slice(frame.objects),
        );
        let lights_grew = upload_records(
            &self.device,
            &self.queue,
            &mut self.lights_buffer,
            "lights",
            bytemuck::cast_slice(frame.lights),
        );

        if objects_grew || lights_grew {
            self.bind_group = Self::create_bind_group(
                &self.device,
                &self.bind_group_layout,
                &self.globals_buffer,
                &self.objects_buffer,
                &self.lights_buffer,
                &self.output_buffer,
            );
        }

        let pixel_count = frame.globals.width * frame.globals.height;
        let byte_count = u64::from(pixel_count) * 4;

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("raymarch encoder"),
            });
        {
            let mut cpass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: Some("raymarch pass"),
                timestamp_writes: None,
            });
            cpass.set_pipeline(&self.pipeline);
            cpass.set_bind_group(0, &self.bind_group, &[]);
            cpass.dispatch_workgroups(pixel_count.div_ceil(WORKGROUP_SIZE), 1, 1);
        }
        encoder.copy_buffer_to_buffer(&self.output_buffer, 0, &self.staging_buffer, 0, byte_count);
        self.queue.submit(Some(encoder.finish()));

        let slice = self.staging_buffer.slice(..byte_count);
        let (tx, rx) = std::sync::mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        self.device.poll(wgpu::Maintain::Wait);
        rx.recv()
            .map_err(|_| RenderError::Readback("map callback dropped".into()))?
            .map_err(|error| RenderError::Readback(error.to_string()))?;
        {
            let data = slice.get_mapped_range();
            self.pixels.copy_from_slice(bytemuck::cast_slice(&data[..]));
        }
        self.staging_buffer.unmap();
        Ok(())
    }

    fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}
