//! Windowed host: winit event loop wiring and the wgpu canvas.
//!
//! The window is the production home of a backdrop. Winit delivers resize,
//! cursor and redraw events on one thread; each becomes the matching
//! [`Driver`] call, and every `RedrawRequested` ends by requesting the next
//! redraw, which keeps the tick cadence locked to the display through the
//! vsync-paced present.
//!
//! The GPU canvas draws the whole frame in two passes over one surface:
//! instanced quads cut to circles for the particle disks, then pre-expanded
//! line quads for the links, alpha-blended in emission order.

use std::sync::Arc;

use glam::Vec2;
use wgpu::util::DeviceExt;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

use crate::driver::Driver;
use crate::error::GpuError;
use crate::render::Canvas;
use crate::shader::{DiskInstance, Globals, LineVertex, SHADER_SOURCE};
use crate::time::Time;
use crate::visuals::Rgba;

/// A [`Canvas`] that batches draw commands for the GPU.
///
/// `fill_circle` and `stroke_line` only append to vertex vectors; the
/// actual painting happens when [`GpuState::render`] uploads and draws the
/// batch. Lines are expanded to screen-space quads here, on the CPU, which
/// keeps the shader trivial at the scale of tens of links per frame.
#[derive(Default)]
pub(crate) struct WgpuCanvas {
    disks: Vec<DiskInstance>,
    lines: Vec<LineVertex>,
}

impl Canvas for WgpuCanvas {
    fn clear(&mut self) {
        self.disks.clear();
        self.lines.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.disks.push(DiskInstance {
            center: center.to_array(),
            radius,
            _pad: 0.0,
            color: color.to_array(),
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        let along = to - from;
        if along == Vec2::ZERO {
            return;
        }
        let perp = Vec2::new(-along.y, along.x).normalize() * (width * 0.5);
        let color = color.to_array();
        let vertex = |position: Vec2| LineVertex {
            position: position.to_array(),
            color,
        };
        self.lines.extend_from_slice(&[
            vertex(from - perp),
            vertex(from + perp),
            vertex(to - perp),
            vertex(from + perp),
            vertex(to - perp),
            vertex(to + perp),
        ]);
    }
}

pub(crate) struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    disk_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    disk_buffer: wgpu::Buffer,
    disk_capacity: usize,
    line_buffer: wgpu::Buffer,
    line_capacity: usize,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(window: Arc<Window>, clear_color: Rgba) -> Result<Self, GpuError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Backdrop Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let globals = Globals {
            resolution: [config.width as f32, config.height as f32],
            _pad: [0.0; 2],
        };
        let globals_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Globals Buffer"),
            contents: bytemuck::cast_slice(&[globals]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let globals_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Globals Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Globals Bind Group"),
            layout: &globals_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Backdrop Shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Backdrop Pipeline Layout"),
            bind_group_layouts: &[&globals_bind_group_layout],
            push_constant_ranges: &[],
        });

        let disk_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Disk Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_disk"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<DiskInstance>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &[
                        wgpu::VertexAttribute {
                            offset: 0,
                            shader_location: 0,
                            format: wgpu::VertexFormat::Float32x2,
                        },
                        wgpu::VertexAttribute {
                            offset: 8,
                            shader_location: 1,
                            format: wgpu::VertexFormat::Float32,
                        },
                        wgpu::VertexAttribute {
                            offset: 16,
                            shader_location: 2,
                            format: wgpu::VertexFormat::Float32x4,
                        },
                    ],
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_disk"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let line_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Line Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_line"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[
                        wgpu::VertexAttribute {
                            offset: 0,
                            shader_location: 0,
                            format: wgpu::VertexFormat::Float32x2,
                        },
                        wgpu::VertexAttribute {
                            offset: 8,
                            shader_location: 1,
                            format: wgpu::VertexFormat::Float32x4,
                        },
                    ],
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_line"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let disk_capacity = 128;
        let disk_buffer = vertex_buffer(
            &device,
            "Disk Instance Buffer",
            (disk_capacity * std::mem::size_of::<DiskInstance>()) as u64,
        );
        let line_capacity = 1024;
        let line_buffer = vertex_buffer(
            &device,
            "Line Vertex Buffer",
            (line_capacity * std::mem::size_of::<LineVertex>()) as u64,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            disk_pipeline,
            line_pipeline,
            globals_buffer,
            globals_bind_group,
            disk_buffer,
            disk_capacity,
            line_buffer,
            line_capacity,
            clear_color: wgpu::Color {
                r: clear_color.r as f64,
                g: clear_color.g as f64,
                b: clear_color.b as f64,
                a: clear_color.a as f64,
            },
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);

            let globals = Globals {
                resolution: [self.config.width as f32, self.config.height as f32],
                _pad: [0.0; 2],
            };
            self.queue
                .write_buffer(&self.globals_buffer, 0, bytemuck::cast_slice(&[globals]));
        }
    }

    pub fn render(&mut self, scene: &WgpuCanvas) -> Result<(), wgpu::SurfaceError> {
        self.upload(scene);

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Backdrop Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Backdrop Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !scene.disks.is_empty() {
                render_pass.set_pipeline(&self.disk_pipeline);
                render_pass.set_bind_group(0, &self.globals_bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.disk_buffer.slice(..));
                render_pass.draw(0..6, 0..scene.disks.len() as u32);
            }

            if !scene.lines.is_empty() {
                render_pass.set_pipeline(&self.line_pipeline);
                render_pass.set_bind_group(0, &self.globals_bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.line_buffer.slice(..));
                render_pass.draw(0..scene.lines.len() as u32, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn upload(&mut self, scene: &WgpuCanvas) {
        if !scene.disks.is_empty() {
            if scene.disks.len() > self.disk_capacity {
                self.disk_capacity = scene.disks.len().next_power_of_two();
                self.disk_buffer = vertex_buffer(
                    &self.device,
                    "Disk Instance Buffer",
                    (self.disk_capacity * std::mem::size_of::<DiskInstance>()) as u64,
                );
            }
            self.queue
                .write_buffer(&self.disk_buffer, 0, bytemuck::cast_slice(&scene.disks));
        }

        if !scene.lines.is_empty() {
            if scene.lines.len() > self.line_capacity {
                self.line_capacity = scene.lines.len().next_power_of_two();
                self.line_buffer = vertex_buffer(
                    &self.device,
                    "Line Vertex Buffer",
                    (self.line_capacity * std::mem::size_of::<LineVertex>()) as u64,
                );
            }
            self.queue
                .write_buffer(&self.line_buffer, 0, bytemuck::cast_slice(&scene.lines));
        }
    }
}

fn vertex_buffer(device: &wgpu::Device, label: &str, size: u64) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub(crate) struct App {
    driver: Driver,
    title: String,
    window_size: (u32, u32),
    clear_color: Rgba,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    canvas: WgpuCanvas,
    time: Time,
}

impl App {
    pub fn new(driver: Driver, title: String, window_size: (u32, u32), clear_color: Rgba) -> Self {
        Self {
            driver,
            title,
            window_size,
            clear_color,
            window: None,
            gpu: None,
            canvas: WgpuCanvas::default(),
            time: Time::new(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.window_size.0, self.window_size.1));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                eprintln!("Backdrop window error: {e}");
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        match pollster::block_on(GpuState::new(window.clone(), self.clear_color)) {
            Ok(gpu) => {
                let size = window.inner_size();
                self.driver.start(size.width as f32, size.height as f32);
                self.gpu = Some(gpu);
                window.request_redraw();
            }
            Err(e) => {
                // A backdrop is decorative: without a GPU it goes quiet
                // instead of taking the host down.
                eprintln!("Backdrop disabled: {e}");
                self.driver.stop();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.driver.stop();
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
                self.driver
                    .handle_resize(physical_size.width as f32, physical_size.height as f32);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.driver
                    .handle_pointer(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::RedrawRequested => {
                if !self.driver.is_running() {
                    return;
                }
                let Some(gpu) = &mut self.gpu else {
                    return;
                };

                if self.time.update() {
                    if let Some(window) = &self.window {
                        window.set_title(&format!(
                            "{} - {:.0} fps",
                            self.title,
                            self.time.fps()
                        ));
                    }
                }

                self.driver.tick(&mut self.canvas);
                match gpu.render(&self.canvas) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                        width: gpu.config.width,
                        height: gpu.config.height,
                    }),
                    Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                    Err(e) => eprintln!("Render error: {:?}", e),
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
