use crate::mesh::{
    cube_edges, cube_triangles, link_instance, link_segment, shape_instance, square_edges,
    square_triangles, InstanceData, MeshRegistry, Uniforms, Vertex,
};
use glam::Vec3;
use orbit_core::{
    Camera, MeshDesc, OrbitError, OrbitResult, RenderBackend, Rgb, Rgba, ShapeId, ShapeKind,
    ShapePose,
};
use std::ops::Range;
use wgpu::util::DeviceExt;

const SHAPE_WGSL: &str = include_str!("../shaders/shape.wgsl");
const LIGHT: [f32; 4] = [0.35, 0.6, 1.0, 0.55];
const INITIAL_INSTANCES: usize = 256;

struct MeshBuffer {
    buffer: wgpu::Buffer,
    vertices: u32,
}

impl MeshBuffer {
    fn new(device: &wgpu::Device, label: &str, vertices: &[Vertex]) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            buffer,
            vertices: vertices.len() as u32,
        }
    }
}

/// Instances collected between `begin_frame` and `end_frame`, one list per draw call.
#[derive(Default)]
struct FrameBatches {
    square_fills: Vec<InstanceData>,
    cube_fills: Vec<InstanceData>,
    square_edges: Vec<InstanceData>,
    cube_edges: Vec<InstanceData>,
    links: Vec<InstanceData>,
}

impl FrameBatches {
    fn clear(&mut self) {
        self.square_fills.clear();
        self.cube_fills.clear();
        self.square_edges.clear();
        self.cube_edges.clear();
        self.links.clear();
    }

    fn len(&self) -> usize {
        self.square_fills.len()
            + self.cube_fills.len()
            + self.square_edges.len()
            + self.cube_edges.len()
            + self.links.len()
    }
}

/// Renders into a winit window through wgpu: filled shapes first, then
/// outlines and links, all alpha blended without a depth buffer.
pub struct GpuBackend<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    fill_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instance_vb: wgpu::Buffer,
    instance_capacity: usize,
    cube_fill: MeshBuffer,
    cube_line: MeshBuffer,
    square_fill: MeshBuffer,
    square_line: MeshBuffer,
    link_line: MeshBuffer,
    meshes: MeshRegistry,
    batches: FrameBatches,
    clear: wgpu::Color,
}

impl<'w> GpuBackend<'w> {
    pub async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| OrbitError::BackendUnavailable("no GPU adapter".into()))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        // Palette colours are already sRGB encoded
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| OrbitError::BackendUnavailable("surface has no formats".into()))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shape shader"),
            source: wgpu::ShaderSource::Wgsl(SHAPE_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
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
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let fill_pipeline = create_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            wgpu::PrimitiveTopology::TriangleList,
        );
        let line_pipeline = create_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            wgpu::PrimitiveTopology::LineList,
        );
        let instance_vb = create_instance_buffer(&device, INITIAL_INSTANCES);

        Ok(Self {
            cube_fill: MeshBuffer::new(&device, "cube_fill", &cube_triangles()),
            cube_line: MeshBuffer::new(&device, "cube_line", &cube_edges()),
            square_fill: MeshBuffer::new(&device, "square_fill", &square_triangles()),
            square_line: MeshBuffer::new(&device, "square_line", &square_edges()),
            link_line: MeshBuffer::new(&device, "link_line", &link_segment()),
            window,
            surface,
            device,
            queue,
            config,
            fill_pipeline,
            line_pipeline,
            uniform_buffer,
            bind_group,
            instance_vb,
            instance_capacity: INITIAL_INSTANCES,
            meshes: MeshRegistry::default(),
            batches: FrameBatches::default(),
            clear: wgpu::Color::BLACK,
        })
    }

    pub fn window(&self) -> &'w winit::window::Window {
        self.window
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn upload_instances(&mut self) -> [Range<u32>; 5] {
        let needed = self.batches.len();
        if needed > self.instance_capacity {
            self.instance_capacity = needed.next_power_of_two();
            self.instance_vb = create_instance_buffer(&self.device, self.instance_capacity);
            log::debug!("[gpu] instance buffer grown to {}", self.instance_capacity);
        }
        let b = &self.batches;
        let lists = [
            &b.square_fills,
            &b.cube_fills,
            &b.square_edges,
            &b.cube_edges,
            &b.links,
        ];
        let mut ranges: [Range<u32>; 5] = Default::default();
        let mut offset = 0usize;
        for (range, list) in ranges.iter_mut().zip(lists) {
            if !list.is_empty() {
                let bytes = (offset * std::mem::size_of::<InstanceData>()) as u64;
                self.queue
                    .write_buffer(&self.instance_vb, bytes, bytemuck::cast_slice(list));
            }
            *range = offset as u32..(offset + list.len()) as u32;
            offset += list.len();
        }
        ranges
    }
}

impl RenderBackend for GpuBackend<'_> {
    fn register(&mut self, id: ShapeId, mesh: &MeshDesc) -> OrbitResult<()> {
        self.meshes.insert(id, *mesh);
        Ok(())
    }

    fn begin_frame(&mut self, clear: Rgb, camera: &Camera) -> OrbitResult<()> {
        self.batches.clear();
        self.clear = wgpu::Color {
            r: clear.r as f64,
            g: clear.g as f64,
            b: clear.b as f64,
            a: 1.0,
        };
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: camera.view_proj().to_cols_array_2d(),
                light: LIGHT,
            }),
        );
        Ok(())
    }

    fn draw(&mut self, id: ShapeId, pose: &ShapePose) {
        if self.meshes.lookup(id).is_none() {
            return;
        }
        let fill = shape_instance(pose.position, pose.spin, pose.size, pose.fill);
        let stroke = shape_instance(pose.position, pose.spin, pose.size, pose.stroke);
        match pose.kind {
            ShapeKind::Square => {
                self.batches.square_fills.push(fill);
                self.batches.square_edges.push(stroke);
            }
            ShapeKind::Cube => {
                self.batches.cube_fills.push(fill);
                self.batches.cube_edges.push(stroke);
            }
        }
    }

    fn draw_link(&mut self, from: Vec3, to: Vec3, color: Rgba) {
        self.batches.links.push(link_instance(from, to, color));
    }

    fn end_frame(&mut self) -> OrbitResult<()> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("[gpu] surface timeout, frame skipped");
                return Ok(());
            }
            Err(e) => return Err(OrbitError::Render(e.to_string())),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let [square_fills, cube_fills, square_edges, cube_edges, links] = self.upload_instances();

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));

            let fills = [(&self.square_fill, square_fills), (&self.cube_fill, cube_fills)];
            rpass.set_pipeline(&self.fill_pipeline);
            for (mesh, instances) in fills {
                if !instances.is_empty() {
                    rpass.set_vertex_buffer(0, mesh.buffer.slice(..));
                    rpass.draw(0..mesh.vertices, instances);
                }
            }

            let lines = [
                (&self.square_line, square_edges),
                (&self.cube_line, cube_edges),
                (&self.link_line, links),
            ];
            rpass.set_pipeline(&self.line_pipeline);
            for (mesh, instances) in lines {
                if !instances.is_empty() {
                    rpass.set_vertex_buffer(0, mesh.buffer.slice(..));
                    rpass.draw(0..mesh.vertices, instances);
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        self.reconfigure();
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instance_vb"),
        size: (std::mem::size_of::<InstanceData>() * capacity) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    topology: wgpu::PrimitiveTopology,
) -> wgpu::RenderPipeline {
    let vertex_buffers = [
        // slot 0: mesh vertices
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
        },
        // slot 1: per-instance model matrix and colour
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceData>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &wgpu::vertex_attr_array![
                2 => Float32x4,
                3 => Float32x4,
                4 => Float32x4,
                5 => Float32x4,
                6 => Float32x4
            ],
        },
    ];
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("shape pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &vertex_buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
