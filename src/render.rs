use crate::constants::CLEAR_COLOR;
use crate::model::{
    hex_to_rgb, icosahedron, torus, torus_knot, Camera, ReactorScene, SceneNode, CORE_DETAIL,
    CORE_RADIUS, FOG_COLOR, FOG_DENSITY, INNER_KNOT_P, INNER_KNOT_Q, INNER_KNOT_RADIAL_SEGMENTS,
    INNER_KNOT_RADIUS, INNER_KNOT_TUBE, INNER_KNOT_TUBULAR_SEGMENTS, OUTER_TORUS_RADIAL_SEGMENTS,
    OUTER_TORUS_RADIUS, OUTER_TORUS_TUBE, OUTER_TORUS_TUBULAR_SEGMENTS,
};
use glam::Mat4;
use web_sys as web;

mod helpers;
mod mesh;

use mesh::{create_uniform_bgl, DrawItem, ObjectUniforms};

pub static REACTOR_WGSL: &str = include_str!("../shaders/reactor.wgsl");

// ===================== WebGPU state =====================

pub struct ReactorRenderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    line_pipeline: wgpu::RenderPipeline,
    solid_pipeline: wgpu::RenderPipeline,
    point_pipeline: wgpu::RenderPipeline,

    core: DrawItem,
    inner_ring: DrawItem,
    outer_ring: DrawItem,
    particles: DrawItem,

    width: u32,
    height: u32,
}

impl ReactorRenderer {
    pub async fn new(canvas: &web::HtmlCanvasElement, particle_count: usize) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Transparent canvas over the page background
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("reactor_shader"),
            source: wgpu::ShaderSource::Wgsl(REACTOR_WGSL.into()),
        });
        let bgl = create_uniform_bgl(&device);
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("reactor_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let line_pipeline = helpers::make_object_pipeline(
            &device,
            &layout,
            &shader,
            "wireframe_pipeline",
            wgpu::PrimitiveTopology::LineList,
            format,
            wgpu::BlendState::ALPHA_BLENDING,
        );
        let solid_pipeline = helpers::make_object_pipeline(
            &device,
            &layout,
            &shader,
            "solid_pipeline",
            wgpu::PrimitiveTopology::TriangleList,
            format,
            wgpu::BlendState::ALPHA_BLENDING,
        );
        let point_pipeline = helpers::make_object_pipeline(
            &device,
            &layout,
            &shader,
            "points_pipeline",
            wgpu::PrimitiveTopology::PointList,
            format,
            helpers::ADDITIVE_BLENDING,
        );

        let core_mesh = icosahedron(CORE_RADIUS, CORE_DETAIL);
        let knot_mesh = torus_knot(
            INNER_KNOT_RADIUS,
            INNER_KNOT_TUBE,
            INNER_KNOT_TUBULAR_SEGMENTS,
            INNER_KNOT_RADIAL_SEGMENTS,
            INNER_KNOT_P,
            INNER_KNOT_Q,
        );
        let ring_mesh = torus(
            OUTER_TORUS_RADIUS,
            OUTER_TORUS_TUBE,
            OUTER_TORUS_RADIAL_SEGMENTS,
            OUTER_TORUS_TUBULAR_SEGMENTS,
        );
        let core = DrawItem::new_static(&device, &bgl, "core", &core_mesh.line_list());
        let inner_ring = DrawItem::new_static(&device, &bgl, "inner_ring", &knot_mesh.line_list());
        let outer_ring =
            DrawItem::new_static(&device, &bgl, "outer_ring", &ring_mesh.triangle_list());
        let particles = DrawItem::new_dynamic(&device, &bgl, "particles", particle_count as u32);
        log::info!(
            "[render] {}x{} {:?}; core={} knot={} ring={} particles={}",
            width,
            height,
            format,
            core.vertex_count / 2,
            inner_ring.vertex_count / 2,
            outer_ring.vertex_count / 3,
            particle_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            line_pipeline,
            solid_pipeline,
            point_pipeline,
            core,
            inner_ring,
            outer_ring,
            particles,
            width,
            height,
        })
    }

    /// Reconfigure the surface when the canvas backing size changed.
    /// Returns true when a resize happened.
    pub fn resize_if_needed(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        if width == self.width && height == self.height {
            return false;
        }
        self.width = width;
        self.height = height;
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        true
    }

    /// Re-apply the current configuration after a lost/outdated surface.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn uniforms(view: Mat4, proj: Mat4, world: Mat4, color: [f32; 4]) -> ObjectUniforms {
        let [fr, fg, fb] = hex_to_rgb(FOG_COLOR);
        ObjectUniforms {
            model_view: (view * world).to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            color,
            fog: [fr, fg, fb, FOG_DENSITY],
        }
    }

    fn node_uniforms(
        scene: &ReactorScene,
        node: &SceneNode,
        view: Mat4,
        proj: Mat4,
    ) -> ObjectUniforms {
        Self::uniforms(view, proj, scene.world_matrix(node), node.material.rgba())
    }

    pub fn render(&mut self, scene: &ReactorScene, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        let view_m = camera.view_matrix();
        let proj_m = camera.projection_matrix();

        self.core
            .write_uniforms(&self.queue, &Self::node_uniforms(scene, &scene.core, view_m, proj_m));
        self.inner_ring.write_uniforms(
            &self.queue,
            &Self::node_uniforms(scene, &scene.inner_ring, view_m, proj_m),
        );
        self.outer_ring.write_uniforms(
            &self.queue,
            &Self::node_uniforms(scene, &scene.outer_ring, view_m, proj_m),
        );
        self.particles.write_uniforms(
            &self.queue,
            &Self::uniforms(
                view_m,
                proj_m,
                scene.group.matrix(),
                scene.particle_material.rgba(),
            ),
        );
        self.queue.write_buffer(
            &self.particles.vertex_buffer,
            0,
            bytemuck::cast_slice(scene.particles.as_floats()),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            // Scene insertion order: core, inner, outer, particles
            self.core.draw(&mut rpass, &self.line_pipeline);
            self.inner_ring.draw(&mut rpass, &self.line_pipeline);
            self.outer_ring.draw(&mut rpass, &self.solid_pipeline);
            self.particles.draw(&mut rpass, &self.point_pipeline);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
