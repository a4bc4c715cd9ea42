pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::sync::Arc;

use anyhow::Result;
use wgpu::*;
use winit::window::Window;

use crate::camera::Camera;
use crate::mesh::{create_quad, Mesh};
use crate::simulation::RenderState;
use crate::sprites::Sprites;
use resources::GameBuffers;

// Visible extent in world units (4:3, bounce walls just inside the frame)
const VIEW_WIDTH: f32 = 20.0;
const VIEW_HEIGHT: f32 = 15.0;

#[allow(dead_code)]
pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub camera: Camera,

    pub sprite_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub sprites: Sprites,
    pub quad: Mesh,

    pub last_state: Option<RenderState>,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, vsync: bool) -> Result<Self> {
        let ctx = init::init_wgpu(window, vsync).await?;
        let camera = Camera::centered(VIEW_WIDTH, VIEW_HEIGHT);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);
        let quad = create_quad(&ctx.device, &ctx.queue);
        let sprites = Sprites::load(&ctx.device, &ctx.queue, &pipes.texture_layout)?;

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            camera,
            sprite_pipeline: pipes.sprite_pipeline,
            camera_bind_group,
            buffers,
            sprites,
            quad,
            last_state: None,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw(
        &mut self,
        state: &RenderState,
        config: &game_core::Config,
    ) -> Result<(), SurfaceError> {
        draw::draw_frame(self, state, config)
    }
}
