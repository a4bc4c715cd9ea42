use super::resources::InstanceData;
use super::Renderer;
use crate::simulation::RenderState;
use game_core::Config;
use wgpu::*;

// Background color (blood red, matching the desert backdrop of the sprites)
const CLEAR_COLOR: Color = Color {
    r: 0.404,
    g: 0.016,
    b: 0.016,
    a: 1.0,
};

pub fn draw_frame(
    renderer: &mut Renderer,
    state: &RenderState,
    config: &Config,
) -> Result<(), SurfaceError> {
    let output = renderer.surface.get_current_texture()?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    update_buffers(renderer, state, config);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(CLEAR_COLOR),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &mut Renderer, state: &RenderState, config: &Config) {
    // Nothing moved since last frame, keep the buffers as they are
    if renderer.last_state == Some(*state) {
        return;
    }

    let white = [1.0, 1.0, 1.0, 1.0];

    let left_cowboy = InstanceData {
        transform: [
            config.cowboy_x(0),
            state.left_y,
            config.cowboy_width,
            config.cowboy_height,
        ],
        tint: white,
    };
    let right_cowboy = InstanceData {
        transform: [
            config.cowboy_x(1),
            state.right_y,
            config.cowboy_width,
            config.cowboy_height,
        ],
        tint: white,
    };
    let tumbleweed = InstanceData {
        transform: [
            state.ball_x,
            state.ball_y,
            config.tumbleweed_size,
            config.tumbleweed_size,
        ],
        tint: white,
    };

    // Banners sit at the center of the field; at scale zero the quad is
    // degenerate and nothing shows
    let left_banner = InstanceData {
        transform: [
            0.0,
            0.0,
            config.banner_width * state.left_banner_scale,
            config.banner_height * state.left_banner_scale,
        ],
        tint: white,
    };
    let right_banner = InstanceData {
        transform: [
            0.0,
            0.0,
            config.banner_width * state.right_banner_scale,
            config.banner_height * state.right_banner_scale,
        ],
        tint: white,
    };

    let queue = &renderer.queue;
    queue.write_buffer(
        &renderer.buffers.left_cowboy,
        0,
        bytemuck::cast_slice(&[left_cowboy]),
    );
    queue.write_buffer(
        &renderer.buffers.right_cowboy,
        0,
        bytemuck::cast_slice(&[right_cowboy]),
    );
    queue.write_buffer(
        &renderer.buffers.tumbleweed,
        0,
        bytemuck::cast_slice(&[tumbleweed]),
    );
    queue.write_buffer(
        &renderer.buffers.left_banner,
        0,
        bytemuck::cast_slice(&[left_banner]),
    );
    queue.write_buffer(
        &renderer.buffers.right_banner,
        0,
        bytemuck::cast_slice(&[right_banner]),
    );

    renderer.last_state = Some(*state);
}

fn draw_objects<'a>(renderer: &'a Renderer, pass: &mut RenderPass<'a>) {
    pass.set_pipeline(&renderer.sprite_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(0, renderer.quad.vertex_buffer.slice(..));
    pass.set_index_buffer(renderer.quad.index_buffer.slice(..), IndexFormat::Uint16);

    // Cowboys and tumbleweed first, banners on top
    let sprites = [
        (&renderer.sprites.left_cowboy, &renderer.buffers.left_cowboy),
        (
            &renderer.sprites.right_cowboy,
            &renderer.buffers.right_cowboy,
        ),
        (&renderer.sprites.tumbleweed, &renderer.buffers.tumbleweed),
        (&renderer.sprites.left_banner, &renderer.buffers.left_banner),
        (
            &renderer.sprites.right_banner,
            &renderer.buffers.right_banner,
        ),
    ];

    for (sprite, buffer) in sprites {
        pass.set_bind_group(1, &sprite.bind_group, &[]);
        pass.set_vertex_buffer(1, buffer.slice(..));
        pass.draw_indexed(0..renderer.quad.index_count, 0, 0..1);
    }
}
