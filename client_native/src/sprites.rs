//! Sprite texture loading
//!
//! Image files are decoded with the `image` crate and uploaded as RGBA8.
//! A missing or undecodable file is the one hard failure mode of the game.

use anyhow::{Context, Result};
use wgpu::util::DeviceExt;
use wgpu::*;

// Texture filepaths (relative to the working directory)
pub const LEFT_COWBOY_SPRITE: &str = "assets/cowboy_left.png";
pub const RIGHT_COWBOY_SPRITE: &str = "assets/cowboy_right.png";
pub const TUMBLEWEED_SPRITE: &str = "assets/tumbleweed.png";
pub const LEFT_BANNER_SPRITE: &str = "assets/left_wins.png";
pub const RIGHT_BANNER_SPRITE: &str = "assets/right_wins.png";

/// One loaded sprite texture, ready to bind
pub struct Sprite {
    pub bind_group: BindGroup,
}

/// The full sprite set the game draws
pub struct Sprites {
    pub left_cowboy: Sprite,
    pub right_cowboy: Sprite,
    pub tumbleweed: Sprite,
    pub left_banner: Sprite,
    pub right_banner: Sprite,
}

impl Sprites {
    pub fn load(device: &Device, queue: &Queue, layout: &BindGroupLayout) -> Result<Self> {
        Ok(Self {
            left_cowboy: load_sprite(device, queue, layout, LEFT_COWBOY_SPRITE)?,
            right_cowboy: load_sprite(device, queue, layout, RIGHT_COWBOY_SPRITE)?,
            tumbleweed: load_sprite(device, queue, layout, TUMBLEWEED_SPRITE)?,
            left_banner: load_sprite(device, queue, layout, LEFT_BANNER_SPRITE)?,
            right_banner: load_sprite(device, queue, layout, RIGHT_BANNER_SPRITE)?,
        })
    }
}

fn load_sprite(
    device: &Device,
    queue: &Queue,
    layout: &BindGroupLayout,
    path: &str,
) -> Result<Sprite> {
    let img = image::open(path)
        .with_context(|| format!("unable to load sprite {path}, make sure the path is correct"))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let texture = device.create_texture_with_data(
        queue,
        &TextureDescriptor {
            label: Some(path),
            size: Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: TextureDimension::D2,
            format: TextureFormat::Rgba8UnormSrgb,
            usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
            view_formats: &[],
        },
        util::TextureDataOrder::LayerMajor,
        &rgba,
    );

    let view = texture.create_view(&TextureViewDescriptor::default());

    // Nearest filtering keeps the pixel art crisp
    let sampler = device.create_sampler(&SamplerDescriptor {
        label: Some("Sprite Sampler"),
        address_mode_u: AddressMode::ClampToEdge,
        address_mode_v: AddressMode::ClampToEdge,
        address_mode_w: AddressMode::ClampToEdge,
        mag_filter: FilterMode::Nearest,
        min_filter: FilterMode::Nearest,
        ..Default::default()
    });

    let bind_group = device.create_bind_group(&BindGroupDescriptor {
        label: Some(path),
        layout,
        entries: &[
            BindGroupEntry {
                binding: 0,
                resource: BindingResource::TextureView(&view),
            },
            BindGroupEntry {
                binding: 1,
                resource: BindingResource::Sampler(&sampler),
            },
        ],
    });

    Ok(Sprite { bind_group })
}
