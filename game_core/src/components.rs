use glam::Vec2;

/// Cowboy component - a player's paddle sprite
#[derive(Debug, Clone, Copy)]
pub struct Cowboy {
    pub player_id: u8, // 0 = left, 1 = right
    pub y: f32,        // vertical position (clamped to the play field)
}

impl Cowboy {
    pub fn new(player_id: u8, y: f32) -> Self {
        Self { player_id, y }
    }
}

/// Movement intent for a cowboy
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = down, 0 = stop, 1 = up
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Tumbleweed component - the ball
#[derive(Debug, Clone, Copy)]
pub struct Tumbleweed {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Tumbleweed {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Serve from the center with a random direction toward either side
    pub fn serve(&mut self, speed: f32, rng: &mut crate::GameRng) {
        self.pos = Vec2::ZERO;

        // Random angle between -45° and 45°, or 135° and 225°
        use rand::Rng;
        let toward_right = rng.0.gen_bool(0.5);
        let angle: f32 = if toward_right {
            rng.0.gen_range(-0.785..0.785) // -45° to 45° in radians
        } else {
            rng.0.gen_range(2.356..3.927) // 135° to 225° in radians
        };

        self.vel = Vec2::new(angle.cos(), angle.sin()) * speed;
    }
}

/// Win banner sprite - spawned at scale zero, scaled up when its side wins
#[derive(Debug, Clone, Copy)]
pub struct WinBanner {
    pub winner: u8, // 0 = left cowboy, 1 = right cowboy
    pub scale: f32, // 0.0 = hidden, 1.0 = full size
}

impl WinBanner {
    pub fn new(winner: u8) -> Self {
        Self { winner, scale: 0.0 }
    }

    pub fn is_visible(&self) -> bool {
        self.scale > 0.0
    }
}
