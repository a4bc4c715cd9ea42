/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.016, now: 0.0 }
    }
}

/// Frame-loop state: the game runs until the tumbleweed crosses a win line,
/// then freezes on the final frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    Ended {
        winner: u8, // 0 = left cowboy, 1 = right cowboy
    },
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }

    pub fn winner(&self) -> Option<u8> {
        match self {
            Phase::Running => None,
            Phase::Ended { winner } => Some(*winner),
        }
    }
}

/// Play mode. Single-player hands the right cowboy to the auto tracker.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mode {
    pub single_player: bool,
}

impl Mode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_single_player(&mut self) {
        self.single_player = !self.single_player;
    }
}

/// Random number generator (seeded, so serves are reproducible in tests)
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub wall_bounce: bool,
    pub cowboy_hit: bool,
    pub left_won: bool,
    pub right_won: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.wall_bounce = false;
        self.cowboy_hit = false;
        self.left_won = false;
        self.right_won = false;
    }
}

/// Queued keyboard inputs, drained into paddle intents each frame
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(u8, i8)>, // (player_id, direction)
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_input(&mut self, player_id: u8, dir: i8) {
        self.inputs.push((player_id, dir));
    }
}
