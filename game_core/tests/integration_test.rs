use game_core::*;
use glam::Vec2;
use hecs::World;

struct Harness {
    world: World,
    time: Time,
    config: Config,
    mode: Mode,
    phase: Phase,
    queue: InputQueue,
    events: Events,
}

impl Harness {
    fn new() -> Self {
        let mut world = World::new();
        spawn_cowboy(&mut world, 0);
        spawn_cowboy(&mut world, 1);
        spawn_banners(&mut world);

        Self {
            world,
            time: Time::new(0.016, 0.0),
            config: Config::new(),
            mode: Mode::new(),
            phase: Phase::default(),
            queue: InputQueue::new(),
            events: Events::new(),
        }
    }

    fn with_ball(pos: Vec2, vel: Vec2) -> Self {
        let mut harness = Self::new();
        harness.world.spawn((Tumbleweed::new(pos, vel),));
        harness
    }

    fn step(&mut self) {
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &self.mode,
            &mut self.phase,
            &mut self.queue,
            &mut self.events,
        );
    }

    fn cowboy_y(&self, player_id: u8) -> f32 {
        self.world
            .query::<&Cowboy>()
            .iter()
            .find(|(_e, c)| c.player_id == player_id)
            .map(|(_e, c)| c.y)
            .unwrap()
    }

    fn ball(&self) -> Tumbleweed {
        self.world
            .query::<&Tumbleweed>()
            .iter()
            .next()
            .map(|(_e, weed)| *weed)
            .unwrap()
    }

    fn banner_scale(&self, winner: u8) -> f32 {
        self.world
            .query::<&WinBanner>()
            .iter()
            .find(|(_e, b)| b.winner == winner)
            .map(|(_e, b)| b.scale)
            .unwrap()
    }
}

#[test]
fn test_cowboy_moves_on_input() {
    let mut h = Harness::with_ball(Vec2::ZERO, Vec2::new(1.0, 0.0));

    h.queue.push_input(0, 1);
    h.step();

    assert!(h.cowboy_y(0) > 0.0, "Left cowboy should move up");
    assert_eq!(h.cowboy_y(1), 0.0, "Right cowboy should not move");
}

#[test]
fn test_cowboy_never_leaves_clamp_range() {
    let mut h = Harness::with_ball(Vec2::ZERO, Vec2::new(1.0, 0.0));

    // Hold "up" for far longer than it takes to reach the line
    for _ in 0..600 {
        h.queue.push_input(0, 1);
        h.step();
        assert!(h.cowboy_y(0) <= h.config.cowboy_clamp_y);
    }
    assert_eq!(h.cowboy_y(0), h.config.cowboy_clamp_y);
}

#[test]
fn test_wall_contact_flips_velocity_once() {
    let start_y = 6.9;
    let mut h = Harness::with_ball(Vec2::new(0.0, start_y), Vec2::new(0.0, 8.0));

    // Run until past the wall line, then a few more frames while overlapping
    let mut flips = 0;
    let mut last_vy = h.ball().vel.y;
    for _ in 0..20 {
        h.step();
        let vy = h.ball().vel.y;
        if vy.signum() != last_vy.signum() {
            flips += 1;
        }
        last_vy = vy;
    }

    assert_eq!(flips, 1, "Exactly one flip per wall contact");
    assert!(h.ball().vel.y < 0.0);
}

#[test]
fn test_cowboy_contact_flips_x_velocity() {
    let mut h = Harness::new();
    // Aimed straight at the left cowboy, one frame away from overlap
    let start_x = h.config.cowboy_x(0) + 1.1;
    h.world
        .spawn((Tumbleweed::new(Vec2::new(start_x, 0.0), Vec2::new(-8.0, 0.0)),));

    for _ in 0..5 {
        h.step();
    }

    assert!(h.ball().vel.x > 0.0, "Ball should have been sent back");
    assert!(h.phase.is_running());
}

#[test]
fn test_left_win_reveals_banner_and_freezes() {
    let mut h = Harness::with_ball(Vec2::new(10.5, 0.0), Vec2::new(40.0, 0.0));

    h.step();

    assert_eq!(h.phase.winner(), Some(0));
    assert_eq!(h.banner_scale(0), 1.0, "Left banner visible");
    assert_eq!(h.banner_scale(1), 0.0, "Right banner hidden");

    // Positions freeze after the end; inputs are ignored
    let frozen = h.ball();
    let frozen_y = h.cowboy_y(1);
    for _ in 0..10 {
        h.queue.push_input(1, 1);
        h.step();
    }
    assert_eq!(h.ball().pos, frozen.pos);
    assert_eq!(h.cowboy_y(1), frozen_y);
}

#[test]
fn test_right_win_reveals_other_banner() {
    let mut h = Harness::with_ball(Vec2::new(-10.5, 0.0), Vec2::new(-40.0, 0.0));

    h.step();

    assert_eq!(h.phase.winner(), Some(1));
    assert!(h.events.right_won);
    assert_eq!(h.banner_scale(1), 1.0);
    assert_eq!(h.banner_scale(0), 0.0);
}

#[test]
fn test_single_player_drives_right_cowboy() {
    let mut h = Harness::with_ball(Vec2::new(0.0, 0.0), Vec2::new(6.0, 2.0));
    h.mode.single_player = true;

    for _ in 0..30 {
        h.step();
    }

    assert!(
        h.cowboy_y(1) > 0.0,
        "Auto cowboy should have chased the rising ball"
    );
}

#[test]
fn test_two_player_right_cowboy_stays_put_without_input() {
    let mut h = Harness::with_ball(Vec2::new(0.0, 0.0), Vec2::new(6.0, 2.0));

    for _ in 0..30 {
        h.step();
    }

    assert_eq!(h.cowboy_y(1), 0.0);
}

#[test]
fn test_served_ball_is_moving() {
    let mut world = World::new();
    let config = Config::new();
    let mut rng = GameRng::new(12345);
    spawn_tumbleweed(&mut world, &config, &mut rng);

    let weed = world
        .query::<&Tumbleweed>()
        .iter()
        .next()
        .map(|(_e, w)| *w)
        .unwrap();
    assert_eq!(weed.pos, Vec2::ZERO);
    assert!((weed.vel.length() - config.tumbleweed_speed).abs() < 1e-3);
}
