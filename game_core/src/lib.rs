pub mod components;
pub mod config;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one frame of the cowboy pong simulation
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    mode: &Mode,
    phase: &mut Phase,
    queue: &mut InputQueue,
    events: &mut Events,
) {
    // Clamp dt to prevent large jumps
    let dt = time.dt.min(Params::MAX_DT);
    let frame = Time::new(dt, time.now);

    // Clear events at start of frame
    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, queue);

    // A finished game freezes; the client keeps rendering the final frame
    if phase.is_running() {
        // 2. Auto cowboy takes over the right paddle in single-player
        if mode.single_player {
            drive_auto_cowboy(world, config);
        }

        // 3. Move cowboys and tumbleweed
        move_cowboys(world, &frame, config);
        move_tumbleweed(world, &frame);

        // 4. Collisions (walls, then cowboys)
        bounce_walls(world, config, events);
        bounce_cowboys(world, config, events);

        // 5. Win check (tumbleweed crossed a win line)
        check_win(world, config, phase, events);
    }

    // Update time
    time.now += dt;
}

/// Helper to create a cowboy entity at its spawn height
pub fn spawn_cowboy(world: &mut World, player_id: u8) -> hecs::Entity {
    world.spawn((Cowboy::new(player_id, 0.0), PaddleIntent::new()))
}

/// Helper to create the tumbleweed entity with a served velocity
pub fn spawn_tumbleweed(world: &mut World, config: &Config, rng: &mut GameRng) -> hecs::Entity {
    let mut weed = Tumbleweed::new(glam::Vec2::ZERO, glam::Vec2::ZERO);
    weed.serve(config.tumbleweed_speed, rng);
    world.spawn((weed,))
}

/// Helper to create both win banners, hidden until a win fires
pub fn spawn_banners(world: &mut World) {
    world.spawn((WinBanner::new(0),));
    world.spawn((WinBanner::new(1),));
}
