use crate::{Config, Cowboy, PaddleIntent, Time, Tumbleweed};
use hecs::World;

/// Apply cowboy movement from intents (explicit Euler)
pub fn move_cowboys(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (cowboy, intent)) in world.query_mut::<(&mut Cowboy, &mut PaddleIntent)>() {
        if intent.dir != 0 {
            cowboy.y += intent.dir as f32 * config.cowboy_speed * time.dt;

            // Past the clamp line: pin the position and kill the movement
            if cowboy.y.abs() > config.cowboy_clamp_y {
                cowboy.y = config.clamp_cowboy_y(cowboy.y);
                intent.dir = 0;
            }
        }
    }
}

/// Move the tumbleweed along its velocity
pub fn move_tumbleweed(world: &mut World, time: &Time) {
    for (_entity, weed) in world.query_mut::<&mut Tumbleweed>() {
        weed.pos += weed.vel * time.dt;
    }
}
