use hecs::World;

use crate::components::{Cowboy, PaddleIntent, Tumbleweed};
use crate::config::Config;
use crate::resources::InputQueue;

/// Drain queued inputs into the matching cowboy's movement intent
pub fn ingest_inputs(world: &mut World, queue: &mut InputQueue) {
    for &(player_id, dir) in &queue.inputs {
        for (_entity, (cowboy, intent)) in world.query_mut::<(&Cowboy, &mut PaddleIntent)>() {
            if cowboy.player_id == player_id {
                intent.dir = dir.clamp(-1, 1);
            }
        }
    }

    queue.inputs.clear();
}

/// Drive the right cowboy in single-player mode.
///
/// Strategy:
/// 1. If the tumbleweed is inbound, predict the intercept height and steer
///    toward it, with a deadzone so the paddle doesn't jitter.
/// 2. If it is moving away, drift back to center to cover the field.
pub fn drive_auto_cowboy(world: &mut World, config: &Config) {
    let ball = world
        .query::<&Tumbleweed>()
        .iter()
        .next()
        .map(|(_e, weed)| (weed.pos, weed.vel));
    let paddle_y = world
        .query::<&Cowboy>()
        .iter()
        .find(|(_e, c)| c.player_id == 1)
        .map(|(_e, c)| c.y);

    let (Some((ball_pos, ball_vel)), Some(paddle_y)) = (ball, paddle_y) else {
        return;
    };

    let dir: i8 = if ball_vel.x > 0.0 {
        let paddle_x = config.cowboy_x(1);
        let time_to_reach = (paddle_x - ball_pos.x) / ball_vel.x.max(0.1);
        let predicted_y = ball_pos.y + ball_vel.y * time_to_reach;

        let diff = predicted_y - paddle_y;
        let deadzone = 0.3;

        if diff > deadzone {
            1
        } else if diff < -deadzone {
            -1
        } else {
            0
        }
    } else {
        let diff = -paddle_y;
        if diff.abs() > 0.5 {
            if diff > 0.0 {
                1
            } else {
                -1
            }
        } else {
            0
        }
    };

    for (_entity, (cowboy, intent)) in world.query_mut::<(&Cowboy, &mut PaddleIntent)>() {
        if cowboy.player_id == 1 {
            intent.dir = dir;
        }
    }
}
