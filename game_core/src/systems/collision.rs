use crate::{Config, Cowboy, Events, Tumbleweed};
use hecs::World;

/// Bounce the tumbleweed off the top/bottom walls.
///
/// Only the velocity sign flips; the overlap is not undone. The outward
/// guard keeps the sign from flipping again on the next frame while the
/// ball is still past the line.
pub fn bounce_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, weed) in world.query_mut::<&mut Tumbleweed>() {
        let outward_top = weed.pos.y >= config.wall_y && weed.vel.y > 0.0;
        let outward_bottom = weed.pos.y <= -config.wall_y && weed.vel.y < 0.0;

        if outward_top || outward_bottom {
            weed.vel.y = -weed.vel.y;
            events.wall_bounce = true;
        }
    }
}

/// Bounce the tumbleweed off any cowboy it overlaps.
///
/// Axis-aligned distance test combining the scaled half-widths and
/// half-heights of both sprites. On overlap the horizontal velocity sign
/// flips, provided the ball is actually heading toward that cowboy's side.
pub fn bounce_cowboys(world: &mut World, config: &Config, events: &mut Events) {
    let cowboys: Vec<(u8, f32)> = world
        .query::<&Cowboy>()
        .iter()
        .map(|(_e, c)| (c.player_id, c.y))
        .collect();

    let x_reach = (config.cowboy_width + config.tumbleweed_size) / 2.0;
    let y_reach = (config.cowboy_height + config.tumbleweed_size) / 2.0;

    for (_entity, weed) in world.query_mut::<&mut Tumbleweed>() {
        for &(player_id, cowboy_y) in &cowboys {
            let dx = (weed.pos.x - config.cowboy_x(player_id)).abs();
            let dy = (weed.pos.y - cowboy_y).abs();

            if dx < x_reach && dy < y_reach {
                let inbound = (player_id == 0 && weed.vel.x < 0.0)
                    || (player_id == 1 && weed.vel.x > 0.0);

                if inbound {
                    weed.vel.x = -weed.vel.x;
                    events.cowboy_hit = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{spawn_cowboy, Config, Events, Tumbleweed};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, Events) {
        (hecs::World::new(), Config::new(), Events::new())
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup_world();
        let entity = world.spawn((Tumbleweed::new(
            Vec2::new(0.0, config.wall_y + 0.2),
            Vec2::new(3.0, 2.0),
        ),));

        bounce_walls(&mut world, &config, &mut events);

        let weed = *world.get::<&Tumbleweed>(entity).unwrap();
        assert!(weed.vel.y < 0.0, "Ball should head back down");
        assert_eq!(weed.vel.x, 3.0, "X velocity should be unchanged");
        assert!(events.wall_bounce, "Should raise wall_bounce event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        let entity = world.spawn((Tumbleweed::new(
            Vec2::new(0.0, -config.wall_y - 0.2),
            Vec2::new(3.0, -2.0),
        ),));

        bounce_walls(&mut world, &config, &mut events);

        let weed = *world.get::<&Tumbleweed>(entity).unwrap();
        assert!(weed.vel.y > 0.0, "Ball should head back up");
        assert!(events.wall_bounce);
    }

    #[test]
    fn test_wall_bounce_flips_exactly_once() {
        let (mut world, config, mut events) = setup_world();
        let entity = world.spawn((Tumbleweed::new(
            Vec2::new(0.0, config.wall_y + 0.2),
            Vec2::new(3.0, 2.0),
        ),));

        // The ball stays past the line for a couple of frames; the sign
        // must not flip back while it is already heading inward.
        bounce_walls(&mut world, &config, &mut events);
        bounce_walls(&mut world, &config, &mut events);
        bounce_walls(&mut world, &config, &mut events);

        let weed = *world.get::<&Tumbleweed>(entity).unwrap();
        assert_eq!(weed.vel.y, -2.0, "One contact, one flip");
    }

    #[test]
    fn test_ball_bounces_off_left_cowboy() {
        let (mut world, config, mut events) = setup_world();
        spawn_cowboy(&mut world, 0);
        let entity = world.spawn((Tumbleweed::new(
            Vec2::new(config.cowboy_x(0) + 0.5, 0.5),
            Vec2::new(-4.0, 1.0),
        ),));

        bounce_cowboys(&mut world, &config, &mut events);

        let weed = *world.get::<&Tumbleweed>(entity).unwrap();
        assert!(weed.vel.x > 0.0, "Ball should head back right");
        assert_eq!(weed.vel.y, 1.0, "Y velocity should be unchanged");
        assert!(events.cowboy_hit, "Should raise cowboy_hit event");
    }

    #[test]
    fn test_ball_bounces_off_right_cowboy() {
        let (mut world, config, mut events) = setup_world();
        spawn_cowboy(&mut world, 1);
        let entity = world.spawn((Tumbleweed::new(
            Vec2::new(config.cowboy_x(1) - 0.5, -0.5),
            Vec2::new(4.0, 1.0),
        ),));

        bounce_cowboys(&mut world, &config, &mut events);

        let weed = *world.get::<&Tumbleweed>(entity).unwrap();
        assert!(weed.vel.x < 0.0, "Ball should head back left");
        assert!(events.cowboy_hit);
    }

    #[test]
    fn test_no_bounce_when_ball_misses_cowboy() {
        let (mut world, config, mut events) = setup_world();
        spawn_cowboy(&mut world, 0);
        // Overlapping in x but well above the paddle
        let entity = world.spawn((Tumbleweed::new(
            Vec2::new(config.cowboy_x(0), 2.9),
            Vec2::new(-4.0, 0.0),
        ),));

        bounce_cowboys(&mut world, &config, &mut events);

        let weed = *world.get::<&Tumbleweed>(entity).unwrap();
        assert_eq!(weed.vel.x, -4.0);
        assert!(!events.cowboy_hit);
    }

    #[test]
    fn test_no_double_flip_while_overlapping() {
        let (mut world, config, mut events) = setup_world();
        spawn_cowboy(&mut world, 0);
        let entity = world.spawn((Tumbleweed::new(
            Vec2::new(config.cowboy_x(0) + 0.5, 0.0),
            Vec2::new(-4.0, 0.0),
        ),));

        // Overlap is not resolved, so the test runs again next frame while
        // the ball is still inside the paddle. Outbound now, so no flip.
        bounce_cowboys(&mut world, &config, &mut events);
        bounce_cowboys(&mut world, &config, &mut events);

        let weed = *world.get::<&Tumbleweed>(entity).unwrap();
        assert_eq!(weed.vel.x, 4.0, "One contact, one flip");
    }
}
