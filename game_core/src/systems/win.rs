use crate::{Config, Events, Phase, Tumbleweed, WinBanner};
use hecs::World;

/// End the game when the tumbleweed crosses a win line.
///
/// Past +win_x the right cowboy missed, so the left cowboy wins (and the
/// mirror case on the other side). The matching banner scales up from zero;
/// the phase change freezes all further position updates.
pub fn check_win(world: &mut World, config: &Config, phase: &mut Phase, events: &mut Events) {
    let ball_x = world
        .query::<&Tumbleweed>()
        .iter()
        .next()
        .map(|(_e, weed)| weed.pos.x);

    let Some(ball_x) = ball_x else {
        return;
    };

    let winner = if ball_x > config.win_x {
        Some(0)
    } else if ball_x < -config.win_x {
        Some(1)
    } else {
        None
    };

    let Some(winner) = winner else {
        return;
    };

    *phase = Phase::Ended { winner };
    if winner == 0 {
        events.left_won = true;
    } else {
        events.right_won = true;
    }

    for (_entity, banner) in world.query_mut::<&mut WinBanner>() {
        if banner.winner == winner {
            banner.scale = 1.0;
        }
    }
}
