//! The fixed-timestep physics step: paddle motion, ball motion,
//! wall and paddle collision, scoring and serve reset. Pure and
//! deterministic given the inputs and the serve RNG, executed exactly
//! once per tick by the match loop.

use rand::Rng;
use shared::{
    AI_DEADZONE, BALL_RADIUS, GAME_HEIGHT, GAME_WIDTH, INITIAL_BALL_SPEED, PADDLE_HEIGHT,
    PADDLE_SPEED, PADDLE_WIDTH,
};

use crate::game::GameState;
use crate::input::InputFlags;

/// Who drives the right paddle this tick. Selected from current seat
/// occupancy at the top of every tick, so a human can take over from
/// the tracking policy (or vice versa) at any tick boundary with no
/// state repair: velocity is always recomputed, never carried over.
#[derive(Debug, Clone, Copy)]
pub enum RightController {
    Human(InputFlags),
    Tracking,
}

/// Input snapshot consumed by one step.
#[derive(Debug, Clone, Copy)]
pub struct TickInputs {
    pub left: InputFlags,
    pub right: RightController,
}

/// Advances the simulation by one tick. No-op while `running` is false.
pub fn step(state: &mut GameState, inputs: &TickInputs, rng: &mut impl Rng) {
    if !state.running {
        return;
    }

    // Derive paddle velocities from input. Both flags pressed cancel
    // to zero.
    state.left.dy = input_velocity(inputs.left);
    state.right.dy = match inputs.right {
        RightController::Human(flags) => input_velocity(flags),
        RightController::Tracking => tracking_velocity(state.ball.y, state.right.y),
    };

    // Move paddles, clamped to the playfield.
    state.left.y = (state.left.y + state.left.dy).clamp(0.0, GAME_HEIGHT - PADDLE_HEIGHT);
    state.right.y = (state.right.y + state.right.dy).clamp(0.0, GAME_HEIGHT - PADDLE_HEIGHT);

    // Move ball.
    state.ball.x += state.ball.dx;
    state.ball.y += state.ball.dy;

    // Bounce off top/bottom walls.
    if state.ball.y - BALL_RADIUS < 0.0 || state.ball.y + BALL_RADIUS > GAME_HEIGHT {
        state.ball.dy = -state.ball.dy;
        state.ball.y = state.ball.y.clamp(BALL_RADIUS, GAME_HEIGHT - BALL_RADIUS);
    }

    // Left paddle collision, only while the ball travels leftward.
    if state.ball.dx < 0.0
        && state.ball.x - BALL_RADIUS <= PADDLE_WIDTH
        && state.left.spans(state.ball.y)
    {
        state.ball.dx = -state.ball.dx;
        state.ball.x = PADDLE_WIDTH + BALL_RADIUS;
        state.ball.dy = INITIAL_BALL_SPEED * hit_offset(state.ball.y, state.left.center());
    }

    // Right paddle collision, only while the ball travels rightward.
    if state.ball.dx > 0.0
        && state.ball.x + BALL_RADIUS >= state.right.x
        && state.right.spans(state.ball.y)
    {
        state.ball.dx = -state.ball.dx;
        state.ball.x = state.right.x - BALL_RADIUS;
        state.ball.dy = INITIAL_BALL_SPEED * hit_offset(state.ball.y, state.right.center());
    }

    // Goals. At most one side scores per tick.
    if state.ball.x + BALL_RADIUS < 0.0 {
        state.score.right += 1;
        state.reset_ball(INITIAL_BALL_SPEED, rng);
    } else if state.ball.x - BALL_RADIUS > GAME_WIDTH {
        state.score.left += 1;
        state.reset_ball(-INITIAL_BALL_SPEED, rng);
    }
}

fn input_velocity(flags: InputFlags) -> f32 {
    let up = if flags.up { -PADDLE_SPEED } else { 0.0 };
    let down = if flags.down { PADDLE_SPEED } else { 0.0 };
    up + down
}

/// Fallback opponent: idle inside the deadzone around the paddle
/// center, otherwise full speed toward the ball.
fn tracking_velocity(ball_y: f32, paddle_y: f32) -> f32 {
    let center = paddle_y + PADDLE_HEIGHT / 2.0;
    if (ball_y - center).abs() < AI_DEADZONE {
        0.0
    } else if ball_y < center {
        -PADDLE_SPEED
    } else {
        PADDLE_SPEED
    }
}

/// Normalized distance between ball and paddle center, the "spin"
/// factor. Overwrites the ball's vertical velocity on a paddle hit.
fn hit_offset(ball_y: f32, paddle_center: f32) -> f32 {
    ((ball_y - paddle_center) / (PADDLE_HEIGHT / 2.0)).clamp(-1.0, 1.0)
}
