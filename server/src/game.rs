use rand::Rng;
use shared::{
    Score, StateSnapshot, GAME_HEIGHT, GAME_WIDTH, INITIAL_BALL_SPEED, PADDLE_HEIGHT, PADDLE_WIDTH,
};

/// A paddle. `x` is fixed per side; `y` is the top edge, clamped to
/// `[0, GAME_HEIGHT - PADDLE_HEIGHT]`. `dy` is recomputed from input
/// every tick, never carried over.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub dy: f32,
}

impl Paddle {
    fn new(x: f32) -> Self {
        Self {
            x,
            y: (GAME_HEIGHT - PADDLE_HEIGHT) / 2.0,
            dy: 0.0,
        }
    }

    pub fn center(&self) -> f32 {
        self.y + PADDLE_HEIGHT / 2.0
    }

    /// True if the ball's center falls within the paddle's vertical span.
    pub fn spans(&self, ball_y: f32) -> bool {
        ball_y >= self.y && ball_y <= self.y + PADDLE_HEIGHT
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
}

/// The authoritative match state. Created once when the match starts
/// and mutated only by the tick loop.
#[derive(Debug, Clone)]
pub struct GameState {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub running: bool,
}

impl GameState {
    /// Both paddles centered, ball centered with a randomized diagonal
    /// serve, score 0-0.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            left: Paddle::new(0.0),
            right: Paddle::new(GAME_WIDTH - PADDLE_WIDTH),
            ball: Ball {
                x: GAME_WIDTH / 2.0,
                y: GAME_HEIGHT / 2.0,
                dx: INITIAL_BALL_SPEED * random_sign(rng),
                dy: INITIAL_BALL_SPEED * random_sign(rng),
            },
            score: Score::default(),
            running: true,
        }
    }

    /// Re-centers the ball after a goal. Horizontal direction is
    /// dictated by which boundary was crossed; vertical direction is
    /// re-randomized independent of the pre-goal trajectory.
    pub fn reset_ball(&mut self, dx: f32, rng: &mut impl Rng) {
        self.ball.x = GAME_WIDTH / 2.0;
        self.ball.y = GAME_HEIGHT / 2.0;
        self.ball.dx = dx;
        self.ball.dy = INITIAL_BALL_SPEED * random_sign(rng);
    }

    /// The reduced snapshot broadcast to clients every tick.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            left_y: self.left.y,
            right_y: self.right.y,
            ball_x: self.ball.x,
            ball_y: self.ball.y,
            score: self.score,
            w: GAME_WIDTH,
            h: GAME_HEIGHT,
        }
    }
}

fn random_sign(rng: &mut impl Rng) -> f32 {
    if rng.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}
