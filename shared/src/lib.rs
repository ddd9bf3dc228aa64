use serde::{Deserialize, Serialize};

pub const GAME_WIDTH: f32 = 800.0;
pub const GAME_HEIGHT: f32 = 500.0;
pub const PADDLE_WIDTH: f32 = 15.0;
pub const PADDLE_HEIGHT: f32 = 100.0;
pub const BALL_RADIUS: f32 = 10.0;
pub const PADDLE_SPEED: f32 = 5.0;
pub const INITIAL_BALL_SPEED: f32 = 5.0;
pub const AI_DEADZONE: f32 = 10.0;
pub const TICK_RATE: u32 = 60;

/// A connection's role in the match. `left` and `right` hold at most
/// one connection each; everyone else watches.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    Left,
    Right,
    Spectator,
}

impl Seat {
    /// True for the two seats that may submit input.
    pub fn is_player(&self) -> bool {
        matches!(self, Seat::Left | Seat::Right)
    }
}

/// Messages accepted from clients. Anything that does not parse into
/// this enum is dropped by the server without a reply.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientMessage {
    Input {
        #[serde(default)]
        up: bool,
        #[serde(default)]
        down: bool,
    },
}

/// Messages pushed to clients: the role assignment once on connect,
/// then one state frame per tick.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    Role { role: Seat },
    State { state: StateSnapshot },
}

/// Reduced per-tick snapshot sent to every connection. Field names
/// are part of the wire format consumed by the browser client.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct StateSnapshot {
    #[serde(rename = "leftY")]
    pub left_y: f32,
    #[serde(rename = "rightY")]
    pub right_y: f32,
    #[serde(rename = "ballX")]
    pub ball_x: f32,
    #[serde(rename = "ballY")]
    pub ball_y: f32,
    pub score: Score,
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}
