//! The match room: one authoritative simulation, its seats and input
//! flags, the fixed-rate tick loop and the per-tick broadcast.
//!
//! Connection tasks call [`MatchRoom::join`], [`MatchRoom::leave`] and
//! [`MatchRoom::handle_message`]; the tick loop in [`MatchRoom::run`]
//! exclusively owns the `GameState`, so the two sides only meet at the
//! seat map and the input aggregator, both behind locks.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{ClientMessage, Seat, ServerMessage};
use tokio::sync::RwLock;
use tokio::time::{interval, MissedTickBehavior};
use tokio_tungstenite::tungstenite::Message;

use crate::game::GameState;
use crate::input::{InputAggregator, InputFlags, Side};
use crate::physics::{self, RightController, TickInputs};
use crate::seats::{PeerSender, SeatMap};

/// Handle to one match. Cheap to clone; clones share the same seats
/// and inputs.
#[derive(Clone, Default)]
pub struct MatchRoom {
    seats: Arc<RwLock<SeatMap>>,
    inputs: Arc<RwLock<InputAggregator>>,
}

impl MatchRoom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new connection and returns its id and seat. The
    /// caller must send the role message before anything else.
    pub async fn join(&self, sender: PeerSender) -> (u64, Seat) {
        self.seats.write().await.assign(sender)
    }

    /// Drops a connection. Freeing a player seat also clears that
    /// side's input flags; spectators leave without any state effect.
    pub async fn leave(&self, conn_id: u64) {
        let freed = self.seats.write().await.release(conn_id);
        match freed {
            Some(Seat::Left) => self.inputs.write().await.reset(Side::Left),
            Some(Seat::Right) => self.inputs.write().await.reset(Side::Right),
            _ => {}
        }
    }

    /// Applies one inbound text frame. Malformed payloads, unknown
    /// message types and spectator input are dropped without a reply.
    pub async fn handle_message(&self, seat: Seat, text: &str) {
        let side = match seat {
            Seat::Left => Side::Left,
            Seat::Right => Side::Right,
            Seat::Spectator => {
                debug!("ignoring message from spectator");
                return;
            }
        };

        match serde_json::from_str::<ClientMessage>(text) {
            Ok(ClientMessage::Input { up, down }) => {
                self.inputs.write().await.set(side, InputFlags { up, down });
            }
            Err(e) => debug!("ignoring malformed message from {:?} seat: {}", seat, e),
        }
    }

    /// The match loop: fires at `tick_rate`, runs the physics step
    /// exactly once per firing and broadcasts the resulting snapshot.
    /// Runs for the lifetime of the process; nothing in here is fatal.
    pub async fn run(self, tick_rate: u32) {
        let mut rng = StdRng::from_entropy();
        let mut state = GameState::new(&mut rng);

        let mut interval_timer = interval(Duration::from_secs_f32(1.0 / tick_rate as f32));
        interval_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!("match loop running at {} ticks/second", tick_rate);

        // Skip the first tick since it fires immediately.
        interval_timer.tick().await;

        loop {
            interval_timer.tick().await;

            let tick_inputs = self.tick_inputs().await;
            physics::step(&mut state, &tick_inputs, &mut rng);

            self.broadcast(&ServerMessage::State {
                state: state.snapshot(),
            })
            .await;
        }
    }

    /// Snapshot of the inputs for one tick. The right-seat controller
    /// is chosen from current occupancy, so a human joining or leaving
    /// takes effect at the next tick boundary.
    async fn tick_inputs(&self) -> TickInputs {
        let flags = *self.inputs.read().await;
        let right_human = self.seats.read().await.right_occupied();

        TickInputs {
            left: flags.flags(Side::Left),
            right: if right_human {
                RightController::Human(flags.flags(Side::Right))
            } else {
                RightController::Tracking
            },
        }
    }

    /// Serializes once and pushes to every connected party. A closed
    /// or saturated peer channel is skipped; disconnect cleanup is the
    /// connection task's job, never the broadcaster's.
    async fn broadcast(&self, msg: &ServerMessage) {
        let text = match serde_json::to_string(msg) {
            Ok(text) => text,
            Err(e) => {
                error!("failed to serialize outbound message: {}", e);
                return;
            }
        };

        let senders = self.seats.read().await.senders();
        for sender in senders {
            let _ = sender.try_send(Message::Text(text.clone()));
        }
    }
}
