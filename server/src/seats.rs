//! Seat assignment and the per-match connection registry.
//!
//! Exactly one connection may hold `left` and one `right`; everyone
//! else joins the unbounded spectator set. Seat membership grants
//! nothing beyond the right to write that side's input flags.

use std::collections::HashMap;

use log::info;
use shared::Seat;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;

/// Outbound channel to one connection's writer task.
pub type PeerSender = mpsc::Sender<Message>;

#[derive(Debug)]
struct Peer {
    id: u64,
    sender: PeerSender,
}

/// All connections attached to one match, keyed by seat. Mutated only
/// by the connection manager; the broadcaster just reads the senders.
#[derive(Debug, Default)]
pub struct SeatMap {
    left: Option<Peer>,
    right: Option<Peer>,
    spectators: HashMap<u64, Peer>,
    next_conn_id: u64,
}

impl SeatMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the next free seat: `left`, then `right`, then
    /// spectator. Returns the connection id and the seat taken.
    pub fn assign(&mut self, sender: PeerSender) -> (u64, Seat) {
        self.next_conn_id += 1;
        let peer = Peer {
            id: self.next_conn_id,
            sender,
        };
        let id = peer.id;

        let seat = if self.left.is_none() {
            self.left = Some(peer);
            Seat::Left
        } else if self.right.is_none() {
            self.right = Some(peer);
            Seat::Right
        } else {
            self.spectators.insert(id, peer);
            Seat::Spectator
        };

        info!("connection {} assigned seat {:?}", id, seat);
        (id, seat)
    }

    /// Frees whatever seat the connection held, making a player seat
    /// available to the next new connection. Returns the freed seat.
    pub fn release(&mut self, conn_id: u64) -> Option<Seat> {
        if self.left.as_ref().map(|p| p.id) == Some(conn_id) {
            self.left = None;
            info!("connection {} released seat Left", conn_id);
            return Some(Seat::Left);
        }
        if self.right.as_ref().map(|p| p.id) == Some(conn_id) {
            self.right = None;
            info!("connection {} released seat Right", conn_id);
            return Some(Seat::Right);
        }
        if self.spectators.remove(&conn_id).is_some() {
            info!("connection {} left the spectator set", conn_id);
            return Some(Seat::Spectator);
        }
        None
    }

    /// Whether a human currently drives the right paddle.
    pub fn right_occupied(&self) -> bool {
        self.right.is_some()
    }

    /// Outbound senders for every connected party: players first,
    /// then spectators.
    pub fn senders(&self) -> Vec<PeerSender> {
        self.left
            .iter()
            .chain(self.right.iter())
            .chain(self.spectators.values())
            .map(|p| p.sender.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some()) + self.spectators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
