//! # Pong Game Server
//!
//! Authoritative server for a two-player paddle-and-ball match played
//! from the browser over WebSocket. The server owns the only true copy
//! of the game state; clients are input sources and renderers.
//!
//! ## Architecture
//!
//! One match, one fixed-rate tick loop. Connection tasks never touch
//! the simulation directly: inbound input messages only update the
//! per-seat flags in [`input::InputAggregator`], and the tick loop in
//! [`room::MatchRoom`] reads those flags once per tick, runs the
//! physics step, and broadcasts a snapshot to every connection.
//!
//! ## Module Organization
//!
//! - [`game`] — the mutable simulation state (paddles, ball, score).
//! - [`physics`] — the pure fixed-timestep step and the fallback
//!   opponent that drives the right paddle when no human holds it.
//! - [`input`] — per-seat pressed/released flags, last write wins.
//! - [`seats`] — seat arbitration: first connection gets `left`, the
//!   second `right`, everyone after that spectates.
//! - [`room`] — the match object tying the above together: tick
//!   scheduling and best-effort state broadcast.
//! - [`network`] — WebSocket listener and per-connection tasks.
//!
//! Nothing in the core is fatal: malformed messages and failed sends
//! are logged and swallowed, and the tick loop runs until the process
//! exits.

pub mod game;
pub mod input;
pub mod network;
pub mod physics;
pub mod room;
pub mod seats;
