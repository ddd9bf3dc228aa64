//! WebSocket front door: accepts connections, hands each one a seat in
//! the match, and pumps frames between the socket and the room.
//!
//! Each connection gets two tasks: the read loop below and a writer
//! task draining the peer's outbound channel. The role message is sent
//! directly on the socket before the writer starts, so it always
//! arrives ahead of the first state frame.

use std::io;
use std::net::SocketAddr;

use futures_util::{SinkExt, StreamExt};
use log::{debug, error, info, warn};
use shared::ServerMessage;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

use crate::room::MatchRoom;

/// Outbound frames a slow consumer may queue before we start dropping
/// state frames for it.
const PEER_CHANNEL_CAPACITY: usize = 64;

/// Accepts WebSocket connections and attaches them to a match room.
pub struct NetworkServer {
    listener: TcpListener,
}

impl NetworkServer {
    pub async fn bind(addr: &str) -> io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        info!("listening on {}", listener.local_addr()?);
        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// The accept loop. Every connection runs in its own task; a bad
    /// handshake or a failing socket never affects the others.
    pub async fn run(self, room: MatchRoom) {
        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let room = room.clone();
                    tokio::spawn(async move {
                        handle_connection(stream, addr, room).await;
                    });
                }
                Err(e) => {
                    error!("accept error: {}", e);
                }
            }
        }
    }
}

async fn handle_connection(stream: TcpStream, addr: SocketAddr, room: MatchRoom) {
    let ws_stream = match accept_async(stream).await {
        Ok(ws) => ws,
        Err(e) => {
            warn!("websocket handshake failed for {}: {}", addr, e);
            return;
        }
    };

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();
    let (peer_tx, mut peer_rx) = mpsc::channel::<Message>(PEER_CHANNEL_CAPACITY);

    let (conn_id, seat) = room.join(peer_tx).await;
    info!("{} connected as {:?} (connection {})", addr, seat, conn_id);

    // Inform the client of its seat before any state frame reaches it.
    let role = ServerMessage::Role { role: seat };
    match serde_json::to_string(&role) {
        Ok(text) => {
            if ws_sender.send(Message::Text(text)).await.is_err() {
                room.leave(conn_id).await;
                return;
            }
        }
        Err(e) => {
            error!("failed to serialize role message: {}", e);
            room.leave(conn_id).await;
            return;
        }
    }

    let writer = tokio::spawn(async move {
        while let Some(frame) = peer_rx.recv().await {
            if ws_sender.send(frame).await.is_err() {
                break;
            }
        }
    });

    while let Some(frame) = ws_receiver.next().await {
        match frame {
            Ok(Message::Text(text)) => {
                room.handle_message(seat, &text).await;
            }
            Ok(Message::Close(_)) => {
                debug!("{} sent close", addr);
                break;
            }
            // Pings are answered by the protocol layer; binary and
            // pong frames carry nothing we understand.
            Ok(_) => {}
            Err(e) => {
                debug!("websocket error for {}: {}", addr, e);
                break;
            }
        }
    }

    writer.abort();
    room.leave(conn_id).await;
    info!("{} disconnected (connection {})", addr, conn_id);
}
