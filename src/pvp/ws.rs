//! WebSocket transport for online duels.
//!
//! The socket runs on tokio tasks; the duel side stays synchronous and polls through
//! [`PeerChannel`]. Frames are JSON text.

use super::channel::PeerChannel;
use super::protocol::PeerMessage;
use crate::core::error::ChannelError;
use futures_util::{SinkExt, StreamExt};
use std::net::SocketAddr;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpListener;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::WebSocketStream;
use tracing::{info, warn};

pub struct WsChannel {
    outbound: UnboundedSender<String>,
    inbound: UnboundedReceiver<String>,
}

impl WsChannel {
    /// Dials a peer hosting at `url` (e.g. `ws://host:port`).
    pub async fn connect(url: &str) -> Result<Self, ChannelError> {
        let (ws_stream, _) = tokio_tungstenite::connect_async(url)
            .await
            .map_err(|e| ChannelError::Connect(e.to_string()))?;
        info!(url, "connected to peer");
        Ok(Self::bridge(ws_stream))
    }

    /// Waits for exactly one peer on `port`.
    pub async fn host(port: u16) -> Result<Self, ChannelError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ChannelError::Connect(e.to_string()))?;
        info!(%addr, "waiting for a challenger");

        let (stream, peer) = listener
            .accept()
            .await
            .map_err(|e| ChannelError::Connect(e.to_string()))?;
        let ws_stream = tokio_tungstenite::accept_async(stream)
            .await
            .map_err(|e| ChannelError::Connect(e.to_string()))?;
        info!(%peer, "peer connected");
        Ok(Self::bridge(ws_stream))
    }

    /// Splits the socket into a writer task and a reader task joined by unbounded queues.
    /// Dropping either queue end closes the other side.
    fn bridge<S>(ws_stream: WebSocketStream<S>) -> Self
    where
        S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
    {
        let (mut ws_sender, mut ws_receiver) = ws_stream.split();
        let (outbound, mut outbound_rx) = mpsc::unbounded_channel::<String>();
        let (inbound_tx, inbound) = mpsc::unbounded_channel::<String>();

        tokio::spawn(async move {
            while let Some(text) = outbound_rx.recv().await {
                if ws_sender.send(Message::Text(text)).await.is_err() {
                    break;
                }
            }
            let _ = ws_sender.close().await;
        });

        tokio::spawn(async move {
            while let Some(frame) = ws_receiver.next().await {
                match frame {
                    Ok(Message::Text(text)) => {
                        if inbound_tx.send(text).is_err() {
                            break;
                        }
                    }
                    Ok(Message::Close(_)) => break,
                    Err(e) => {
                        warn!(error = %e, "peer socket error");
                        break;
                    }
                    _ => {}
                }
            }
        });

        Self { outbound, inbound }
    }
}

impl PeerChannel for WsChannel {
    fn send(&mut self, message: &PeerMessage) -> Result<(), ChannelError> {
        let json = message
            .to_json()
            .map_err(|e| ChannelError::Encode(e.to_string()))?;
        self.outbound.send(json).map_err(|_| ChannelError::Closed)
    }

    fn try_recv(&mut self) -> Result<Option<PeerMessage>, ChannelError> {
        loop {
            match self.inbound.try_recv() {
                Ok(text) => match PeerMessage::from_json(&text) {
                    Ok(message) => return Ok(Some(message)),
                    Err(e) => warn!(error = %e, "ignoring malformed peer message"),
                },
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Disconnected) => return Err(ChannelError::Closed),
            }
        }
    }
}
