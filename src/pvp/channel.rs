//! The transport seam for online duels.

use super::protocol::PeerMessage;
use crate::core::error::ChannelError;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use tracing::warn;

/// An ordered, lossless message pipe to one peer.
///
/// `try_recv` never blocks: `Ok(None)` means nothing is waiting. `Err(Closed)` means the
/// peer is gone for good.
pub trait PeerChannel {
    fn send(&mut self, message: &PeerMessage) -> Result<(), ChannelError>;
    fn try_recv(&mut self) -> Result<Option<PeerMessage>, ChannelError>;
}

/// One end of an in-process channel pair carrying JSON text, for tests and local play.
pub struct LocalChannel {
    tx: Sender<String>,
    rx: Receiver<String>,
}

impl LocalChannel {
    /// Two connected ends.
    pub fn pair() -> (LocalChannel, LocalChannel) {
        let (a_tx, b_rx) = mpsc::channel();
        let (b_tx, a_rx) = mpsc::channel();
        (
            LocalChannel { tx: a_tx, rx: a_rx },
            LocalChannel { tx: b_tx, rx: b_rx },
        )
    }

    /// Pushes raw text to the peer, bypassing encoding.
    pub fn send_raw(&mut self, text: impl Into<String>) -> Result<(), ChannelError> {
        self.tx.send(text.into()).map_err(|_| ChannelError::Closed)
    }
}

impl PeerChannel for LocalChannel {
    fn send(&mut self, message: &PeerMessage) -> Result<(), ChannelError> {
        let json = message
            .to_json()
            .map_err(|e| ChannelError::Encode(e.to_string()))?;
        self.send_raw(json)
    }

    fn try_recv(&mut self) -> Result<Option<PeerMessage>, ChannelError> {
        loop {
            match self.rx.try_recv() {
                Ok(text) => match PeerMessage::from_json(&text) {
                    Ok(message) => return Ok(Some(message)),
                    Err(e) => {
                        warn!(error = %e, "ignoring malformed peer message");
                    }
                },
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Disconnected) => return Err(ChannelError::Closed),
            }
        }
    }
}
