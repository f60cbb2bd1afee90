//! Player-versus-player: offline challenge tokens and the online duel transport.

pub mod channel;
pub mod protocol;
pub mod token;

#[cfg(feature = "online")]
pub mod ws;

pub use channel::*;
pub use protocol::*;
pub use token::*;

#[cfg(feature = "online")]
pub use ws::WsChannel;
