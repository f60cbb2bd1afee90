//! Live duels between two engines over a [`PeerChannel`].
//!
//! Each side runs its own [`CombatSession`] against a mirror of the other player. After
//! a local action the numbers are sent as `ATTACK` and the turn passes without waiting
//! for an acknowledgement. The channel delivers in order, so both mirrors stay in step.

use super::engine::CombatSession;
use super::events::CombatEvent;
use super::types::{CombatMode, CombatPhase, Side};
use crate::character::player::Player;
use crate::core::error::{ActionRejected, ChannelError};
use crate::pvp::{AttackPayload, PeerChannel, PeerMessage, PlayerSummary};
use rand::Rng;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelState {
    /// Our handshake is out; waiting for the peer's.
    AwaitingConnection,
    InCombat,
    Ended,
}

pub struct OnlineDuel<C> {
    channel: C,
    state: DuelState,
    goes_first: bool,
    session: Option<CombatSession>,
}

impl<C: PeerChannel> OnlineDuel<C> {
    /// Sends our handshake. `goes_first` decides who acts once the peer answers; exactly
    /// one side must pass true.
    pub fn open(mut channel: C, player: &Player, goes_first: bool) -> Result<Self, ChannelError> {
        channel.send(&PeerMessage::Handshake {
            player: PlayerSummary::from_player(player),
        })?;
        info!(goes_first, "duel handshake sent");
        Ok(Self {
            channel,
            state: DuelState::AwaitingConnection,
            goes_first,
            session: None,
        })
    }

    pub fn state(&self) -> DuelState {
        self.state
    }

    pub fn session(&self) -> Option<&CombatSession> {
        self.session.as_ref()
    }

    /// Final phase once the duel has ended with a session, `None` otherwise.
    pub fn outcome(&self) -> Option<CombatPhase> {
        self.session
            .as_ref()
            .map(CombatSession::phase)
            .filter(|phase| phase.is_terminal())
    }

    pub fn is_my_turn(&self) -> bool {
        self.state == DuelState::InCombat
            && self.session.as_ref().is_some_and(CombatSession::is_player_turn)
    }

    /// Handles everything the peer has sent so far.
    pub fn poll(&mut self, player: &mut Player) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        while self.state != DuelState::Ended {
            match self.channel.try_recv() {
                Ok(Some(message)) => self.handle(message, player, &mut events),
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "peer connection lost");
                    events.extend(self.abandon());
                }
            }
        }
        events
    }

    fn handle(&mut self, message: PeerMessage, player: &mut Player, events: &mut Vec<CombatEvent>) {
        match (self.state, message) {
            (DuelState::AwaitingConnection, PeerMessage::Handshake { player: summary }) => {
                let first = if self.goes_first {
                    Side::Player
                } else {
                    Side::Opponent
                };
                let session = CombatSession::new(summary.to_enemy(), CombatMode::Online)
                    .with_first_turn(first);
                events.push(session.opening());
                events.push(CombatEvent::TurnStarted {
                    side: first,
                    mana_regenerated: 0,
                });
                self.session = Some(session);
                self.state = DuelState::InCombat;
                info!(opponent = %summary.name, level = summary.level, "duel started");
            }
            (DuelState::InCombat, PeerMessage::Attack(payload)) => {
                self.receive_attack(player, &payload, events);
            }
            (DuelState::InCombat, PeerMessage::Victory) => {
                if let Some(session) = self.session.as_mut() {
                    events.extend(session.concede());
                }
                self.state = DuelState::Ended;
            }
            (state, message) => {
                warn!(?state, ?message, "ignoring out-of-order peer message");
            }
        }
    }

    fn receive_attack(
        &mut self,
        player: &mut Player,
        payload: &AttackPayload,
        events: &mut Vec<CombatEvent>,
    ) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.turn() != Side::Opponent {
            warn!(ability = %payload.ability_name, "peer attacked out of turn");
            return;
        }
        events.extend(session.receive_attack(player, &payload.into()));
        if session.phase() == CombatPhase::Defeat {
            self.state = DuelState::Ended;
            // The peer learns of its win from us.
            if let Err(e) = self.channel.send(&PeerMessage::Victory) {
                warn!(error = %e, "could not notify peer of defeat");
            }
        }
    }

    /// Resolves a local ability and sends the numbers to the peer.
    pub fn use_ability(
        &mut self,
        player: &mut Player,
        ability_id: &str,
        rng: &mut impl Rng,
    ) -> Result<Vec<CombatEvent>, ActionRejected> {
        let session = match (self.state, self.session.as_mut()) {
            (DuelState::InCombat, Some(session)) => session,
            (DuelState::AwaitingConnection, _) => return Err(ActionRejected::NotYourTurn),
            _ => return Err(ActionRejected::CombatOver),
        };
        let (result, mut events) = session.resolve_player_action(player, ability_id, rng)?;
        let won = session.phase() == CombatPhase::Victory;

        let mut sent = self
            .channel
            .send(&PeerMessage::Attack(AttackPayload::from(&result)));
        if won {
            sent = sent.and_then(|_| self.channel.send(&PeerMessage::Victory));
            self.state = DuelState::Ended;
        }
        if let Err(e) = sent {
            warn!(error = %e, "failed to reach peer");
            if !won {
                events.extend(self.abandon());
            }
        }
        Ok(events)
    }

    /// Leaves the duel without a result.
    pub fn abandon(&mut self) -> Vec<CombatEvent> {
        if self.state == DuelState::Ended {
            return Vec::new();
        }
        self.state = DuelState::Ended;
        match self.session.as_mut() {
            Some(session) => session.abandon(),
            None => vec![CombatEvent::Abandoned],
        }
    }
}
