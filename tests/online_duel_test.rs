//! Integration test: online duels
//!
//! Two engines wired through an in-process channel, plus a scripted peer speaking the
//! wire protocol directly.

use odyssey::character::{create_player, Player};
use odyssey::combat::{CombatEvent, CombatPhase, DuelState, Element, OnlineDuel};
use odyssey::pvp::{AttackPayload, LocalChannel, PeerChannel, PeerMessage, PlayerSummary};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn take_turn(duel: &mut OnlineDuel<LocalChannel>, player: &mut Player, rng: &mut ChaCha8Rng) {
    if !duel.is_my_turn() {
        return;
    }
    let ability = duel
        .session()
        .and_then(|session| session.suggest_ability(player));
    match ability {
        Some(ability) => {
            duel.use_ability(player, &ability.id, rng).unwrap();
        }
        None => {
            duel.abandon();
        }
    }
}

#[test]
fn test_full_duel_ends_with_one_winner() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let (a, b) = LocalChannel::pair();
    let mut alice = create_player("knight", 0).unwrap();
    let mut bob = create_player("sylvan", 0).unwrap();
    let alice_before = alice.clone();
    let bob_before = bob.clone();

    let mut host = OnlineDuel::open(a, &alice, true).unwrap();
    let mut guest = OnlineDuel::open(b, &bob, false).unwrap();

    for _ in 0..500 {
        host.poll(&mut alice);
        guest.poll(&mut bob);
        if host.state() == DuelState::InCombat && guest.state() == DuelState::InCombat {
            // Each side's mirror tracks the other side's real HP.
            assert_eq!(host.session().unwrap().enemy().current_hp, bob.current_hp);
            assert_eq!(guest.session().unwrap().enemy().current_hp, alice.current_hp);
        }
        if host.state() == DuelState::Ended && guest.state() == DuelState::Ended {
            break;
        }
        take_turn(&mut host, &mut alice, &mut rng);
        take_turn(&mut guest, &mut bob, &mut rng);
    }

    let outcomes = (host.outcome(), guest.outcome());
    assert!(
        outcomes == (Some(CombatPhase::Victory), Some(CombatPhase::Defeat))
            || outcomes == (Some(CombatPhase::Defeat), Some(CombatPhase::Victory)),
        "unexpected outcomes {outcomes:?}"
    );
    // Duels never touch progression.
    assert_eq!(alice.xp, alice_before.xp);
    assert_eq!(alice.gold, alice_before.gold);
    assert_eq!(alice.win_streak, alice_before.win_streak);
    assert_eq!(bob.level, bob_before.level);
    assert_eq!(bob.gold, bob_before.gold);
}

#[test]
fn test_scripted_peer() {
    let (local, mut peer) = LocalChannel::pair();
    let mut alice = create_player("knight", 0).unwrap();
    let mut duel = OnlineDuel::open(local, &alice, false).unwrap();

    assert!(matches!(
        peer.try_recv().unwrap(),
        Some(PeerMessage::Handshake { .. })
    ));

    let mut rival = create_player("mage", 0).unwrap();
    rival.current_hp = 40;
    peer.send(&PeerMessage::Handshake {
        player: PlayerSummary::from_player(&rival),
    })
    .unwrap();
    duel.poll(&mut alice);
    assert_eq!(duel.state(), DuelState::InCombat);
    assert!(!duel.is_my_turn());

    // Healing lands on the sender's mirror, never on us.
    peer.send(&PeerMessage::Attack(AttackPayload {
        ability_name: "Mend".to_string(),
        damage: 0,
        heal: 30,
        is_critical: false,
        element: Element::Water,
    }))
    .unwrap();
    peer.send_raw("{\"type\":\"ATTACK\"").unwrap();
    duel.poll(&mut alice);
    assert_eq!(duel.session().unwrap().enemy().current_hp, 70);
    assert_eq!(alice.current_hp, alice.max_hp);
    assert!(duel.is_my_turn());

    // An attack while it is our turn is ignored.
    peer.send(&PeerMessage::Attack(AttackPayload {
        ability_name: "Water Bubble".to_string(),
        damage: 25,
        heal: 0,
        is_critical: false,
        element: Element::Water,
    }))
    .unwrap();
    duel.poll(&mut alice);
    assert_eq!(alice.current_hp, alice.max_hp);

    // The peer declaring victory is a neutral loss.
    peer.send(&PeerMessage::Victory).unwrap();
    let events = duel.poll(&mut alice);
    assert_eq!(events, vec![CombatEvent::Defeat]);
    assert_eq!(duel.state(), DuelState::Ended);
    assert_eq!(duel.outcome(), Some(CombatPhase::Defeat));
    assert_eq!(alice.gold, 0);
}

#[test]
fn test_winner_notifies_peer() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let (local, mut peer) = LocalChannel::pair();
    let mut alice = create_player("knight", 0).unwrap();
    let mut duel = OnlineDuel::open(local, &alice, true).unwrap();
    peer.try_recv().unwrap();

    let mut rival = create_player("mage", 0).unwrap();
    rival.current_hp = 1;
    peer.send(&PeerMessage::Handshake {
        player: PlayerSummary::from_player(&rival),
    })
    .unwrap();
    duel.poll(&mut alice);

    duel.use_ability(&mut alice, "strike", &mut rng).unwrap();
    assert_eq!(duel.outcome(), Some(CombatPhase::Victory));
    assert!(matches!(
        peer.try_recv().unwrap(),
        Some(PeerMessage::Attack(AttackPayload { damage, .. })) if damage > 0
    ));
    assert_eq!(peer.try_recv().unwrap(), Some(PeerMessage::Victory));

    // The loser's own VICTORY notice arriving late changes nothing.
    peer.send(&PeerMessage::Victory).unwrap();
    assert!(duel.poll(&mut alice).is_empty());
    assert_eq!(duel.outcome(), Some(CombatPhase::Victory));
}
