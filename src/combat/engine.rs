//! The turn state machine for one encounter.
//!
//! A session owns the opponent, cooldowns and log; the player is borrowed per call so
//! progression stays with the persistent record. Every transition returns the events it
//! produced, animation cues included. Nothing here sleeps: the caller plays the cues.

use super::damage::{compute_damage, enemy_base_power};
use super::effects::{impact_for, projectile_for, Effect};
use super::element::Element;
use super::events::{AnimationCue, CombatEvent, CueKind};
use super::types::*;
use crate::abilities::Ability;
use crate::character::player::Player;
use crate::core::config::ProgressionRules;
use crate::core::constants::{HEAL_PER_PLAYER_LEVEL, MP_REGEN_PER_TURN};
use crate::core::error::ActionRejected;
use crate::enemies::flavor::FlavorGenerator;
use crate::rewards::{pvp_victory, resolve_victory_scaled};
use rand::Rng;
use tracing::{debug, info, warn};

/// The numbers of one resolved ability, as sent to a peer.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionResult {
    pub ability_name: String,
    pub element: Element,
    pub damage: u32,
    pub heal: u32,
    pub is_critical: bool,
}

pub struct CombatSession {
    enemy: Enemy,
    mode: CombatMode,
    phase: CombatPhase,
    turn: Side,
    cooldowns: Cooldowns,
    animation: AnimationPhase,
    log: CombatLog,
    victory_fired: bool,
    rules: ProgressionRules,
    loot_multiplier: f64,
    flavor: Option<Box<dyn FlavorGenerator>>,
}

impl CombatSession {
    pub fn new(enemy: Enemy, mode: CombatMode) -> Self {
        let mut log = CombatLog::new();
        let opening = match mode {
            CombatMode::Local => format!("Encountered {}!", enemy.name),
            CombatMode::Challenge | CombatMode::Online => {
                format!("Duel started against {}!", enemy.name)
            }
        };
        log.push(opening, LogKind::System, false);
        info!(enemy = %enemy.name, level = enemy.level, ?mode, "combat started");

        Self {
            enemy,
            mode,
            phase: CombatPhase::Idle,
            turn: Side::Player,
            cooldowns: Cooldowns::new(),
            animation: AnimationPhase::Idle,
            log,
            victory_fired: false,
            rules: ProgressionRules::default(),
            loot_multiplier: 1.0,
            flavor: None,
        }
    }

    /// A fight against a generated enemy.
    pub fn local(enemy: Enemy) -> Self {
        Self::new(enemy, CombatMode::Local)
    }

    /// An offline duel against a decoded challenger.
    pub fn challenge(enemy: Enemy) -> Self {
        Self::new(enemy, CombatMode::Challenge)
    }

    pub fn with_rules(mut self, rules: ProgressionRules) -> Self {
        self.rules = rules;
        self
    }

    /// Scales XP and gold of a local victory (from a map minigame).
    pub fn with_loot_multiplier(mut self, multiplier: f64) -> Self {
        self.loot_multiplier = multiplier;
        self
    }

    pub fn with_flavor(mut self, flavor: Box<dyn FlavorGenerator>) -> Self {
        self.flavor = Some(flavor);
        self
    }

    pub fn with_first_turn(mut self, side: Side) -> Self {
        self.turn = side;
        self
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn mode(&self) -> CombatMode {
        self.mode
    }

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn cooldowns(&self) -> &Cooldowns {
        &self.cooldowns
    }

    pub fn log(&self) -> &CombatLog {
        &self.log
    }

    pub fn animation(&self) -> AnimationPhase {
        self.animation
    }

    /// Set by the renderer while it plays cues; input is refused unless idle.
    pub fn set_animation(&mut self, animation: AnimationPhase) {
        self.animation = animation;
    }

    /// The event announcing the opponent, for renderers that start from an event stream.
    pub fn opening(&self) -> CombatEvent {
        CombatEvent::Encountered {
            name: self.enemy.name.clone(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn is_player_turn(&self) -> bool {
        !self.is_over() && self.turn == Side::Player
    }

    /// Checks whether the player may use an ability right now without changing anything.
    pub fn check_ability(&self, player: &Player, ability_id: &str) -> Result<(), ActionRejected> {
        if self.is_over() {
            return Err(ActionRejected::CombatOver);
        }
        if self.turn != Side::Player {
            return Err(ActionRejected::NotYourTurn);
        }
        if self.animation != AnimationPhase::Idle {
            return Err(ActionRejected::Busy);
        }
        let ability = match player.ability(ability_id) {
            Some(ability) if player.has_ability(ability_id) => ability,
            _ => return Err(ActionRejected::UnknownAbility(ability_id.to_string())),
        };
        if player.current_mp < ability.mana_cost {
            return Err(ActionRejected::InsufficientMana {
                required: ability.mana_cost,
                available: player.current_mp,
            });
        }
        let turns = self.cooldowns.remaining(&ability.id);
        if turns > 0 {
            return Err(ActionRejected::OnCooldown {
                ability: ability.name,
                turns,
            });
        }
        Ok(())
    }

    /// The player uses an ability.
    ///
    /// On rejection nothing changes and the turn is not consumed.
    pub fn use_ability(
        &mut self,
        player: &mut Player,
        ability_id: &str,
        rng: &mut impl Rng,
    ) -> Result<Vec<CombatEvent>, ActionRejected> {
        self.resolve_player_action(player, ability_id, rng)
            .map(|(_, events)| events)
    }

    pub(crate) fn resolve_player_action(
        &mut self,
        player: &mut Player,
        ability_id: &str,
        rng: &mut impl Rng,
    ) -> Result<(ActionResult, Vec<CombatEvent>), ActionRejected> {
        if let Err(rejection) = self.check_ability(player, ability_id) {
            warn!(ability = ability_id, %rejection, "action rejected");
            return Err(rejection);
        }
        let ability = player
            .ability(ability_id)
            .ok_or_else(|| ActionRejected::UnknownAbility(ability_id.to_string()))?;

        self.phase = CombatPhase::ResolvingPlayerAction;
        player.spend_mana(ability.mana_cost);
        self.cooldowns.start(&ability.id, ability.cooldown);

        let mut events = Vec::new();
        let mut result = ActionResult {
            ability_name: ability.name.clone(),
            element: ability.element,
            damage: 0,
            heal: 0,
            is_critical: false,
        };

        if ability.is_heal() {
            let amount = ability
                .heal
                .saturating_add(player.level.saturating_mul(HEAL_PER_PLAYER_LEVEL));
            events.push(CombatEvent::Cue(AnimationCue::new(
                CueKind::Heal,
                Side::Player,
                ability.element,
                Some(Effect::Heal),
            )));
            let restored = player.heal(amount);
            result.heal = amount;
            self.log.push(
                format!("You healed for {amount} HP."),
                LogKind::PlayerAction,
                false,
            );
            events.push(CombatEvent::Healed {
                side: Side::Player,
                amount: restored,
            });
            debug!(ability = %ability.id, amount, restored, "player healed");
            self.end_player_turn(&mut events);
            return Ok((result, events));
        }

        events.push(CombatEvent::Cue(AnimationCue::new(
            CueKind::WindUp,
            Side::Player,
            ability.element,
            Some(Effect::Projectile(projectile_for(&ability.id))),
        )));

        let roll = compute_damage(
            player.level,
            ability.damage as f64,
            ability.element,
            self.enemy.element,
            player.weapon.damage,
            rng,
        );
        self.enemy.take_damage(roll.damage);
        result.damage = roll.damage;
        result.is_critical = roll.is_critical;

        events.push(CombatEvent::Cue(AnimationCue::new(
            CueKind::Impact,
            Side::Player,
            ability.element,
            Some(Effect::Impact(impact_for(&ability.id))),
        )));
        events.push(CombatEvent::AttackResolved {
            attacker: Side::Player,
            ability: ability.name.clone(),
            element: ability.element,
            damage: roll.damage,
            is_critical: roll.is_critical,
            target_hp: self.enemy.current_hp,
        });

        let line = self
            .flavor
            .as_mut()
            .and_then(|f| {
                f.flavor(
                    &ability.name,
                    "Player",
                    &self.enemy.name,
                    roll.damage,
                    roll.is_critical,
                )
            })
            .unwrap_or_else(|| {
                format!(
                    "You hit for {} damage using {}!",
                    roll.damage, player.weapon.name
                )
            });
        self.log.push(line, LogKind::PlayerAction, roll.is_critical);
        debug!(
            ability = %ability.id,
            damage = roll.damage,
            critical = roll.is_critical,
            enemy_hp = self.enemy.current_hp,
            "player attack resolved"
        );

        events.push(CombatEvent::Cue(AnimationCue::new(
            CueKind::Return,
            Side::Player,
            ability.element,
            None,
        )));

        if !self.enemy.is_alive() {
            self.fire_victory(player, rng, &mut events);
        } else {
            self.end_player_turn(&mut events);
        }
        Ok((result, events))
    }

    fn end_player_turn(&mut self, events: &mut Vec<CombatEvent>) {
        self.phase = CombatPhase::Idle;
        self.turn = Side::Opponent;
        if self.mode != CombatMode::Online {
            events.push(CombatEvent::Cue(AnimationCue::new(
                CueKind::EnemyDelay,
                Side::Opponent,
                self.enemy.element,
                None,
            )));
        }
    }

    /// The scripted opponent attacks with its innate element.
    pub fn enemy_turn(
        &mut self,
        player: &mut Player,
        rng: &mut impl Rng,
    ) -> Result<Vec<CombatEvent>, ActionRejected> {
        if self.is_over() {
            return Err(ActionRejected::CombatOver);
        }
        if self.mode == CombatMode::Online || self.turn != Side::Opponent {
            return Err(ActionRejected::NotYourTurn);
        }

        self.phase = CombatPhase::ResolvingEnemyAction;
        let element = self.enemy.element;
        let mut events = vec![CombatEvent::Cue(AnimationCue::new(
            CueKind::WindUp,
            Side::Opponent,
            element,
            None,
        ))];

        let roll = compute_damage(
            self.enemy.level,
            enemy_base_power(self.enemy.level),
            element,
            player.element,
            0,
            rng,
        );
        player.take_damage(roll.damage);

        events.push(CombatEvent::Cue(AnimationCue::new(
            CueKind::Impact,
            Side::Opponent,
            element,
            None,
        )));
        events.push(CombatEvent::AttackResolved {
            attacker: Side::Opponent,
            ability: "Attack".to_string(),
            element,
            damage: roll.damage,
            is_critical: roll.is_critical,
            target_hp: player.current_hp,
        });
        self.log.push(
            format!("{} attacked for {} damage!", self.enemy.name, roll.damage),
            LogKind::EnemyAction,
            roll.is_critical,
        );
        events.push(CombatEvent::Cue(AnimationCue::new(
            CueKind::Return,
            Side::Opponent,
            element,
            None,
        )));
        debug!(damage = roll.damage, player_hp = player.current_hp, "enemy attack resolved");

        if !player.is_alive() {
            self.fire_defeat(&mut events);
        } else {
            self.start_player_turn(player, &mut events);
        }
        Ok(events)
    }

    /// Mana regen and cooldown tick, then control returns to the player.
    fn start_player_turn(&mut self, player: &mut Player, events: &mut Vec<CombatEvent>) {
        let before = player.current_mp;
        player.regen_mana(MP_REGEN_PER_TURN);
        self.cooldowns.tick();
        self.phase = CombatPhase::Idle;
        self.turn = Side::Player;
        events.push(CombatEvent::TurnStarted {
            side: Side::Player,
            mana_regenerated: player.current_mp - before,
        });
    }

    fn fire_victory(
        &mut self,
        player: &mut Player,
        rng: &mut impl Rng,
        events: &mut Vec<CombatEvent>,
    ) {
        if self.victory_fired {
            return;
        }
        self.victory_fired = true;
        self.phase = CombatPhase::Victory;

        let outcome = if self.mode.is_pvp() || self.enemy.is_pvp {
            pvp_victory(&self.enemy.name)
        } else {
            resolve_victory_scaled(
                player,
                &self.enemy,
                self.loot_multiplier,
                &self.rules,
                rng,
            )
        };
        for message in &outcome.messages {
            self.log.push(message.clone(), LogKind::System, false);
        }
        info!(enemy = %self.enemy.name, pvp = outcome.pvp, "victory");
        events.push(CombatEvent::Victory(outcome));
    }

    fn fire_defeat(&mut self, events: &mut Vec<CombatEvent>) {
        if self.is_over() {
            return;
        }
        self.phase = CombatPhase::Defeat;
        self.log.push("You have been defeated...", LogKind::System, false);
        info!(enemy = %self.enemy.name, "defeat");
        events.push(CombatEvent::Defeat);
    }

    /// Applies a peer's resolved ability: damage lands on the player, healing on the
    /// peer's mirror. Hands the turn back unless the player fell.
    pub(crate) fn receive_attack(
        &mut self,
        player: &mut Player,
        attack: &ActionResult,
    ) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        if self.is_over() {
            return events;
        }
        self.phase = CombatPhase::ResolvingEnemyAction;

        if attack.heal > 0 {
            self.enemy.heal(attack.heal);
            events.push(CombatEvent::Cue(AnimationCue::new(
                CueKind::Heal,
                Side::Opponent,
                attack.element,
                Some(Effect::Heal),
            )));
            events.push(CombatEvent::Healed {
                side: Side::Opponent,
                amount: attack.heal,
            });
            self.log.push(
                format!("{} healed for {} HP.", self.enemy.name, attack.heal),
                LogKind::EnemyAction,
                false,
            );
        }
        if attack.damage > 0 || attack.heal == 0 {
            player.take_damage(attack.damage);
            events.push(CombatEvent::Cue(AnimationCue::new(
                CueKind::Impact,
                Side::Opponent,
                attack.element,
                None,
            )));
            events.push(CombatEvent::AttackResolved {
                attacker: Side::Opponent,
                ability: attack.ability_name.clone(),
                element: attack.element,
                damage: attack.damage,
                is_critical: attack.is_critical,
                target_hp: player.current_hp,
            });
            self.log.push(
                format!(
                    "{} used {} for {} damage!",
                    self.enemy.name, attack.ability_name, attack.damage
                ),
                LogKind::EnemyAction,
                attack.is_critical,
            );
        }

        if !player.is_alive() {
            self.fire_defeat(&mut events);
        } else {
            self.start_player_turn(player, &mut events);
        }
        events
    }

    /// The peer declared victory: a loss without any penalty or reward.
    pub(crate) fn concede(&mut self) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        self.fire_defeat(&mut events);
        events
    }

    /// Leaves combat without a result.
    pub fn abandon(&mut self) -> Vec<CombatEvent> {
        if self.is_over() {
            return Vec::new();
        }
        self.phase = CombatPhase::Abandoned;
        self.log.push("Returned to town.", LogKind::System, false);
        warn!(enemy = %self.enemy.name, "combat abandoned");
        vec![CombatEvent::Abandoned]
    }

    /// The strongest ready attack the player can afford, or the biggest heal when below a
    /// third of max HP.
    pub fn suggest_ability(&self, player: &Player) -> Option<Ability> {
        let usable: Vec<Ability> = player
            .abilities()
            .into_iter()
            .filter(|a| self.check_ability(player, &a.id).is_ok())
            .collect();
        if player.current_hp * 3 < player.max_hp {
            if let Some(heal) = usable.iter().filter(|a| a.is_heal()).max_by_key(|a| a.heal) {
                return Some(heal.clone());
            }
        }
        usable
            .into_iter()
            .filter(|a| a.is_attack())
            .max_by_key(|a| a.damage)
    }

    /// Plays a scripted encounter to the end using [`Self::suggest_ability`]. The player
    /// flees when nothing is usable.
    pub fn auto_battle(&mut self, player: &mut Player, rng: &mut impl Rng) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        while !self.is_over() {
            let step = match self.turn {
                Side::Player => match self.suggest_ability(player) {
                    Some(ability) => self.use_ability(player, &ability.id, rng),
                    None => Ok(self.abandon()),
                },
                Side::Opponent => self.enemy_turn(player, rng),
            };
            match step {
                Ok(step) => events.extend(step),
                Err(rejection) => {
                    warn!(%rejection, "auto battle stopped");
                    events.extend(self.abandon());
                }
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::player::create_player;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn dummy(hp: u32, element: Element) -> Enemy {
        Enemy {
            name: "Training Dummy".to_string(),
            level: 1,
            current_hp: hp,
            max_hp: hp,
            current_mp: 0,
            max_mp: 0,
            element,
            icon: "User".to_string(),
            description: String::new(),
            xp_reward: 30,
            gold_reward: 20,
            is_boss: false,
            is_pvp: false,
            pvp_weapon: None,
        }
    }

    #[test]
    fn test_mana_rejection_changes_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut player = create_player("knight", 0).unwrap();
        player.current_mp = 5;
        let mut session = CombatSession::local(dummy(500, Element::Physical));

        let result = session.use_ability(&mut player, "ember", &mut rng);
        assert_eq!(
            result,
            Err(ActionRejected::InsufficientMana {
                required: 10,
                available: 5
            })
        );
        assert_eq!(player.current_mp, 5);
        assert_eq!(session.turn(), Side::Player);
        assert_eq!(session.enemy().current_hp, 500);
    }

    #[test]
    fn test_heal_ends_turn_and_never_hits_enemy() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut player = create_player("mage", 0).unwrap();
        player.current_hp = 10;
        let mut session = CombatSession::local(dummy(500, Element::Physical));

        let events = session.use_ability(&mut player, "heal", &mut rng).unwrap();
        // 50 + 1 * 8
        assert_eq!(player.current_hp, 68);
        assert_eq!(player.current_mp, 70);
        assert_eq!(session.enemy().current_hp, 500);
        assert_eq!(session.turn(), Side::Opponent);
        assert!(events
            .iter()
            .any(|e| matches!(e, CombatEvent::Healed { amount: 58, .. })));
    }

    #[test]
    fn test_out_of_turn_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut player = create_player("knight", 0).unwrap();
        let mut session = CombatSession::local(dummy(500, Element::Physical));
        session.use_ability(&mut player, "strike", &mut rng).unwrap();
        assert_eq!(
            session.use_ability(&mut player, "strike", &mut rng),
            Err(ActionRejected::NotYourTurn)
        );
    }

    #[test]
    fn test_enemy_turn_regens_mana() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut player = create_player("knight", 0).unwrap();
        let mut session = CombatSession::local(dummy(500, Element::Physical));
        session.use_ability(&mut player, "ember", &mut rng).unwrap();
        assert_eq!(player.current_mp, 30);

        let events = session.enemy_turn(&mut player, &mut rng).unwrap();
        assert_eq!(player.current_mp, 35);
        assert!(player.current_hp < player.max_hp);
        assert!(matches!(
            events.last(),
            Some(CombatEvent::TurnStarted {
                side: Side::Player,
                mana_regenerated: 5
            })
        ));
    }

    #[test]
    fn test_victory_fires_once() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut player = create_player("knight", 0).unwrap();
        let mut session = CombatSession::local(dummy(1, Element::Physical));

        let events = session.use_ability(&mut player, "strike", &mut rng).unwrap();
        assert_eq!(session.phase(), CombatPhase::Victory);
        let victories = events
            .iter()
            .filter(|e| matches!(e, CombatEvent::Victory(_)))
            .count();
        assert_eq!(victories, 1);
        assert_eq!(player.gold, 20);

        assert_eq!(
            session.use_ability(&mut player, "strike", &mut rng),
            Err(ActionRejected::CombatOver)
        );
        assert_eq!(player.gold, 20);
    }

    #[test]
    fn test_loot_multiplier_scales_victory() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut player = create_player("knight", 0).unwrap();
        let mut session =
            CombatSession::local(dummy(1, Element::Physical)).with_loot_multiplier(1.5);

        let events = session.use_ability(&mut player, "strike", &mut rng).unwrap();
        let outcome = events
            .iter()
            .find_map(|e| match e {
                CombatEvent::Victory(outcome) => Some(outcome.clone()),
                _ => None,
            })
            .unwrap();
        // 30 XP and 20 gold, times 1.5
        assert_eq!(outcome.xp_gained, 45);
        assert_eq!(outcome.gold_gained, 30);
        assert_eq!(player.xp, 45);
        assert_eq!(player.gold, 30);
    }

    #[test]
    fn test_peer_heal_lands_on_mirror() {
        let mut player = create_player("knight", 0).unwrap();
        let mut mirror = dummy(100, Element::Water);
        mirror.current_hp = 40;
        let mut session =
            CombatSession::new(mirror, CombatMode::Online).with_first_turn(Side::Opponent);

        let heal = ActionResult {
            ability_name: "Mend".to_string(),
            element: Element::Water,
            damage: 0,
            heal: 30,
            is_critical: false,
        };
        session.receive_attack(&mut player, &heal);
        assert_eq!(session.enemy().current_hp, 70);
        assert_eq!(player.current_hp, player.max_hp);
        assert_eq!(session.turn(), Side::Player);
    }

    #[test]
    fn test_busy_animation_blocks_input() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut player = create_player("knight", 0).unwrap();
        let mut session = CombatSession::local(dummy(500, Element::Physical));
        session.set_animation(AnimationPhase::Lunging);
        assert_eq!(
            session.use_ability(&mut player, "strike", &mut rng),
            Err(ActionRejected::Busy)
        );
    }

    #[test]
    fn test_abandon_is_neutral() {
        let mut player = create_player("knight", 0).unwrap();
        let before = player.clone();
        let mut session = CombatSession::local(dummy(500, Element::Physical));
        assert_eq!(session.abandon(), vec![CombatEvent::Abandoned]);
        assert_eq!(session.phase(), CombatPhase::Abandoned);
        assert!(session.abandon().is_empty());
        player.clamp();
        assert_eq!(player, before);
    }
}
