//! Odyssey Headless Balance Simulator
//!
//! Plays generated encounters back to back with the automatic battle policy and reports
//! progression. Uses the same combat session as the CLI.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --battles N     Encounters per run (default: 200)
//!   --seed N        RNG seed (default: 42)
//!   --runs N        Number of runs with incrementing seeds (default: 1)
//!   --class ID      Character class (default: knight)
//!   --prestige N    Starting prestige rank (default: 0)
//!   --boss-every N  Every Nth encounter is a boss (default: 10, 0 disables)
//!   --config FILE   Engine config JSON
//!   --minigame S    Minigame score applied to every encounter (barrage:N, mash:N, timing:X)
//!   --quiet         Only one summary line per run

use odyssey::character::{apply_prestige_with, can_prestige, create_player_with, Player};
use odyssey::combat::{CombatEvent, CombatPhase, CombatSession};
use odyssey::core::{EngineConfig, ProgressionRules};
use odyssey::enemies::{encounter_level, generate_enemy, make_boss};
use odyssey::minigame::MinigameScore;
use odyssey::town::{respawn, rest};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

// ── CLI Configuration ────────────────────────────────────────────────

struct SimConfig {
    battles: u32,
    seed: u64,
    runs: u32,
    class_id: String,
    prestige: u32,
    boss_every: u32,
    config_path: Option<PathBuf>,
    minigame: Option<MinigameScore>,
    quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            battles: 200,
            seed: 42,
            runs: 1,
            class_id: "knight".to_string(),
            prestige: 0,
            boss_every: 10,
            config_path: None,
            minigame: None,
            quiet: false,
        }
    }
}

fn number<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> T {
    match value.and_then(|v| v.parse().ok()) {
        Some(n) => n,
        None => {
            eprintln!("{flag} requires a number");
            process::exit(1);
        }
    }
}

fn parse_args() -> SimConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--battles" => {
                i += 1;
                config.battles = number(flag, args.get(i));
            }
            "--seed" => {
                i += 1;
                config.seed = number(flag, args.get(i));
            }
            "--runs" => {
                i += 1;
                config.runs = number(flag, args.get(i));
            }
            "--prestige" => {
                i += 1;
                config.prestige = number(flag, args.get(i));
            }
            "--boss-every" => {
                i += 1;
                config.boss_every = number(flag, args.get(i));
            }
            "--class" => {
                i += 1;
                match args.get(i) {
                    Some(id) => config.class_id = id.clone(),
                    None => {
                        eprintln!("--class requires a class id");
                        process::exit(1);
                    }
                }
            }
            "--config" => {
                i += 1;
                config.config_path = args.get(i).map(PathBuf::from);
            }
            "--minigame" => {
                i += 1;
                match args.get(i).map(|s| s.parse::<MinigameScore>()) {
                    Some(Ok(score)) => config.minigame = Some(score),
                    Some(Err(e)) => {
                        eprintln!("{e}");
                        process::exit(1);
                    }
                    None => {
                        eprintln!("--minigame requires a score");
                        process::exit(1);
                    }
                }
            }
            "--quiet" => config.quiet = true,
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }
    config
}

fn print_usage() {
    eprintln!(
        "Odyssey Headless Balance Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --battles N     Encounters per run (default: 200)\n\
         \x20 --seed N        RNG seed (default: 42)\n\
         \x20 --runs N        Number of runs with incrementing seeds (default: 1)\n\
         \x20 --class ID      Character class (default: knight)\n\
         \x20 --prestige N    Starting prestige rank (default: 0)\n\
         \x20 --boss-every N  Every Nth encounter is a boss (default: 10, 0 disables)\n\
         \x20 --config FILE   Engine config JSON\n\
         \x20 --minigame S    Minigame score applied to every encounter\n\
         \x20 --quiet         Only one summary line per run\n\
         \x20 --help, -h      Show this help"
    );
}

// ── Simulation Statistics ────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
struct SimStats {
    victories: u64,
    defeats: u64,
    fled: u64,
    boss_kills: u64,
    boss_drops: u64,
    crits: u64,
    total_xp: u64,
    total_gold: u64,
    gold_lost: u64,
    best_streak: u32,
    prestiges: u32,
    final_level: u32,
    final_prestige: u32,
    final_gold: u32,
    final_weapon: String,
}

impl SimStats {
    fn record(&mut self, events: &[CombatEvent], phase: CombatPhase, is_boss: bool) {
        for event in events {
            match event {
                CombatEvent::AttackResolved {
                    is_critical: true, ..
                } => self.crits += 1,
                CombatEvent::Victory(outcome) => {
                    self.total_xp += outcome.xp_gained as u64;
                    self.total_gold += outcome.gold_gained as u64;
                    if outcome.boss_drop.is_some() {
                        self.boss_drops += 1;
                    }
                }
                _ => {}
            }
        }
        match phase {
            CombatPhase::Victory => {
                self.victories += 1;
                if is_boss {
                    self.boss_kills += 1;
                }
            }
            CombatPhase::Defeat => self.defeats += 1,
            _ => self.fled += 1,
        }
    }

    fn finalize(&mut self, player: &Player) {
        self.final_level = player.level;
        self.final_prestige = player.prestige;
        self.final_gold = player.gold;
        self.final_weapon = player.weapon.name.clone();
    }
}

fn run_simulation(
    config: &SimConfig,
    engine: &EngineConfig,
    rules: &ProgressionRules,
    seed: u64,
) -> Option<SimStats> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut player = match create_player_with(&config.class_id, config.prestige, rules) {
        Ok(player) => player,
        Err(e) => {
            eprintln!("Cannot create character: {e}");
            return None;
        }
    };
    let mut stats = SimStats::default();
    let loot_multiplier = config
        .minigame
        .as_ref()
        .map_or(1.0, |score| engine.loot_multiplier(score));

    for battle in 1..=config.battles {
        let level = encounter_level(player.level, player.win_streak);
        let mut enemy = generate_enemy(level, &mut rng);
        let is_boss = config.boss_every > 0 && battle % config.boss_every == 0;
        if is_boss {
            enemy = make_boss(enemy);
        }

        let mut session = CombatSession::local(enemy)
            .with_rules(rules.clone())
            .with_loot_multiplier(loot_multiplier);
        let events = session.auto_battle(&mut player, &mut rng);
        stats.record(&events, session.phase(), is_boss);
        stats.best_streak = stats.best_streak.max(player.win_streak);

        match session.phase() {
            CombatPhase::Defeat => stats.gold_lost += respawn(&mut player) as u64,
            _ => rest(&mut player),
        }
        if can_prestige(&player) && apply_prestige_with(&mut player, rules).is_ok() {
            stats.prestiges += 1;
        }
    }

    stats.finalize(&player);
    Some(stats)
}

fn print_summary(stats: &SimStats, seed: u64, config: &SimConfig) {
    if config.quiet {
        println!(
            "seed={seed} level={} prestige={} wins={} losses={} fled={} bosses={} gold={}",
            stats.final_level,
            stats.final_prestige,
            stats.victories,
            stats.defeats,
            stats.fled,
            stats.boss_kills,
            stats.final_gold,
        );
        return;
    }

    println!("============================================================");
    println!("  Odyssey Simulation Report  (seed={seed})");
    println!("============================================================");
    println!();
    println!(
        "Class: {}  |  Battles: {}  |  Starting prestige: P{}",
        config.class_id, config.battles, config.prestige
    );
    println!();

    println!("--- Final State ---");
    println!(
        "Level: {}  |  Prestige: P{}  |  Gold: {}",
        stats.final_level, stats.final_prestige, stats.final_gold
    );
    println!("Weapon: {}", stats.final_weapon);
    println!();

    println!("--- Combat ---");
    println!(
        "Wins: {}  |  Losses: {}  |  Fled: {}  |  W/L: {:.1}",
        stats.victories,
        stats.defeats,
        stats.fled,
        if stats.defeats > 0 {
            stats.victories as f64 / stats.defeats as f64
        } else {
            stats.victories as f64
        }
    );
    println!(
        "Boss kills: {}  |  Boss drops: {}  |  Crits: {}",
        stats.boss_kills, stats.boss_drops, stats.crits
    );
    println!(
        "Best streak: {}  |  Prestiges: {}",
        stats.best_streak, stats.prestiges
    );
    println!();

    println!("--- Economy ---");
    println!(
        "Total XP: {}  |  Total gold: {}  |  Gold lost to respawns: {}",
        stats.total_xp, stats.total_gold, stats.gold_lost
    );
    println!();
}

fn print_multi_run_summary(all_stats: &[SimStats]) {
    let n = all_stats.len() as f64;
    println!("============================================================");
    println!("  Aggregate Results ({} runs)", all_stats.len());
    println!("============================================================");
    println!();

    let avg = |vals: &[u64]| -> f64 { vals.iter().sum::<u64>() as f64 / n };
    let min_max = |vals: &[u64]| -> (u64, u64) {
        (
            *vals.iter().min().unwrap_or(&0),
            *vals.iter().max().unwrap_or(&0),
        )
    };

    let rows: [(&str, Vec<u64>); 5] = [
        (
            "Final Level",
            all_stats.iter().map(|s| s.final_level as u64).collect(),
        ),
        ("Wins", all_stats.iter().map(|s| s.victories).collect()),
        ("Losses", all_stats.iter().map(|s| s.defeats).collect()),
        ("Boss Kills", all_stats.iter().map(|s| s.boss_kills).collect()),
        ("Total XP", all_stats.iter().map(|s| s.total_xp).collect()),
    ];

    println!("{:<20} {:>10} {:>10} {:>10}", "Metric", "Min", "Avg", "Max");
    println!("{}", "-".repeat(52));
    for (label, vals) in &rows {
        let (min, max) = min_max(vals);
        println!("{:<20} {:>10} {:>10.1} {:>10}", label, min, avg(vals), max);
    }
    println!();
}

// ── Main ─────────────────────────────────────────────────────────────

fn main() {
    let config = parse_args();

    let engine_config = match &config.config_path {
        Some(path) => match EngineConfig::load(path) {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("Failed to load {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };

    // Engine logs are noise across hundreds of battles; opt in with RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if !config.quiet {
        eprintln!(
            "Simulator: {} battle(s) x {} run(s), seed={}, class={}, prestige=P{}, ruleset={:?}",
            config.battles,
            config.runs,
            config.seed,
            config.class_id,
            config.prestige,
            engine_config.ruleset,
        );
    }

    let rules = engine_config.progression_rules();
    let mut all_stats = Vec::with_capacity(config.runs as usize);
    for run in 0..config.runs {
        let seed = config.seed + run as u64;
        let Some(stats) = run_simulation(&config, &engine_config, &rules, seed) else {
            process::exit(1);
        };
        print_summary(&stats, seed, &config);
        all_stats.push(stats);
    }

    if all_stats.len() > 1 && !config.quiet {
        print_multi_run_summary(&all_stats);
    }
}
