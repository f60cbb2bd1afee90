use odyssey::character::{available_classes, create_player_with, Player, SaveManager, Storage};
use odyssey::combat::{CombatEvent, CombatPhase, CombatSession};
use odyssey::core::EngineConfig;
use odyssey::enemies::{
    encounter_level, make_boss, EnemyGenerator, ProceduralGenerator, TemplateFlavor,
};
use odyssey::minigame::MinigameScore;
use odyssey::pvp::{decode_token, encode_token};
use odyssey::town::{respawn, rest};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

struct Cli {
    command: Vec<String>,
    config_path: Option<PathBuf>,
    class_id: Option<String>,
    seed: Option<u64>,
    boss: bool,
    animate: bool,
    minigame: Option<String>,
}

fn parse_args() -> Cli {
    let mut cli = Cli {
        command: Vec::new(),
        config_path: None,
        class_id: None,
        seed: None,
        boss: false,
        animate: false,
        minigame: None,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => cli.config_path = args.next().map(PathBuf::from),
            "--class" => cli.class_id = args.next(),
            "--seed" => cli.seed = args.next().and_then(|s| s.parse().ok()),
            "--boss" => cli.boss = true,
            "--animate" => cli.animate = true,
            "--minigame" => cli.minigame = args.next(),
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            _ => cli.command.push(arg),
        }
    }
    cli
}

fn print_usage() {
    println!("Elemental Odyssey - turn-based elemental combat\n");
    println!("Usage: odyssey [options] <command>\n");
    println!("Commands:");
    println!("  classes [prestige]       List the classes available at a prestige rank");
    println!("  new <class>              Create and save a new character");
    println!("  status                   Show the saved character");
    println!("  fight                    Fight a generated enemy with the saved character");
    println!("  token <class> <level>    Print a challenge token");
    println!("  duel <token>             Duel a challenge token");
    #[cfg(feature = "online")]
    {
        println!("  host <port>              Host an online duel");
        println!("  join <url>               Join an online duel");
    }
    println!("\nOptions:");
    println!("  --config FILE   Engine config JSON");
    println!("  --class ID      Use a fresh character of this class instead of the save");
    println!("  --seed N        Seed the random source");
    println!("  --boss          Promote the generated enemy to a boss");
    println!("  --animate       Play animation cue delays in real time");
    println!("  --minigame S    Map minigame score for the fight: barrage:N, mash:N or timing:X");
}

fn rng_from(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn print_player(player: &Player) {
    println!(
        "{} (P{}) - Level {} {}  HP {}/{}  MP {}/{}  XP {}/{}  Gold {}  Streak {}",
        player.name,
        player.prestige,
        player.level,
        player.element,
        player.current_hp,
        player.max_hp,
        player.current_mp,
        player.max_mp,
        player.xp,
        player.max_xp,
        player.gold,
        player.win_streak,
    );
    println!("Weapon: {} (+{})", player.weapon.name, player.weapon.damage);
    let abilities: Vec<String> = player.abilities().into_iter().map(|a| a.name).collect();
    println!("Abilities: {}", abilities.join(", "));
}

fn play(events: &[CombatEvent], animate: bool) {
    if !animate {
        return;
    }
    for event in events {
        if let CombatEvent::Cue(cue) = event {
            std::thread::sleep(Duration::from_millis(cue.duration_ms));
        }
    }
}

fn print_log(session: &CombatSession) {
    for entry in session.log().entries() {
        let marker = if entry.is_crit { "!" } else { " " };
        println!("{marker} {}", entry.message);
    }
}

struct App {
    config: EngineConfig,
    cli: Cli,
}

impl App {
    fn storage(&self) -> Result<SaveManager, Box<dyn std::error::Error>> {
        let manager = match &self.config.save_dir {
            Some(dir) => SaveManager::in_dir(dir)?,
            None => SaveManager::new()?,
        };
        Ok(manager)
    }

    /// A fresh character of `--class`, else the saved one.
    fn character(&self) -> Result<Player, Box<dyn std::error::Error>> {
        let rules = self.config.progression_rules();
        if let Some(class_id) = &self.cli.class_id {
            return Ok(create_player_with(class_id, 0, &rules)?);
        }
        match self.storage()?.load()? {
            Some(player) => Ok(player),
            None => Err("no saved character; run `odyssey new <class>` first".into()),
        }
    }

    fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let command: Vec<&str> = self.cli.command.iter().map(String::as_str).collect();
        match command.as_slice() {
            ["classes"] => self.classes(0),
            ["classes", prestige] => self.classes(prestige.parse()?),
            ["new", class_id] => {
                let player = create_player_with(class_id, 0, &self.config.progression_rules())?;
                self.storage()?.save(&player)?;
                print_player(&player);
                Ok(())
            }
            ["status"] => {
                print_player(&self.character()?);
                Ok(())
            }
            ["fight"] => self.fight(),
            ["token", class_id, level] => {
                let mut player =
                    create_player_with(class_id, 0, &self.config.progression_rules())?;
                player.level = level.parse()?;
                println!("{}", encode_token(&player));
                Ok(())
            }
            ["duel", token] => self.duel(token),
            #[cfg(feature = "online")]
            ["host", port] => self.online(online::Role::Host(port.parse()?)),
            #[cfg(feature = "online")]
            ["join", url] => self.online(online::Role::Join(url.to_string())),
            _ => {
                print_usage();
                process::exit(1);
            }
        }
    }

    fn classes(&self, prestige: u32) -> Result<(), Box<dyn std::error::Error>> {
        for class in available_classes(prestige) {
            println!(
                "{:<12} {:<18} {:<9} HP {:>3}  MP {:>3}  {}",
                class.id,
                class.name,
                class.element.name(),
                class.base_hp,
                class.base_mp,
                class.description
            );
        }
        Ok(())
    }

    /// Loot multiplier from `--minigame`, 1.0 without one.
    fn loot_multiplier(&self) -> Result<f64, Box<dyn std::error::Error>> {
        let Some(score) = &self.cli.minigame else {
            return Ok(1.0);
        };
        let score: MinigameScore = score.parse()?;
        let multiplier = self.config.loot_multiplier(&score);
        info!(?score, multiplier, "minigame scored");
        Ok(multiplier)
    }

    fn fight(&self) -> Result<(), Box<dyn std::error::Error>> {
        let loot_multiplier = self.loot_multiplier()?;
        let mut rng = rng_from(self.cli.seed);
        let mut generator = match self.cli.seed {
            Some(seed) => ProceduralGenerator::seeded(seed),
            None => ProceduralGenerator::from_entropy(),
        };
        let mut player = self.character()?;
        let level = encounter_level(player.level, player.win_streak);
        let mut enemy = generator.generate(level);
        if self.cli.boss {
            enemy = make_boss(enemy);
        }

        let mut session = CombatSession::local(enemy)
            .with_rules(self.config.progression_rules())
            .with_loot_multiplier(loot_multiplier)
            .with_flavor(Box::new(TemplateFlavor::from_entropy()));
        let events = session.auto_battle(&mut player, &mut rng);
        play(&events, self.cli.animate);
        print_log(&session);

        match session.phase() {
            CombatPhase::Defeat => {
                let lost = respawn(&mut player);
                println!("You wake up in town, {lost} gold lighter.");
            }
            _ => rest(&mut player),
        }
        if self.cli.class_id.is_none() {
            self.storage()?.save(&player)?;
        }
        print_player(&player);
        Ok(())
    }

    fn duel(&self, token: &str) -> Result<(), Box<dyn std::error::Error>> {
        let challenger = decode_token(token).ok_or("invalid challenge token")?;
        let mut rng = rng_from(self.cli.seed);
        let mut player = self.character()?;
        let mut session = CombatSession::challenge(challenger);
        let events = session.auto_battle(&mut player, &mut rng);
        play(&events, self.cli.animate);
        print_log(&session);
        Ok(())
    }

    #[cfg(feature = "online")]
    fn online(&self, role: online::Role) -> Result<(), Box<dyn std::error::Error>> {
        let mut rng = rng_from(self.cli.seed);
        let mut player = self.character()?;
        online::run(role, &mut player, &mut rng)?;
        player.restore();
        Ok(())
    }
}

#[cfg(feature = "online")]
mod online {
    use odyssey::character::Player;
    use odyssey::combat::{DuelState, OnlineDuel};
    use odyssey::pvp::WsChannel;
    use rand::Rng;
    use std::time::Duration;

    pub enum Role {
        Host(u16),
        Join(String),
    }

    const POLL_INTERVAL: Duration = Duration::from_millis(50);

    /// Plays an online duel with the automatic policy. The host acts first.
    pub fn run(
        role: Role,
        player: &mut Player,
        rng: &mut impl Rng,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (channel, goes_first) = match role {
            Role::Host(port) => (runtime.block_on(WsChannel::host(port))?, true),
            Role::Join(url) => (runtime.block_on(WsChannel::connect(&url))?, false),
        };
        let mut duel = OnlineDuel::open(channel, player, goes_first)?;

        while duel.state() != DuelState::Ended {
            duel.poll(player);
            if duel.is_my_turn() {
                let ability = duel
                    .session()
                    .and_then(|session| session.suggest_ability(player));
                match ability {
                    Some(ability) => {
                        duel.use_ability(player, &ability.id, rng)?;
                    }
                    None => {
                        duel.abandon();
                    }
                }
            }
            std::thread::sleep(POLL_INTERVAL);
        }

        if let Some(session) = duel.session() {
            for entry in session.log().entries() {
                println!("{}", entry.message);
            }
        }
        println!("Duel over: {:?}", duel.outcome());
        Ok(())
    }
}

fn main() {
    let cli = parse_args();

    let config = match &cli.config_path {
        Some(path) => match EngineConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    info!(ruleset = ?config.ruleset, "odyssey starting");

    let app = App { config, cli };
    if let Err(e) = app.run() {
        error!(error = %e, "command failed");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
