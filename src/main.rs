//! Mancala - terminal client
//!
//! Thin text-mode client over the engine: plays Kalah or Ayo at the
//! terminal, saves and resumes games by name, and shows stored player
//! profiles.

use clap::{Parser, Subcommand, ValueEnum};
use mancala_rs::{
    core::{Player, PlayerId},
    game::{MancalaGame, SaveDir},
    rules::RulesKind,
    MancalaError, Result,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Variant {
    /// Kalah rules: own store counts, landing there grants a bonus turn
    Kalah,
    /// Ayo rules: multi-lap relay sowing, no bonus turns
    Ayo,
}

impl From<Variant> for RulesKind {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Kalah => RulesKind::Kalah,
            Variant::Ayo => RulesKind::Ayo,
        }
    }
}

#[derive(Parser)]
#[command(name = "mancala")]
#[command(about = "Mancala (Kalah and Ayo) rule engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game at the terminal
    Play {
        /// Ruleset to play under
        #[arg(long, value_enum, default_value = "kalah")]
        variant: Variant,

        /// Name for player one
        #[arg(long, default_value = "Player 1")]
        player1: String,

        /// Name for player two
        #[arg(long, default_value = "Player 2")]
        player2: String,

        /// Directory for saved games and profiles
        #[arg(long, default_value = "assets")]
        save_dir: PathBuf,

        /// Resume a game previously saved under this name
        #[arg(long, value_name = "NAME")]
        load: Option<String>,
    },

    /// Show a saved player profile
    Profile {
        /// Name the player was saved under
        name: String,

        /// Directory holding saved profiles
        #[arg(long, default_value = "assets")]
        save_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Play {
            variant,
            player1,
            player2,
            save_dir,
            load,
        } => {
            let saves = SaveDir::new(save_dir);
            let game = match load {
                Some(name) => saves.load_game(&name)?,
                None => MancalaGame::new(variant.into(), Player::new(player1), Player::new(player2)),
            };
            play(game, &saves)
        }
        Commands::Profile { name, save_dir } => {
            let player = SaveDir::new(save_dir).load_player(&name)?;
            print_profile(&player);
            Ok(())
        }
    }
}

fn play(mut game: MancalaGame, saves: &SaveDir) -> Result<()> {
    println!("{} - enter a pit number, 'save <name>', or 'quit'", game.variant());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if game.is_game_over() {
            finish(&mut game, saves)?;
            return Ok(());
        }

        print!("{}", game.rules().board());
        let mover = game.current_player();
        print!("{} ({})> ", game.player(mover), mover);
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        match line.trim() {
            "" => continue,
            "quit" | "q" => return Ok(()),
            "board" => continue,
            input => {
                if let Some(name) = input.strip_prefix("save ") {
                    saves.save_game(name.trim(), &game)?;
                    println!("saved as '{}'", name.trim());
                    continue;
                }
                let Ok(pit) = input.parse::<u8>() else {
                    println!("unrecognized input '{input}'");
                    continue;
                };
                match game.make_move(pit) {
                    Ok(remaining) => {
                        println!("{remaining} stones left on your side");
                        if game.is_bonus() {
                            println!("bonus turn!");
                        }
                        game.advance_turn();
                    }
                    Err(err @ MancalaError::InvalidMove { .. }) => println!("{err}"),
                    Err(err) => return Err(err),
                }
            }
        }
    }
}

fn finish(game: &mut MancalaGame, saves: &SaveDir) -> Result<()> {
    let winner = game.finish()?;
    print!("{}", game.rules().board());
    match winner {
        Some(id) => println!(
            "{} wins, {} to {}",
            game.player(id),
            game.store_count(id),
            game.store_count(id.opponent())
        ),
        None => println!("tie game, {} each", game.store_count(PlayerId::One)),
    }

    for id in [PlayerId::One, PlayerId::Two] {
        let player = game.player(id);
        saves.save_player(player.name().as_str(), player)?;
    }
    Ok(())
}

fn print_profile(player: &Player) {
    println!("profile: {}", player.name());
    for kind in [RulesKind::Kalah, RulesKind::Ayo] {
        let record = player.profile().record(kind);
        println!(
            "  {kind}: {} games, {} wins, {} losses",
            record.games,
            record.wins,
            record.losses()
        );
    }
}
