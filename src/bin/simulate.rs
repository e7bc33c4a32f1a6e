//! Bout balance simulator CLI.
//!
//! Pits an AI-driven player against generated opponents to check win rates
//! and fight length at a given level.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 100 bouts at level 1
//!   cargo run --bin simulate -- -n 500 -l 5    # 500 bouts at level 5
//!   cargo run --bin simulate -- --seed 42 -v   # Reproducible, with first log

use dohyo::arena::generate_opponent;
use dohyo::character::{Attributes, Character};
use dohyo::combat::{
    choose_action_for, execute_action, initialize_combat, pass_turn, progression_table,
    OpponentAction, Side,
};
use dohyo::skills::SkillCatalog;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::env;

const MAX_TURNS: u32 = 200;

struct SimConfig {
    num_bouts: u32,
    player_level: u32,
    seed: Option<u64>,
    verbose: bool,
    show_pacing: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_bouts: 100,
            player_level: 1,
            seed: None,
            verbose: false,
            show_pacing: false,
        }
    }
}

#[derive(Default)]
struct SimReport {
    wins: u32,
    losses: u32,
    stalemates: u32,
    total_turns: u64,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("=== DOHYO BOUT SIMULATOR ===");
    println!();
    println!("Configuration:");
    println!("  Bouts:        {}", config.num_bouts);
    println!("  Player level: {}", config.player_level);
    if let Some(seed) = config.seed {
        println!("  Seed:         {}", seed);
    }
    println!();

    if config.show_pacing {
        print_pacing_table();
    }

    let report = run_simulation(&config);

    let finished = report.wins + report.losses;
    println!("Results:");
    println!("  Wins:       {}", report.wins);
    println!("  Losses:     {}", report.losses);
    println!("  Stalemates: {}", report.stalemates);
    if finished > 0 {
        println!(
            "  Win rate:   {:.1}%",
            report.wins as f64 / finished as f64 * 100.0
        );
        println!(
            "  Avg turns:  {:.1}",
            report.total_turns as f64 / finished as f64
        );
    }
}

fn run_simulation(config: &SimConfig) -> SimReport {
    let catalog = SkillCatalog::standard();
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut player = Character::new("Challenger", "Japan", Attributes::uniform(5));
    player.level = config.player_level;
    player.learned_skills = vec![
        "basic-push".to_string(),
        "basic-defense".to_string(),
        "meditation".to_string(),
    ];

    let mut report = SimReport::default();
    for bout in 0..config.num_bouts {
        let opponent = generate_opponent(config.player_level, &mut rng);
        let mut state = initialize_combat(
            player.to_combat_character(),
            opponent.to_combat_character(),
        );

        while !state.game_over && state.turn <= MAX_TURNS {
            let side = state.current_turn;
            state = match choose_action_for(catalog, &state, side, &mut rng) {
                OpponentAction::UseSkill(skill_id) => {
                    match execute_action(catalog, &state, &skill_id, side.other()) {
                        Ok(next) => next,
                        // The policy pre-filters, so this is unreachable in
                        // practice; pass keeps the bout moving regardless.
                        Err(_) => pass_turn(&state),
                    }
                }
                OpponentAction::Pass => pass_turn(&state),
            };
        }

        if config.verbose && bout == 0 {
            print_bout_log(&state, &opponent.name);
        }

        match state.winner {
            Some(Side::Player) => {
                report.wins += 1;
                report.total_turns += state.turn as u64;
            }
            Some(Side::Opponent) => {
                report.losses += 1;
                report.total_turns += state.turn as u64;
            }
            None => report.stalemates += 1,
        }
    }
    report
}

fn print_bout_log(state: &dohyo::CombatState, opponent_name: &str) {
    println!("--- First bout: Challenger vs {} ---", opponent_name);
    for entry in &state.log {
        let numbers = match (entry.damage, entry.healing) {
            (Some(d), _) => format!(" [{} dmg]", d),
            (None, Some(h)) => format!(" [{} heal]", h),
            _ => String::new(),
        };
        println!(
            "  T{:3} {} -> {}: {}{}",
            entry.turn, entry.actor, entry.target, entry.action, numbers
        );
    }
    match state.winner {
        Some(Side::Player) => println!("  Winner: Challenger"),
        Some(Side::Opponent) => println!("  Winner: {}", opponent_name),
        None => println!("  No winner (turn limit)"),
    }
    println!();
}

fn print_pacing_table() {
    println!("Energy pacing by level:");
    println!("  lvl   max   recov  basic  inter  adv   legend");
    for p in progression_table() {
        println!(
            "  {:3}   {:3}   {:5}  {:5}  {:5}  {:3}   {:6}",
            p.level,
            p.max_energy,
            p.energy_recovery,
            p.basic_skill_cost,
            p.intermediate_skill_cost,
            p.advanced_skill_cost,
            p.legendary_skill_cost
        );
    }
    println!();
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--bouts" => {
                if i + 1 < args.len() {
                    config.num_bouts = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-l" | "--level" => {
                if i + 1 < args.len() {
                    config.player_level = args[i + 1].parse().unwrap_or(1);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbose = true;
            }
            "--pacing" => {
                config.show_pacing = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Dohyo Bout Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --bouts <N>     Number of bouts to simulate (default: 100)");
    println!("    -l, --level <L>     Player level (default: 1)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -v, --verbose       Print the full log of the first bout");
    println!("    --pacing            Show the energy pacing table");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                    # Default run");
    println!("    cargo run --bin simulate -- -n 500 -l 5    # 500 bouts at level 5");
    println!("    cargo run --bin simulate -- --seed 42 -v   # Reproducible with log");
}
