//! Reaction chamber simulation
//!
//! Prompts for a population mode and particle count, then drives the tick
//! engine at a fixed cadence, logging a population summary as it runs.

mod input;

use reaction_simulation::{SimConfig, SimParams, Simulation};
use std::io;
use std::time::{Duration, Instant};

const TICK_INTERVAL: Duration = Duration::from_millis(16);
const LOG_EVERY_TICKS: u64 = 256;

struct Options {
    params: SimParams,
    seed: Option<u64>,
    max_ticks: Option<u64>,
}

/// Parse `--temperature`, `--friction`, `--seed` and `--max-ticks` flags.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options {
        params: SimParams::default(),
        seed: None,
        max_ticks: None,
    };

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("{name} requires a value"))
        };
        match flag.as_str() {
            "--temperature" => {
                options.params.temperature = value("--temperature")?
                    .parse()
                    .map_err(|e| format!("invalid --temperature: {e}"))?;
            }
            "--friction" => {
                options.params.friction = value("--friction")?
                    .parse()
                    .map_err(|e| format!("invalid --friction: {e}"))?;
            }
            "--seed" => {
                options.seed = Some(
                    value("--seed")?
                        .parse()
                        .map_err(|e| format!("invalid --seed: {e}"))?,
                );
            }
            "--max-ticks" => {
                options.max_ticks = Some(
                    value("--max-ticks")?
                        .parse()
                        .map_err(|e| format!("invalid --max-ticks: {e}"))?,
                );
            }
            other => return Err(format!("unknown flag {other:?}")),
        }
    }
    Ok(options)
}

fn run(options: Options) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut stdout = io::stdout();
    let mode = input::read_mode(&mut stdin, &mut stdout)?;
    let count = input::read_count(&mut stdin, &mut stdout)?;

    let config = SimConfig {
        seed: options.seed,
        ..SimConfig::default()
    };
    let mut sim = Simulation::new(mode, count, config)?;
    let params = options.params.clamped();
    log::info!(
        "starting: {count} particles, temperature {}, friction {}",
        params.temperature,
        params.friction
    );

    let start = Instant::now();
    let mut merges_total = 0;
    loop {
        let stats = sim.step(&params, start.elapsed());
        merges_total += stats.collisions.merges;

        // The render boundary: a frontend would upload this copy.
        let snapshot = sim.snapshot();

        if sim.tick() % LOG_EVERY_TICKS == 0 {
            log::info!(
                "tick {}: {} particles, {} reactions so far",
                snapshot.tick,
                snapshot.len(),
                merges_total
            );
        }
        if let Some(max) = options.max_ticks {
            if sim.tick() >= max {
                log::info!("finished after {} ticks", sim.tick());
                return Ok(());
            }
        }

        std::thread::sleep(TICK_INTERVAL);
    }
}

fn main() {
    env_logger::init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_flags_and_defaults() {
        let options = parse_args(std::iter::empty()).unwrap();
        assert_eq!(options.params.temperature, 0.5);
        assert_eq!(options.params.friction, 0.0);
        assert!(options.seed.is_none());
        assert!(options.max_ticks.is_none());

        let args = ["--temperature", "0.8", "--seed", "42", "--max-ticks", "100"]
            .into_iter()
            .map(String::from);
        let options = parse_args(args).unwrap();
        assert_eq!(options.params.temperature, 0.8);
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.max_ticks, Some(100));
    }

    #[test]
    fn args_reject_unknown_and_missing_values() {
        assert!(parse_args(["--warp"].into_iter().map(String::from)).is_err());
        assert!(parse_args(["--seed"].into_iter().map(String::from)).is_err());
        assert!(parse_args(["--friction", "sticky"].into_iter().map(String::from)).is_err());
    }
}
