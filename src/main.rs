//! Ring Dodge entry point
//!
//! The browser build is driven from the page through `ring_dodge::web`.
//! Natively this runs a headless session with the autopilot at the
//! controls and reports how long it survived.
//!
//! Usage: `ring-dodge [--seed N] [--tuning FILE] [--seconds SECONDS]`

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), ring_dodge::GameError> {
    use clap::Parser;
    use ring_dodge::sim::GameEvent;
    use ring_dodge::{HighScores, Session, Tuning};

    env_logger::init();
    log::info!("Ring Dodge (native) starting...");

    let args = Args::parse();
    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    let mut session = Session::new(tuning, args.seed());
    session.set_autopilot(true);

    // 60 fps frames until the hit or the time limit
    let frame_ms = 1000.0 / 60.0;
    let max_frames = (args.seconds * 60.0) as u64;
    let mut spawned = 0u32;
    for _ in 0..max_frames {
        session.update(frame_ms);
        for event in session.drain_events() {
            match event {
                GameEvent::ProjectileSpawned { .. } => spawned += 1,
                GameEvent::SpawnIntervalChanged { interval_ms } => {
                    log::info!("Spawn interval {} ms", interval_ms);
                }
                GameEvent::GameOver { score } => {
                    log::info!("Hit after dodging {} projectiles", spawned);
                    println!("Game over - score: {}", score);
                }
                GameEvent::SessionStarted { .. } => {}
            }
        }
        if session.is_game_over() {
            break;
        }
    }

    let state = session.state();
    if !session.is_game_over() {
        println!("Survived {:.1}s - score: {}", state.elapsed_secs(), state.score);
    }

    let mut high_scores = HighScores::load();
    if let Some(rank) = high_scores.add_score(state.score, state.elapsed_secs(), 0.0) {
        log::info!("Rank #{} this run", rank);
        high_scores.save()?;
    }
    Ok(())
}

/// Headless autopilot run
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, clap::Parser)]
#[command(name = "ring-dodge", about = "Run a headless Ring Dodge session on autopilot")]
struct Args {
    /// Session seed. Defaults to the current time.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
    /// JSON tuning file overriding the default balance
    #[arg(long, value_name = "FILE")]
    tuning: Option<std::path::PathBuf>,
    /// Give up after this many seconds survived
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = 120.0,
        value_parser = parse_seconds
    )]
    seconds: f32,
}

#[cfg(not(target_arch = "wasm32"))]
impl Args {
    fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_seconds(value: &str) -> Result<f32, String> {
    let secs: f32 = value
        .parse()
        .map_err(|e| format!("`{value}` is not a number: {e}"))?;
    if secs.is_finite() && secs > 0.0 {
        Ok(secs)
    } else {
        Err(format!("`{value}` must be a positive number of seconds"))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["ring-dodge"]).unwrap();
        assert_eq!(args.seed, None);
        assert_eq!(args.tuning, None);
        assert_eq!(args.seconds, 120.0);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "ring-dodge",
            "--seed",
            "42",
            "--tuning",
            "balance.json",
            "--seconds",
            "2.5",
        ])
        .unwrap();
        assert_eq!(args.seed(), 42);
        assert_eq!(args.tuning, Some("balance.json".into()));
        assert_eq!(args.seconds, 2.5);
    }

    #[test]
    fn test_flag_without_value_is_rejected() {
        assert!(Args::try_parse_from(["ring-dodge", "--seed"]).is_err());
        // A flag is never taken as another flag's value
        assert!(Args::try_parse_from(["ring-dodge", "--tuning", "--seed", "1"]).is_err());
    }

    #[test]
    fn test_seconds_must_be_positive() {
        for bad in ["-5", "0", "NaN", "inf", "soon"] {
            assert!(
                Args::try_parse_from(["ring-dodge", "--seconds", bad]).is_err(),
                "accepted --seconds {bad}"
            );
        }
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["ring-dodge", "--speed", "3"]).is_err());
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is ring_dodge::web::start, this is just to satisfy the compiler
}
