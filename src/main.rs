//! Flappy Haunt headless runner
//!
//! Plays sessions with the demo controller at a jittered frame rate, logs
//! what happens and keeps the best score in a JSON file.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use flappy_haunt::persistence::JsonFileStore;
    use flappy_haunt::sim::autopilot::should_flap;
    use flappy_haunt::{
        Collaborators, Command, EventLog, GameConfig, GameEvent, GamePhase, LogSink, Session,
    };

    /// Nominal frame interval; actual frames vary around it
    const FRAME: f64 = 1.0 / 60.0;

    #[derive(Debug, Parser)]
    #[command(name = "flappy-haunt", about = "Run Flappy Haunt sessions headlessly")]
    struct Cli {
        /// JSON config file (missing fields use defaults)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Obstacle seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Where the best score is kept
        #[arg(long, default_value = "flappy-haunt-best.json")]
        best_file: PathBuf,

        /// Number of sessions to play
        #[arg(long, default_value_t = 1)]
        runs: u32,

        /// Give up on a session after this many simulated seconds
        #[arg(long, default_value_t = 120.0)]
        max_seconds: f64,

        /// Print the final snapshot of each session as JSON
        #[arg(long)]
        json: bool,
    }

    pub fn run() -> Result<()> {
        flappy_haunt::platform::init_logging();
        let cli = Cli::parse();

        let config = match &cli.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        let seed = cli.seed.unwrap_or_else(rand::random);
        log::info!("Flappy Haunt (headless) starting with seed {seed}");

        let events = EventLog::new();
        let collaborators = Collaborators::default()
            .with_store(JsonFileStore::new(&cli.best_file))
            .with_sink(events.clone())
            .with_sink(LogSink);
        let mut session = Session::with_collaborators(config, seed, collaborators)
            .context("invalid game configuration")?;

        // Frame jitter is independent of the obstacle stream
        let mut jitter = Pcg32::seed_from_u64(seed.wrapping_add(1));
        let height = session.config().field.height;
        let mut now = 0.0f64;

        for run in 1..=cli.runs {
            events.drain();
            session.apply(Command::ResetAndStart, now);
            let started = now;

            while session.phase() != GamePhase::GameOver && now - started < cli.max_seconds {
                now += FRAME * jitter.random_range(0.5..1.5);
                if should_flap(&session.snapshot(), height) {
                    session.apply(Command::Flap, now);
                }
                session.advance(now);
            }

            if session.phase() != GamePhase::GameOver {
                log::warn!("Run {run} hit the {}s limit", cli.max_seconds);
            }

            let stats = session.stats();
            let flaps = events.count(|e| *e == GameEvent::Flap);
            let new_best = events.count(|e| matches!(e, GameEvent::GameOver { new_best: true, .. }));
            println!(
                "run {run}: score {} | best {} | lives {} | hearts {} | flaps {flaps} | {:.1}s{}",
                stats.score,
                stats.best,
                stats.lives,
                stats.hearts_collected,
                now - started,
                if new_best > 0 { " | new best!" } else { "" },
            );

            if cli.json {
                let json = serde_json::to_string_pretty(&session.snapshot())
                    .context("failed to serialize snapshot")?;
                println!("{json}");
            }
        }

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser front end drives `Session` directly
    flappy_haunt::platform::init_logging();
}
