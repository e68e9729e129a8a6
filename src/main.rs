//! Lane Runner entry point
//!
//! Headless demo: the autopilot plays, sound cues go to the log and the HUD
//! is printed whenever a run ends.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use lane_runner::audio::{AudioBackend, AudioManager, LogBackend};
use lane_runner::renderer::{FrameSnapshot, Renderer, TextRenderer};
use lane_runner::sim::{GameState, TickInput, tick};
use lane_runner::{Settings, Tuning};

const USAGE: &str = "usage: lane-runner [--seed N] [--frames N] [--runs N] \
                     [--tuning FILE] [--settings FILE] [--json]";

/// Command line options
#[derive(Debug)]
struct Options {
    seed: u64,
    frames: u64,
    runs: u32,
    tuning: Option<PathBuf>,
    settings: Option<PathBuf>,
    json: bool,
}

impl Default for Options {
    fn default() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self {
            seed,
            frames: 60 * 60 * 5, // five minutes at 60 FPS
            runs: 3,
            tuning: None,
            settings: None,
            json: false,
        }
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, String> {
    fn number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
        let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
        value
            .parse()
            .map_err(|_| format!("{flag}: `{value}` is not a number"))
    }

    let mut options = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => options.seed = number(&arg, args.next())?,
            "--frames" => options.frames = number(&arg, args.next())?,
            "--runs" => options.runs = number(&arg, args.next())?,
            "--tuning" => {
                options.tuning = Some(args.next().ok_or("--tuning needs a path")?.into())
            }
            "--settings" => {
                options.settings = Some(args.next().ok_or("--settings needs a path")?.into())
            }
            "--json" => options.json = true,
            other => return Err(format!("unknown argument `{other}`")),
        }
    }
    Ok(options)
}

/// Settings may lower the tuning's particle cap, never raise it
fn particle_cap(tuning: &Tuning, settings: &Settings) -> usize {
    tuning.max_particles.min(settings.max_particles())
}

fn run(options: Options) -> lane_runner::Result<()> {
    let settings = match &options.settings {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let mut tuning = match &options.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    tuning.max_particles = particle_cap(&tuning, &settings);

    let mut audio = AudioManager::open(|| Ok(Box::new(LogBackend) as Box<dyn AudioBackend>));
    audio.apply_settings(&settings);

    let mut renderer = TextRenderer::new();
    let mut state = GameState::new(options.seed, tuning);
    log::info!(
        "Lane Runner starting: seed {}, up to {} frames, {} runs",
        options.seed,
        options.frames,
        options.runs
    );

    let mut runs = 0;
    for _ in 0..options.frames {
        let input = if state.is_game_over() {
            TickInput {
                restart: true,
                ..Default::default()
            }
        } else {
            TickInput {
                autopilot: true,
                ..Default::default()
            }
        };

        tick(&mut state, &input);
        audio.handle_events(&state.drain_events());

        if state.is_game_over() {
            runs += 1;
            let snapshot = FrameSnapshot::capture(&state);
            renderer.draw(&snapshot);
            if settings.show_hud {
                for line in renderer.lines() {
                    println!("{line}");
                }
                println!();
            }
            if runs >= options.runs {
                break;
            }
        }
    }

    if !state.is_game_over() {
        log::info!(
            "Frame budget spent mid-run at score {} ({} frames)",
            state.score,
            state.frame
        );
    }

    println!("Leaderboard:");
    if state.leaderboard.is_empty() {
        println!("  (no scored runs)");
    }
    for (rank, entry) in state.leaderboard.entries.iter().enumerate() {
        println!(
            "{:>2}. {:>8}  coins {:>4}  frames {:>6}",
            rank + 1,
            entry.score,
            entry.coins,
            entry.frames
        );
    }

    if options.json {
        let snapshot = FrameSnapshot::capture(&state);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
