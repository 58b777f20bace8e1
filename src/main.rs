//! Headless demo entry point
//!
//! Fast-forwards a seeded session and prints the accumulated detector
//! histogram next to the theory curve, for inspecting the engine without
//! a rendering layer.
//!
//! Usage: double-slit [MODE] [TICKS] [--observer] [--seed N] [--json]
//! where MODE is one of: wave, classical, beam, single

use double_slit::consts::*;
use double_slit::sim::{Mode, Regime, SimState, tick};
use double_slit::{bin_index, bin_start};

struct Args {
    mode: Mode,
    ticks: u64,
    observer: bool,
    seed: u64,
    json: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        mode: Mode::ElectronBeam,
        ticks: 20_000,
        observer: false,
        seed: 42,
        json: false,
    };

    let mut positional = 0;
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--observer" => args.observer = true,
            "--json" => args.json = true,
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                args.seed = value.parse().map_err(|_| format!("bad seed: {value}"))?;
            }
            "--help" | "-h" => return Err(String::new()),
            _ if positional == 0 => {
                args.mode = Mode::parse(&arg).ok_or(format!("unknown mode: {arg}"))?;
                positional = 1;
            }
            _ if positional == 1 => {
                args.ticks = arg.parse().map_err(|_| format!("bad tick count: {arg}"))?;
                positional = 2;
            }
            _ => return Err(format!("unexpected argument: {arg}")),
        }
    }
    Ok(args)
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            if !msg.is_empty() {
                eprintln!("error: {msg}");
            }
            eprintln!(
                "usage: double-slit [MODE] [TICKS] [--observer] [--seed N] [--json]\n\
                 modes: wave, classical, beam, single"
            );
            std::process::exit(if msg.is_empty() { 0 } else { 2 });
        }
    };

    let mut state = SimState::new(args.seed);
    state.set_mode(args.mode);
    state.set_observer(args.observer);
    state.set_running(true);

    log::info!(
        "running {} for {} ticks (seed {}, observer {})",
        args.mode.label(),
        args.ticks,
        args.seed,
        state.observer_effective()
    );

    // Fast-forward: a real host gates ticks through driver::TickClock,
    // the headless demo just burns through them.
    for _ in 0..args.ticks {
        tick(&mut state);
    }

    log::info!(
        "done: {} emitted, {} landed, {} still in flight",
        state.emitted,
        state.screen.total(),
        state.live_count()
    );

    if args.mode.has_particles() {
        print_histogram(&state);
    } else {
        println!(
            "wave mode: no particles; phase clock at {:.2} after {} ticks",
            state.phase_clock, state.time_ticks
        );
    }

    if args.json {
        let snapshot = serde_json::to_string_pretty(&state.snapshot())
            .expect("snapshot serializes");
        println!("{snapshot}");
    }
}

/// ASCII histogram of the detector screen with the matching theory curve
/// alongside, both normalized to their own peak.
fn print_histogram(state: &SimState) {
    const BAR: usize = 50;

    let regime = if state.mode == Mode::ClassicalParticle || state.observer_effective() {
        Regime::Classical
    } else {
        Regime::Interference
    };
    let max_count = state.screen.histogram().values().copied().max().unwrap_or(0);

    println!(
        "detector screen, {} hits ({} per row, '|' = theory {})",
        state.screen.total(),
        BIN_SIZE,
        match regime {
            Regime::Interference => "interference",
            Regime::Classical => "classical",
        }
    );

    for idx in bin_index(CENTER_Y - SAMPLE_BAND)..=bin_index(CENTER_Y + SAMPLE_BAND) {
        let y = bin_start(idx);
        let count = state.screen.count_at(y);
        let bar = if max_count > 0 {
            (count as usize * BAR).div_ceil(max_count as usize)
        } else {
            0
        };
        let theory = regime.intensity(y + BIN_SIZE / 2.0);
        let marker = ((theory * BAR as f32) as usize).min(BAR);

        let mut row: Vec<char> = vec![' '; BAR + 1];
        for cell in row.iter_mut().take(bar) {
            *cell = '#';
        }
        row[marker] = '|';
        println!("{y:>5.0} {:>5} {}", count, row.into_iter().collect::<String>());
    }
}
