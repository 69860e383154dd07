use log::info;
use std::env;
use std::path::Path;
use std::time::Instant;
use turing_field::config::load_config;
use turing_field::diagnostics::RunSummary;
use turing_field::init::FieldInitializer;
use turing_field::io::write_json_file;
use turing_field::{Command, Controller};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let patterns = config.pattern_set()?;
    let initializer = match config.seed {
        Some(seed) => FieldInitializer::seeded(seed),
        None => FieldInitializer::from_entropy(),
    };
    let mut ctl = Controller::new(config.width, config.height, patterns, initializer)
        .map_err(|e| e.to_string())?;

    let mut summary = RunSummary::new(config.width, config.height);
    for tick in 0..config.ticks {
        if config.reset_every > 0 && tick > 0 && tick % config.reset_every == 0 {
            ctl.dispatch(Command::Reset).map_err(|e| e.to_string())?;
            summary.resets += 1;
        }

        let start = Instant::now();
        if config.trace_every > 0 && tick % config.trace_every == 0 {
            let trace = ctl.tick_traced().map_err(|e| e.to_string())?;
            info!(
                "tick {tick}: dominant scale {:?}, wins {:?}, {:.2} ms",
                trace.dominant_scale(),
                trace.scale_wins,
                trace.elapsed_ms
            );
            summary.traces.push(trace);
        } else {
            ctl.tick().map_err(|e| e.to_string())?;
        }
        summary.record(start.elapsed().as_secs_f64() * 1000.0);
    }
    summary.final_scale_count = ctl.patterns().len();

    println!(
        "Ran {} ticks on {}x{} with {} scale(s), mean {:.3} ms/step",
        summary.ticks, summary.width, summary.height, summary.final_scale_count, summary.mean_step_ms
    );
    if let Some(path) = &config.output.summary_json {
        write_json_file(path, &summary)?;
        println!("Saved run summary to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: turing_run <config.json>".to_string()
}
