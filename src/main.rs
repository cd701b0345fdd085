//! Headless driver for the solarium scene-graph engine.

use std::path::Path;

use solarium::assets::ProgramRegistry;
use solarium::engine::Engine;
use solarium::options::Options;

/// Host frame interval for the synthetic animation callback (60 Hz).
const HOST_FRAME_MS: f64 = 1000.0 / 60.0;
/// Host time to simulate.
const RUN_MS: f64 = 5000.0;
const ASPECT: f32 = 16.0 / 9.0;

fn load_options(path: Option<&str>) -> Options {
    let Some(path) = path else {
        return Options::default();
    };
    match Options::load(Path::new(path)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let mut args = std::env::args().skip(1);
    let address = args.next();
    let options = load_options(args.next().as_deref());

    let mut engine = match Engine::new(options) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    // Headless: nothing is drawn, so every program counts as linked.
    *engine.programs_mut() = ProgramRegistry::all_linked();

    if let Some(address) = address {
        let _ = engine.navigate(&address);
    }

    if let Some(summary) = engine.summary() {
        log::info!(
            "{} ({})",
            summary.link.display_name,
            summary.link.address
        );
        for (kind, value) in &summary.properties {
            log::info!(
                "  {:<16} {:<6} {value}",
                kind.label(),
                kind.localized_label()
            );
        }
        if let Some(parent) = &summary.parent {
            log::info!("  orbits {}", parent.address);
        }
        for satellite in &summary.satellites {
            log::info!("  satellite {}", satellite.address);
        }
    }

    let mut next_report = 0.0;
    let mut now = 0.0;
    while now <= RUN_MS {
        if let Some(frame) = engine.pump(now, ASPECT) {
            if frame.time >= next_report {
                let position = engine
                    .selected()
                    .and_then(|id| engine.system().transform(id))
                    .map(|t| t.world_position())
                    .unwrap_or_default();
                log::info!(
                    "t = {:>8.0} ms  fps = {:>5.1}  position = ({:.2}, {:.2}, {:.2})  draws = {}",
                    frame.time,
                    frame.fps,
                    position.x,
                    position.y,
                    position.z,
                    frame.draw_list.len()
                );
                next_report += 1000.0;
            }
        }
        now += HOST_FRAME_MS;
    }
}
