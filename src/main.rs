//! Orrery - headless solar system driver
//!
//! Loads a system config (or the built-in solar system), runs the frame loop
//! at 60 Hz and periodically logs where every body is.
//!
//! Usage: `orrery [CONFIG.json]`

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use orrery::bodies::OrbitRegistry;
use orrery::config::SystemConfig;
use orrery::scene::{OrbitingBody, OrreryPlugin, SyncPositionsSet};
use orrery::types::{FRAME_RATE, RAD_TO_DEG, SimulationTime};

/// Real seconds between position reports.
const REPORT_INTERVAL_SECS: f32 = 2.0;

#[derive(Resource)]
struct ReportTimer(Timer);

fn main() -> AppExit {
    let config = match std::env::args().nth(1) {
        Some(path) => match SystemConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Failed to load {path}: {err}");
                return AppExit::error();
            }
        },
        None => SystemConfig::default(),
    };

    let registry = match OrbitRegistry::from_config(&config) {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("Invalid system config: {err}");
            return AppExit::error();
        }
    };

    App::new()
        .add_plugins((
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / FRAME_RATE,
            ))),
            LogPlugin::default(),
        ))
        // Insert resources before plugins that depend on them
        .insert_resource(registry)
        .insert_resource(SimulationTime::new(config.clock.start, config.clock.scale))
        .insert_resource(ReportTimer(Timer::from_seconds(
            REPORT_INTERVAL_SECS,
            TimerMode::Repeating,
        )))
        .add_plugins(OrreryPlugin)
        .add_systems(Update, report_positions.after(SyncPositionsSet))
        .run()
}

fn report_positions(
    mut timer: ResMut<ReportTimer>,
    time: Res<Time>,
    sim_time: Res<SimulationTime>,
    bodies: Query<(&Name, &Transform), With<OrbitingBody>>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }

    info!(
        "t = {:.2} ({:+.2} since start)",
        sim_time.current,
        sim_time.elapsed()
    );
    for (name, transform) in bodies.iter() {
        let p = transform.translation;
        // Heading in the reference plane, measured from +x towards +z
        let heading = (p.z as f64).atan2(p.x as f64) * RAD_TO_DEG;
        info!(
            "  {:<8} ({:>7.2}, {:>7.2}, {:>7.2}) {:>7.1}°",
            name.as_str(),
            p.x,
            p.y,
            p.z,
            heading
        );
    }
}
