use std::{env, path::Path};

use chrono::Utc;
use env_logger::Env;
use pso::core::{
    plot::{graph_heuristic, graph_particles},
    CustomError, Data, Optimization, Settings,
};

fn main() -> Result<(), CustomError> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let settings = match env::args().nth(1) {
        Some(path) => Settings::from_json_file(path)?,
        None => Settings::from_env()?,
    };

    let session = format!("{}-pso-{}", settings.session, Utc::now().timestamp());
    let mut data = Data::new(&session);

    for index in 0..settings.runs.max(1) {
        let mut optimization = Optimization::new(index, &settings);
        optimization.optimize(&mut data)?;
        log::info!("{}", optimization.swarm());
    }

    let csv_path = data.save_csv(&settings.output_dir)?;
    let json_path = data.save_json(&settings.output_dir)?;
    log::info!(
        "Results saved to {} and {}",
        csv_path.display(),
        json_path.display()
    );

    if let Some(last) = data.optimizations().last() {
        let dir = Path::new(&settings.output_dir);
        let heuristic_path = dir.join(format!("{}-heuristic.svg", session));
        let particles_path = dir.join(format!("{}-particles.svg", session));

        if let Err(e) = graph_heuristic(last, &heuristic_path.to_string_lossy()) {
            log::error!("Failed to graph the heuristic: {}", e);
        }
        if let Err(e) = graph_particles(last, settings.iterations, &particles_path.to_string_lossy()) {
            log::error!("Failed to graph the particles: {}", e);
        }
    }

    Ok(())
}
