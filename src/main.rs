use log::info;
use policy_dashboard::{DashboardConfig, Result, render_dashboard};
use std::time::Instant;

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::default();
    info!(
        "Rendering policy benefits dashboard to {}",
        config.output_path.display()
    );

    let start = Instant::now();
    render_dashboard(&config)?;
    info!("Finished in {:?}", start.elapsed());

    Ok(())
}
