use dispatch_directory::{AlertService, Directory, DirectoryConfig, Snapshot};
use itertools::Itertools;
use log::{info, warn};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "data.json".to_string());
    let path = Path::new(&path);
    if !path.exists() {
        warn!("Snapshot file not found: {}", path.display());
        return Ok(());
    }

    let start = Instant::now();
    let snapshot = Snapshot::from_path(path)?;
    let directory = Arc::new(Directory::from_snapshot(&DirectoryConfig::default(), snapshot));
    info!("Directory seeded in {:?}", start.elapsed());

    let alerts = AlertService::new(directory.clone());

    // Run a sample query per station found in the snapshot
    let stations: Vec<String> = directory
        .coverage
        .find_all()?
        .into_iter()
        .map(|a| a.station_number)
        .sorted()
        .dedup()
        .collect();
    for station in &stations {
        let coverage = alerts.station_coverage(station)?;
        info!(
            "Station {station}: {} residents ({} adults, {} children)",
            coverage.residents.len(),
            coverage.adult_count,
            coverage.child_count
        );
    }

    if !stations.is_empty() {
        let grouping = alerts.flood_grouping(&stations)?;
        info!("Flood grouping covers {} addresses:", grouping.len());
        for (address, residents) in &grouping {
            info!("  {address}: {} residents", residents.len());
        }
    }

    Ok(())
}
