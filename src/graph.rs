use std::path::PathBuf;

use tracing::{error, info};

use crate::{
    config::Config,
    error::Result,
    fetch::{ContributionSource, GithubSource},
    fs::output::write_replace,
    render::render_svg,
    snapshot::Snapshotter,
    utils::clock::{Clock, DefaultClock},
};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphOutcome {
    pub output: PathBuf,
    pub snapshot: Option<PathBuf>,
    pub weeks: usize,
    pub contributions: u64,
}

/// Represents the starting point for generating the graph against the real api.
pub async fn start_generation(config: &Config) -> Result<GraphOutcome> {
    let source = create_source(config)?;
    let snapshotter = create_snapshotter(config, DefaultClock);
    generate_graph(config, &source, &snapshotter).await
}

fn create_source(config: &Config) -> Result<GithubSource> {
    GithubSource::new(&config.endpoint, &config.token, config.timeout)
}

fn create_snapshotter(config: &Config, clock: impl Clock) -> Snapshotter {
    Snapshotter::new(config.snapshot.clone(), Box::new(clock))
}

/// Fetches, renders and writes the graph. Nothing is written unless the fetch succeeded, and the
/// snapshot is only taken once the primary output is in place.
pub async fn generate_graph(
    config: &Config,
    source: &impl ContributionSource,
    snapshotter: &Snapshotter,
) -> Result<GraphOutcome> {
    info!("Fetching contributions for {}", config.username);
    let calendar = source
        .fetch_calendar(&config.username)
        .await
        .inspect_err(|e| error!("Failed to fetch contributions {e}"))?;

    let document = render_svg(&calendar, &config.render);
    write_replace(&config.output, &document).await?;
    info!("Graph written to {:?}", config.output);

    let snapshot = snapshotter.persist(&config.output, &document).await?;

    Ok(GraphOutcome {
        output: config.output.clone(),
        snapshot,
        weeks: calendar.weeks.len(),
        contributions: calendar.window_total(),
    })
}
