use std::path::PathBuf;
use clap::Parser;
use connector::{ConnectorConfig, DataConnector, PointCloud};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Upload an image to the point cloud endpoint and print what comes back.
#[derive(Parser)]
struct Args {
    /// Image file name or path. Defaults to the configured image.
    image: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the endpoint URL
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Override the request timeout, in seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Print the whole cloud as JSON
    #[arg(long)]
    json: bool,
}

/// How many points the plain summary lists.
const PREVIEW_POINTS: usize = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let args = Args::parse();

    let mut config = ConnectorConfig::load(args.config.as_deref())?;
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }

    let connector = DataConnector::from_config(&config)?;
    let hint = args.image.unwrap_or_else(|| connector.image_file_name().to_owned());
    info!("Fetching point cloud for {} from {}", hint, config.endpoint);

    let json = args.json;
    let mut output = Ok(String::new());
    connector
        .fetch_with(&hint, |cloud| output = render(&cloud, json))
        .await;
    println!("{}", output?);

    Ok(())
}

fn render(cloud: &PointCloud, json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string_pretty(cloud)
    } else {
        Ok(summary(cloud))
    }
}

fn summary(cloud: &PointCloud) -> String {
    let resolution = cloud.resolution();
    let mut lines = vec![format!(
        "points={} resolution={}x{}",
        cloud.len(),
        resolution.x,
        resolution.y
    )];
    for point in cloud.points().iter().take(PREVIEW_POINTS) {
        let pos = point.pos();
        let color = point.color();
        lines.push(format!(
            "  pos=({:.4}, {:.4}) rgb=({:.3}, {:.3}, {:.3})",
            pos.x, pos.y, color.x, color.y, color.z
        ));
    }
    if cloud.len() > PREVIEW_POINTS {
        lines.push(format!("  ... {} more", cloud.len() - PREVIEW_POINTS));
    }
    lines.join("\n")
}
