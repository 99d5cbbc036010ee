use anyhow::{Context, bail};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use watchmeta::{
    MediaMeta, Settings,
    scraper::{JustWatchProvider, MetadataProvider, SearchOptions},
};

const USAGE: &str = "usage: watchmeta meta <JW-ref> [season-id]\n       watchmeta search <query...>";

#[derive(Serialize)]
struct SearchHit {
    external_ref: String,
    #[serde(flatten)]
    meta: MediaMeta,
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if settings.log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::var_os("WATCHMETA_CONFIG").map(PathBuf::from);
    let settings = Settings::load(config_path.as_deref()).context("loading settings")?;
    init_tracing(&settings);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let provider = JustWatchProvider::new(settings.justwatch.clone())?;

    let output = match args.first().map(String::as_str) {
        Some("meta") => {
            let Some(external_ref) = args.get(1) else {
                bail!("{USAGE}");
            };
            let meta = provider
                .get_metadata_by_ref(external_ref, args.get(2).map(String::as_str))
                .await
                .with_context(|| format!("fetching {external_ref}"))?;
            serde_json::to_string_pretty(&meta)?
        }
        Some("search") if args.len() > 1 => {
            let query = args[1..].join(" ");
            let hits = provider
                .search(&query, &SearchOptions::new())
                .await?
                .into_iter()
                .map(|meta| {
                    Ok(SearchHit {
                        external_ref: meta.external_ref()?,
                        meta,
                    })
                })
                .collect::<watchmeta::Result<Vec<_>>>()?;
            serde_json::to_string_pretty(&hits)?
        }
        _ => bail!("{USAGE}"),
    };

    println!("{output}");
    Ok(())
}
