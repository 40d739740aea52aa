use std::sync::Arc;

use anyhow::{Context, Result, bail};
use serde_json::json;
use slugtree_core::{
    application::{
        ports::{time::Clock, util::Transliterator},
        services::ApplicationServices,
    },
    config::AppConfig,
    domain::{
        dates::{PartialDate, Runtime},
        node::{NodeReadRepository, NodeWriteRepository},
        slug::SlugNormalizer,
    },
    infrastructure::{
        database,
        repositories::{PostgresNodeReadRepository, PostgresNodeWriteRepository},
        time::SystemClock,
        util::DefaultTransliterator,
    },
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: slugtree_core <slugify TEXT | runtime FROM [UNTIL] | rebuild-paths>";

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("slugify") => {
            let text = args[1..].join(" ");
            slugify(&config, &text)
        }
        Some("runtime") => runtime(
            &config,
            args.get(1).map_or("", String::as_str),
            args.get(2).map_or("", String::as_str),
        ),
        Some("rebuild-paths") => rebuild_paths(&config).await,
        Some(other) => bail!("unknown command {other:?}\n{USAGE}"),
        None => bail!(USAGE),
    }
}

fn slugify(config: &AppConfig, text: &str) -> Result<()> {
    let transliterator: Arc<dyn Transliterator> = Arc::new(DefaultTransliterator);
    let normalizer = SlugNormalizer::new(config.slug_settings(), transliterator);
    let slug = normalizer.normalize(text)?;

    println!("{}", json!({ "input": text, "slug": slug }));
    Ok(())
}

fn runtime(config: &AppConfig, from: &str, until: &str) -> Result<()> {
    let runtime = Runtime::new(from.parse::<PartialDate>()?, until.parse::<PartialDate>()?, None)?;
    let formats = config.date_formats();

    println!(
        "{}",
        json!({
            "from_date": runtime.from_date().to_string(),
            "until_date": runtime.until_date().to_string(),
            "display": runtime.runtime_display(&formats)?,
        })
    );
    Ok(())
}

async fn rebuild_paths(config: &AppConfig) -> Result<()> {
    let pool = database::init_pool(config.database_url()?)
        .await
        .context("connecting to the database")?;
    database::run_migrations(&pool).await?;

    let write_repo: Arc<dyn NodeWriteRepository> =
        Arc::new(PostgresNodeWriteRepository::new(pool.clone()));
    let read_repo: Arc<dyn NodeReadRepository> = Arc::new(PostgresNodeReadRepository::new(pool));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let transliterator: Arc<dyn Transliterator> = Arc::new(DefaultTransliterator);

    let services = ApplicationServices::new(
        write_repo,
        read_repo,
        clock,
        transliterator,
        config.slug_settings(),
    );

    let written = services.node_commands.rebuild_paths().await?;
    println!("{}", json!({ "rewritten": written }));
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
