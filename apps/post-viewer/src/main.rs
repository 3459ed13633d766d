//! # Postboard Viewer
//!
//! Terminal front end for the post list: fetches on start, then reads one
//! command per line from stdin.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use postboard_core::domain::SortKey;
use postboard_core::ports::{AuthApi, PostApi};
use postboard_infra::{HttpApiConfig, HttpPostApi, InMemoryPostApi, InMemoryPostStore};
use tokio::io::{AsyncBufReadExt, BufReader};

mod app;
mod command;
mod render;
mod telemetry;

use app::{Flow, ViewerApp};
use command::Command;

/// Postboard Viewer - search, sort and add posts from a terminal
#[derive(Parser, Debug)]
#[command(name = "post-viewer")]
#[command(version)]
pub struct Args {
    /// Base URL of the post API
    #[arg(long, env = "POST_API_URL", default_value = "http://localhost:5173")]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "POST_API_TIMEOUT", default_value_t = 10)]
    pub timeout: u64,

    /// Start with this search text
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Start with this sort order (date, title, user, id)
    #[arg(long, default_value = "date")]
    pub sort: SortKey,

    /// Fetch once, print the list and exit
    #[arg(long)]
    pub once: bool,

    /// Use built-in demo data instead of a server
    #[arg(long)]
    pub offline: bool,

    /// Log format: "json" or anything else for compact text
    #[arg(long, env = "LOG_FORMAT", default_value = "text")]
    pub log_format: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    telemetry::init_telemetry(args.log_format.eq_ignore_ascii_case("json"));

    let (posts_api, auth_api) = build_backend(&args)?;
    let mut app = ViewerApp::new(posts_api, auth_api);
    app.posts().set_search_text(args.search.clone()).await;
    app.posts().set_sort_key(args.sort).await;

    println!("{}", app.refresh().await);
    if args.once {
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match app.handle(command).await {
            Flow::Continue(output) => println!("{}", output),
            Flow::Quit => break,
        }
    }

    Ok(())
}

fn build_backend(args: &Args) -> anyhow::Result<(Arc<dyn PostApi>, Arc<dyn AuthApi>)> {
    if args.offline {
        tracing::info!("Offline mode: using in-memory demo posts");
        let api = Arc::new(
            InMemoryPostApi::new(Arc::new(InMemoryPostStore::seeded()))
                .with_account("demo@example.com", "password123"),
        );
        let posts: Arc<dyn PostApi> = api.clone();
        let auth: Arc<dyn AuthApi> = api;
        return Ok((posts, auth));
    }

    let config = HttpApiConfig {
        base_url: args.base_url.clone(),
        timeout: Duration::from_secs(args.timeout),
    };
    tracing::info!(base_url = %config.base_url, "Using HTTP post API");
    let api = Arc::new(HttpPostApi::new(&config)?);
    let posts: Arc<dyn PostApi> = api.clone();
    let auth: Arc<dyn AuthApi> = api;
    Ok((posts, auth))
}
