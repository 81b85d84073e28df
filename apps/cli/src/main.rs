use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{render::render_document, CampaignPage, Endpoint, HttpCampaignApi, PageEvent};
use shared::domain::FormField;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

use config::{load_settings, Settings};

#[derive(Parser, Debug)]
#[command(name = "campaigns", about = "List and create campaigns on a campaigns service")]
struct Args {
    /// Config file (defaults to ./campaigns.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    endpoint: Option<String>,
    /// Where the rendered page is written.
    #[arg(long)]
    output: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the campaign list and render it.
    List,
    /// Submit a new campaign, then render the refreshed list.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        start_date: String,
        #[arg(long)]
        end_date: String,
    },
}

impl Args {
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if let Some(output) = &self.output {
            settings.output = output.clone();
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref())?;
    args.apply_overrides(&mut settings);
    init_tracing(&settings.log_filter);

    let endpoint = Endpoint::parse(&settings.endpoint)?;
    info!(%endpoint, "using campaigns endpoint");

    let page = CampaignPage::new(Arc::new(HttpCampaignApi::new(endpoint)));
    let mut events = page.subscribe_events();
    page.load().await;

    if let Command::Create {
        title,
        description,
        start_date,
        end_date,
    } = args.command
    {
        page.fill(FormField::Title, title).await;
        page.fill(FormField::Description, description).await;
        page.fill(FormField::StartDate, start_date).await;
        page.fill(FormField::EndDate, end_date).await;
        page.submit().await;
    }

    let document = render_document(&page.container_html().await);
    tokio::fs::write(&settings.output, document)
        .await
        .with_context(|| format!("failed to write page to '{}'", settings.output.display()))?;

    while let Ok(event) = events.try_recv() {
        if let PageEvent::CampaignCreated { campaign } = event {
            println!("Created campaign '{}'", campaign.title);
        }
    }
    println!(
        "Rendered {} campaign(s) to {}",
        page.rendered_count().await,
        settings.output.display()
    );

    Ok(())
}
