use clap::Parser;
use tracing_subscriber::EnvFilter;

use ppe_api::EntryApi;
use ppe_config::PpeConfig;
use ppe_store::EntryStore;

mod cli;
mod commands;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("ppe error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet);

    let config = PpeConfig::load_with_dotenv()?;

    if let cli::Commands::Login { username, password } = &cli.command {
        return commands::login::run(username, password, &config.auth);
    }

    let api = EntryApi::from_config(&config.api)?;

    if let cli::Commands::Setup { project_name } = &cli.command {
        return commands::setup::run(project_name.as_deref(), api).await;
    }

    let mut store = EntryStore::new(api.clone());
    match cli.command {
        cli::Commands::List { search, date, process } => {
            commands::list::run(search, date, process, &mut store).await
        }
        cli::Commands::Get { id } => commands::get::run(&id, &store).await,
        cli::Commands::Add(args) => commands::add::run(*args, &api, &mut store).await,
        cli::Commands::Update(args) => commands::update::run(*args, &api, &mut store).await,
        cli::Commands::Delete { id } => commands::remove::run(&id, &mut store).await,
        cli::Commands::Setup { .. } | cli::Commands::Login { .. } => unreachable!("handled above"),
    }
}

fn init_tracing(quiet: bool) {
    let default_filter = if quiet { "error" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
