use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Table};
use core_types::StockRecord;
use selection::{build_advice, SelectionService};
use serde_json::{Map, Value};
use strategies::StrategyCatalog;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// A multi-factor stock screening engine for A-share market data.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API over the configured data source.
    Serve,
    /// Run one strategy over a stock corpus and print the ranked results.
    Select(SelectArgs),
    /// List the registered screening strategies.
    Strategies,
    /// Generate a mock stock corpus as JSON on stdout.
    Mock(MockArgs),
}

#[derive(Parser)]
struct SelectArgs {
    /// The strategy id to run (see the `strategies` subcommand).
    #[arg(long, default_value = "default")]
    strategy: String,

    /// Path to a JSON corpus file; omitted means generated mock data.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Strategy parameters as a JSON object, e.g. '{"topN": 10}'.
    #[arg(long, default_value = "{}")]
    params: String,

    /// Attach risk level and investment advice to each result.
    #[arg(long)]
    advice: bool,

    /// How many mock records to generate when --data is omitted.
    #[arg(long, default_value_t = 100)]
    mock_records: usize,
}

#[derive(Parser)]
struct MockArgs {
    /// How many records to generate.
    #[arg(long, short, default_value_t = 100)]
    count: usize,
}

/// The main entry point for the sift screening application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => handle_serve().await?,
        Commands::Select(args) => handle_select(args)?,
        Commands::Strategies => handle_strategies(),
        Commands::Mock(args) => handle_mock(args)?,
    }

    Ok(())
}

/// Handles the `serve` subcommand: config, data, then the axum server.
async fn handle_serve() -> anyhow::Result<()> {
    let config = configuration::load_config().context("Failed to load config.toml")?;

    let records = if config.data.use_mock_data {
        tracing::info!(count = config.data.mock_records, "using generated mock data");
        data_source::generate_records(config.data.mock_records)
    } else {
        data_source::load_records(&config.data.stock_data_path)?
    };

    let service = SelectionService::with_data(StrategyCatalog::builtins(), records);
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server.host/server.port in config.toml")?;

    web_server::run_server(addr, Arc::new(service)).await
}

/// Handles the `select` subcommand.
fn handle_select(args: SelectArgs) -> anyhow::Result<()> {
    let records = match &args.data {
        Some(path) => load_corpus(path)?,
        None => data_source::generate_records(args.mock_records),
    };

    let params: Map<String, Value> =
        serde_json::from_str(&args.params).context("--params must be a JSON object")?;

    let service = SelectionService::with_data(StrategyCatalog::builtins(), records);
    let results = service.run_strategy(&args.strategy, &params)?;

    if results.is_empty() {
        println!("No stocks matched strategy '{}'.", args.strategy);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header = vec!["Code", "Name", "Industry", "Price", "Change %", "PE", "ROE", "Score"];
    if args.advice {
        header.extend(["Risk", "Timing", "Confidence"]);
    }
    table.set_header(header);

    for stock in &results {
        let r = &stock.record;
        let mut row = vec![
            r.code.clone(),
            r.name.clone(),
            r.industry.clone(),
            r.price.to_string(),
            r.change_percent.to_string(),
            r.pe.to_string(),
            r.roe.to_string(),
            stock.score.round_dp(2).to_string(),
        ];
        if args.advice {
            let advice = build_advice(stock);
            row.push(format!("{:?}", advice.risk.level));
            row.push(format!("{:?}", advice.timing));
            row.push(advice.confidence.to_string());
        }
        table.add_row(row);
    }

    println!("{table}");
    println!("{} stocks selected by '{}'.", results.len(), args.strategy);
    Ok(())
}

/// Handles the `strategies` subcommand.
fn handle_strategies() {
    let catalog = StrategyCatalog::builtins();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Id", "Name", "Description"]);
    for def in catalog.iter() {
        table.add_row(vec![def.id.clone(), def.name.clone(), def.description.clone()]);
    }

    println!("{table}");
}

/// Handles the `mock` subcommand.
fn handle_mock(args: MockArgs) -> anyhow::Result<()> {
    let records = data_source::generate_records(args.count);
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

fn load_corpus(path: &Path) -> anyhow::Result<Vec<StockRecord>> {
    let records = data_source::load_records(path)
        .with_context(|| format!("Failed to load stock data from {}", path.display()))?;
    Ok(records)
}
