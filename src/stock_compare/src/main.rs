use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use snafu::ResultExt;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use stock_compare::chart::{ChartRenderer, ChartSpec, PlotlyRenderer};
use stock_compare::cli::{Cli, params::prompt_save};
use stock_compare::config::AppConfig;
use stock_compare::errors::{
    BuildSnafu, ConfigSnafu, Error, PersistSnafu, PromptSnafu, ProviderSetupSnafu,
};
use stock_compare::io::sink::{artifact_stem, save_chart};
use stock_compare::providers::yahoo::YahooProvider;
use stock_compare::series::SeriesBuilder;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.report());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let request = match cli.series_request() {
        Ok(request) => request,
        Err(err) => Cli::command().error(ErrorKind::ValueValidation, err).exit(),
    };

    let config = AppConfig::load(cli.config.as_deref()).context(ConfigSnafu)?;
    debug!(?config, "configuration resolved");

    let provider = YahooProvider::new(&config.provider).context(ProviderSetupSnafu)?;
    let table = SeriesBuilder::new(&provider)
        .build(&request)
        .await
        .context(BuildSnafu)?;
    info!(rows = table.len(), columns = table.columns().len(), "table ready");

    let spec = ChartSpec::from_table(&table, request.range, cli.log_scale, &config.chart);
    let renderer = PlotlyRenderer::new(&config.chart);
    if !cli.no_display {
        renderer.display(&spec).context(PersistSnafu)?;
    }

    let confirmed = match cli.save {
        Some(save) => save,
        None => prompt_save(&mut io::stdin().lock(), &mut io::stdout()).context(PromptSnafu)?,
    };

    let stem = artifact_stem(
        &request.symbols,
        &request.price_type,
        request.range,
        cli.log_scale,
        cli.volume,
    );
    let root = config.output.root.unwrap_or_else(|| PathBuf::from("."));
    if let Some(saved) = save_chart(&renderer, &spec, &stem, &root, confirmed).context(PersistSnafu)? {
        println!("Image saved to {}.", saved.dir.display());
    }

    Ok(())
}
