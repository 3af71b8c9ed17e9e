/// Mixtape - playlist inspection from the command line
use clap::Parser;
use mixtape_cli::{execute, Cli, CliConfig, OutputFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mixtape_cli=info,mixtape_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())?;
    config.validate()?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    let output = execute(&cli.command, &config, format)?;
    println!("{}", output);

    Ok(())
}
