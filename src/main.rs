// file: src/main.rs
// description: commandline application entry point with mode handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser};
use std::io::Read;
use std::path::PathBuf;
use tracing::{error, info, warn};
use vt_enrichment::utils::logging::{format_failure, format_fact_summary, init_logger};
use vt_enrichment::{
    Config, ConfiguredSink, Enricher, IndicatorMode, VerdictAggregator, VirusTotalClient,
};

#[derive(Parser)]
#[command(name = "vt-enrichment")]
#[command(author = "cipher")]
#[command(version)]
#[command(about = "Enrich a hash, IP or domain read from stdin with VirusTotal verdicts", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// VirusTotal API key
    #[arg(long, value_name = "KEY", env = "VT_API_KEY", hide_env_values = true)]
    apikey: Option<String>,

    /// Proxy for VirusTotal queries
    #[arg(long, value_name = "PROXY")]
    proxy: Option<String>,

    #[command(flatten)]
    mode: ModeArgs,

    /// ACT user ID
    #[arg(long = "userid", value_name = "ID")]
    user_id: Option<String>,

    /// ACT API base URL; facts are printed to stdout when unset
    #[arg(long, value_name = "URL")]
    act_baseurl: Option<String>,

    /// Log to file (default = stderr)
    #[arg(long, value_name = "FILE")]
    logfile: Option<PathBuf>,

    /// Log level (default = info)
    #[arg(long, value_name = "LEVEL")]
    loglevel: Option<String>,

    #[arg(long, action = ArgAction::Set)]
    color: Option<bool>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct ModeArgs {
    /// Query hexdigest on stdin
    #[arg(long)]
    hexdigest: bool,

    /// Query IP address on stdin
    #[arg(long)]
    ip: bool,

    /// Query domain on stdin
    #[arg(long)]
    domain: bool,
}

impl ModeArgs {
    fn mode(&self) -> IndicatorMode {
        if self.ip {
            IndicatorMode::Ip
        } else if self.domain {
            IndicatorMode::Domain
        } else {
            IndicatorMode::Hexdigest
        }
    }
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref apikey) = self.apikey {
            config.virustotal.api_key = Some(apikey.clone());
        }
        if let Some(ref proxy) = self.proxy {
            config.virustotal.proxy = Some(proxy.clone());
        }
        if let Some(ref user_id) = self.user_id {
            config.act.user_id = Some(user_id.clone());
        }
        if let Some(ref baseurl) = self.act_baseurl {
            config.act.baseurl = Some(baseurl.clone());
        }
        if let Some(ref logfile) = self.logfile {
            config.logging.file = Some(logfile.clone());
        }
        if let Some(ref loglevel) = self.loglevel {
            config.logging.level = loglevel.clone();
        }
        if let Some(color) = self.color {
            config.logging.color = color;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_found = cli.config.exists();
    let mut config = if config_found {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        Config::load(None).context("Failed to load configuration")?
    };

    cli.apply_overrides(&mut config);
    config.validate().context("Invalid configuration")?;

    init_logger(
        &config.logging.level,
        config.logging.file.as_deref(),
        config.logging.color,
    )?;

    if config_found {
        info!("Loaded configuration from: {}", cli.config.display());
    } else {
        warn!(
            "Config file {} not found, using defaults and environment",
            cli.config.display()
        );
    }

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read indicator from stdin")?;

    let mode = cli.mode.mode();
    match run(mode, &input, &config).await {
        Ok(count) => {
            eprintln!("{}", format_fact_summary(mode.as_str(), input.trim(), count));
            Ok(())
        }
        Err(e) => {
            error!("Unhandled error: {:#}", e);
            eprintln!("{}", format_failure(mode.as_str(), input.trim()));
            Err(e)
        }
    }
}

async fn run(mode: IndicatorMode, input: &str, config: &Config) -> Result<usize> {
    let client = VirusTotalClient::new(&config.virustotal)
        .context("Failed to create VirusTotal client")?;
    let sink = ConfiguredSink::from_config(&config.act).context("Failed to create fact sink")?;
    let aggregator = VerdictAggregator::from_config(&config.classifier);

    let mut enricher = Enricher::new(client, sink, aggregator);
    let count = enricher.run(mode, input).await?;

    info!("Enrichment complete: {} facts emitted", count);
    Ok(count)
}
