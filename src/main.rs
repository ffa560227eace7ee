use clap::Parser;
use payment_order_codec::config::cli::write_stdout;
use payment_order_codec::utils::error::ErrorSeverity;
use payment_order_codec::utils::{logger, validation::Validate};
use payment_order_codec::{
    CliConfig, CodecConfig, CodecError, Command, PayloadSource, PaymentOrderCodec,
};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting payment-order CLI");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    let codec = PaymentOrderCodec::from_config(&config);

    if let Err(e) = run(&args.command, &codec, &config).await {
        exit_with(&e);
    }

    Ok(())
}

fn load_config(args: &CliConfig) -> payment_order_codec::Result<CodecConfig> {
    let config = match &args.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            CodecConfig::from_file(path)?
        }
        None => CodecConfig::default(),
    };

    config.validate()?;
    tracing::debug!("Configuration validated: {:?}", config);
    Ok(config)
}

async fn run(
    command: &Command,
    codec: &PaymentOrderCodec,
    config: &CodecConfig,
) -> payment_order_codec::Result<()> {
    match command {
        Command::Decode { input, pretty } => {
            let raw = PayloadSource::from_arg(input).read().await?;
            let order = codec.decode(&raw)?;
            tracing::info!("Payment order is valid");
            let output = if *pretty || config.pretty_output() {
                codec.encode_pretty(&order)?
            } else {
                codec.encode(&order)?
            };
            write_stdout(&output).await
        }
        Command::Validate { input } => {
            let raw = PayloadSource::from_arg(input).read().await?;
            let order = codec.parse(&raw)?;
            let violations = codec.validate(&order);

            let report = json!({
                "valid": violations.is_empty(),
                "violations": violations.violations(),
            });
            let output = serde_json::to_vec_pretty(&report).map_err(CodecError::Encode)?;
            write_stdout(&output).await?;

            violations.into_result()
        }
        Command::Encode { input, pretty } => {
            let raw = PayloadSource::from_arg(input).read().await?;
            let order = codec.parse(&raw)?;
            let output = if *pretty || config.pretty_output() {
                codec.encode_pretty(&order)?
            } else {
                codec.encode(&order)?
            };
            write_stdout(&output).await
        }
        Command::Rules => {
            let listing = PaymentOrderCodec::rules()
                .enumerate()
                .map(|(i, name)| format!("{}. {}", i + 1, name))
                .collect::<Vec<_>>()
                .join("\n");
            write_stdout(listing.as_bytes()).await
        }
    }
}

fn exit_with(e: &CodecError) -> ! {
    tracing::error!(
        "Payment order processing failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
