use clap::Parser;
use meeting_bingo::domain::model::DeliveryOutcome;
use meeting_bingo::utils::{logger, validation::Validate};
use meeting_bingo::{
    BingoEngine, BingoPipeline, CliConfig, DryRunMailer, LocalStorage, SmtpConfig, SmtpMailer,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting meeting-bingo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());

    let run = if config.dry_run {
        tracing::info!("Dry run: cards will be rendered but not sent");
        let pipeline = BingoPipeline::new(storage, config.clone(), DryRunMailer);
        BingoEngine::new(pipeline).run().await
    } else {
        let smtp = match SmtpConfig::from_file(&config.smtp_config) {
            Ok(smtp) => smtp,
            Err(e) => {
                tracing::error!("SMTP configuration failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        };
        let mailer = match SmtpMailer::from_config(&smtp) {
            Ok(mailer) => mailer,
            Err(e) => {
                tracing::error!("SMTP setup failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        };
        let pipeline = BingoPipeline::new(storage, config.clone(), mailer);
        BingoEngine::new(pipeline).run().await
    };

    match run {
        Ok(summary) => {
            println!(
                "✅ Read {} bingo entries and {} e-mail addresses!",
                summary.entries_read, summary.emails_read
            );
            for report in &summary.reports {
                match &report.outcome {
                    DeliveryOutcome::Delivered { artifact } => {
                        println!("📬 {} → {}", report.recipient.address(), artifact);
                    }
                    DeliveryOutcome::Failed { reason } => {
                        println!("❌ {}: {}", report.recipient.address(), reason);
                    }
                    DeliveryOutcome::Skipped { reason } => {
                        println!("⏭️ {}: {}", report.recipient.address(), reason);
                    }
                }
            }
            if config.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            if summary.failed() > 0 {
                std::process::exit(2);
            }
        }
        Err(e) => {
            tracing::error!("Bingo run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
