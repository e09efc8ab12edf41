// SPDX-License-Identifier: PMPL-1.0-or-later

//! vpc-led-lang: inspect and query the VPC LED controller's language files
//!
//! Loads every `lang.<code>.json` in a directory exactly as the controller
//! does at startup, then dumps, audits or translates against them.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use vpc_led_lang::audit;
use vpc_led_lang::config::Config;
use vpc_led_lang::diagnostics::FileSink;
use vpc_led_lang::i18n::{ParsePolicy, SkipReason, Translator};
use vpc_led_lang::notify::{self, ConsoleNotifier};
use vpc_led_lang::output::DumpFormat;
use vpc_led_lang::BASELINE_LANGUAGE;

#[derive(Parser)]
#[command(name = "vpc-led-lang")]
#[command(version)]
#[command(about = "Load, audit and query VPC LED controller language files")]
#[command(long_about = None)]
struct Cli {
    /// Directory containing the language files
    #[arg(long, global = true, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// File name glob for language files
    #[arg(long, global = true)]
    pattern: Option<String>,

    /// Language for lookups (defaults to en)
    #[arg(short, long, global = true)]
    lang: Option<String>,

    /// Diagnostics log file
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Test mode: echo file names and expanded commands while loading
    #[arg(short, long, global = true)]
    test: bool,

    /// Skip malformed language files instead of aborting
    #[arg(long, global = true)]
    skip_malformed: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every loaded language with its translations and commands
    Dump {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: DumpFormat,
    },

    /// Print the numbered command list of the selected language
    Commands,

    /// Translate keys into the selected language
    Translate {
        /// Translation keys
        #[arg(value_name = "KEY", required = true)]
        keys: Vec<String>,
    },

    /// Compare every language against the English baseline
    Audit {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    fn apply(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.dir {
            config.directory = dir.clone();
        }
        if let Some(pattern) = &self.pattern {
            config.pattern = pattern.clone();
        }
        if let Some(lang) = &self.lang {
            config.language = lang.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = log_file.clone();
        }
        if self.test {
            config.echo = true;
        }
        if self.skip_malformed {
            config.parse_policy = ParsePolicy::Skip;
        }
        config
    }
}

fn init_logging(echo: bool) -> Result<()> {
    let directive = if echo {
        "vpc_led_lang=debug"
    } else {
        "vpc_led_lang=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?),
        )
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.apply(Config::from_env());
    init_logging(config.echo)?;

    let report = match config.loader().load_with_report() {
        Ok(report) => report,
        Err(err) if err.is_fatal_config() => {
            notify::fatal_shutdown(&ConsoleNotifier, &err.to_string())
        }
        Err(err) => return Err(err.into()),
    };

    for skipped in &report.skipped {
        let why = match &skipped.reason {
            SkipReason::Unreadable(err) => err.to_string(),
            SkipReason::Malformed(err) => err.to_string(),
        };
        info!("skipped {}: {}", skipped.path.display(), why);
    }
    info!(
        "loaded {} language(s) from {} file(s)",
        report.bundles.len(),
        report.files.len()
    );

    let mut translator = Translator::new(report.bundles, FileSink::new(&config.log_file));
    if let Err(err) = translator.set_language(&config.language) {
        warn!("{:#}; using {}", err, BASELINE_LANGUAGE);
    }

    match cli.command {
        Commands::Dump { format } => {
            println!("{}", format.render(translator.state().bundles())?);
        }

        Commands::Commands => {
            let lang = translator.language().to_string();
            if let Some(bundle) = translator.state().bundle(&lang) {
                println!("{} commands ({}):", lang, bundle.commands().len());
                for (index, command) in bundle.commands().iter().enumerate() {
                    println!("  {:>3}  {}", index, command);
                }
            }
        }

        Commands::Translate { keys } => {
            for key in &keys {
                let value = translator.t(key);
                println!("{}\t{}", key, value);
            }
            translator.report_unused()?;
        }

        Commands::Audit { json } => {
            let report = audit::audit(translator.state());
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", audit::format_report(&report));
            }
            if !report.is_clean() {
                return Err(anyhow!("language audit reported issues"));
            }
        }
    }

    Ok(())
}
