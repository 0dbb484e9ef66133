//! Command line interface
//!
//! Every command loads the configuration, runs the analysis over one model
//! document and writes its output to the given writers, so commands can be
//! driven from tests without touching stdout.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use wirebind_application::{AnalysisOutcome, AnalysisService};
use wirebind_domain::diagnostics::Diagnostic;
use wirebind_domain::ports::RegistrationEmitter;
use wirebind_infrastructure::config::{AppConfig, ConfigLoader, ReportFormat};
use wirebind_infrastructure::logging::{init_logging, log_config_source};
use wirebind_infrastructure::model::load_model;
use wirebind_infrastructure::report::{AnalysisReport, Reporter};
use wirebind_providers::TemplateEmitter;

/// Command line interface for wirebind
#[derive(Parser, Debug)]
#[command(name = "wirebind")]
#[command(about = "Compile-time analysis and code generation for service registrations")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze the registrations of a model and print a report
    Check {
        /// Model document (.json, .yaml or .yml)
        model: PathBuf,

        /// Report format, overriding `report.format`
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Fail on warnings too
        #[arg(long)]
        deny_warnings: bool,
    },

    /// Emit registration code for every valid registration
    Generate {
        /// Model document (.json, .yaml or .yml)
        model: PathBuf,

        /// Write code here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail on warnings too
        #[arg(long)]
        deny_warnings: bool,
    },

    /// List every diagnostic with its severity and title
    Diagnostics,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Human,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => Self::Human,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Run a parsed command line
///
/// Exit code 1 means the analysis failed; operational errors are returned.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let (config, source) = load_config(cli.config.as_deref())?;
    init_logging(&config.logging)?;
    log_config_source(source.as_deref());

    let stdout = io::stdout();
    let stderr = io::stderr();
    let passed = match &cli.command {
        Command::Check {
            model,
            format,
            deny_warnings,
        } => {
            let mut config = config;
            if let Some(format) = format {
                config.report.format = (*format).into();
            }
            config.report.deny_warnings |= *deny_warnings;
            check(&config, model, &mut stdout.lock())?
        }
        Command::Generate {
            model,
            output,
            deny_warnings,
        } => {
            let mut config = config;
            config.report.deny_warnings |= *deny_warnings;
            match output {
                Some(path) => {
                    let file = File::create(path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    let mut writer = BufWriter::new(file);
                    let passed = generate(&config, model, &mut writer, &mut stderr.lock())?;
                    writer
                        .flush()
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    passed
                }
                None => generate(&config, model, &mut stdout.lock(), &mut stderr.lock())?,
            }
        }
        Command::Diagnostics => {
            list_diagnostics(&mut stdout.lock())?;
            true
        }
    };

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Load configuration from optional path, with the file it came from
pub fn load_config(config_path: Option<&Path>) -> anyhow::Result<(AppConfig, Option<PathBuf>)> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    Ok((config, loader.source_path()))
}

/// Load a model document and analyze it with the configured options
pub fn analyze_model(config: &AppConfig, model: &Path) -> anyhow::Result<AnalysisOutcome> {
    let loaded =
        load_model(model).with_context(|| format!("Failed to load model {}", model.display()))?;
    let service = AnalysisService::new(Arc::new(loaded.model), config.analysis.clone());
    Ok(service.analyze(&loaded.sites))
}

/// `check`: write the analysis report; returns whether the analysis passed
pub fn check(config: &AppConfig, model: &Path, out: &mut dyn Write) -> anyhow::Result<bool> {
    let outcome = analyze_model(config, model)?;
    let report = AnalysisReport::new(model, &outcome, config.report.deny_warnings);

    let rendered = Reporter::render(&report, config.report.format);
    writeln!(out, "{}", rendered.trim_end()).context("Failed to write report")?;
    Ok(report.passed())
}

/// `generate`: write emitted code to `code` and diagnostics to `diagnostics`
///
/// Code is emitted for the valid registrations even when others were
/// rejected. Returns whether the analysis passed.
pub fn generate(
    config: &AppConfig,
    model: &Path,
    code: &mut dyn Write,
    diagnostics: &mut dyn Write,
) -> anyhow::Result<bool> {
    let outcome = analyze_model(config, model)?;
    for diagnostic in &outcome.diagnostics {
        writeln!(diagnostics, "{}", compiler_line(diagnostic))
            .context("Failed to write diagnostics")?;
    }

    let emitter = TemplateEmitter::new(config.emit.clone())?;
    let source = emitter.emit(&outcome.records)?;
    code.write_all(source.as_bytes())
        .context("Failed to write generated code")?;

    tracing::info!(
        emitter = emitter.emitter_name(),
        registrations = outcome.records.len(),
        "code generated"
    );

    let report = AnalysisReport::new(model, &outcome, config.report.deny_warnings);
    Ok(report.passed())
}

/// `diagnostics`: one line per catalog entry
pub fn list_diagnostics(out: &mut dyn Write) -> anyhow::Result<()> {
    for (id, severity, title) in Diagnostic::catalog() {
        writeln!(out, "{id}  {:<7}  {title}", severity.to_string())
            .context("Failed to write catalog")?;
    }
    Ok(())
}

/// `file:line:column: error D001: message`
fn compiler_line(diagnostic: &Diagnostic) -> String {
    format!(
        "{}: {} {}: {}",
        diagnostic.location(),
        diagnostic.severity().to_string().to_lowercase(),
        diagnostic.id(),
        diagnostic.message()
    )
}
