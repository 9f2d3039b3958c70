//! CLI entrypoint for Wellness Guide
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use wellness_application::{
    AnalysisKind, AnalyzeSkinUseCase, ConversationLogger, ExperienceParams, HealthChatSession,
    NoConversationLogger, NoProgress, ProgressNotifier, SubmitOutcome, SuggestOutfitsUseCase,
    Timer,
};
use wellness_infrastructure::{
    ConfigLoader, JsonlConversationLogger, KeywordResponder, SystemClock, TokioTimer, UniformDelay,
};
use wellness_presentation::{
    ChatRepl, Cli, Command, OutputFormatter, ProgressReporter, ReplConfig, SimpleProgress,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate()?;

    let _log_guard = init_tracing(cli.verbose, config.logging.file.as_deref())?;
    info!("Starting Wellness Guide");

    if !config.output.color {
        colored::control::set_override(false);
    }

    let params = if cli.no_delay {
        ExperienceParams::instant()
    } else {
        config.to_experience_params()
    };
    let format = cli.output.or(config.output.format).unwrap_or_default();
    let formatter = <dyn OutputFormatter>::for_format(format);

    // === Dependency Injection ===
    let log_path = cli
        .conversation_log
        .clone()
        .or_else(|| config.logging.conversation_log.as_ref().map(PathBuf::from));
    let logger = conversation_logger(log_path.as_deref());
    let timer: Arc<dyn Timer> = Arc::new(TokioTimer);

    let progress: Box<dyn ProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => {
            let session = chat_session(&params, timer, logger);
            let repl_config = ReplConfig {
                show_progress: !cli.quiet && config.repl.show_progress,
                history_file: config.repl.history_file.as_ref().map(PathBuf::from),
            };
            ChatRepl::new(session)
                .with_config(repl_config)
                .run()
                .await?;
        }
        Command::Ask { question } => {
            let session = chat_session(&params, timer, logger);
            let pending = match session.submit(&question) {
                SubmitOutcome::Accepted(pending) => pending,
                SubmitOutcome::Rejected(_) => bail!("Question cannot be empty"),
            };

            progress.on_analysis_start(AnalysisKind::ChatReply);
            let reply = pending.wait().await;
            progress.on_analysis_complete(AnalysisKind::ChatReply, reply.is_some());

            let reply = reply.context("The assistant did not reply")?;
            println!("{}", formatter.format_message(&reply));
        }
        Command::Skincare(args) => {
            let use_case = AnalyzeSkinUseCase::new(timer, params.skin_analysis_delay)
                .with_conversation_logger(logger);
            let analysis = use_case
                .execute_with_progress(&args.to_profile(), progress.as_ref())
                .await?;
            println!("{}", formatter.format_skin_analysis(&analysis));
        }
        Command::Outfit(args) => {
            let use_case = SuggestOutfitsUseCase::new(timer, params.outfit_delay)
                .with_conversation_logger(logger);
            let suggestions = use_case
                .execute_with_progress(&args.to_request(), progress.as_ref())
                .await?;
            println!("{}", formatter.format_outfits(&suggestions));
        }
    }

    Ok(())
}

/// Install the tracing subscriber. Verbosity picks the level; a configured
/// log file replaces stderr. The guard must live until exit.
fn init_tracing(verbose: u8, log_file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(log_file) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let path = Path::new(log_file);
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", log_file))?;
    std::fs::create_dir_all(directory)
        .with_context(|| format!("Could not create log directory {}", directory.display()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

fn conversation_logger(path: Option<&Path>) -> Arc<dyn ConversationLogger> {
    let Some(path) = path else {
        return Arc::new(NoConversationLogger);
    };
    match JsonlConversationLogger::open(path) {
        Some(logger) => {
            info!("Conversation transcript: {}", logger.path().display());
            Arc::new(logger)
        }
        None => {
            warn!("Continuing without a conversation transcript");
            Arc::new(NoConversationLogger)
        }
    }
}

fn chat_session(
    params: &ExperienceParams,
    timer: Arc<dyn Timer>,
    logger: Arc<dyn ConversationLogger>,
) -> HealthChatSession {
    HealthChatSession::initialize(
        Arc::new(KeywordResponder),
        timer,
        Arc::new(UniformDelay::new(
            params.reply_delay_min,
            params.reply_delay_max,
        )),
        Arc::new(SystemClock),
    )
    .with_conversation_logger(logger)
}
