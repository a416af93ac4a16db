use crate::cli::Args;
use crate::config::{AppConfig, ConfigLoadResult};
use crate::error::{AppError, AppResult};
use crate::render;
use std::io::Write;
use themes::{MemoryBackend, RenderContext, ThemeEngine};

/// Turns a load result into the configuration or an error for the user.
pub fn unwrap_config(result: ConfigLoadResult) -> AppResult<AppConfig> {
    match result {
        ConfigLoadResult::Success(config) => Ok(*config),
        ConfigLoadResult::LoadError(e) | ConfigLoadResult::DeserializeError(e) => {
            Err(AppError::Config(e))
        }
    }
}

/// Applies command-line overrides on top of the loaded configuration.
pub fn apply_overrides(config: &mut AppConfig, args: &Args) {
    if let Some(theme) = args.theme {
        config.set_theme(theme);
    }
    if let Some(colors) = args.colors {
        config.set_colors(colors);
    }
    if args.no_default_colors {
        config.disable_default_colors();
    }
}

/// Validates `config`, folding every fatal problem into one user-facing
/// error. Non-fatal problems are logged and reported on stderr.
pub fn validate(config: &AppConfig) -> AppResult<()> {
    let Err(errors) = config.validate() else {
        return Ok(());
    };

    let (fatal, degraded): (Vec<_>, Vec<_>) = errors.into_iter().partition(|e| e.is_fatal());

    for error in &degraded {
        log::warn!("Configuration problem, continuing: {error}");
        eprintln!("Warning: {}", error.user_message());
    }

    if fatal.is_empty() {
        return Ok(());
    }

    for error in &fatal {
        log::error!("Configuration validation failed: {error}");
    }
    let messages: Vec<String> = fatal.iter().map(|error| error.user_message()).collect();
    Err(AppError::Validation(messages.join("\n\n")))
}

/// Builds an engine for `config` over an in-memory backend.
pub fn build_engine(config: &AppConfig) -> ThemeEngine<MemoryBackend> {
    let palette_size = config.terminal().colors().min(256) as u16;
    ThemeEngine::new(
        MemoryBackend::with_palette_size(palette_size),
        config.capability(),
        config.theme_options(),
    )
}

/// Writes the report requested by `args` to `out`.
pub fn run(args: &Args, config: &AppConfig, out: &mut dyn Write) -> AppResult<()> {
    if args.list {
        out.write_all(render::theme_list().as_bytes())?;
        return Ok(());
    }

    validate(config)?;

    let engine = build_engine(config);
    let contexts: Vec<RenderContext> = if args.contexts.is_empty() {
        RenderContext::ALL.to_vec()
    } else {
        args.contexts.clone()
    };

    let report = if args.json {
        render::json_report(&engine, &contexts)?
    } else {
        render::text_report(&engine, &contexts)
    };

    writeln!(out, "{report}")?;
    Ok(())
}
