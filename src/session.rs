//! One viewing session: start the platform's log command, run the viewer,
//! reap the command.

use crate::config::ResolvedConfig;
use crate::model::{AppError, Platform};
use crate::source::ProcessSource;
use crate::state::AppState;
use crate::view::constants::FALLBACK_SIZE;
use crate::view::{ColorConfig, Theme, run_tui};
use tracing::{info, warn};

/// What the user asked to view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Device platform whose log command is launched.
    pub platform: Platform,
    /// Filter applied before the first frame.
    pub initial_filter: Option<String>,
}

/// Build the initial viewer state. The real terminal size replaces the
/// fallback size once the terminal is entered.
pub fn initial_state(options: &SessionOptions) -> AppState {
    let (width, height) = FALLBACK_SIZE;
    let state = AppState::new(options.platform, width, height);
    match options.initial_filter.as_deref() {
        Some(filter) => state.with_filter(filter),
        None => state,
    }
}

/// Run a session to completion.
///
/// The log command is reaped even when the terminal fails. A rendering
/// failure is reported in preference to a reaping failure, which is then
/// only logged.
///
/// # Errors
///
/// - `SourceError` if the command cannot start, or exits abnormally
/// - `RenderError` if the terminal cannot be driven
pub fn run(options: &SessionOptions, config: &ResolvedConfig) -> Result<(), AppError> {
    let command = config.command_for(options.platform);
    let (source, stream) = ProcessSource::start(&command)?;
    info!(
        platform = %options.platform,
        pid = source.id(),
        filter = ?options.initial_filter,
        "session started"
    );

    let theme = Theme::new(ColorConfig::from_env_and_args(config.no_color));
    let rendered = run_tui(initial_state(options), stream, theme, config.tick_rate());

    let policy = config.shutdown_policy();
    let finished = source.finish(policy);
    info!(?policy, ok = finished.is_ok(), "log command reaped");

    match (rendered, finished) {
        (Err(render), Err(source)) => {
            warn!(error = %source, "log command failed after terminal error");
            Err(render.into())
        }
        (Err(render), Ok(())) => Err(render.into()),
        (Ok(()), finished) => finished.map_err(AppError::from),
    }
}
