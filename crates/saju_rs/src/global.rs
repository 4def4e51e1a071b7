//! Process-wide configuration and lunar calendar backend.
//!
//! Until [`init`] is called every convenience function runs with
//! `AnalysisConfig::default()` and [`NoLunarConverter`], so lunar inputs go
//! through the default fallback policy.

use std::sync::OnceLock;

use saju_base::{AnalysisConfig, LunarConverter, NoLunarConverter, SajuError};

/// Lunar backend usable from any thread.
pub type SharedConverter = Box<dyn LunarConverter + Send + Sync>;

struct Context {
    config: AnalysisConfig,
    converter: SharedConverter,
}

static CONTEXT: OnceLock<Context> = OnceLock::new();

/// Install the global configuration and lunar backend.
///
/// Fails if the configuration is invalid or the context was already set.
pub fn init(config: AnalysisConfig, converter: SharedConverter) -> Result<(), SajuError> {
    config.validate()?;
    CONTEXT
        .set(Context { config, converter })
        .map_err(|_| SajuError::Config("global context already initialized".into()))?;
    tracing::debug!(lunar_fallback = ?config.lunar_fallback, "saju context initialized");
    Ok(())
}

/// True once [`init`] has succeeded.
pub fn is_initialized() -> bool {
    CONTEXT.get().is_some()
}

/// Active configuration.
pub fn config() -> AnalysisConfig {
    CONTEXT.get().map(|c| c.config).unwrap_or_default()
}

/// Active lunar backend.
pub(crate) fn converter() -> &'static dyn LunarConverter {
    match CONTEXT.get() {
        Some(c) => c.converter.as_ref(),
        None => &NoLunarConverter,
    }
}
