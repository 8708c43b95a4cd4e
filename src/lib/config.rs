//! Build-time configuration for animation timing and log verbosity with an
//! optional runtime override. The runtime config is read from
//! `window.LOOKOUT_CONFIG` (if present) so static deployments can retune the
//! page without rebuilding. Unparsable values are ignored.

use crate::features::eye::blink::{
    BlinkTiming, DEFAULT_CLOSED_MAX_MS, DEFAULT_CLOSED_MIN_MS, DEFAULT_PERIOD_MS,
};
use crate::app_lib::AppError;
use tracing::{warn, Level};

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub blink_period_ms: u32,
    pub blink_closed_min_ms: u32,
    pub blink_closed_max_ms: u32,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            blink_period_ms: DEFAULT_PERIOD_MS,
            blink_closed_min_ms: DEFAULT_CLOSED_MIN_MS,
            blink_closed_max_ms: DEFAULT_CLOSED_MAX_MS,
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::default();

        let build_time = RuntimeConfig {
            blink_period_ms: option_env!("LOOKOUT_BLINK_PERIOD_MS").and_then(normalize_runtime_value),
            blink_closed_min_ms: option_env!("LOOKOUT_BLINK_MIN_MS").and_then(normalize_runtime_value),
            blink_closed_max_ms: option_env!("LOOKOUT_BLINK_MAX_MS").and_then(normalize_runtime_value),
            log_level: option_env!("LOOKOUT_LOG_LEVEL").and_then(normalize_runtime_value),
        };
        apply_runtime_overrides(&mut config, build_time);

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Validates the configured blink timing as a whole.
    pub fn checked_blink_timing(&self) -> Result<BlinkTiming, AppError> {
        if self.blink_period_ms == 0 {
            return Err(AppError::Config(
                "blink period must be greater than zero".to_string(),
            ));
        }
        BlinkTiming::new(
            self.blink_period_ms,
            self.blink_closed_min_ms,
            self.blink_closed_max_ms,
        )
        .ok_or_else(|| {
            AppError::Config(format!(
                "blink closed window {}..{} ms is empty",
                self.blink_closed_min_ms, self.blink_closed_max_ms
            ))
        })
    }

    /// Blink timing with per-field fallback: an unusable period or closed
    /// window is replaced by its default without discarding the other.
    pub fn blink_timing(&self) -> BlinkTiming {
        match self.checked_blink_timing() {
            Ok(timing) => timing,
            Err(err) => {
                warn!(%err, "invalid blink timing; falling back to defaults for the bad fields");
                let period_ms = if self.blink_period_ms == 0 {
                    DEFAULT_PERIOD_MS
                } else {
                    self.blink_period_ms
                };
                BlinkTiming::new(period_ms, self.blink_closed_min_ms, self.blink_closed_max_ms)
                    .or_else(|| {
                        BlinkTiming::new(period_ms, DEFAULT_CLOSED_MIN_MS, DEFAULT_CLOSED_MAX_MS)
                    })
                    .unwrap_or_default()
            }
        }
    }
}

#[derive(Default)]
struct RuntimeConfig {
    blink_period_ms: Option<String>,
    blink_closed_min_ms: Option<String>,
    blink_closed_max_ms: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.blink_period_ms.as_deref().and_then(parse_millis) {
        config.blink_period_ms = value;
    }
    if let Some(value) = runtime.blink_closed_min_ms.as_deref().and_then(parse_millis) {
        config.blink_closed_min_ms = value;
    }
    if let Some(value) = runtime.blink_closed_max_ms.as_deref().and_then(parse_millis) {
        config.blink_closed_max_ms = value;
    }
    if let Some(value) = runtime.log_level.as_deref().and_then(parse_level) {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("LOOKOUT_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        blink_period_ms: read_runtime_value(&object, "blink_period_ms"),
        blink_closed_min_ms: read_runtime_value(&object, "blink_closed_min_ms"),
        blink_closed_max_ms: read_runtime_value(&object, "blink_closed_max_ms"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

/// Reads a string or number property; numbers are accepted so `{ blink_period_ms: 1500 }` works.
#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let value = match value.as_f64() {
        Some(number) if number.is_finite() && number >= 0.0 => format!("{}", number.trunc()),
        _ => value.as_string()?,
    };
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_millis(value: &str) -> Option<u32> {
    value.parse().ok()
}

fn parse_level(value: &str) -> Option<Level> {
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::{
        apply_runtime_overrides, normalize_runtime_value, AppConfig, AppError, Level,
        RuntimeConfig,
    };
    use std::time::Duration;

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  1500 "),
            Some("1500".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_and_garbage_values() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            blink_period_ms: normalize_runtime_value(""),
            blink_closed_min_ms: normalize_runtime_value("soon"),
            blink_closed_max_ms: normalize_runtime_value("-4"),
            log_level: normalize_runtime_value("loud"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            blink_period_ms: normalize_runtime_value("3000"),
            blink_closed_min_ms: normalize_runtime_value("100"),
            blink_closed_max_ms: normalize_runtime_value("150"),
            log_level: normalize_runtime_value("debug"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.blink_period_ms, 3000);
        assert_eq!(config.blink_closed_min_ms, 100);
        assert_eq!(config.blink_closed_max_ms, 150);
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.blink_timing().period(), Duration::from_millis(3000));
    }

    #[test]
    fn blink_timing_falls_back_on_inverted_window() {
        let config = AppConfig {
            blink_closed_min_ms: 300,
            blink_closed_max_ms: 200,
            ..AppConfig::default()
        };
        assert_eq!(config.blink_timing(), AppConfig::default().blink_timing());
    }

    #[test]
    fn bad_closed_window_keeps_configured_period() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            blink_period_ms: normalize_runtime_value("3000"),
            blink_closed_min_ms: normalize_runtime_value("250"),
            ..RuntimeConfig::default()
        };
        apply_runtime_overrides(&mut config, runtime);

        assert!(matches!(
            config.checked_blink_timing(),
            Err(AppError::Config(_))
        ));
        let timing = config.blink_timing();
        assert_eq!(timing.period(), Duration::from_millis(3000));
        assert_eq!(timing.closed_min_ms(), 160);
        assert_eq!(timing.closed_max_ms(), 220);
    }

    #[test]
    fn zero_period_keeps_configured_window() {
        let config = AppConfig {
            blink_period_ms: 0,
            blink_closed_min_ms: 100,
            blink_closed_max_ms: 150,
            ..AppConfig::default()
        };

        let err = config.checked_blink_timing().expect_err("zero period");
        assert_eq!(
            err.to_string(),
            "Config error: blink period must be greater than zero"
        );
        let timing = config.blink_timing();
        assert_eq!(timing.period(), Duration::from_millis(2000));
        assert_eq!(timing.closed_min_ms(), 100);
        assert_eq!(timing.closed_max_ms(), 150);
    }

    #[test]
    fn load_always_yields_usable_timing() {
        let timing = AppConfig::load().blink_timing();
        assert!(timing.closed_min_ms() < timing.closed_max_ms());
        assert!(timing.period() > Duration::ZERO);
    }
}
