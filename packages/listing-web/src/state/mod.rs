//! Global state management

use std::time::Duration;

use dioxus::prelude::*;
use listing_core::{Config, GeneratorStrategy, PipelineTimings};
use serde::{Deserialize, Serialize};

/// How long a toast stays on screen
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Screen delays and generator choice as sent from the server
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub analyze_delay_ms: u64,
    pub results_delay_ms: u64,
    #[serde(default)]
    pub strategy: GeneratorStrategy,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(PipelineTimings::default())
    }
}

impl From<PipelineTimings> for Settings {
    fn from(timings: PipelineTimings) -> Self {
        Self {
            analyze_delay_ms: timings.analyze_delay.as_millis() as u64,
            results_delay_ms: timings.results_delay.as_millis() as u64,
            strategy: GeneratorStrategy::default(),
        }
    }
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Self {
            strategy: config.strategy,
            ..Self::from(config.timings)
        }
    }
}

impl Settings {
    pub fn timings(&self) -> PipelineTimings {
        PipelineTimings {
            analyze_delay: Duration::from_millis(self.analyze_delay_ms),
            results_delay: Duration::from_millis(self.results_delay_ms),
        }
    }
}

/// Hook to read the current settings
pub fn use_settings() -> Signal<Settings> {
    use_context::<Signal<Settings>>()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn classes(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-green-50 border-green-200 text-green-700",
            ToastKind::Error => "bg-red-50 border-red-200 text-red-700",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Transient notifications shown in the top-right corner
#[derive(Clone, Copy)]
pub struct ToastState {
    pub toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|t| t.id != id);
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.toasts.write().push(Toast { id, kind, message });
    }
}

/// Hook to access the toast context
pub fn use_toasts() -> ToastState {
    use_context::<ToastState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_pipeline_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.analyze_delay_ms, 1500);
        assert_eq!(settings.results_delay_ms, 2000);
        assert_eq!(settings.timings(), PipelineTimings::default());
        assert_eq!(settings.strategy, GeneratorStrategy::Mock);
    }

    #[test]
    fn settings_survive_the_wire() {
        let settings = Settings {
            analyze_delay_ms: 10,
            results_delay_ms: 20,
            strategy: GeneratorStrategy::Api,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains(r#""strategy":"api""#));
        assert_eq!(serde_json::from_str::<Settings>(&json).unwrap(), settings);
        assert_eq!(settings.timings().results_delay, Duration::from_millis(20));
    }

    #[test]
    fn settings_carry_the_configured_strategy() {
        let config = Config {
            strategy: GeneratorStrategy::Api,
            ..Config::default()
        };
        assert_eq!(Settings::from(&config).strategy, GeneratorStrategy::Api);
        assert_eq!(Settings::from(&config).analyze_delay_ms, 1500);
    }
}
