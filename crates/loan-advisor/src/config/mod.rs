use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the advisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub speech: SpeechConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let language = env::var("ADVISOR_SPEECH_LANG").unwrap_or_else(|_| "en-IN".to_string());
        let rate = parse_speech_dial("ADVISOR_SPEECH_RATE")?;
        let pitch = parse_speech_dial("ADVISOR_SPEECH_PITCH")?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            speech: SpeechConfig {
                language,
                rate,
                pitch,
            },
        })
    }
}

fn parse_speech_dial(var: &'static str) -> Result<f32, ConfigError> {
    match env::var(var) {
        Err(_) => Ok(1.0),
        Ok(raw) => {
            let value = raw
                .trim()
                .parse::<f32>()
                .map_err(|_| ConfigError::InvalidSpeechDial { var })?;
            if value.is_finite() && value > 0.0 {
                Ok(value)
            } else {
                Err(ConfigError::InvalidSpeechDial { var })
            }
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Playback defaults handed to the speech synthesizer.
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    pub language: String,
    pub rate: f32,
    pub pitch: f32,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSpeechDial { var: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSpeechDial { var } => {
                write!(f, "{var} must be a finite positive number")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
