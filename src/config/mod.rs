use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use rand::RngCore;

use crate::error::ConfigError;

const DEFAULT_QUESTIONS_FILE: &str = "questions.json";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_QUESTIONS: usize = 10;
const DEFAULT_SESSION_TTL_SECS: u64 = 3600;

#[derive(Debug, Clone)]
pub struct Config {
    pub questions_file: PathBuf,
    pub secret_key: Vec<u8>,
    pub host: String,
    pub port: u16,
    /// Zero means every loaded question is asked.
    pub max_questions: usize,
    pub session_ttl_secs: u64,
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = match env::var("SECRET_KEY") {
            Ok(key) if !key.is_empty() => key.into_bytes(),
            _ => {
                log::warn!("No SECRET_KEY set. Sessions will not survive a restart.");
                random_secret()
            }
        };

        Ok(Self {
            questions_file: env::var("QUESTIONS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_QUESTIONS_FILE)),
            secret_key,
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env_parse("PORT", DEFAULT_PORT)?,
            max_questions: env_parse("MAX_QUESTIONS_PER_QUIZ", DEFAULT_MAX_QUESTIONS)?,
            session_ttl_secs: env_positive("SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)?,
            debug: env_bool("QUIZ_DEBUG", false)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_parse<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(default),
    }
}

fn env_positive(key: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env_parse(key, default)? {
        0 => Err(ConfigError::Invalid {
            key,
            value: "0".to_string(),
        }),
        value => Ok(value),
    }
}

fn env_bool(key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(key) {
        Ok(value) => match value.as_str() {
            "1" | "true" | "TRUE" | "True" | "yes" => Ok(true),
            "0" | "false" | "FALSE" | "False" | "no" => Ok(false),
            _ => Err(ConfigError::Invalid { key, value }),
        },
        Err(_) => Ok(default),
    }
}

fn random_secret() -> Vec<u8> {
    let mut key = vec![0u8; 32];
    rand::thread_rng().fill_bytes(&mut key);
    key
}
