use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub pacing_ms: u64,
    pub seed: Option<u64>,
    pub ascii: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub pacing_ms: ValueSource,
    pub seed: ValueSource,
    pub ascii: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            pacing_ms: ValueSource::Default,
            seed: ValueSource::Default,
            ascii: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pacing_ms: 1_000,
            seed: None,
            ascii: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("TWENTYONE_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.pacing_ms {
            cfg.pacing_ms = v;
            sources.pacing_ms = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.ascii {
            cfg.ascii = v;
            sources.ascii = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("TWENTYONE_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(pacing) = std::env::var("TWENTYONE_PACING_MS")
        && !pacing.is_empty()
    {
        cfg.pacing_ms = pacing
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid pacing_ms".into()))?;
        sources.pacing_ms = ValueSource::Env;
    }
    if let Ok(ascii) = std::env::var("TWENTYONE_ASCII")
        && !ascii.is_empty()
    {
        cfg.ascii =
            parse_bool(&ascii).ok_or_else(|| ConfigError::Invalid("Invalid ascii".into()))?;
        sources.ascii = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    pacing_ms: Option<u64>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    ascii: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.pacing_ms > 10_000 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: pacing_ms must be <= 10000".into(),
        ));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write as _;

    fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) }
    }

    fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) }
    }

    fn clear_all() {
        for key in [
            "TWENTYONE_CONFIG",
            "TWENTYONE_SEED",
            "TWENTYONE_PACING_MS",
            "TWENTYONE_ASCII",
        ] {
            remove_env(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        clear_all();
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config, Config::default());
        assert!(matches!(resolved.sources.pacing_ms, ValueSource::Default));
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_all();
        set_env("TWENTYONE_SEED", "42");
        set_env("TWENTYONE_PACING_MS", "0");
        set_env("TWENTYONE_ASCII", "yes");
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config.seed, Some(42));
        assert_eq!(resolved.config.pacing_ms, 0);
        assert!(resolved.config.ascii);
        assert!(matches!(resolved.sources.seed, ValueSource::Env));
        clear_all();
    }

    #[test]
    #[serial]
    fn test_file_config_with_env_precedence() {
        clear_all();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pacing_ms = 250\nseed = 7").unwrap();
        set_env("TWENTYONE_CONFIG", file.path().to_str().unwrap());
        set_env("TWENTYONE_SEED", "99");

        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config.pacing_ms, 250);
        assert!(matches!(resolved.sources.pacing_ms, ValueSource::File));
        // Env wins over file
        assert_eq!(resolved.config.seed, Some(99));
        assert!(matches!(resolved.sources.seed, ValueSource::Env));
        clear_all();
    }

    #[test]
    #[serial]
    fn test_invalid_pacing_rejected() {
        clear_all();
        set_env("TWENTYONE_PACING_MS", "999999");
        let result = load_with_sources();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
        clear_all();
    }

    #[test]
    #[serial]
    fn test_invalid_seed_rejected() {
        clear_all();
        set_env("TWENTYONE_SEED", "not-a-number");
        let result = load_with_sources();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
        clear_all();
    }
}
