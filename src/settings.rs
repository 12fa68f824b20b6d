use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_BATCH_SIZE, DEFAULT_BUFFER_SIZE, ENV_PREFIX, MEASUREMENTS_FILE, STATIONS_FILE,
};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use validator::Validate;

/// Resolved generator settings: defaults, then config file, then environment, then CLI.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct GeneratorConfig {
    pub stations_path: PathBuf,

    pub output_path: PathBuf,

    #[validate(range(min = 1))]
    pub batch_size: usize,

    // Upper bound matches MAX_BUFFER_SIZE
    #[validate(range(min = 1, max = 1073741824))]
    pub buffer_size: usize,
}

/// Values given explicitly on the command line; they win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub stations_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub batch_size: Option<usize>,
    pub buffer_size: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            stations_path: PathBuf::from(STATIONS_FILE),
            output_path: PathBuf::from(MEASUREMENTS_FILE),
            batch_size: DEFAULT_BATCH_SIZE,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl GeneratorConfig {
    pub fn load(config_file: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        Self::load_with_env(
            config_file,
            overrides,
            Environment::with_prefix(ENV_PREFIX).try_parsing(true),
        )
    }

    fn load_with_env(
        config_file: Option<&Path>,
        overrides: ConfigOverrides,
        environment: Environment,
    ) -> Result<Self> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("stations_path", path_value(&defaults.stations_path))?
            .set_default("output_path", path_value(&defaults.output_path))?
            .set_default("batch_size", defaults.batch_size as i64)?
            .set_default("buffer_size", defaults.buffer_size as i64)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder
            .add_source(environment)
            .set_override_option(
                "stations_path",
                overrides.stations_path.as_deref().map(path_value),
            )?
            .set_override_option(
                "output_path",
                overrides.output_path.as_deref().map(path_value),
            )?
            .set_override_option("batch_size", overrides.batch_size.map(|v| v as i64))?
            .set_override_option("buffer_size", overrides.buffer_size.map(|v| v as i64))?;

        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()?;

        Ok(settings)
    }
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
