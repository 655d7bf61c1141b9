//! Server configuration: defaults, then an optional TOML file, then
//! `ROSTER_*` environment variables.

use std::path::{Path, PathBuf};

use config::{ConfigError, Environment, File, Source};
use roster_core::{RecordId, department::NewDepartment};
use serde::Deserialize;

/// Prefix of the environment variables that override the file, e.g.
/// `ROSTER_PORT`.
const ENV_PREFIX: &str = "ROSTER";

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:        String,
  pub port:        u16,
  pub store_path:  PathBuf,
  /// Departments guaranteed to exist once the server is up.
  #[serde(default)]
  pub departments: Vec<DepartmentSeed>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DepartmentSeed {
  pub id:   RecordId,
  pub name: String,
}

impl From<DepartmentSeed> for NewDepartment {
  fn from(seed: DepartmentSeed) -> Self {
    NewDepartment { id: Some(seed.id), name: seed.name }
  }
}

impl ServerConfig {
  /// Load from `path` (which may be absent) layered under the environment.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::build(
      File::from(path).required(false),
      Environment::with_prefix(ENV_PREFIX),
    )
  }

  fn build<S>(file: S, env: Environment) -> Result<Self, ConfigError>
  where
    S: Source + Send + Sync + 'static,
  {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8000_i64)?
      .set_default("store_path", "roster.db")?
      .add_source(file)
      .add_source(env)
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

#[cfg(test)]
mod tests {
  use config::FileFormat;

  use super::*;

  fn from_toml(toml: &str) -> ServerConfig {
    ServerConfig::build(
      File::from_str(toml, FileFormat::Toml),
      Environment::with_prefix(ENV_PREFIX),
    )
    .unwrap()
  }

  #[test]
  fn defaults_apply_without_a_file() {
    let cfg = from_toml("");
    assert_eq!(cfg.address(), "127.0.0.1:8000");
    assert_eq!(cfg.store_path, PathBuf::from("roster.db"));
    assert!(cfg.departments.is_empty());
  }

  #[test]
  fn missing_file_is_not_an_error() {
    let cfg = ServerConfig::load(Path::new("/nonexistent/roster.toml")).unwrap();
    assert_eq!(cfg.store_path, PathBuf::from("roster.db"));
  }

  #[test]
  fn file_values_and_departments_are_read() {
    let cfg = from_toml(
      r#"
        host = "0.0.0.0"
        port = 9090
        store_path = "~/roster/data.db"

        [[departments]]
        id = "D1"
        name = "Marketing"

        [[departments]]
        id = "D2"
        name = "IT"
      "#,
    );
    assert_eq!(cfg.address(), "0.0.0.0:9090");
    assert_eq!(cfg.store_path, PathBuf::from("~/roster/data.db"));
    assert_eq!(cfg.departments, vec![
      DepartmentSeed { id: "D1".into(), name: "Marketing".into() },
      DepartmentSeed { id: "D2".into(), name: "IT".into() },
    ]);
  }

  #[test]
  fn environment_overrides_the_file() {
    // Outside the `ROSTER_` namespace, so no other test picks these up.
    const PREFIX: &str = "RSTRTEST_SETTINGS";
    unsafe {
      std::env::set_var(format!("{PREFIX}_PORT"), "9000");
      std::env::set_var(format!("{PREFIX}_STORE_PATH"), "/srv/roster.db");
    }

    let cfg = ServerConfig::build(
      File::from_str(
        r#"
          port = 8000
          store_path = "file.db"
        "#,
        FileFormat::Toml,
      ),
      Environment::with_prefix(PREFIX),
    )
    .unwrap();

    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.store_path, PathBuf::from("/srv/roster.db"));
    assert_eq!(cfg.host, "127.0.0.1");
  }
}
