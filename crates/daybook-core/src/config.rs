use std::fs;
use std::path::{
  Path,
  PathBuf
};

use anyhow::Context;
use serde::Deserialize;
use tracing::{
  debug,
  info,
  warn
};

const CONFIG_FILE: &str =
  "daybook.toml";
const CONFIG_ENV_VAR: &str =
  "DAYBOOK_CONFIG";
const DATA_ENV_VAR: &str =
  "DAYBOOK_DATA";

/// Application configuration from
/// `daybook.toml`. Every field is
/// optional; missing files fall back
/// to defaults.
#[derive(
  Debug, Clone, Default, Deserialize,
)]
pub struct Config {
  pub timezone:   Option<String>,
  pub week_start: Option<String>,
  pub user:       Option<UserConfig>
}

/// The `[user]` section stands in
/// for the external session
/// provider: present means signed
/// in, absent means no session.
#[derive(
  Debug, Clone, Deserialize,
)]
pub struct UserConfig {
  pub id:           String,
  pub display_name: Option<String>
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
  pub user_id:      String,
  pub display_name: Option<String>
}

impl Config {
  #[tracing::instrument(skip(
    path_override
  ))]
  pub fn load(
    path_override: Option<&Path>
  ) -> anyhow::Result<Self> {
    let Some(path) =
      resolve_config_path(
        path_override
      )
    else {
      warn!(
        "no config file found; using \
         defaults"
      );
      return Ok(Self::default());
    };

    info!(config = %path.display(), "loading config");
    let text =
      fs::read_to_string(&path)
        .with_context(|| {
          format!(
            "failed to read {}",
            path.display()
          )
        })?;

    let config = toml::from_str::<Self>(
      &text
    )
    .with_context(|| {
      format!(
        "failed to parse {}",
        path.display()
      )
    })?;

    debug!(
      timezone = ?config.timezone,
      week_start = ?config.week_start,
      has_user =
        config.user.is_some(),
      "parsed config"
    );
    Ok(config)
  }

  pub fn session(
    &self
  ) -> Option<Session> {
    let user = self.user.as_ref()?;
    let id = user.id.trim();
    if id.is_empty() {
      return None;
    }
    Some(Session {
      user_id:      id.to_string(),
      display_name: user
        .display_name
        .clone()
    })
  }
}

fn resolve_config_path(
  path_override: Option<&Path>
) -> Option<PathBuf> {
  if let Some(path) = path_override {
    return Some(path.to_path_buf());
  }

  if let Ok(raw) =
    std::env::var(CONFIG_ENV_VAR)
  {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
      return Some(PathBuf::from(
        trimmed
      ));
    }
  }

  if let Some(config_dir) =
    dirs::config_dir()
  {
    let candidate = config_dir
      .join("daybook")
      .join(CONFIG_FILE);
    if candidate.exists() {
      return Some(candidate);
    }
  }

  let local = std::env::current_dir()
    .ok()
    .map(|dir| dir.join(CONFIG_FILE))?;
  local.exists().then_some(local)
}

/// Data directory resolution:
/// `DAYBOOK_DATA`, then the platform
/// data dir, then `.daybook_data`
/// under the working directory.
#[tracing::instrument]
pub fn resolve_data_dir() -> PathBuf {
  if let Ok(raw) =
    std::env::var(DATA_ENV_VAR)
  {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
      return PathBuf::from(trimmed);
    }
  }

  if let Some(data_dir) =
    dirs::data_dir()
  {
    return data_dir.join("daybook");
  }

  std::env::current_dir()
    .map(|dir| {
      dir.join(".daybook_data")
    })
    .unwrap_or_else(|_| {
      PathBuf::from(".daybook_data")
    })
}

#[cfg(test)]
mod tests {
  use super::Config;

  #[test]
  fn session_requires_user_section() {
    let config = toml::from_str::<
      Config
    >(
      "timezone = \"UTC\"\n"
    )
    .expect("parse config");
    assert!(config.session().is_none());
  }

  #[test]
  fn session_carries_user_fields() {
    let config = toml::from_str::<
      Config
    >(
      "[user]\n\
       id = \"user-1\"\n\
       display_name = \"Dana\"\n"
    )
    .expect("parse config");

    let session = config
      .session()
      .expect("session present");
    assert_eq!(
      session.user_id,
      "user-1"
    );
    assert_eq!(
      session.display_name.as_deref(),
      Some("Dana")
    );
  }

  #[test]
  fn blank_user_id_means_no_session()
  {
    let config = toml::from_str::<
      Config
    >(
      "[user]\nid = \"  \"\n"
    )
    .expect("parse config");
    assert!(config.session().is_none());
  }
}
