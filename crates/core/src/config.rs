use std::path::PathBuf;

/// Configuration shared by hosts embedding the inventory core.
///
/// Hosts parse these from their own argument or settings surface, then
/// pass them to storage initialization.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Directory for local application data.
    pub data_dir: Option<PathBuf>,

    /// Path to the redb database file.
    /// Defaults to `{data_dir}/recursos.redb` if not specified.
    pub db_path: Option<PathBuf>,
}

impl ServiceConfig {
    /// Parse configuration from `--data-dir=PATH` / `--db=PATH` style
    /// arguments.
    pub fn from_args(args: &[String]) -> Self {
        let mut config = ServiceConfig::default();

        for arg in args {
            if let Some(val) = arg.strip_prefix("--data-dir=") {
                config.data_dir = Some(PathBuf::from(val));
            } else if let Some(val) = arg.strip_prefix("--db=") {
                config.db_path = Some(PathBuf::from(val));
            }
        }

        config
    }

    /// Resolve the database path, falling back to `{data_dir}/recursos.redb`.
    pub fn resolve_db_path(&self) -> PathBuf {
        self.db_path.clone().unwrap_or_else(|| {
            self.data_dir
                .as_ref()
                .map(|d| d.join("recursos.redb"))
                .unwrap_or_else(|| PathBuf::from("recursos.redb"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_args() {
        let args = vec![
            "--data-dir=/tmp/recursos".to_string(),
            "--db=/tmp/other.redb".to_string(),
        ];
        let config = ServiceConfig::from_args(&args);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/recursos")));
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/other.redb")));
    }

    #[test]
    fn test_resolve_defaults() {
        let config = ServiceConfig {
            data_dir: Some(PathBuf::from("/data")),
            ..Default::default()
        };
        assert_eq!(config.resolve_db_path(), PathBuf::from("/data/recursos.redb"));

        let bare = ServiceConfig::default();
        assert_eq!(bare.resolve_db_path(), PathBuf::from("recursos.redb"));
    }
}
