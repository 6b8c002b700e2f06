use std::path::PathBuf;

pub const DATASET_PATH_VAR: &str = "DATASET_PATH";

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 3000,
            static_dir: PathBuf::from("public"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DatasetSettings {
    /// JSON ratings file; `None` selects the built-in reference ratings
    pub path: Option<PathBuf>,
}

impl DatasetSettings {
    pub fn from_env() -> Self {
        Self {
            path: std::env::var_os(DATASET_PATH_VAR).map(PathBuf::from),
        }
    }

    /// An explicit path wins over whatever the environment says
    pub fn with_override(self, path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self { path: Some(path) },
            None => self,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub dataset: DatasetSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server: ServerSettings::default(),
            dataset: DatasetSettings::from_env(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }

    pub fn with_dataset_path(mut self, path: Option<PathBuf>) -> Self {
        self.dataset = self.dataset.with_override(path);
        self
    }
}
