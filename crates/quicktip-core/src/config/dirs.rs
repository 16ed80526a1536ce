use directories::ProjectDirs;
use std::path::PathBuf;

/// Application directories following XDG spec
#[derive(Debug, Clone)]
pub struct Directories {
    /// Config directory (~/.config/quicktip)
    pub config: PathBuf,

    /// Config file path
    pub config_file: PathBuf,
}

impl Directories {
    /// Create a new `Directories` instance with standard XDG paths.
    ///
    /// Falls back to the current directory when no home directory can be
    /// determined (e.g. a stripped-down container).
    #[must_use]
    pub fn new() -> Self {
        match ProjectDirs::from("", "", "quicktip") {
            Some(project) => Self::with_base(project.config_dir().to_path_buf()),
            None => Self::with_base(PathBuf::from(".quicktip")),
        }
    }

    #[must_use]
    pub fn with_base(base: PathBuf) -> Self {
        Self {
            config_file: base.join("config.json"),
            config: base,
        }
    }

    /// Directories for an explicit config file, e.g. from `--config`.
    #[must_use]
    pub fn for_config_file(config_file: PathBuf) -> Self {
        let config = match config_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self {
            config,
            config_file,
        }
    }

    /// Ensure the config directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_exists(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config)
    }
}

impl Default for Directories {
    fn default() -> Self {
        Self::new()
    }
}
