use std::fmt;
use std::path::PathBuf;

/// Errors that abort the game before the first frame is drawn
#[derive(Debug)]
pub enum GameError {
    /// SDL2 subsystem, window or canvas could not be created
    Sdl(String),

    /// An indexed image asset is missing or unreadable
    AssetLoad { path: PathBuf, reason: String },

    /// Config file exists but is not valid JSON for `GameConfig`
    Config(serde_json::Error),

    /// Config file exists but could not be read
    Io(std::io::Error),

    /// Board cannot hold a whole number of pairs
    InvalidBoard { rows: usize, columns: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::Sdl(msg) => write!(f, "SDL error: {}", msg),
            GameError::AssetLoad { path, reason } => {
                write!(f, "Failed to load {}: {}", path.display(), reason)
            }
            GameError::Config(e) => write!(f, "Invalid config: {}", e),
            GameError::Io(e) => write!(f, "IO error: {}", e),
            GameError::InvalidBoard { rows, columns } => {
                write!(
                    f,
                    "Invalid board {}x{}: tile count must be even and non-zero",
                    rows, columns
                )
            }
        }
    }
}

impl std::error::Error for GameError {}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Config(err)
    }
}

impl From<GameError> for String {
    fn from(error: GameError) -> Self {
        error.to_string()
    }
}
