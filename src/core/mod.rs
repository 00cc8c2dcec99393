pub mod config;
pub mod error;
pub mod types;

pub use config::{EngineConfig, MemoryScope, RoundConfig};
pub use error::{BotError, Result};
pub use types::{BotId, RoundId};
