pub mod ai;
pub mod cli;
pub mod config;
pub mod utils;

pub use ai::{BogoSorter, ChatBackend, OpenAiClient, TransportError};
pub use cli::{Cli, CommandHandler, Commands};
pub use config::{ModelTarget, Settings, TargetOverrides};
