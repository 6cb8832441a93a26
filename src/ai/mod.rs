pub mod error;
pub mod openai_client;
pub mod prompt;
pub mod response;
pub mod sorter;

pub use error::TransportError;
pub use openai_client::{ChatBackend, OpenAiClient, RawReply};
pub use prompt::PromptBuilder;
pub use response::{ResponseExtractor, SENTINEL};
pub use sorter::BogoSorter;
