// LLM abstraction layer

pub mod foundry;
pub mod provider;

pub use foundry::FoundryClient;
pub use provider::ChatClient;
