// Resume analyzer agent
//
// `analyzer` drives the remote chat deployment, `parser` turns the free-form
// reply into a structured analysis, `prompts` holds the instruction text.

pub mod analyzer;
pub mod parser;
pub mod prompts;

pub use analyzer::ResumeAnalyzerAgent;
