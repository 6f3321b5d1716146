pub mod groq;
pub mod parse;
pub mod perf;
