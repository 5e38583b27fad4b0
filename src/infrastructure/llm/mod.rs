mod ollama_generator;

pub use ollama_generator::OllamaGenerator;
