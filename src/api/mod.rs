mod client;

pub use client::GeneratorClient;
