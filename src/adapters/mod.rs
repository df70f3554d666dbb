// Adapters layer: concrete implementations of domain ports.

pub mod console;

pub use console::ConsoleTerminal;
