pub mod builtins;
pub mod environment;
pub mod output;
pub mod value;
