pub mod errors;
pub mod theme;
pub mod types;

pub use errors::ConfigError;
pub use theme::Theme;
pub use types::{AnsiColor, Rgb};
