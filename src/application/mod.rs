mod config;
mod session;

pub use config::{CONFIG_ENV, ConfigError, LifeConfig, cells_for_display};
pub use session::{Colour, Command, Session};
