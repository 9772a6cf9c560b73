pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::storage::LocalStorage;
pub use app::menu::Menu;
pub use config::{CliConfig, Command, Settings};
pub use crate::core::persistence::{LoadStatus, Loaded};
pub use crate::core::registry::Registry;
pub use domain::model::{Course, CourseKind, Person, Role};
pub use utils::error::{RegistryError, Result};
