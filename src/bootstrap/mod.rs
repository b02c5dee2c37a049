pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{default_config_path, load_config, resolve_config};
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{create_runtime, AppRuntime, PresentationPorts};
