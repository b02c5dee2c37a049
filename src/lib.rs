//! linkbio library
//!
//! Assembles the link-in-bio editor core: configuration, tracing and the
//! wiring of adapters into use cases. A presentation layer links against this
//! crate and supplies its own notifier, navigator and clipboard.

pub mod bootstrap;

pub use bootstrap::{create_runtime, init_tracing_subscriber, load_config, AppRuntime, PresentationPorts};
