//! Headless stand-ins for the presentation layer ports.

mod clipboard;
mod navigator;
mod notifier;

pub use clipboard::MemoryClipboard;
pub use navigator::TracingNavigator;
pub use notifier::TracingNotifier;
