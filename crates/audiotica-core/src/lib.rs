pub mod config;
pub mod kernel;
pub mod services;
pub mod view_model;

// Re-export key public types for the binary and embedders
pub use config::{AppSettings, ConfigFormat, Theme};
pub use kernel::{Application, Kernel, LaunchArgs, ResolutionError};
pub use kernel::error::Error as KernelError;
pub use services::PageKey;
pub use view_model::{PageViewModel, ViewModel, ViewModelLocator};
