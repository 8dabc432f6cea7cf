//! # Audiotica Core Kernel
//!
//! The `kernel` module is the heart of `audiotica-core`: the dependency
//! injection container, the application object that owns it, and the
//! process-wide accessor used when no application is at hand.
//!
//! ## Key Responsibilities & Components:
//!
//! - **Dependency Injection**: [`Kernel`](container::Kernel) maps types to
//!   singleton or transient factories; factories resolve their own
//!   dependencies through a [`Resolver`](container::Resolver).
//! - **Application Bootstrapping**: [`Application`](bootstrap::Application)
//!   owns a kernel, launches its [`KernelComponent`]s and opens the first page.
//! - **Kernel Access**: [`accessor`] returns the installed application's
//!   kernel, or a fresh design-time kernel when none is installed.
//! - **Default Registrations**: the `modules` submodule wires services and
//!   view models together.
//! - **Error Handling**: [`Error`], [`ResolutionError`] and a `Result` alias.
pub mod accessor;
pub mod bootstrap;
pub mod component;
pub mod constants;
pub mod container;
pub mod error;
pub mod modules;

pub use accessor::current_kernel;
pub use bootstrap::{Application, LaunchArgs};
pub use component::{KernelComponent, Lifetime};
pub use container::{Kernel, Resolver};
pub use error::{Error, ResolutionError, Result};

// Test module declaration
#[cfg(test)]
mod tests;
