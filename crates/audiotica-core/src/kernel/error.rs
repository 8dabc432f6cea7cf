//! # Audiotica Kernel Errors
//!
//! Defines error types specific to the Audiotica kernel.
//!
//! [`ResolutionError`] is raised by the [`Kernel`](crate::kernel::Kernel) when a
//! requested type, or one of the types its factory depends on, cannot be
//! produced. [`Error`] is the crate-wide error that wraps resolution failures
//! together with configuration, lifecycle and navigation failures.
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::config::error::ConfigError;

/// Failure to produce an instance from the kernel.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ResolutionError {
    /// Nothing is registered for the requested type.
    #[error("No registration found for type '{type_name}'")]
    NotRegistered { type_name: &'static str },

    /// The requested type is registered but one of its dependencies failed.
    #[error("Failed to resolve a dependency of '{type_name}': {source}")]
    Dependency {
        type_name: &'static str,
        #[source]
        source: Box<ResolutionError>,
    },

    /// Resolving the type requires resolving itself.
    #[error("Circular dependency detected: {}", chain.join(" -> "))]
    Cycle { chain: Vec<&'static str> },

    /// The factory ran but reported that it could not build the instance.
    #[error("Factory for '{type_name}' failed: {message}")]
    Construction { type_name: &'static str, message: String },

    /// A stored instance did not downcast to the requested type.
    #[error("Stored instance for '{type_name}' has an unexpected type")]
    TypeMismatch { type_name: &'static str },
}

impl ResolutionError {
    /// Name of the type whose resolution failed at the outermost level.
    pub fn type_name(&self) -> &'static str {
        match self {
            ResolutionError::NotRegistered { type_name }
            | ResolutionError::Dependency { type_name, .. }
            | ResolutionError::Construction { type_name, .. }
            | ResolutionError::TypeMismatch { type_name } => type_name,
            ResolutionError::Cycle { chain } => chain.first().copied().unwrap_or("<unknown>"),
        }
    }

    /// The innermost error, following `Dependency` links.
    pub fn root_cause(&self) -> &ResolutionError {
        let mut current = self;
        while let ResolutionError::Dependency { source, .. } = current {
            current = source;
        }
        current
    }
}

/// Represents a specific phase in the application's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum KernelLifecyclePhase {
    #[error("Launch")]
    Launch,
    #[error("Initialize")]
    Initialize,
    #[error("Start")]
    Start,
    #[error("Shutdown")]
    Shutdown,
}

/// Crate-wide error type
#[derive(Debug, ThisError)]
pub enum Error {
    /// The kernel could not resolve a requested type.
    #[error("Resolution error: {0}")]
    Resolution(#[from] ResolutionError),

    /// Loading or saving settings failed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Another application kernel is already installed as current.
    #[error("An application is already installed for this process")]
    ApplicationAlreadyInstalled,

    /// Error occurring during a specific lifecycle phase.
    #[error("Kernel lifecycle error during {phase:?}: {message}")]
    KernelLifecycleError {
        phase: KernelLifecyclePhase,
        component_name: Option<String>,
        message: String,
        #[source]
        source: Option<Box<Error>>,
    },

    /// A navigation request could not be honored.
    #[error("Navigation error: {message}")]
    Navigation { message: String },

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;
