use std::any::Any;
use std::fmt::Debug;

use async_trait::async_trait;

use crate::kernel::error::Result;

/// Core component lifecycle trait for services that need startup and teardown.
///
/// Components are registered with [`Kernel::register_component`](crate::kernel::Kernel::register_component)
/// and driven by the [`Application`](crate::kernel::Application) in registration order.
#[async_trait]
pub trait KernelComponent: Any + Send + Sync + Debug {
    fn name(&self) -> &'static str;
    async fn initialize(&self) -> Result<()>;
    async fn start(&self) -> Result<()>;
    async fn stop(&self) -> Result<()>;
}

/// How long a resolved instance lives inside a kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// Built once per kernel, then shared by every resolution.
    Singleton,
    /// Built anew on every resolution.
    Transient,
}

impl Lifetime {
    pub fn is_singleton(&self) -> bool {
        matches!(self, Lifetime::Singleton)
    }
}
