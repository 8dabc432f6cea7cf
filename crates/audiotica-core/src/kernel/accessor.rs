//! Process-wide access to the current application kernel.
//!
//! An [`Application`](crate::kernel::Application) installs its kernel here when
//! it is constructed and removes it when dropped. Code that has no explicit kernel (for
//! example a design-time [`ViewModelLocator`](crate::view_model::ViewModelLocator))
//! asks [`current_kernel`], which falls back to a freshly built design-time
//! kernel while nothing is installed.
use std::sync::{Arc, PoisonError, RwLock};

use crate::kernel::container::Kernel;
use crate::kernel::error::{Error, Result};

static CURRENT: RwLock<Option<Arc<Kernel>>> = RwLock::new(None);

/// Kernel of the installed application, or a new design-time kernel.
///
/// Never fails. The fallback kernel is not cached: every call made while no
/// application is installed returns a distinct kernel.
pub fn current_kernel() -> Arc<Kernel> {
    if let Some(kernel) = installed_kernel() {
        return kernel;
    }
    let kernel = Kernel::design_time();
    log::debug!("No application installed, using design-time kernel #{}", kernel.id());
    kernel
}

/// Kernel of the installed application, if any.
pub fn installed_kernel() -> Option<Arc<Kernel>> {
    CURRENT.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Whether an application kernel is installed.
pub fn is_installed() -> bool {
    CURRENT.read().unwrap_or_else(PoisonError::into_inner).is_some()
}

/// Make `kernel` the current kernel for the process.
///
/// Fails while any kernel is current, including `kernel` itself, so two
/// applications can never share the slot.
pub fn install(kernel: Arc<Kernel>) -> Result<()> {
    let mut slot = CURRENT.write().unwrap_or_else(PoisonError::into_inner);
    match slot.as_ref() {
        Some(existing) => {
            log::warn!(
                "Refusing to install kernel #{}: kernel #{} is already current",
                kernel.id(),
                existing.id()
            );
            Err(Error::ApplicationAlreadyInstalled)
        }
        None => {
            log::info!("Installed kernel #{} as current", kernel.id());
            *slot = Some(kernel);
            Ok(())
        }
    }
}

/// Clear the current kernel if it is `kernel`. Returns whether it was cleared.
pub fn uninstall(kernel: &Arc<Kernel>) -> bool {
    let mut slot = CURRENT.write().unwrap_or_else(PoisonError::into_inner);
    match slot.as_ref() {
        Some(existing) if Arc::ptr_eq(existing, kernel) => {
            *slot = None;
            log::info!("Uninstalled kernel #{}", kernel.id());
            true
        }
        _ => false,
    }
}

/// Serializes tests that touch the process-wide slot.
#[cfg(test)]
pub(crate) fn slot_guard() -> std::sync::MutexGuard<'static, ()> {
    static GUARD: std::sync::Mutex<()> = std::sync::Mutex::new(());
    GUARD.lock().unwrap_or_else(PoisonError::into_inner)
}
