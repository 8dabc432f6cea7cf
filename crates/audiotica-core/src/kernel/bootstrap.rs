use std::sync::Arc;

use crate::config::AppSettings;
use crate::kernel::accessor;
use crate::kernel::constants;
use crate::kernel::container::Kernel;
use crate::kernel::error::{Error, KernelLifecyclePhase, Result};
use crate::services::{CollectionService, NavigationService, PageKey};
use crate::view_model::ViewModelLocator;

/// Arguments the platform hands over when the application is activated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchArgs {
    /// Page to open instead of the configured initial page
    pub page: Option<PageKey>,
    /// Opaque argument forwarded to the first page
    pub arguments: Option<String>,
}

impl LaunchArgs {
    pub fn with_page(page: PageKey) -> Self {
        Self { page: Some(page), arguments: None }
    }
}

/// The running application. Owns the kernel and drives its components.
///
/// At most one application exists per process. Constructing one installs its
/// kernel as the process-wide current kernel, and dropping it uninstalls it.
pub struct Application {
    kernel: Arc<Kernel>,
    settings: AppSettings,
    launched: bool,
}

impl Application {
    /// Creates an application with the default registrations and an empty
    /// collection.
    ///
    /// Fails with [`Error::ApplicationAlreadyInstalled`] while another
    /// application is alive.
    pub fn new(settings: AppSettings) -> Result<Self> {
        let kernel = Kernel::with_defaults(settings.clone(), CollectionService::new());
        Self::with_kernel(Arc::new(kernel), settings)
    }

    /// Creates an application around a kernel composed by the caller.
    pub fn with_kernel(kernel: Arc<Kernel>, settings: AppSettings) -> Result<Self> {
        log::info!("Initializing {} v{} with kernel #{}", constants::APP_NAME, constants::APP_VERSION, kernel.id());
        accessor::install(kernel.clone())?;
        Ok(Application {
            kernel,
            settings,
            launched: false,
        })
    }

    pub fn kernel(&self) -> &Arc<Kernel> {
        &self.kernel
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Locator bound to this application's kernel.
    pub fn locator(&self) -> ViewModelLocator {
        ViewModelLocator::with_kernel(self.kernel.clone())
    }

    /// Initialize and start all components, then open the first page.
    ///
    /// The first page is only opened when the back stack is empty, so a
    /// re-activated application keeps its navigation state.
    pub async fn launch(&mut self, args: LaunchArgs) -> Result<()> {
        if self.launched {
            return Err(Error::KernelLifecycleError {
                phase: KernelLifecyclePhase::Launch,
                component_name: None,
                message: "Application already launched".to_string(),
                source: None,
            });
        }

        let navigation = self.kernel.resolve::<NavigationService>()?;
        self.initialize().await?;
        self.start().await?;

        match navigation.current() {
            Some(entry) => log::info!("Resuming on {}", entry.page),
            None => {
                let page = args.page.unwrap_or(self.settings.initial_page);
                navigation.navigate(page, args.arguments);
            }
        }
        self.launched = true;
        log::info!("Application launched.");
        Ok(())
    }

    /// Initialize all registered components in registration order.
    async fn initialize(&mut self) -> Result<()> {
        log::info!("Initializing components...");
        for component in self.kernel.components() {
            log::info!("Initializing component: {}", component.name());
            component.initialize().await.map_err(|e| Error::KernelLifecycleError {
                phase: KernelLifecyclePhase::Initialize,
                component_name: Some(component.name().to_string()),
                message: "Component failed to initialize".to_string(),
                source: Some(Box::new(e)),
            })?;
        }
        log::info!("Component initialization complete.");
        Ok(())
    }

    /// Start all initialized components in registration order.
    async fn start(&mut self) -> Result<()> {
        log::info!("Starting components...");
        for component in self.kernel.components() {
            log::info!("Starting component: {}", component.name());
            component.start().await.map_err(|e| Error::KernelLifecycleError {
                phase: KernelLifecyclePhase::Start,
                component_name: Some(component.name().to_string()),
                message: "Component failed to start".to_string(),
                source: Some(Box::new(e)),
            })?;
        }
        log::info!("Component start complete.");
        Ok(())
    }

    /// Stop all components in reverse registration order.
    pub async fn shutdown(&mut self) -> Result<()> {
        log::info!("Shutting down components...");
        for component in self.kernel.components().iter().rev() {
            log::info!("Stopping component: {}", component.name());
            if let Err(e) = component.stop().await {
                log::error!("Error stopping component {}: {}", component.name(), e);
                // Propagate the first error encountered during shutdown
                return Err(Error::KernelLifecycleError {
                    phase: KernelLifecyclePhase::Shutdown,
                    component_name: Some(component.name().to_string()),
                    message: "Component failed to stop".to_string(),
                    source: Some(Box::new(e)),
                });
            }
        }
        self.launched = false;
        log::info!("Component shutdown complete.");
        Ok(())
    }

    /// Returns whether the application has been launched and not shut down.
    pub fn is_launched(&self) -> bool {
        self.launched
    }
}

impl Drop for Application {
    fn drop(&mut self) {
        accessor::uninstall(&self.kernel);
    }
}
