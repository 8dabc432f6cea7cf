mod cli;
mod logging;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use audiotica_core::kernel::constants;
use audiotica_core::kernel::Kernel;
use audiotica_core::services::{CollectionService, NavigationService};
use audiotica_core::{AppSettings, Application, LaunchArgs, PageKey, ViewModelLocator};
use clap::Parser;
use log::{error, info};

use crate::cli::{CliArgs, Commands};

fn load_settings(explicit: Option<&Path>) -> Result<AppSettings, audiotica_core::KernelError> {
    match explicit {
        Some(path) => Ok(AppSettings::load(path)?),
        None => {
            let default_path = Path::new(constants::DEFAULT_SETTINGS_FILE);
            if default_path.is_file() {
                Ok(AppSettings::load(default_path)?)
            } else {
                Ok(AppSettings::default())
            }
        }
    }
}

fn build_application(
    settings: &AppSettings,
    sample_library: bool,
) -> Result<Application, audiotica_core::KernelError> {
    let collection = if sample_library {
        CollectionService::with_sample_library()
    } else {
        CollectionService::new()
    };
    let kernel = Kernel::with_defaults(settings.clone(), collection);
    Application::with_kernel(Arc::new(kernel), settings.clone())
}

fn print_page(locator: &ViewModelLocator, page: PageKey) -> bool {
    match locator.view_model_for(page) {
        Ok(view_model) => {
            println!("{}: {}", page, view_model.summary());
            true
        }
        Err(e) => {
            eprintln!("Failed to resolve view model for '{}': {}", page, e);
            false
        }
    }
}

fn startup_failure(e: audiotica_core::KernelError) -> ExitCode {
    error!("Failed to create application: {}", e);
    eprintln!("Failed to create application: {}", e);
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    if args.ping {
        println!("pong");
        return ExitCode::SUCCESS;
    }

    let settings = match load_settings(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(args.log_level.as_deref(), &settings.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match args.command {
        Some(Commands::Pages) => {
            for page in PageKey::ALL {
                println!("{}", page);
            }
            ExitCode::SUCCESS
        }
        Some(Commands::Locate { page, design_time: true }) => {
            // No application is installed here, so the accessor falls back
            let locator = ViewModelLocator::new();
            if print_page(&locator, page) { ExitCode::SUCCESS } else { ExitCode::FAILURE }
        }
        Some(Commands::Locate { page, design_time: false }) => {
            let app = match build_application(&settings, args.sample_library) {
                Ok(app) => app,
                Err(e) => return startup_failure(e),
            };
            if print_page(&app.locator(), page) { ExitCode::SUCCESS } else { ExitCode::FAILURE }
        }
        Some(Commands::Registrations) => {
            let app = match build_application(&settings, args.sample_library) {
                Ok(app) => app,
                Err(e) => return startup_failure(e),
            };
            for name in app.kernel().registered_types() {
                println!("{}", name);
            }
            ExitCode::SUCCESS
        }
        Some(Commands::Launch { page, arg }) => {
            run(&settings, args.sample_library, LaunchArgs { page, arguments: arg }).await
        }
        None => run(&settings, args.sample_library, LaunchArgs::default()).await,
    }
}

async fn run(settings: &AppSettings, sample_library: bool, launch_args: LaunchArgs) -> ExitCode {
    println!("Initializing application...");
    let mut app = match build_application(settings, sample_library) {
        Ok(app) => app,
        Err(e) => return startup_failure(e),
    };

    if let Err(e) = app.launch(launch_args).await {
        error!("Launch failed: {}", e);
        eprintln!("Application error: {}", e);
        return ExitCode::FAILURE;
    }

    let mut status = ExitCode::SUCCESS;
    match app.kernel().resolve::<NavigationService>() {
        Ok(navigation) => match navigation.current() {
            Some(entry) => {
                info!("Showing {}", entry.page);
                if let Some(parameter) = &entry.parameter {
                    println!("Launch argument: {}", parameter);
                }
                // The ambient locator now sees the installed application
                if !print_page(&ViewModelLocator::new(), entry.page) {
                    status = ExitCode::FAILURE;
                }
            }
            None => println!("No page open."),
        },
        Err(e) => {
            eprintln!("Navigation unavailable: {}", e);
            status = ExitCode::FAILURE;
        }
    }

    println!("Shutting down application...");
    if let Err(e) = app.shutdown().await {
        eprintln!("Shutdown error: {}", e);
        status = ExitCode::FAILURE;
    }
    status
}
