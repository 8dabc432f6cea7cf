use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::config::AppSettings;
use crate::kernel::accessor::{self, slot_guard};
use crate::kernel::bootstrap::*;
use crate::kernel::component::KernelComponent;
use crate::kernel::container::Kernel;
use crate::kernel::error::{Error, KernelLifecyclePhase, Result};
use crate::services::{CollectionService, NavigationService, PageKey, PlaybackService};

// Records lifecycle calls of several components into one shared log
#[derive(Debug)]
struct Recorder {
    name: &'static str,
    log: Arc<Mutex<Vec<String>>>,
    fail_on_start: bool,
}

#[async_trait]
impl KernelComponent for Recorder {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn initialize(&self) -> Result<()> {
        self.log.lock().unwrap().push(format!("init:{}", self.name));
        Ok(())
    }

    async fn start(&self) -> Result<()> {
        if self.fail_on_start {
            return Err(Error::Other("refusing to start".to_string()));
        }
        self.log.lock().unwrap().push(format!("start:{}", self.name));
        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        self.log.lock().unwrap().push(format!("stop:{}", self.name));
        Ok(())
    }
}

#[derive(Debug)]
struct First(Recorder);
#[derive(Debug)]
struct Second(Recorder);

macro_rules! delegate_component {
    ($ty:ty) => {
        #[async_trait]
        impl KernelComponent for $ty {
            fn name(&self) -> &'static str {
                self.0.name()
            }

            async fn initialize(&self) -> Result<()> {
                self.0.initialize().await
            }

            async fn start(&self) -> Result<()> {
                self.0.start().await
            }

            async fn stop(&self) -> Result<()> {
                self.0.stop().await
            }
        }
    };
}

delegate_component!(First);
delegate_component!(Second);

fn recorder(name: &'static str, log: &Arc<Mutex<Vec<String>>>, fail_on_start: bool) -> Recorder {
    Recorder { name, log: log.clone(), fail_on_start }
}

#[tokio::test]
async fn test_launch_navigates_to_initial_page() {
    let _guard = slot_guard();
    let settings = AppSettings { initial_page: PageKey::Albums, ..AppSettings::default() };
    let mut app = Application::new(settings).unwrap();
    assert!(!app.is_launched());

    app.launch(LaunchArgs::default()).await.expect("launch should succeed");

    assert!(app.is_launched());
    let navigation = app.kernel().resolve::<NavigationService>().unwrap();
    let current = navigation.current().expect("a page should be open");
    assert_eq!(current.page, PageKey::Albums);
    assert_eq!(current.parameter, None);
}

#[tokio::test]
async fn test_launch_args_override_initial_page() {
    let _guard = slot_guard();
    let mut app = Application::new(AppSettings::default()).unwrap();

    let args = LaunchArgs { page: Some(PageKey::Songs), arguments: Some("shuffle".to_string()) };
    app.launch(args).await.unwrap();

    let navigation = app.kernel().resolve::<NavigationService>().unwrap();
    let current = navigation.current().unwrap();
    assert_eq!(current.page, PageKey::Songs);
    assert_eq!(current.parameter.as_deref(), Some("shuffle"));
}

#[tokio::test]
async fn test_launch_keeps_existing_navigation() {
    let _guard = slot_guard();
    let mut app = Application::new(AppSettings::default()).unwrap();
    let navigation = app.kernel().resolve::<NavigationService>().unwrap();
    navigation.navigate(PageKey::Settings, None);

    app.launch(LaunchArgs::with_page(PageKey::Artists)).await.unwrap();

    assert_eq!(navigation.depth(), 1);
    assert_eq!(navigation.current().unwrap().page, PageKey::Settings);
}

#[tokio::test]
async fn test_second_launch_fails_until_shutdown() {
    let _guard = slot_guard();
    let mut app = Application::new(AppSettings::default()).unwrap();
    app.launch(LaunchArgs::default()).await.unwrap();

    let again = app.launch(LaunchArgs::default()).await;
    match again {
        Err(Error::KernelLifecycleError { phase, .. }) => assert_eq!(phase, KernelLifecyclePhase::Launch),
        other => panic!("Expected lifecycle error, got {:?}", other),
    }

    app.shutdown().await.unwrap();
    assert!(!app.is_launched());
    let navigation = app.kernel().resolve::<NavigationService>().unwrap();
    assert_eq!(navigation.depth(), 0, "Navigation should be cleared on shutdown");

    app.launch(LaunchArgs::default()).await.expect("relaunch after shutdown");
    assert_eq!(navigation.current().unwrap().page, PageKey::Explore);
}

#[tokio::test]
async fn test_component_lifecycle_order() {
    let _guard = slot_guard();
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut kernel = Kernel::with_defaults(AppSettings::default(), CollectionService::new());
    kernel
        .register_component(Arc::new(First(recorder("first", &log, false))))
        .register_component(Arc::new(Second(recorder("second", &log, false))));
    let mut app = Application::with_kernel(Arc::new(kernel), AppSettings::default()).unwrap();

    app.launch(LaunchArgs::default()).await.unwrap();
    app.shutdown().await.unwrap();

    let calls = log.lock().unwrap().clone();
    assert_eq!(
        calls,
        vec![
            "init:first", "init:second",
            "start:first", "start:second",
            "stop:second", "stop:first",
        ]
    );
}

#[tokio::test]
async fn test_component_start_failure_is_reported() {
    let _guard = slot_guard();
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut kernel = Kernel::with_defaults(AppSettings::default(), CollectionService::new());
    kernel.register_component(Arc::new(First(recorder("broken", &log, true))));
    let mut app = Application::with_kernel(Arc::new(kernel), AppSettings::default()).unwrap();

    let result = app.launch(LaunchArgs::default()).await;

    match result {
        Err(Error::KernelLifecycleError { phase, component_name, source, .. }) => {
            assert_eq!(phase, KernelLifecyclePhase::Start);
            assert_eq!(component_name.as_deref(), Some("broken"));
            assert!(source.is_some());
        }
        other => panic!("Expected start failure, got {:?}", other),
    }
    assert!(!app.is_launched());
}

#[tokio::test]
async fn test_shutdown_stops_playback() {
    let _guard = slot_guard();
    let mut app = Application::new(AppSettings::default()).unwrap();
    app.launch(LaunchArgs::default()).await.unwrap();
    let playback = app.kernel().resolve::<PlaybackService>().unwrap();

    app.shutdown().await.unwrap();

    assert_eq!(playback.state(), crate::services::PlaybackState::Stopped);
}

#[test]
fn test_application_locator_uses_its_kernel() {
    let _guard = slot_guard();
    let app = Application::new(AppSettings::default()).unwrap();

    let locator = app.locator();

    assert!(Arc::ptr_eq(&locator.kernel(), app.kernel()));
    assert!(Arc::ptr_eq(&locator.kernel(), &accessor::current_kernel()));
}

#[tokio::test]
async fn test_failed_launch_can_be_retried() {
    let _guard = slot_guard();
    // No navigation service registered, so launching cannot open a page
    let mut app = Application::with_kernel(Arc::new(Kernel::new()), AppSettings::default()).unwrap();

    let first = app.launch(LaunchArgs::default()).await;
    assert!(matches!(first, Err(Error::Resolution(_))), "got {:?}", first);
    assert!(!app.is_launched());

    let second = app.launch(LaunchArgs::default()).await;
    assert!(matches!(second, Err(Error::Resolution(_))), "got {:?}", second);
}

#[tokio::test]
async fn test_missing_navigation_skips_component_lifecycle() {
    let _guard = slot_guard();
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut kernel = Kernel::new();
    kernel.register_component(Arc::new(First(recorder("first", &log, false))));
    let mut app = Application::with_kernel(Arc::new(kernel), AppSettings::default()).unwrap();

    assert!(app.launch(LaunchArgs::default()).await.is_err());

    assert!(log.lock().unwrap().is_empty(), "Components must not start when launch cannot complete");
}
