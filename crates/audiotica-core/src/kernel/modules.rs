//! Default registrations: the composition root of the application.
use std::sync::Arc;

use crate::config::AppSettings;
use crate::kernel::container::Kernel;
use crate::services::{CollectionService, NavigationService, PlaybackService, SettingsService};
use crate::view_model::pages::{
    AlbumsPageViewModel, ArtistsPageViewModel, ExplorePageViewModel, NowPlayingViewModel,
    SettingsPageViewModel, SongsPageViewModel,
};

/// Register the shared services. Components are registered in the order the
/// application starts them.
pub fn register_services(kernel: &mut Kernel, settings: AppSettings, collection: CollectionService) {
    kernel
        .register_instance(Arc::new(SettingsService::new(settings)))
        .register_instance(Arc::new(collection))
        .register_component(Arc::new(PlaybackService::new()))
        .register_component(Arc::new(NavigationService::new()));
}

/// Register one view model per page. Page view models are transient so each
/// visit sees fresh data; the now-playing view model is shared.
pub fn register_view_models(kernel: &mut Kernel) {
    kernel
        .register_transient(|r| {
            let collection = r.resolve::<CollectionService>()?;
            let settings = r.resolve::<SettingsService>()?;
            Ok(ExplorePageViewModel::new(&collection, &settings))
        })
        .register_transient(|r| Ok(AlbumsPageViewModel::new(&*r.resolve::<CollectionService>()?)))
        .register_transient(|r| Ok(ArtistsPageViewModel::new(&*r.resolve::<CollectionService>()?)))
        .register_transient(|r| Ok(SongsPageViewModel::new(&*r.resolve::<CollectionService>()?)))
        .register_singleton(|r| Ok(NowPlayingViewModel::new(r.resolve::<PlaybackService>()?)))
        .register_transient(|r| Ok(SettingsPageViewModel::new(r.resolve::<SettingsService>()?)));
}

impl Kernel {
    /// Kernel with every default service and view model registered.
    pub fn with_defaults(settings: AppSettings, collection: CollectionService) -> Self {
        let mut kernel = Kernel::new();
        register_services(&mut kernel, settings, collection);
        register_view_models(&mut kernel);
        kernel
    }

    /// Standalone kernel for use when no application is running: default
    /// settings and a small sample library.
    pub fn design_time() -> Arc<Kernel> {
        Arc::new(Kernel::with_defaults(AppSettings::default(), CollectionService::with_sample_library()))
    }
}
