use std::sync::Arc;

use crate::kernel::accessor;
use crate::kernel::container::Kernel;
use crate::kernel::error::ResolutionError;
use crate::services::PageKey;
use crate::view_model::pages::{
    AlbumsPageViewModel, ArtistsPageViewModel, ExplorePageViewModel, NowPlayingViewModel,
    SettingsPageViewModel, SongsPageViewModel,
};
use crate::view_model::PageViewModel;

type LocatorResult<T> = Result<Arc<T>, ResolutionError>;

#[derive(Debug, Clone)]
enum KernelSource {
    /// Whatever the process-wide accessor hands out
    Ambient,
    Explicit(Arc<Kernel>),
}

/// Named accessors that hand each page its view model.
///
/// Resolution errors are returned to the caller unchanged; lifetime policy is
/// whatever the kernel registered.
#[derive(Debug, Clone)]
pub struct ViewModelLocator {
    source: KernelSource,
}

impl ViewModelLocator {
    /// Locator backed by the current application kernel, or a design-time
    /// kernel when no application is installed.
    pub fn new() -> Self {
        Self { source: KernelSource::Ambient }
    }

    /// Locator bound to a specific kernel.
    pub fn with_kernel(kernel: Arc<Kernel>) -> Self {
        Self { source: KernelSource::Explicit(kernel) }
    }

    /// Kernel the next resolution will use.
    pub fn kernel(&self) -> Arc<Kernel> {
        match &self.source {
            KernelSource::Ambient => accessor::current_kernel(),
            KernelSource::Explicit(kernel) => kernel.clone(),
        }
    }

    pub fn explore_page(&self) -> LocatorResult<ExplorePageViewModel> {
        self.kernel().resolve()
    }

    pub fn albums_page(&self) -> LocatorResult<AlbumsPageViewModel> {
        self.kernel().resolve()
    }

    pub fn artists_page(&self) -> LocatorResult<ArtistsPageViewModel> {
        self.kernel().resolve()
    }

    pub fn songs_page(&self) -> LocatorResult<SongsPageViewModel> {
        self.kernel().resolve()
    }

    pub fn now_playing(&self) -> LocatorResult<NowPlayingViewModel> {
        self.kernel().resolve()
    }

    pub fn settings_page(&self) -> LocatorResult<SettingsPageViewModel> {
        self.kernel().resolve()
    }

    /// View model for a navigation target.
    pub fn view_model_for(&self, page: PageKey) -> Result<PageViewModel, ResolutionError> {
        Ok(match page {
            PageKey::Explore => PageViewModel::Explore(self.explore_page()?),
            PageKey::Albums => PageViewModel::Albums(self.albums_page()?),
            PageKey::Artists => PageViewModel::Artists(self.artists_page()?),
            PageKey::Songs => PageViewModel::Songs(self.songs_page()?),
            PageKey::NowPlaying => PageViewModel::NowPlaying(self.now_playing()?),
            PageKey::Settings => PageViewModel::Settings(self.settings_page()?),
        })
    }
}

impl Default for ViewModelLocator {
    fn default() -> Self {
        Self::new()
    }
}
