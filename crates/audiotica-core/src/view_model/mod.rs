//! # Audiotica View Models
//!
//! Presentation state for each page, and the [`ViewModelLocator`] pages use
//! to obtain it from the kernel.
//!
//! - **Page view models** live in [`pages`]. Each takes its services through
//!   its constructor; the kernel's registrations do the wiring.
//! - **Locator**: [`ViewModelLocator`] exposes one accessor per page and
//!   [`ViewModelLocator::view_model_for`] for navigation-driven lookup.
pub mod locator;
pub mod pages;

use std::sync::Arc;

use crate::services::PageKey;

pub use locator::ViewModelLocator;
pub use pages::{
    AlbumsPageViewModel, ArtistsPageViewModel, ExplorePageViewModel, NowPlayingViewModel,
    SettingsPageViewModel, SongsPageViewModel,
};

/// Common surface of page view models
pub trait ViewModel: Send + Sync + 'static {
    /// Page this view model backs
    fn page(&self) -> PageKey;

    /// One-line description of the current state
    fn summary(&self) -> String;
}

/// A resolved view model of any page
#[derive(Debug, Clone)]
pub enum PageViewModel {
    Explore(Arc<ExplorePageViewModel>),
    Albums(Arc<AlbumsPageViewModel>),
    Artists(Arc<ArtistsPageViewModel>),
    Songs(Arc<SongsPageViewModel>),
    NowPlaying(Arc<NowPlayingViewModel>),
    Settings(Arc<SettingsPageViewModel>),
}

impl PageViewModel {
    fn as_view_model(&self) -> &dyn ViewModel {
        match self {
            PageViewModel::Explore(vm) => vm.as_ref(),
            PageViewModel::Albums(vm) => vm.as_ref(),
            PageViewModel::Artists(vm) => vm.as_ref(),
            PageViewModel::Songs(vm) => vm.as_ref(),
            PageViewModel::NowPlaying(vm) => vm.as_ref(),
            PageViewModel::Settings(vm) => vm.as_ref(),
        }
    }

    pub fn page(&self) -> PageKey {
        self.as_view_model().page()
    }

    pub fn summary(&self) -> String {
        self.as_view_model().summary()
    }
}
