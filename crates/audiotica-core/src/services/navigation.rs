use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::kernel::component::KernelComponent;
use crate::kernel::error::{Error, Result};

/// Identifier of a navigable page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKey {
    #[default]
    Explore,
    Albums,
    Artists,
    Songs,
    NowPlaying,
    Settings,
}

impl PageKey {
    /// Every page, in menu order.
    pub const ALL: [PageKey; 6] = [
        PageKey::Explore,
        PageKey::Albums,
        PageKey::Artists,
        PageKey::Songs,
        PageKey::NowPlaying,
        PageKey::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::Explore => "explore",
            PageKey::Albums => "albums",
            PageKey::Artists => "artists",
            PageKey::Songs => "songs",
            PageKey::NowPlaying => "now-playing",
            PageKey::Settings => "settings",
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        PageKey::ALL
            .iter()
            .copied()
            .find(|page| page.as_str() == normalized)
            .ok_or_else(|| format!("unknown page '{}'", s))
    }
}

/// One entry of the back stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEntry {
    pub page: PageKey,
    pub parameter: Option<String>,
}

/// Page back stack shared by the shell and the view models.
#[derive(Debug)]
pub struct NavigationService {
    name: &'static str,
    stack: Mutex<Vec<NavigationEntry>>,
}

impl NavigationService {
    pub fn new() -> Self {
        Self {
            name: "NavigationService",
            stack: Mutex::new(Vec::new()),
        }
    }

    /// Push `page` onto the back stack and make it current.
    pub fn navigate(&self, page: PageKey, parameter: Option<String>) {
        let mut stack = self.lock_stack();
        log::info!("Navigating to {} (depth {})", page, stack.len() + 1);
        stack.push(NavigationEntry { page, parameter });
    }

    /// Pop the current page and return the entry that becomes current.
    pub fn go_back(&self) -> Result<NavigationEntry> {
        let mut stack = self.lock_stack();
        if stack.len() < 2 {
            return Err(Error::Navigation {
                message: "Cannot go back from the first page".to_string(),
            });
        }
        stack.pop();
        let current = stack.last().cloned().ok_or_else(|| Error::Navigation {
            message: "Back stack emptied unexpectedly".to_string(),
        })?;
        log::info!("Navigated back to {}", current.page);
        Ok(current)
    }

    pub fn current(&self) -> Option<NavigationEntry> {
        self.lock_stack().last().cloned()
    }

    pub fn can_go_back(&self) -> bool {
        self.lock_stack().len() > 1
    }

    pub fn depth(&self) -> usize {
        self.lock_stack().len()
    }

    /// Drop the whole back stack.
    pub fn clear(&self) {
        self.lock_stack().clear();
    }

    fn lock_stack(&self) -> MutexGuard<'_, Vec<NavigationEntry>> {
        self.stack.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for NavigationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KernelComponent for NavigationService {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn initialize(&self) -> Result<()> {
        Ok(())
    }

    async fn start(&self) -> Result<()> {
        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        self.clear();
        Ok(())
    }
}
