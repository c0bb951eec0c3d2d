//! Shared services context for the search widget.
//!
//! # Design
//! - Create exactly one directory client and recents repository per app boot.
//! - Components reach them through Yew context rather than globals.

use crate::core::config::SearchConfig;
use crate::core::directory::UserDirectory;
use crate::core::recents::RecentsRepository;
use crate::core::storage::KeyValueStore;
use std::rc::Rc;

/// Recents repository over whichever store the page supports.
pub(crate) type SharedRecents = RecentsRepository<Box<dyn KeyValueStore>>;

/// Services shared by the search components.
#[derive(Clone)]
pub(crate) struct SearchCtx {
    /// Remote user directory.
    pub directory: Rc<dyn UserDirectory>,
    /// Persisted recent searches.
    pub recents: Rc<SharedRecents>,
    /// Effective configuration.
    pub config: Rc<SearchConfig>,
}

impl PartialEq for SearchCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.recents, &other.recents) && Rc::ptr_eq(&self.config, &other.config)
    }
}
