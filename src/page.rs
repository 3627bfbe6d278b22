//! Load state shared by the store and catalog pages.

/// The state of a page whose content comes from a single initial load.
///
/// `NotFound` is terminal: a failed initial load is never retried by the page itself.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    NotFound,
    Ready(T),
}

impl<T> PageState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PageState::NotFound)
    }
}

impl<T> From<Option<T>> for PageState<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(PageState::NotFound, PageState::Ready)
    }
}
