//! Feature slices for the search widget.
pub mod user_search;
