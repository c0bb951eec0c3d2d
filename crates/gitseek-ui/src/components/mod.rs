//! Presentational components for the search widget.

pub(crate) mod header;
pub(crate) mod recent_searches;
pub(crate) mod suggestion_dropdown;
pub(crate) mod user_card;

pub(crate) use header::Header;
pub(crate) use recent_searches::RecentSearches;
pub(crate) use suggestion_dropdown::SuggestionDropdown;
pub(crate) use user_card::UserCard;
