//! Navigation resolution for vane.
//!
//! Pure queries over a loaded [`vane_config::SiteConfig`]:
//! which top-nav entry is highlighted for the current route
//! ([`active_nav_item`]) and which sidebar groups display for it
//! ([`sidebar_groups`]). [`Navigation`] bundles both into a serializable
//! snapshot for a UI layer.
//!
//! The configuration is immutable after load, so these queries can run from
//! any number of rendering workers without coordination.

mod resolve;

pub use resolve::{Navigation, active_nav_item, sidebar_groups};
