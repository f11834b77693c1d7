//! Site navigation configuration for vane.
//!
//! Parses a declarative JSON document describing a documentation site's
//! metadata, top navigation bar, and route-scoped sidebar, and produces a
//! validated [`SiteConfig`] for a rendering layer to consume.
//!
//! Loading is a pure transformation over a parsed JSON value
//! ([`SiteConfig::from_value`]); thin file helpers add explicit-path loading
//! and auto-discovery of `vane.json` in parent directories
//! ([`SiteConfig::load`]).
//!
//! All invariants are checked at load time and errors name the offending
//! field path (e.g. `themeConfig.nav[2].activeMatch`). A configuration that
//! fails validation aborts the build; there is no partial or default
//! navigation.

mod error;
mod load;
mod schema;

pub use error::ConfigError;
pub use schema::{
    ActiveMatch, HeadEntry, NavItem, Sidebar, SidebarGroup, SidebarRoute, SiteConfig, SiteMetadata,
};
