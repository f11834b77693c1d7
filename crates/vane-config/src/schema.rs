//! Typed records for a loaded site configuration.
//!
//! These are the checked counterparts of the loosely-typed declarative
//! document: every value has passed the load-time invariants, and the whole
//! structure is immutable afterwards and safe to share across rendering
//! workers.

use std::collections::BTreeMap;
use std::path::PathBuf;

use regex::Regex;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Fully validated site configuration.
///
/// Serializes to the normalized shape consumed by the rendering layer:
/// `{title, description, base, head, sidebar, nav}` with `head` and
/// `sidebar` declaration order preserved.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SiteConfig {
    /// Site metadata (title, description, base path, head tags).
    #[serde(flatten)]
    pub meta: SiteMetadata,
    /// Sidebar groups keyed by route prefix.
    pub sidebar: Sidebar,
    /// Top navigation bar entries, in declaration order.
    pub nav: Vec<NavItem>,
    /// Path to the config file (set after loading from disk).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site-wide metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SiteMetadata {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Base path the site is served under (starts with `/`).
    pub base: String,
    /// Head tags emitted on every page, in declaration order.
    pub head: Vec<HeadEntry>,
}

/// A single head tag: tag name plus attributes.
///
/// Serializes as a `[tag, attributes]` pair, the shape the declarative
/// document uses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadEntry {
    /// Tag name (e.g. `meta`, `link`).
    pub tag: String,
    /// Tag attributes.
    pub attrs: BTreeMap<String, String>,
}

impl Serialize for HeadEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.tag, &self.attrs).serialize(serializer)
    }
}

/// Navigation entry for the top bar or a sidebar group.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NavItem {
    /// Display label.
    pub text: String,
    /// Link target: root-relative path or absolute URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Pattern highlighting this item when the current route matches.
    #[serde(rename = "activeMatch", skip_serializing_if = "Option::is_none")]
    pub active_match: Option<ActiveMatch>,
}

/// A compiled `activeMatch` pattern.
///
/// Keeps the source pattern for display and serialization alongside the
/// compiled expression. Equality compares source patterns.
#[derive(Clone, Debug)]
pub struct ActiveMatch {
    pattern: String,
    regex: Regex,
}

impl ActiveMatch {
    /// Compile a pattern.
    ///
    /// # Errors
    ///
    /// Returns the underlying regex error if the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            pattern: pattern.to_owned(),
        })
    }

    /// Source pattern string.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Test whether a route path matches this pattern.
    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

impl PartialEq for ActiveMatch {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for ActiveMatch {}

impl Serialize for ActiveMatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.pattern)
    }
}

/// Sidebar group: a label and its page links.
///
/// Grouping is flat; a group never nests further groups.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SidebarGroup {
    /// Group label.
    pub text: String,
    /// Page links in this group, in declaration order.
    pub children: Vec<NavItem>,
}

/// Sidebar contents declared for one route prefix.
#[derive(Clone, Debug, PartialEq)]
pub struct SidebarRoute {
    /// Route prefix selecting this sidebar (starts with `/`).
    pub prefix: String,
    /// Groups displayed under the prefix, in declaration order.
    pub groups: Vec<SidebarGroup>,
}

/// Sidebar configuration: route prefix to group list, in declaration order.
///
/// Serializes as a JSON map keyed by prefix. Prefixes are unique; which
/// prefix applies to a concrete route is a query concern, not a data one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sidebar {
    /// Declared routes.
    pub routes: Vec<SidebarRoute>,
}

impl Sidebar {
    /// Get the groups declared for an exact route prefix.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&[SidebarGroup]> {
        self.routes
            .iter()
            .find(|route| route.prefix == prefix)
            .map(|route| route.groups.as_slice())
    }

    /// True when no routes are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Serialize for Sidebar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.routes.len()))?;
        for route in &self.routes {
            map.serialize_entry(&route.prefix, &route.groups)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    // The loaded configuration is read concurrently by rendering workers.
    static_assertions::assert_impl_all!(super::SiteConfig: Send, Sync);

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_active_match_compiles_and_matches() {
        let m = ActiveMatch::new("^/$|^/guide/").unwrap();
        assert!(m.is_match("/"));
        assert!(m.is_match("/guide/start"));
        assert!(!m.is_match("/contact/"));
        assert_eq!(m.pattern(), "^/$|^/guide/");
    }

    #[test]
    fn test_active_match_rejects_invalid_pattern() {
        assert!(ActiveMatch::new("(").is_err());
    }

    #[test]
    fn test_active_match_equality_ignores_compiled_state() {
        let a = ActiveMatch::new("^/a").unwrap();
        let b = ActiveMatch::new("^/a").unwrap();
        let c = ActiveMatch::new("^/b").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_head_entry_serializes_as_pair() {
        let entry = HeadEntry {
            tag: "meta".to_owned(),
            attrs: BTreeMap::from([("name".to_owned(), "keywords".to_owned())]),
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!(["meta", {"name": "keywords"}])
        );
    }

    #[test]
    fn test_nav_item_serializes_camel_case_and_skips_absent() {
        let item = NavItem {
            text: "Guide".to_owned(),
            link: None,
            active_match: Some(ActiveMatch::new("^/guide/").unwrap()),
        };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"text": "Guide", "activeMatch": "^/guide/"})
        );
    }

    #[test]
    fn test_sidebar_serializes_as_map_in_declaration_order() {
        let sidebar = Sidebar {
            routes: vec![
                SidebarRoute {
                    prefix: "/guide/".to_owned(),
                    groups: vec![],
                },
                SidebarRoute {
                    prefix: "/".to_owned(),
                    groups: vec![],
                },
            ],
        };
        let serialized = serde_json::to_string(&sidebar).unwrap();
        assert_eq!(serialized, r#"{"/guide/":[],"/":[]}"#);
    }

    #[test]
    fn test_sidebar_get_is_exact() {
        let sidebar = Sidebar {
            routes: vec![SidebarRoute {
                prefix: "/".to_owned(),
                groups: vec![SidebarGroup {
                    text: "Introduction".to_owned(),
                    children: vec![],
                }],
            }],
        };
        assert_eq!(sidebar.get("/").unwrap().len(), 1);
        assert!(sidebar.get("/guide/").is_none());
        assert!(!sidebar.is_empty());
    }
}
