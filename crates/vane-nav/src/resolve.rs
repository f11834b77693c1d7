//! Route-based navigation queries.

use serde::Serialize;
use vane_config::{NavItem, SidebarGroup, SiteConfig};

/// Find the top-nav entry to highlight for the current route.
///
/// An entry matches when its `link` equals `current_path` or its
/// `activeMatch` pattern matches `current_path`. The first matching entry in
/// declared order wins; `None` when nothing matches.
#[must_use]
pub fn active_nav_item<'a>(config: &'a SiteConfig, current_path: &str) -> Option<&'a NavItem> {
    config.nav.iter().find(|item| {
        item.link.as_deref() == Some(current_path)
            || item
                .active_match
                .as_ref()
                .is_some_and(|m| m.is_match(current_path))
    })
}

/// Select the sidebar groups to display for a route.
///
/// Returns the groups registered under the longest route-prefix key that is
/// a prefix of `route_path`, falling back to the `"/"` key when no longer
/// prefix matches, and to an empty slice when even `"/"` is absent.
#[must_use]
pub fn sidebar_groups<'a>(config: &'a SiteConfig, route_path: &str) -> &'a [SidebarGroup] {
    let best = config
        .sidebar
        .routes
        .iter()
        .filter(|route| route_path.starts_with(route.prefix.as_str()))
        .max_by_key(|route| route.prefix.len());

    match best {
        Some(route) => &route.groups,
        None => config.sidebar.get("/").unwrap_or(&[]),
    }
}

/// Resolved navigation for one route: the UI-facing snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Navigation {
    /// Sidebar groups for the route.
    pub groups: Vec<SidebarGroup>,
    /// Highlighted top-nav entry, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<NavItem>,
}

impl Navigation {
    /// Resolve the navigation snapshot for a route.
    #[must_use]
    pub fn resolve(config: &SiteConfig, path: &str) -> Self {
        Self {
            groups: sidebar_groups(config, path).to_vec(),
            active: active_nav_item(config, path).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn config_with(theme_config: serde_json::Value) -> SiteConfig {
        SiteConfig::from_value(&json!({
            "title": "Acme Docs",
            "description": "Documentation for the Acme platform",
            "base": "/",
            "themeConfig": theme_config,
        }))
        .unwrap()
    }

    fn nav_fixture() -> SiteConfig {
        config_with(json!({
            "nav": [
                {"text": "A", "link": "/a"},
                {"text": "B", "activeMatch": "^/b"}
            ]
        }))
    }

    #[test]
    fn test_active_item_by_exact_link() {
        let config = nav_fixture();
        let item = active_nav_item(&config, "/a").unwrap();
        assert_eq!(item.text, "A");
    }

    #[test]
    fn test_active_item_by_pattern() {
        let config = nav_fixture();
        let item = active_nav_item(&config, "/b/sub").unwrap();
        assert_eq!(item.text, "B");
    }

    #[test]
    fn test_active_item_link_match_is_not_prefix_match() {
        let config = nav_fixture();
        assert!(active_nav_item(&config, "/a/sub").is_none());
    }

    #[test]
    fn test_active_item_none_when_nothing_matches() {
        let config = nav_fixture();
        assert!(active_nav_item(&config, "/c").is_none());
    }

    #[test]
    fn test_active_item_first_declared_wins() {
        let config = config_with(json!({
            "nav": [
                {"text": "Guide", "link": "/", "activeMatch": "^/$|^/guide/"},
                {"text": "Everything", "activeMatch": "^/"}
            ]
        }));
        let item = active_nav_item(&config, "/guide/start").unwrap();
        assert_eq!(item.text, "Guide");
    }

    #[test]
    fn test_groups_for_path_with_only_root_key() {
        let config = config_with(json!({
            "sidebar": {
                "/": [{"text": "Introduction", "children": [{"text": "Start", "link": "/guide/start"}]}]
            }
        }));
        let groups = sidebar_groups(&config, "/guide/start");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].text, "Introduction");
    }

    #[test]
    fn test_groups_longest_prefix_wins() {
        let config = config_with(json!({
            "sidebar": {
                "/": [{"text": "General", "children": []}],
                "/guide/": [{"text": "Guide", "children": []}]
            }
        }));
        assert_eq!(sidebar_groups(&config, "/guide/start")[0].text, "Guide");
        assert_eq!(sidebar_groups(&config, "/api")[0].text, "General");
    }

    #[test]
    fn test_groups_fall_back_to_root_key() {
        let config = config_with(json!({
            "sidebar": {
                "/": [{"text": "General", "children": []}],
                "/guide/": [{"text": "Guide", "children": []}]
            }
        }));
        // Not "/"-rooted, so no prefix matches; "/" is the declared fallback.
        assert_eq!(sidebar_groups(&config, "guide/start")[0].text, "General");
    }

    #[test]
    fn test_groups_empty_without_root_key() {
        let config = config_with(json!({
            "sidebar": {
                "/guide/": [{"text": "Guide", "children": []}]
            }
        }));
        assert!(sidebar_groups(&config, "/api").is_empty());
    }

    #[test]
    fn test_groups_empty_without_sidebar() {
        let config = config_with(json!({}));
        assert!(sidebar_groups(&config, "/guide/start").is_empty());
    }

    #[test]
    fn test_navigation_snapshot_serialization() {
        let config = config_with(json!({
            "sidebar": {
                "/": [{"text": "Introduction", "children": [{"text": "Start", "link": "/guide/start"}]}]
            },
            "nav": [
                {"text": "Guide", "link": "/", "activeMatch": "^/$|^/guide/"}
            ]
        }));

        let nav = Navigation::resolve(&config, "/guide/start");
        let serialized = serde_json::to_value(&nav).unwrap();

        assert_eq!(
            serialized,
            json!({
                "groups": [
                    {"text": "Introduction", "children": [{"text": "Start", "link": "/guide/start"}]}
                ],
                "active": {"text": "Guide", "link": "/", "activeMatch": "^/$|^/guide/"}
            })
        );
    }

    #[test]
    fn test_navigation_snapshot_without_matches() {
        let config = config_with(json!({}));
        let nav = Navigation::resolve(&config, "/nowhere");
        assert_eq!(nav, Navigation::default());
        let serialized = serde_json::to_value(&nav).unwrap();
        assert_eq!(serialized, json!({"groups": []}));
    }
}
