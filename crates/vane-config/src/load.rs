//! Loading and validation of the declarative configuration document.
//!
//! [`SiteConfig::from_value`] is the pure load boundary: it walks a parsed
//! JSON value, checks every schema and value invariant, and produces the
//! typed records from [`crate::schema`]. Structural surprises are reported
//! as [`ConfigError::Schema`], constraint failures as
//! [`ConfigError::Validation`]; both name the offending field path.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::schema::{
    ActiveMatch, HeadEntry, NavItem, Sidebar, SidebarGroup, SidebarRoute, SiteConfig, SiteMetadata,
};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "vane.json";

/// Keys understood at the document root.
const ROOT_KEYS: &[&str] = &["title", "description", "base", "head", "themeConfig"];
/// Keys understood under `themeConfig`.
const THEME_KEYS: &[&str] = &["sidebar", "nav"];
/// Keys understood on a navigation item.
const ITEM_KEYS: &[&str] = &["text", "link", "activeMatch"];
/// Keys understood on a sidebar group.
const GROUP_KEYS: &[&str] = &["text", "children"];

impl SiteConfig {
    /// Load configuration from a file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `vane.json` in the current directory and parents. The schema has
    /// required fields, so there is no default configuration: a missing file
    /// is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when no file exists, or any load
    /// error from [`SiteConfig::from_json`].
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                path.to_path_buf()
            }
            None => discover_config()
                .ok_or_else(|| ConfigError::NotFound(PathBuf::from(CONFIG_FILENAME)))?,
        };

        let content = fs::read_to_string(&path)?;
        let mut config = Self::from_json(&content)?;
        config.config_path = Some(path);
        Ok(config)
    }

    /// Parse and validate a configuration document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, or any error from
    /// [`SiteConfig::from_value`].
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let raw: Value = serde_json::from_str(content)?;
        Self::from_value(&raw)
    }

    /// Validate a raw configuration value and build the typed structure.
    ///
    /// This is a pure transformation: no I/O, no retries. Unknown keys are
    /// logged and ignored; every other deviation from the schema is fatal.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when a required field is missing
    /// or a value fails a constraint, and [`ConfigError::Schema`] when the
    /// document has an unexpected shape.
    pub fn from_value(raw: &Value) -> Result<Self, ConfigError> {
        let root = as_object(raw, "(root)")?;
        warn_unknown_keys(root, ROOT_KEYS, "");

        let title = require_string(root, "title", "")?;
        require_non_empty(&title, "title")?;
        let description = require_string(root, "description", "")?;
        let base = require_string(root, "base", "")?;
        if !base.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "base must start with '/', got \"{base}\""
            )));
        }

        let head = match root.get("head") {
            Some(value) => parse_head(value)?,
            None => Vec::new(),
        };

        let (sidebar, nav) = match root.get("themeConfig") {
            Some(value) => parse_theme_config(value)?,
            None => (Sidebar::default(), Vec::new()),
        };

        Ok(Self {
            meta: SiteMetadata {
                title,
                description,
                base,
                head,
            },
            sidebar,
            nav,
            config_path: None,
        })
    }
}

/// Search for the config file in the current directory and parents.
fn discover_config() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Parse the `head` array of `[tag, attributes]` pairs.
fn parse_head(value: &Value) -> Result<Vec<HeadEntry>, ConfigError> {
    let entries = as_array(value, "head")?;
    let mut head = Vec::with_capacity(entries.len());

    for (i, entry) in entries.iter().enumerate() {
        let path = format!("head[{i}]");
        let pair = as_array(entry, &path)?;
        if pair.len() != 2 {
            return Err(schema_err(
                &path,
                format!("expected a [tag, attributes] pair, got {} element(s)", pair.len()),
            ));
        }

        let tag = as_str(&pair[0], &format!("{path}[0]"))?.to_owned();
        require_non_empty(&tag, &format!("{path} tag name"))?;

        let raw_attrs = as_object(&pair[1], &format!("{path}[1]"))?;
        let mut attrs = BTreeMap::new();
        for (key, attr_value) in raw_attrs {
            let attr = as_str(attr_value, &format!("{path}.{key}"))?.to_owned();
            attrs.insert(key.clone(), attr);
        }

        head.push(HeadEntry { tag, attrs });
    }

    Ok(head)
}

/// Parse the `themeConfig` section into sidebar and nav.
fn parse_theme_config(value: &Value) -> Result<(Sidebar, Vec<NavItem>), ConfigError> {
    let theme = as_object(value, "themeConfig")?;
    warn_unknown_keys(theme, THEME_KEYS, "themeConfig");

    let sidebar = match theme.get("sidebar") {
        Some(value) => parse_sidebar(value)?,
        None => Sidebar::default(),
    };

    let nav = match theme.get("nav") {
        Some(value) => parse_nav(value)?,
        None => Vec::new(),
    };

    Ok((sidebar, nav))
}

/// Parse the sidebar mapping of route prefixes to group lists.
///
/// Declaration order is preserved; prefixes are unique by construction of
/// the JSON object (duplicate keys collapse to the last one at parse time).
fn parse_sidebar(value: &Value) -> Result<Sidebar, ConfigError> {
    let mapping = as_object(value, "themeConfig.sidebar")?;
    let mut routes = Vec::with_capacity(mapping.len());

    for (prefix, groups_value) in mapping {
        if !prefix.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "themeConfig.sidebar keys must be route prefixes starting with '/', got \"{prefix}\""
            )));
        }

        let path = format!("themeConfig.sidebar.{prefix}");
        let entries = as_array(groups_value, &path)?;
        let mut groups = Vec::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            groups.push(parse_group(entry, &format!("{path}[{i}]"))?);
        }

        routes.push(SidebarRoute {
            prefix: prefix.clone(),
            groups,
        });
    }

    Ok(Sidebar { routes })
}

/// Parse one sidebar group object.
fn parse_group(value: &Value, path: &str) -> Result<SidebarGroup, ConfigError> {
    let group = as_object(value, path)?;
    warn_unknown_keys(group, GROUP_KEYS, path);

    let text = require_string(group, "text", path)?;
    require_non_empty(&text, &join(path, "text"))?;

    let children = match group.get("children") {
        Some(value) => {
            let entries = as_array(value, &join(path, "children"))?;
            let mut children = Vec::with_capacity(entries.len());
            for (i, entry) in entries.iter().enumerate() {
                children.push(parse_nav_item(entry, &format!("{path}.children[{i}]"))?);
            }
            children
        }
        None => Vec::new(),
    };

    Ok(SidebarGroup { text, children })
}

/// Parse the top navigation bar array.
fn parse_nav(value: &Value) -> Result<Vec<NavItem>, ConfigError> {
    let entries = as_array(value, "themeConfig.nav")?;
    let mut nav = Vec::with_capacity(entries.len());

    for (i, entry) in entries.iter().enumerate() {
        nav.push(parse_nav_item(entry, &format!("themeConfig.nav[{i}]"))?);
    }

    Ok(nav)
}

/// Parse one navigation item object.
fn parse_nav_item(value: &Value, path: &str) -> Result<NavItem, ConfigError> {
    let item = as_object(value, path)?;
    warn_unknown_keys(item, ITEM_KEYS, path);

    let text = require_string(item, "text", path)?;
    require_non_empty(&text, &join(path, "text"))?;

    let link = opt_string(item, "link", path)?;
    if let Some(ref link) = link {
        validate_link(link, &join(path, "link"))?;
    }

    let active_match = match opt_string(item, "activeMatch", path)? {
        Some(pattern) => Some(ActiveMatch::new(&pattern).map_err(|e| {
            ConfigError::Validation(format!(
                "{} is not a valid regular expression: {e}",
                join(path, "activeMatch")
            ))
        })?),
        None => None,
    };

    Ok(NavItem {
        text,
        link,
        active_match,
    })
}

/// Require a link to be a root-relative path or an absolute http(s) URL.
fn validate_link(link: &str, field: &str) -> Result<(), ConfigError> {
    if link.starts_with('/') {
        return Ok(());
    }
    if let Some(rest) = link
        .strip_prefix("http://")
        .or_else(|| link.strip_prefix("https://"))
        && !rest.is_empty()
    {
        return Ok(());
    }
    Err(ConfigError::Validation(format!(
        "{field} must be a root-relative path starting with '/' or an absolute http(s) URL, got \"{link}\""
    )))
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Join a field path with a key, handling the document root.
fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_owned()
    } else {
        format!("{path}.{key}")
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn schema_err(path: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::Schema {
        path: path.to_owned(),
        message: message.into(),
    }
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, ConfigError> {
    value
        .as_object()
        .ok_or_else(|| schema_err(path, format!("expected an object, got {}", type_name(value))))
}

fn as_array<'a>(value: &'a Value, path: &str) -> Result<&'a [Value], ConfigError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| schema_err(path, format!("expected an array, got {}", type_name(value))))
}

fn as_str<'a>(value: &'a Value, path: &str) -> Result<&'a str, ConfigError> {
    value
        .as_str()
        .ok_or_else(|| schema_err(path, format!("expected a string, got {}", type_name(value))))
}

/// Require a key to be present and hold a string.
///
/// A missing key is a validation error (the field is required); a present
/// key with a non-string value is a schema error.
fn require_string(map: &Map<String, Value>, key: &str, path: &str) -> Result<String, ConfigError> {
    match map.get(key) {
        Some(value) => Ok(as_str(value, &join(path, key))?.to_owned()),
        None => Err(ConfigError::Validation(format!(
            "{} is required",
            join(path, key)
        ))),
    }
}

/// Read an optional string key.
fn opt_string(
    map: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Option<String>, ConfigError> {
    match map.get(key) {
        Some(value) => Ok(Some(as_str(value, &join(path, key))?.to_owned())),
        None => Ok(None),
    }
}

/// Log unknown keys at a path; they are ignored otherwise.
fn warn_unknown_keys(map: &Map<String, Value>, known: &[&str], path: &str) {
    for key in map.keys().filter(|key| !known.contains(&key.as_str())) {
        tracing::warn!(key = %join(path, key), "Ignoring unknown configuration key");
    }
}
