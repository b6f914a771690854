//! Nested translation trees.

use std::collections::{
    BTreeMap,
    HashMap,
};

use serde_json::Value;
use thiserror::Error;

/// Errors raised while converting a JSON document into a [`TranslationNode`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Translation document root must be a JSON object, found {0}")]
    RootNotObject(&'static str),

    #[error("Unsupported {kind} value at '{path}': translation leaves must be strings")]
    UnsupportedValue {
        /// Dotted path of the offending value
        path: String,
        /// JSON kind that was found
        kind: &'static str,
    },
}

/// A node of a translation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationNode {
    /// A translated string.
    Leaf(String),
    /// A nested group of keys.
    Branch(HashMap<String, TranslationNode>),
}

impl Default for TranslationNode {
    fn default() -> Self {
        Self::Branch(HashMap::new())
    }
}

impl TranslationNode {
    /// Builds a tree from a parsed JSON document.
    ///
    /// Objects become branches and strings become leaves. Arrays become
    /// branches keyed by element index, so `items.0` addresses the first
    /// element.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use site_i18n::tree::TranslationNode;
    ///
    /// let tree = TranslationNode::from_json(&json!({ "nav": { "home": "Home" } })).unwrap();
    /// assert_eq!(tree.get(["nav", "home"]).and_then(TranslationNode::as_leaf), Some("Home"));
    /// ```
    ///
    /// # Errors
    /// - The root is not an object
    /// - A number, boolean or null appears anywhere in the document
    pub fn from_json(json: &Value) -> Result<Self, TreeError> {
        match json {
            Value::Object(_) => convert_value(json, None),
            other => Err(TreeError::RootNotObject(json_kind(other))),
        }
    }

    /// Returns the string of a leaf node.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(value) => Some(value.as_str()),
            Self::Branch(_) => None,
        }
    }

    /// Returns the child named `key` if this node is a branch containing it.
    #[must_use]
    pub fn child(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Branch(children) => children.get(key),
            Self::Leaf(_) => None,
        }
    }

    /// Walks the tree one segment at a time from this node.
    ///
    /// Returns `None` as soon as a segment is missing or a leaf is reached
    /// while segments remain.
    #[must_use]
    pub fn get<I>(&self, segments: I) -> Option<&Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        segments.into_iter().try_fold(self, |node, segment| node.child(segment.as_ref()))
    }

    /// Segment paths of every leaf under this node, in no particular order.
    ///
    /// Unlike [`flatten`](Self::flatten), keys that contain a separator
    /// stay a single segment.
    #[must_use]
    pub fn leaf_paths(&self) -> Vec<Vec<&str>> {
        let mut result = Vec::new();
        collect_leaf_paths(self, &mut Vec::new(), &mut result);
        result
    }

    /// Flattens the tree into a map of `separator`-joined key paths to leaf strings.
    #[must_use]
    pub fn flatten(&self, separator: &str) -> BTreeMap<String, String> {
        let mut result = BTreeMap::new();
        flatten_node(self, separator, None, &mut result);
        result
    }
}

impl TryFrom<&Value> for TranslationNode {
    type Error = TreeError;

    fn try_from(json: &Value) -> Result<Self, Self::Error> {
        Self::from_json(json)
    }
}

/// Converts any JSON value, tracking the dotted path for error messages.
fn convert_value(json: &Value, path: Option<&str>) -> Result<TranslationNode, TreeError> {
    let join = |key: &str| path.map_or_else(|| key.to_string(), |p| format!("{p}.{key}"));

    match json {
        Value::String(s) => Ok(TranslationNode::Leaf(s.clone())),
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| Ok((key.clone(), convert_value(value, Some(&join(key)))?)))
            .collect::<Result<HashMap<_, _>, _>>()
            .map(TranslationNode::Branch),
        Value::Array(arr) => arr
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let key = index.to_string();
                let child = convert_value(value, Some(&join(&key)))?;
                Ok((key, child))
            })
            .collect::<Result<HashMap<_, _>, _>>()
            .map(TranslationNode::Branch),
        other => Err(TreeError::UnsupportedValue {
            path: path.unwrap_or_default().to_string(),
            kind: json_kind(other),
        }),
    }
}

/// Name of the JSON kind of `json`, for error messages.
const fn json_kind(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Recursive worker for [`TranslationNode::leaf_paths`].
fn collect_leaf_paths<'a>(
    node: &'a TranslationNode,
    path: &mut Vec<&'a str>,
    result: &mut Vec<Vec<&'a str>>,
) {
    match node {
        TranslationNode::Branch(children) => {
            for (key, child) in children {
                path.push(key);
                collect_leaf_paths(child, path, result);
                path.pop();
            }
        }
        TranslationNode::Leaf(_) => {
            if !path.is_empty() {
                result.push(path.clone());
            }
        }
    }
}

/// Recursive worker for [`TranslationNode::flatten`].
fn flatten_node(
    node: &TranslationNode,
    separator: &str,
    prefix: Option<&str>,
    result: &mut BTreeMap<String, String>,
) {
    match node {
        TranslationNode::Branch(children) => {
            for (key, child) in children {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_node(child, separator, Some(&full_key), result);
            }
        }
        TranslationNode::Leaf(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
    }
}
