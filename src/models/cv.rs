use serde_json::{Map, Value};

use crate::render::{field_text, list, year_key};

/// The CV document: an untyped JSON tree, read-only after load.
///
/// Every accessor tolerates missing or mistyped fields and answers with
/// `None` or an empty list instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct CvDocument {
    root: Value,
}

impl Default for CvDocument {
    fn default() -> Self {
        CvDocument {
            root: Value::Object(Map::new()),
        }
    }
}

impl CvDocument {
    /// Wrap a parsed value. A root that is not an object behaves as `{}`.
    pub fn from_value(root: Value) -> Self {
        let root = if root.is_object() {
            root
        } else {
            Value::Object(Map::new())
        };
        CvDocument { root }
    }

    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        let root: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(root))
    }

    /// Walk a path of object keys from the root.
    pub fn get(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(&self.root, |v, key| v.get(*key))
    }

    /// Text of the field at `path`, `None` when absent or empty.
    pub fn text(&self, path: &[&str]) -> Option<String> {
        field_text(self.get(path))
    }

    /// Elements of the array at `path`, empty when absent or not an array.
    pub fn list(&self, path: &[&str]) -> &[Value] {
        list(self.get(path))
    }

    pub fn name(&self) -> Option<String> {
        self.text(&["meta", "name"])
    }

    pub fn tagline(&self) -> Option<String> {
        self.text(&["meta", "tagline"])
    }

    /// `"{name} — Portfolio"`, or `"Portfolio"` without a name.
    pub fn site_title(&self) -> String {
        match self.name() {
            Some(name) => format!("{} — Portfolio", name),
            None => "Portfolio".to_string(),
        }
    }

    /// Research areas: tagline segments split on `•`, trimmed.
    /// Blank segments are kept; only a missing or empty tagline yields none.
    pub fn research_areas(&self) -> Vec<String> {
        match self.tagline() {
            Some(tagline) => tagline
                .split('•')
                .map(|s| s.trim().to_string())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Publications newest first. Missing years sort as 0; ties keep document order.
    pub fn publications_by_year(&self) -> Vec<&Value> {
        let mut pubs: Vec<&Value> = self.list(&["publications"]).iter().collect();
        pubs.sort_by(|a, b| year_key(b.get("year")).total_cmp(&year_key(a.get("year"))));
        pubs
    }

    /// Profile entries in document order, keeping only those with a URL.
    pub fn profiles(&self) -> Vec<(String, String)> {
        match self.get(&["meta", "profiles"]) {
            Some(Value::Object(map)) => map
                .iter()
                .filter_map(|(k, v)| field_text(Some(v)).map(|url| (k.clone(), url)))
                .collect(),
            _ => Vec::new(),
        }
    }
}
