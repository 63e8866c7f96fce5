use super::dist_package::DistPackage;
use serde::{Deserialize, Deserializer, Serialize};

/// A single requirement as reported by `pydep-run.py dep`
///
/// pydep emits Python `None` for absent lists and strings, so every field
/// treats `null` the same as a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unsafe_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    /// Version specifiers as `(operator, version)` pairs, e.g. `(">=", "2.0")`
    #[serde(default, deserialize_with = "null_as_default")]
    pub specs: Vec<(String, String)>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extras: Vec<String>,
    /// Clone URL of the requirement's source repository; empty when pydep could not find one
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub packages: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub modules: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resolved: bool,
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub requirement_type: String,
}

impl Requirement {
    pub fn new(key: impl Into<String>, repo_url: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            repo_url: repo_url.into(),
            ..Self::default()
        }
    }

    /// Whether the requirement carries a clone URL and can therefore be resolved
    pub fn has_clone_url(&self) -> bool {
        !self.repo_url.is_empty()
    }

    /// The distribution package this requirement points at
    pub fn dist_package(&self) -> DistPackage {
        let name = if self.project_name.is_empty() {
            &self.key
        } else {
            &self.project_name
        };
        DistPackage::new(name.clone())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_pydep_record() {
        let json = r#"{
            "project_name": "Flask",
            "unsafe_name": "Flask",
            "key": "flask",
            "specs": [[">=", "0.10"], ["<", "1.0"]],
            "extras": ["async"],
            "repo_url": "https://github.com/pallets/flask",
            "packages": ["flask", "flask.ext"],
            "modules": null,
            "resolved": true,
            "type": "setuptools"
        }"#;

        let req: Requirement = serde_json::from_str(json).unwrap();
        assert_eq!(req.project_name, "Flask");
        assert_eq!(req.key, "flask");
        assert_eq!(
            req.specs,
            vec![
                (">=".to_string(), "0.10".to_string()),
                ("<".to_string(), "1.0".to_string())
            ]
        );
        assert_eq!(req.extras, vec!["async"]);
        assert_eq!(req.repo_url, "https://github.com/pallets/flask");
        assert_eq!(req.packages.len(), 2);
        assert!(req.modules.is_empty());
        assert!(req.resolved);
        assert_eq!(req.requirement_type, "setuptools");
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let req: Requirement = serde_json::from_str(r#"{"key": "foo"}"#).unwrap();
        assert_eq!(req.key, "foo");
        assert!(req.repo_url.is_empty());
        assert!(!req.has_clone_url());
    }

    #[test]
    fn test_null_repo_url_is_empty() {
        let req: Requirement =
            serde_json::from_str(r#"{"key": "foo", "repo_url": null}"#).unwrap();
        assert!(!req.has_clone_url());
    }

    #[test]
    fn test_serialize_uses_type_field_name() {
        let mut req = Requirement::new("foo", "https://x");
        req.requirement_type = "vcs".to_string();

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["type"], "vcs");
        assert_eq!(value["repo_url"], "https://x");
        assert!(value.get("requirement_type").is_none());
    }

    #[test]
    fn test_list_encoding_keeps_key_and_clone_url() {
        let reqs = vec![
            Requirement::new("requests", "https://github.com/psf/requests"),
            Requirement::new("local-only", ""),
        ];

        let encoded = serde_json::to_string(&reqs).unwrap();
        let decoded: Vec<Requirement> = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].key, "requests");
        assert_eq!(decoded[0].repo_url, "https://github.com/psf/requests");
        assert_eq!(decoded[1].key, "local-only");
        assert_eq!(decoded[1].repo_url, "");
    }

    #[test]
    fn test_dist_package_prefers_project_name() {
        let mut req = Requirement::new("flask", "https://github.com/pallets/flask");
        req.project_name = "Flask".to_string();
        assert_eq!(req.dist_package().name(), "Flask");
    }

    #[test]
    fn test_dist_package_falls_back_to_key() {
        let req = Requirement::new("foo", "https://x");
        assert_eq!(req.dist_package().name(), "foo");
    }
}
