/// Wire records returned by the licenses API.
///
/// Decoding is lenient: absent fields and JSON `null` fall back to empty
/// values, unknown fields are ignored. Only a wrong top-level shape or
/// mistyped field is a decode error.
use serde::{Deserialize, Deserializer, Serialize};

/// One entry of `GET {base}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseSummary {
    /// Canonical lowercase identifier, e.g. `mit`.
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub spdx_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub html_url: String,
}

/// Response of `GET {base}/{key}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub spdx_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub html_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub implementation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub permissions: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub conditions: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub limitations: Vec<String>,
    /// License text with `[year]` / `[fullname]` placeholders.
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIT_DETAIL: &str = r#"{
        "key": "mit",
        "name": "MIT License",
        "spdx_id": "MIT",
        "url": "https://api.github.com/licenses/mit",
        "node_id": "MDc6TGljZW5zZTEz",
        "html_url": "http://choosealicense.com/licenses/mit/",
        "description": "A short and simple permissive license.",
        "implementation": "Create a text file (typically named LICENSE or LICENSE.txt).",
        "permissions": ["commercial-use", "modifications", "distribution", "private-use"],
        "conditions": ["include-copyright"],
        "limitations": ["liability", "warranty"],
        "body": "MIT License\n\nCopyright (c) [year] [fullname]\n",
        "featured": true
    }"#;

    #[test]
    fn test_decode_summaries() {
        let raw = r#"[
            {"key": "agpl-3.0", "name": "GNU Affero General Public License v3.0",
             "spdx_id": "AGPL-3.0", "url": "https://api.github.com/licenses/agpl-3.0",
             "node_id": "MDc6TGljZW5zZTE=", "html_url": null},
            {"key": "mit", "name": "MIT License", "spdx_id": "MIT"}
        ]"#;
        let list: Vec<LicenseSummary> = serde_json::from_str(raw).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].key, "agpl-3.0");
        assert_eq!(list[0].spdx_id, "AGPL-3.0");
        assert_eq!(list[0].html_url, "");
        assert_eq!(list[1].key, "mit");
        assert_eq!(list[1].url, "");
    }

    #[test]
    fn test_decode_detail() {
        let detail: LicenseDetail = serde_json::from_str(MIT_DETAIL).unwrap();
        assert_eq!(detail.key, "mit");
        assert_eq!(detail.conditions, vec!["include-copyright"]);
        assert_eq!(detail.permissions.len(), 4);
        assert!(detail.body.contains("[fullname]"));
    }

    #[test]
    fn test_null_list_decodes_empty() {
        let detail: LicenseDetail =
            serde_json::from_str(r#"{"key":"unlicense","limitations":null}"#).unwrap();
        assert!(detail.limitations.is_empty());
        assert_eq!(detail.body, "");
    }

    #[test]
    fn test_wrong_shape_fails() {
        assert!(serde_json::from_str::<Vec<LicenseSummary>>(MIT_DETAIL).is_err());
        assert!(serde_json::from_str::<LicenseDetail>(r#"{"key": 7}"#).is_err());
        assert!(serde_json::from_str::<LicenseDetail>("<html>rate limited</html>").is_err());
    }
}
