use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a global configuration row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalConfigItemType {
    Ldap,
    CodeRepo,
    ImageRepo,
    Maven,
    TraceTemplate,
    EnvTemplate,
}

impl GlobalConfigItemType {
    pub fn code(self) -> i32 {
        match self {
            Self::Ldap => 1,
            Self::CodeRepo => 2,
            Self::ImageRepo => 3,
            Self::Maven => 4,
            Self::TraceTemplate => 5,
            Self::EnvTemplate => 6,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Ldap),
            2 => Some(Self::CodeRepo),
            3 => Some(Self::ImageRepo),
            4 => Some(Self::Maven),
            5 => Some(Self::TraceTemplate),
            6 => Some(Self::EnvTemplate),
            _ => None,
        }
    }

    /// At most one row of a singleton type exists.
    pub fn is_singleton(self) -> bool {
        matches!(self, Self::Ldap | Self::CodeRepo | Self::ImageRepo | Self::Maven)
    }
}

impl fmt::Display for GlobalConfigItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ldap => write!(f, "Ldap"),
            Self::CodeRepo => write!(f, "CodeRepo"),
            Self::ImageRepo => write!(f, "ImageRepo"),
            Self::Maven => write!(f, "Maven"),
            Self::TraceTemplate => write!(f, "TraceTemplate"),
            Self::EnvTemplate => write!(f, "EnvTemplate"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ldap {
    pub enable: bool,
    pub url: Option<String>,
    pub admin_dn: Option<String>,
    pub admin_password: Option<String>,
    pub search_base_dn: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeRepo {
    /// e.g. `gitlab`, `github`
    #[serde(rename = "type")]
    pub repo_type: Option<String>,
    pub url: Option<String>,
    pub auth_user: Option<String>,
    pub auth_password: Option<String>,
    pub auth_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageRepo {
    pub url: Option<String>,
    pub auth_user: Option<String>,
    pub auth_password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Maven {
    pub repo_url: Option<String>,
    pub auth_user: Option<String>,
    pub auth_password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TraceTemplate {
    pub name: String,
    pub service_url: Option<String>,
    pub agent_version: Option<String>,
    pub agent_image: Option<String>,
}

/// Environment template; identity and timestamps come from the row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvTemplate {
    pub id: Option<String>,
    pub name: String,
    pub tag: Option<String>,
    pub replica_min_count: u32,
    pub replica_max_count: u32,
    pub creation_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

/// A typed global configuration value
#[derive(Debug, Clone, PartialEq)]
pub enum GlobalConfigItem {
    Ldap(Ldap),
    CodeRepo(CodeRepo),
    ImageRepo(ImageRepo),
    Maven(Maven),
    TraceTemplate(TraceTemplate),
    EnvTemplate(EnvTemplate),
}

impl GlobalConfigItem {
    pub fn item_type(&self) -> GlobalConfigItemType {
        match self {
            Self::Ldap(_) => GlobalConfigItemType::Ldap,
            Self::CodeRepo(_) => GlobalConfigItemType::CodeRepo,
            Self::ImageRepo(_) => GlobalConfigItemType::ImageRepo,
            Self::Maven(_) => GlobalConfigItemType::Maven,
            Self::TraceTemplate(_) => GlobalConfigItemType::TraceTemplate,
            Self::EnvTemplate(_) => GlobalConfigItemType::EnvTemplate,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Ldap(v) => serde_json::to_string(v),
            Self::CodeRepo(v) => serde_json::to_string(v),
            Self::ImageRepo(v) => serde_json::to_string(v),
            Self::Maven(v) => serde_json::to_string(v),
            Self::TraceTemplate(v) => serde_json::to_string(v),
            Self::EnvTemplate(v) => {
                // identity lives on the row, not in the payload
                let mut v = v.clone();
                v.id = None;
                v.creation_time = None;
                v.update_time = None;
                serde_json::to_string(&v)
            }
        }
    }

    pub fn from_json(item_type: GlobalConfigItemType, json: &str) -> Result<Self, serde_json::Error> {
        Ok(match item_type {
            GlobalConfigItemType::Ldap => Self::Ldap(serde_json::from_str(json)?),
            GlobalConfigItemType::CodeRepo => Self::CodeRepo(serde_json::from_str(json)?),
            GlobalConfigItemType::ImageRepo => Self::ImageRepo(serde_json::from_str(json)?),
            GlobalConfigItemType::Maven => Self::Maven(serde_json::from_str(json)?),
            GlobalConfigItemType::TraceTemplate => Self::TraceTemplate(serde_json::from_str(json)?),
            GlobalConfigItemType::EnvTemplate => Self::EnvTemplate(serde_json::from_str(json)?),
        })
    }
}

/// Row-shaped global configuration record
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalConfigRow {
    pub id: String,
    pub item_type: GlobalConfigItemType,
    pub item_value: String,
    pub creation_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

/// All global configuration decoded into typed slots
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfigAgg {
    pub ldap: Option<Ldap>,
    pub code_repo: Option<CodeRepo>,
    pub image_repo: Option<ImageRepo>,
    pub maven: Option<Maven>,
    /// Keyed by row id
    pub trace_templates: BTreeMap<String, TraceTemplate>,
    pub env_templates: Vec<EnvTemplate>,
}

impl GlobalConfigAgg {
    /// Place one decoded row into its slot.
    pub fn absorb(&mut self, row: &GlobalConfigRow, item: GlobalConfigItem) {
        match item {
            GlobalConfigItem::Ldap(v) => self.ldap = Some(v),
            GlobalConfigItem::CodeRepo(v) => self.code_repo = Some(v),
            GlobalConfigItem::ImageRepo(v) => self.image_repo = Some(v),
            GlobalConfigItem::Maven(v) => self.maven = Some(v),
            GlobalConfigItem::TraceTemplate(v) => {
                self.trace_templates.insert(row.id.clone(), v);
            }
            GlobalConfigItem::EnvTemplate(mut v) => {
                v.id = Some(row.id.clone());
                v.creation_time = Some(row.creation_time);
                v.update_time = Some(row.update_time);
                self.env_templates.push(v);
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GlobalConfigQuery {
    pub item_type: Option<GlobalConfigItemType>,
    pub ids: Option<Vec<String>>,
}

/// Update matched by the non-empty combination of `id` and `item_type`
#[derive(Debug, Clone)]
pub struct GlobalConfigUpdate {
    pub id: Option<String>,
    pub item_type: Option<GlobalConfigItemType>,
    pub item: GlobalConfigItem,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, item_type: GlobalConfigItemType) -> GlobalConfigRow {
        GlobalConfigRow {
            id: id.into(),
            item_type,
            item_value: String::new(),
            creation_time: Utc::now(),
            update_time: Utc::now(),
        }
    }

    #[test]
    fn singleton_types() {
        assert!(GlobalConfigItemType::Ldap.is_singleton());
        assert!(GlobalConfigItemType::Maven.is_singleton());
        assert!(!GlobalConfigItemType::TraceTemplate.is_singleton());
        assert!(!GlobalConfigItemType::EnvTemplate.is_singleton());
    }

    #[test]
    fn payload_uses_camel_case() {
        let item = GlobalConfigItem::Ldap(Ldap {
            enable: true,
            url: Some("ldap://corp".into()),
            admin_dn: Some("cn=admin".into()),
            admin_password: None,
            search_base_dn: None,
        });
        let json = item.to_json().unwrap();
        assert!(json.contains("\"adminDn\":\"cn=admin\""));

        let repo: CodeRepo = serde_json::from_str(r#"{"type":"gitlab","authToken":"t"}"#).unwrap();
        assert_eq!(repo.repo_type.as_deref(), Some("gitlab"));
        assert_eq!(repo.auth_token.as_deref(), Some("t"));
    }

    #[test]
    fn env_template_payload_drops_row_identity() {
        let item = GlobalConfigItem::EnvTemplate(EnvTemplate {
            id: Some("r1".into()),
            name: "prod".into(),
            creation_time: Some(Utc::now()),
            ..Default::default()
        });
        let json = item.to_json().unwrap();
        assert!(!json.contains("r1"));
        assert!(json.contains("\"name\":\"prod\""));
    }

    #[test]
    fn absorb_fills_slots() {
        let mut agg = GlobalConfigAgg::default();
        agg.absorb(
            &row("t1", GlobalConfigItemType::TraceTemplate),
            GlobalConfigItem::TraceTemplate(TraceTemplate {
                name: "skywalking".into(),
                ..Default::default()
            }),
        );
        let env_row = row("e1", GlobalConfigItemType::EnvTemplate);
        agg.absorb(
            &env_row,
            GlobalConfigItem::EnvTemplate(EnvTemplate {
                name: "qa".into(),
                ..Default::default()
            }),
        );

        assert_eq!(agg.trace_templates["t1"].name, "skywalking");
        assert_eq!(agg.env_templates.len(), 1);
        assert_eq!(agg.env_templates[0].id.as_deref(), Some("e1"));
        assert_eq!(agg.env_templates[0].creation_time, Some(env_row.creation_time));
        assert!(agg.ldap.is_none());
    }

    #[test]
    fn from_json_rejects_wrong_shape() {
        assert!(GlobalConfigItem::from_json(GlobalConfigItemType::Ldap, "[1,2]").is_err());
    }
}
