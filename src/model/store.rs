use crate::framework::Validate;
use crate::model::ensure_present;
use serde::{Deserialize, Serialize};

/// Tenant metadata served by `GET /api/store/{domain}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub banner: Option<String>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub business_info: Option<BusinessInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary_color: String,
    pub background_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: "#000000".to_string(),
            background_color: "#ffffff".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessInfo {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// A contact channel published by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactDetail {
    Email(String),
    Phone(String),
    Address(String),
}

impl ContactDetail {
    /// `mailto:`/`tel:` link target; addresses have none.
    pub fn href(&self) -> Option<String> {
        match self {
            ContactDetail::Email(email) => Some(format!("mailto:{email}")),
            ContactDetail::Phone(phone) => Some(format!("tel:{phone}")),
            ContactDetail::Address(_) => None,
        }
    }
}

impl Store {
    /// Contact details in display order, skipping the ones the store left blank.
    pub fn contact_details(&self) -> Vec<ContactDetail> {
        let Some(info) = &self.business_info else {
            return Vec::new();
        };
        let present = |value: &Option<String>| value.clone().filter(|v| !v.trim().is_empty());
        [
            present(&info.email).map(ContactDetail::Email),
            present(&info.phone).map(ContactDetail::Phone),
            present(&info.address).map(ContactDetail::Address),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Validate for Store {
    fn validate(&self) -> Result<(), String> {
        ensure_present("store name", &self.name)
    }
}
