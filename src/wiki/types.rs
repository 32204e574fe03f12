use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ConfluencePage {
    pub id: String,
    #[serde(rename = "type", default = "page_type")]
    pub page_type: String,
    pub title: String,
    pub body: PageBody,
    pub version: PageVersion,
}

fn page_type() -> String {
    "page".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PageBody {
    pub storage: StorageValue,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StorageValue {
    pub value: String,
    #[serde(default = "storage_representation")]
    pub representation: String,
}

fn storage_representation() -> String {
    "storage".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PageVersion {
    pub number: u64,
}

#[derive(Debug, Serialize)]
pub struct UpdatePage {
    pub id: String,
    #[serde(rename = "type")]
    pub page_type: String,
    pub title: String,
    pub version: PageVersion,
    pub body: PageBody,
}
