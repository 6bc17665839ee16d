use serde::{Deserialize, Serialize};

/// An attached document. Pure value: the `url` is wherever the caller put
/// the file, no storage mechanism is implied. Documents live in an ordered
/// list on the proposal; duplicates are allowed and position is the only
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Photo,
    Biodata,
    Other,
}

impl DocumentType {
    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Photo => "Photo",
            DocumentType::Biodata => "Biodata",
            DocumentType::Other => "Other",
        }
    }
}
