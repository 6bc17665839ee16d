use serde::{Deserialize, Serialize};

use crate::model::document::Document;
use crate::model::source::Source;
use crate::model::status::Status;

/// A single marriage proposal record.
///
/// The `id` is caller-generated (the form assigns one on first submission)
/// and is the only handle used for updates; the store trusts it to be
/// unique. `age` is kept as the text the form captured it as; filtering
/// and sorting parse it on demand rather than rejecting odd input at entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Numeric-as-text; see `tracker`'s age predicates for how non-numeric
    /// values behave under bounds.
    pub age: String,
    pub occupation: String,
    pub location: String,
    pub source: Source,
    pub status: Status,
    pub notes: String,
    pub expectations: String,
    pub family_background: String,
    pub education: String,
    pub contact_info: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_contact: Option<String>,
    /// Only meaningful when `source` is `Broker`; the form enforces that.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broker_details: Option<BrokerDetails>,
    /// Always present. The four sub-fields may all be empty strings but the
    /// object itself is never absent.
    pub parent_details: ParentDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialMedia>,
    /// Ordered, append/remove only, duplicates permitted.
    #[serde(default)]
    pub documents: Vec<Document>,
    // Astrological metadata, filled in when the family provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nakshatra: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rashi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob_with_time: Option<String>,
}

impl Proposal {
    /// Age parsed as a whole number of years, if the text is numeric.
    pub fn age_years(&self) -> Option<u32> {
        self.age.trim().parse().ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentDetails {
    pub father_name: String,
    pub father_occupation: String,
    pub mother_name: String,
    pub mother_occupation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerDetails {
    pub name: String,
    pub contact_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission: Option<String>,
}

/// Up to three profile links. All optional; a record with none of them
/// simply omits the whole object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
}

impl SocialMedia {
    /// `(label, url)` pairs for the links that are actually set, in the
    /// order the profile section renders them.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        if let Some(url) = &self.linkedin {
            out.push(("LinkedIn", url.as_str()));
        }
        if let Some(url) = &self.instagram {
            out.push(("Instagram", url.as_str()));
        }
        if let Some(url) = &self.facebook {
            out.push(("Facebook", url.as_str()));
        }
        out
    }
}
