//! Form boundary: turns a draft (everything as the text the inputs hold)
//! into a well-formed [`Proposal`], or rejects it. This is the only place
//! records are validated; the store trusts whatever passes through here.

use std::fmt;

use common::model::document::Document;
use common::model::proposal::{BrokerDetails, ParentDetails, Proposal, SocialMedia};
use common::model::source::Source;
use common::model::status::Status;
use uuid::Uuid;

/// Field contents of the add/edit form. `id` is `None` for a new record
/// and carries the existing id through an edit.
#[derive(Debug, Clone, Default)]
pub struct ProposalDraft {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub age: String,
    pub occupation: String,
    pub location: String,
    pub source: Option<Source>,
    pub status: Option<Status>,
    pub notes: String,
    pub expectations: String,
    pub family_background: String,
    pub education: String,
    pub contact_info: String,
    pub alternate_contact: String,
    pub broker_name: String,
    pub broker_contact_number: String,
    pub broker_agency: String,
    pub broker_commission: String,
    pub parent_details: ParentDetails,
    pub linkedin: String,
    pub instagram: String,
    pub facebook: String,
    pub documents: Vec<Document>,
    pub nakshatra: String,
    pub rashi: String,
    pub dob_with_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required field was left blank.
    Missing(&'static str),
    /// The email text has no chance of being an address.
    InvalidEmail,
    /// The source is `Broker` but the broker section is incomplete.
    IncompleteBrokerDetails,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Missing(field) => write!(f, "required field missing: {field}"),
            FormError::InvalidEmail => write!(f, "email address is not valid"),
            FormError::IncompleteBrokerDetails => {
                write!(f, "broker name and contact number are required for broker proposals")
            }
        }
    }
}

impl std::error::Error for FormError {}

impl ProposalDraft {
    /// Draft pre-filled from an existing record, for the edit flow.
    pub fn from_proposal(proposal: &Proposal) -> Self {
        let broker = proposal.broker_details.clone().unwrap_or_default();
        let social = proposal.social_media.clone().unwrap_or_default();
        Self {
            id: Some(proposal.id.clone()),
            name: proposal.name.clone(),
            email: proposal.email.clone(),
            age: proposal.age.clone(),
            occupation: proposal.occupation.clone(),
            location: proposal.location.clone(),
            source: Some(proposal.source),
            status: Some(proposal.status),
            notes: proposal.notes.clone(),
            expectations: proposal.expectations.clone(),
            family_background: proposal.family_background.clone(),
            education: proposal.education.clone(),
            contact_info: proposal.contact_info.clone(),
            alternate_contact: proposal.alternate_contact.clone().unwrap_or_default(),
            broker_name: broker.name,
            broker_contact_number: broker.contact_number,
            broker_agency: broker.agency.unwrap_or_default(),
            broker_commission: broker.commission.unwrap_or_default(),
            parent_details: proposal.parent_details.clone(),
            linkedin: social.linkedin.unwrap_or_default(),
            instagram: social.instagram.unwrap_or_default(),
            facebook: social.facebook.unwrap_or_default(),
            documents: proposal.documents.clone(),
            nakshatra: proposal.nakshatra.clone().unwrap_or_default(),
            rashi: proposal.rashi.clone().unwrap_or_default(),
            dob_with_time: proposal.dob_with_time.clone().unwrap_or_default(),
        }
    }

    /// Validates the draft and builds the record. A new draft gets a fresh
    /// UUID id; an edit keeps the id it was opened with.
    pub fn finish(self) -> Result<Proposal, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::Missing("name"));
        }
        if self.email.trim().is_empty() {
            return Err(FormError::Missing("email"));
        }
        // Same cheap shape check the CSV verifier applies to email columns.
        if !(self.email.contains('@') && self.email.contains('.')) {
            return Err(FormError::InvalidEmail);
        }
        if self.contact_info.trim().is_empty() {
            return Err(FormError::Missing("contact number"));
        }
        let source = self.source.ok_or(FormError::Missing("source"))?;
        let status = self.status.unwrap_or(Status::Pending);

        let broker_details = match source {
            Source::Broker => {
                if self.broker_name.trim().is_empty() || self.broker_contact_number.trim().is_empty()
                {
                    return Err(FormError::IncompleteBrokerDetails);
                }
                Some(BrokerDetails {
                    name: self.broker_name,
                    contact_number: self.broker_contact_number,
                    agency: none_if_blank(self.broker_agency),
                    commission: none_if_blank(self.broker_commission),
                })
            }
            _ => None,
        };

        let social_media = {
            let social = SocialMedia {
                linkedin: none_if_blank(self.linkedin),
                instagram: none_if_blank(self.instagram),
                facebook: none_if_blank(self.facebook),
            };
            if social.links().is_empty() {
                None
            } else {
                Some(social)
            }
        };

        Ok(Proposal {
            id: self
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: self.name,
            email: self.email,
            age: self.age,
            occupation: self.occupation,
            location: self.location,
            source,
            status,
            notes: self.notes,
            expectations: self.expectations,
            family_background: self.family_background,
            education: self.education,
            contact_info: self.contact_info,
            alternate_contact: none_if_blank(self.alternate_contact),
            broker_details,
            parent_details: self.parent_details,
            social_media,
            documents: self.documents,
            nakshatra: none_if_blank(self.nakshatra),
            rashi: none_if_blank(self.rashi),
            dob_with_time: none_if_blank(self.dob_with_time),
        })
    }
}

fn none_if_blank(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
