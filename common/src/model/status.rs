use serde::{Deserialize, Serialize};

/// Review status of a proposal. This is a closed set: every consumption
/// site (filter checkboxes, badge colors, export labels) matches on it
/// exhaustively, so adding a variant forces all of them to be revisited.
///
/// Serialized with the human-readable spellings the record files use
/// (`"On Hold"` rather than `OnHold`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    Pending,
    Accepted,
    Rejected,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl Status {
    /// Every status, in the order the filter panel lists them.
    pub const ALL: [Status; 4] = [
        Status::Pending,
        Status::Accepted,
        Status::Rejected,
        Status::OnHold,
    ];

    /// Display label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Accepted => "Accepted",
            Status::Rejected => "Rejected",
            Status::OnHold => "On Hold",
        }
    }

    /// Badge color token for the status pill in the list view.
    pub fn color_class(self) -> &'static str {
        match self {
            Status::Pending => "bg-yellow-100 text-yellow-800",
            Status::Accepted => "bg-green-100 text-green-800",
            Status::Rejected => "bg-red-100 text-red-800",
            Status::OnHold => "bg-gray-100 text-gray-800",
        }
    }
}
