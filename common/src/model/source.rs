use serde::{Deserialize, Serialize};

/// Where a proposal came from. Closed enum, matched exhaustively wherever
/// it is consumed (filter panel, icon lookup, broker section of the form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Source {
    WhatsApp,
    Phone,
    Broker,
    Relative,
}

impl Source {
    /// Every source, in the order the filter panel lists them.
    pub const ALL: [Source; 4] = [
        Source::WhatsApp,
        Source::Phone,
        Source::Broker,
        Source::Relative,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Source::WhatsApp => "WhatsApp",
            Source::Phone => "Phone",
            Source::Broker => "Broker",
            Source::Relative => "Relative",
        }
    }

    /// Icon name shown next to the source in the list view.
    pub fn icon(self) -> &'static str {
        match self {
            Source::WhatsApp => "message-circle",
            Source::Phone => "phone",
            Source::Broker => "users",
            Source::Relative => "heart",
        }
    }
}
