pub mod document;
pub mod proposal;
pub mod source;
pub mod status;
