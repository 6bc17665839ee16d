//! Pure layout for the export document.

use common::model::proposal::Proposal;

/// The `"Label: value"` lines of one record, in the fixed export order:
/// identity and contact first, categoricals, the free-text sections,
/// parent details, then the conditional blocks (alternate contact inline
/// after the primary one, broker, social links, astrological metadata)
/// only when present, and finally a numbered document listing.
pub fn record_lines(proposal: &Proposal) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Name: {}", proposal.name));
    lines.push(format!("Age: {}", proposal.age));
    lines.push(format!("Email: {}", proposal.email));
    lines.push(format!("Contact: {}", proposal.contact_info));
    if let Some(alternate) = &proposal.alternate_contact {
        lines.push(format!("Alternate Contact: {alternate}"));
    }
    lines.push(format!("Occupation: {}", proposal.occupation));
    lines.push(format!("Education: {}", proposal.education));
    lines.push(format!("Location: {}", proposal.location));
    lines.push(format!("Source: {}", proposal.source.label()));
    lines.push(format!("Status: {}", proposal.status.label()));
    lines.push(format!("Notes: {}", proposal.notes));
    lines.push(format!("Expectations: {}", proposal.expectations));
    lines.push(format!("Family Background: {}", proposal.family_background));

    let parents = &proposal.parent_details;
    lines.push(format!("Father's Name: {}", parents.father_name));
    lines.push(format!("Father's Occupation: {}", parents.father_occupation));
    lines.push(format!("Mother's Name: {}", parents.mother_name));
    lines.push(format!("Mother's Occupation: {}", parents.mother_occupation));

    if let Some(broker) = &proposal.broker_details {
        lines.push(format!("Broker Name: {}", broker.name));
        lines.push(format!("Broker Contact: {}", broker.contact_number));
        if let Some(agency) = &broker.agency {
            lines.push(format!("Broker Agency: {agency}"));
        }
        if let Some(commission) = &broker.commission {
            lines.push(format!("Broker Commission: {commission}"));
        }
    }

    if let Some(social) = &proposal.social_media {
        for (label, url) in social.links() {
            lines.push(format!("{label}: {url}"));
        }
    }

    if let Some(nakshatra) = &proposal.nakshatra {
        lines.push(format!("Nakshatra: {nakshatra}"));
    }
    if let Some(rashi) = &proposal.rashi {
        lines.push(format!("Rashi: {rashi}"));
    }
    if let Some(dob) = &proposal.dob_with_time {
        lines.push(format!("Date of Birth: {dob}"));
    }

    if !proposal.documents.is_empty() {
        lines.push("Documents:".to_string());
        for (idx, doc) in proposal.documents.iter().enumerate() {
            lines.push(format!(
                "{}. {} ({}): {}",
                idx + 1,
                doc.name,
                doc.doc_type.label(),
                doc.url
            ));
        }
    }

    lines
}

/// Per-record line blocks; the renderer puts each block on its own page.
/// An empty record set yields an empty layout, not an error.
pub fn export_lines(proposals: &[Proposal]) -> Vec<Vec<String>> {
    proposals.iter().map(record_lines).collect()
}

/// Deterministic output name derived from the first record's name, with
/// everything outside `[A-Za-z0-9]` collapsed to underscores. Two exports
/// of same-named records collide; that is accepted.
pub fn export_file_name(proposals: &[Proposal]) -> Option<String> {
    let first = proposals.first()?;
    let mut stem = String::with_capacity(first.name.len());
    let mut last_was_underscore = false;
    for c in first.name.chars() {
        if c.is_ascii_alphanumeric() {
            stem.push(c);
            last_was_underscore = false;
        } else if !last_was_underscore {
            stem.push('_');
            last_was_underscore = true;
        }
    }
    let stem = stem.trim_matches('_');
    let stem = if stem.is_empty() { "proposal" } else { stem };
    Some(format!("{stem}.pdf"))
}
