//! # Troubleshooting Reference
//!
//! Static symptom → checks table shown by the "Troubleshooting Guide"
//! menu entry. Nothing here is computed.

use serde::Serialize;

/// One row of the guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TroubleshootingEntry {
    pub symptom: &'static str,
    pub checks: &'static str,
}

/// The guide, in display order
pub const GUIDE: &[TroubleshootingEntry] = &[
    TroubleshootingEntry { symptom: "Motor not starting", checks: "Check Supply, MCB, Capacitor" },
    TroubleshootingEntry { symptom: "Overheating", checks: "Check Load & Wiring" },
    TroubleshootingEntry { symptom: "Flickering lights", checks: "Check connections & voltage" },
    TroubleshootingEntry { symptom: "Fuse blowing", checks: "Check Short circuits" },
];

/// Entries whose symptom contains `query` (case-insensitive)
pub fn lookup(query: &str) -> Vec<&'static TroubleshootingEntry> {
    let query = query.trim().to_lowercase();
    GUIDE
        .iter()
        .filter(|entry| entry.symptom.to_lowercase().contains(&query))
        .collect()
}

impl TroubleshootingEntry {
    /// "Symptom → checks"
    pub fn line(&self) -> String {
        format!("{} → {}", self.symptom, self.checks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_rows() {
        assert_eq!(GUIDE.len(), 4);
        assert_eq!(GUIDE[0].line(), "Motor not starting → Check Supply, MCB, Capacitor");
    }

    #[test]
    fn test_lookup() {
        let hits = lookup("FUSE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].checks, "Check Short circuits");
        assert!(lookup("smoke").is_empty());
        assert_eq!(lookup("").len(), 4);
    }
}
