// Coaching-briefing dataset: executive summary, key findings, and the
// recommended protocol list.

pub const EXECUTIVE_SUMMARY: &str = "Team Alpha demonstrated strong macro fundamentals \
with 67% win rate, driven by objective control and early game stability.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    Strength,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub label: &'static str,
    pub value: &'static str,
    pub kind: FindingKind,
    pub detail: &'static str,
}

pub const FINDINGS: [Finding; 4] = [
    Finding {
        label: "Stability",
        value: "72%",
        kind: FindingKind::Strength,
        detail: "12% above mean sync",
    },
    Finding {
        label: "Objective",
        value: "54%",
        kind: FindingKind::Strength,
        detail: "High-density vision control",
    },
    Finding {
        label: "Cohesion",
        value: "58%",
        kind: FindingKind::Warning,
        detail: "Positional friction detected",
    },
    Finding {
        label: "Pathing",
        value: "4.2%",
        kind: FindingKind::Warning,
        detail: "Neural efficiency gap",
    },
];

pub const RECOMMENDATIONS: [&str; 4] = [
    "Jungler route optimization (Phase 1 Init)",
    "Mid game team fight positioning framework",
    "Ward placement standardization protocol",
    "Late game confidence calibration",
];

/// Render the briefing as plain text for export.
pub fn export_text() -> String {
    let mut out = String::new();
    out.push_str("STRATOS NEURAL // COACHING BRIEFING\n");
    out.push_str("===================================\n\n");
    out.push_str("EXECUTIVE SUMMARY\n");
    out.push_str(EXECUTIVE_SUMMARY);
    out.push_str("\n\nKEY FINDINGS\n");
    for finding in &FINDINGS {
        let tag = match finding.kind {
            FindingKind::Strength => "strength",
            FindingKind::Warning => "warning",
        };
        out.push_str(&format!(
            "  - {}: {} [{}] {}\n",
            finding.label, finding.value, tag, finding.detail
        ));
    }
    out.push_str("\nRECOMMENDED PROTOCOLS\n");
    for (index, rec) in RECOMMENDATIONS.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", index + 1, rec));
    }
    out
}
