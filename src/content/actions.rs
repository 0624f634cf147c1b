// Action-plan dataset.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionItem {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub timeline: &'static str,
    pub priority: Priority,
}

pub const ACTION_ITEMS: [ActionItem; 4] = [
    ActionItem {
        id: 1,
        title: "Jungler Route Optimization Training",
        description: "Run 2 scrim sessions focusing on bot-side camp prioritization at \
minutes 3:30-5:00. Use replay analysis to identify decision points and alternatives.",
        timeline: "Next 2 Sessions",
        priority: Priority::High,
    },
    ActionItem {
        id: 2,
        title: "Mid Game Team Fight Framework",
        description: "Establish clear positioning rules for squishy champions (Mid, ADC, \
Support). Create reference cards with engagement distance thresholds.",
        timeline: "Next 3 Sessions",
        priority: Priority::High,
    },
    ActionItem {
        id: 3,
        title: "Role-Based Warding Standardization",
        description: "Document standard ward locations for each role. Practice in practice \
tool to build muscle memory.",
        timeline: "Phase 1 - Complete",
        priority: Priority::Medium,
    },
    ActionItem {
        id: 4,
        title: "Late Game Confidence Drills",
        description: "Simulate high-risk late game scenarios. Practice risk assessment and \
decision-making under pressure.",
        timeline: "Ongoing Protocol",
        priority: Priority::Medium,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        for (index, item) in ACTION_ITEMS.iter().enumerate() {
            assert_eq!(item.id as usize, index + 1);
        }
    }

    #[test]
    fn high_priority_items_come_first() {
        let first_medium = ACTION_ITEMS
            .iter()
            .position(|i| i.priority == Priority::Medium)
            .unwrap();
        assert!(ACTION_ITEMS[..first_medium]
            .iter()
            .all(|i| i.priority == Priority::High));
    }
}
