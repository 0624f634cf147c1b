// Behavioral pattern dataset for the pattern-discovery screen.

/// A recurring behavioral pattern surfaced by the (mock) analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub title: &'static str,
    pub category: &'static str,
    /// When the pattern occurs in a game.
    pub timeline: &'static str,
    /// Root cause description.
    pub trigger: &'static str,
    pub impact: &'static str,
    /// Detection confidence, percent.
    pub probability: u8,
    /// Occurrences across the analyzed sample.
    pub frequency: u8,
    pub contributors: [&'static str; 2],
}

pub const CATEGORIES: [&str; 4] = ["Tactical", "Macro", "Vision", "Mental"];

pub const PATTERNS: [Pattern; 4] = [
    Pattern {
        title: "Jungler Gank Timing Mismatch",
        category: "Macro",
        timeline: "Occurs in minutes 5-12 during laning phase",
        trigger: "Jungler commits to ganks without sufficient wave priority for laner",
        impact: "Team fight win rate drops 18% when this pattern is active. Average 2.1 kills lost per occurrence.",
        probability: 89,
        frequency: 14,
        contributors: ["Alex 'Cipher' Chen", "Sarah 'Ghost' Kim"],
    },
    Pattern {
        title: "Bot Lane Engage Vision Gap",
        category: "Vision",
        timeline: "Happens 3-4 times per game during mid-game",
        trigger: "ADC initiates teamfights without enemy vision denial, leading to counter-engages",
        impact: "Win probability decreases 12% in matches with 4+ occurrences. High risk, low reward.",
        probability: 72,
        frequency: 8,
        contributors: ["Sarah 'Ghost' Kim", "David 'Viper' Lin"],
    },
    Pattern {
        title: "Mid-Game Objective Hesitation",
        category: "Mental",
        timeline: "Triggered after baron attempts fail or team loses a teamfight",
        trigger: "Team loses confidence and avoids high-value objectives for 2-3 minutes",
        impact: "Teams miss 2.3 free objectives on average. Win rate impact: -8% per pattern",
        probability: 95,
        frequency: 11,
        contributors: ["Marcus 'Zen' Thorne", "Elena 'Pulse' Rodriguez"],
    },
    Pattern {
        title: "Late Game Over-Positioning",
        category: "Tactical",
        timeline: "Manifests in minutes 30+ during higher-stakes teamfights",
        trigger: "Squishier champions (Mid, ADC) position too far forward after securing picks",
        impact: "Position-based deaths increase by 23%. Each death in late game costs 45 sec + objective",
        probability: 64,
        frequency: 6,
        contributors: ["Elena 'Pulse' Rodriguez", "Sarah 'Ghost' Kim"],
    },
];
