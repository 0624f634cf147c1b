// Strategy-simulator dataset: actual run vs. the alternative timeline.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationRow {
    pub label: &'static str,
    pub metric: &'static str,
    pub actual: &'static str,
    pub alternative: &'static str,
    pub change: &'static str,
    pub positive: bool,
}

pub const SIMULATION_ROWS: [SimulationRow; 4] = [
    SimulationRow {
        label: "Win Probability",
        metric: "Win Rate Delta",
        actual: "67%",
        alternative: "73%",
        change: "+6%",
        positive: true,
    },
    SimulationRow {
        label: "Objective Retention",
        metric: "System Control",
        actual: "54%",
        alternative: "62%",
        change: "+8%",
        positive: true,
    },
    SimulationRow {
        label: "Early Game XP",
        metric: "Resource Gradient @10m",
        actual: "-200",
        alternative: "-80",
        change: "+120",
        positive: true,
    },
    SimulationRow {
        label: "Kinetic Ratio",
        metric: "Neural KD",
        actual: "1.2",
        alternative: "1.45",
        change: "+0.25",
        positive: true,
    },
];
