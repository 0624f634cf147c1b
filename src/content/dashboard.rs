// Dashboard datasets: the performance projection curve, the four metric
// cards, and the seed entries of the neural log feed.

use crate::protocol::FeedKind;

/// One sample of the performance-projection chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurvePoint {
    /// Game clock label (mm:ss).
    pub time: &'static str,
    pub performance: u16,
    pub objective: u16,
}

pub const PERFORMANCE_CURVE: [CurvePoint; 7] = [
    CurvePoint { time: "00:00", performance: 45, objective: 30 },
    CurvePoint { time: "05:00", performance: 52, objective: 40 },
    CurvePoint { time: "10:00", performance: 48, objective: 55 },
    CurvePoint { time: "15:00", performance: 61, objective: 50 },
    CurvePoint { time: "20:00", performance: 55, objective: 70 },
    CurvePoint { time: "25:00", performance: 67, objective: 65 },
    CurvePoint { time: "30:00", performance: 72, objective: 80 },
];

/// A metric card. Percentage-valued cards are the ones whose display value
/// jitters on each telemetry tick; the others render their value as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: &'static str,
    /// Numeric form of percentage values, `None` for non-percent cards.
    pub percent: Option<f64>,
    pub change: &'static str,
    pub positive: bool,
}

pub const METRIC_CARDS: [MetricCard; 4] = [
    MetricCard {
        label: "Prediction Confidence",
        value: "92.4%",
        percent: Some(92.4),
        change: "+2.1%",
        positive: true,
    },
    MetricCard {
        label: "Efficiency Gradient",
        value: "1.42x",
        percent: None,
        change: "+12.1%",
        positive: true,
    },
    MetricCard {
        label: "Macro Synchronization",
        value: "88.7%",
        percent: Some(88.7),
        change: "-1.1%",
        positive: false,
    },
    MetricCard {
        label: "Neural Latency",
        value: "14ms",
        percent: None,
        change: "-3ms",
        positive: true,
    },
];

/// Seed entries for the rolling log feed, newest first.
pub fn seed_feed() -> Vec<(&'static str, &'static str, FeedKind)> {
    vec![
        ("05:12", "Neural Projection: Alpha Objective Priority High", FeedKind::Success),
        ("05:44", "Pathing Anomaly Detected: Beta-Sector", FeedKind::Warning),
        ("06:01", "Macro Sync Re-Established: 94%", FeedKind::Neutral),
    ]
}

/// Rotating events appended to the feed on each telemetry tick.
pub const TICK_EVENTS: [&str; 4] = [
    "Cache Refreshed",
    "Vision Recalculated",
    "Latency Stable",
    "Outcome Projected",
];

/// Maximum feed length; older lines fall off the end.
pub const FEED_CAP: usize = 11;
