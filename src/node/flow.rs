//! Cash flow node types

use std::fmt;

/// Timeline graphic drawn for an ordinary cash flow
pub const FLOW_MARKER: &str = "---|---";

/// Timeline graphic drawn for the perpetuity tail
pub const PERPETUITY_MARKER: &str = "-- Perpetuity --";

/// A single cash flow at a point in time
///
/// Negative `cash` is an outflow. `time_period` is measured in periods from
/// now (0) and may be fractional or negative. Nodes are never edited in place;
/// build a new one to change a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashFlowNode {
    cash: f64,
    time_period: f64,
}

impl CashFlowNode {
    /// Create a flow of `cash` at `time_period`
    pub fn new(cash: f64, time_period: f64) -> Self {
        Self { cash, time_period }
    }

    /// Signed amount; negative for an outflow
    pub fn cash(&self) -> f64 {
        self.cash
    }

    /// Periods from now at which the (first) payment falls
    pub fn time_period(&self) -> f64 {
        self.time_period
    }
}

impl fmt::Display for CashFlowNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CashFlowNode\nCash: {} Time Period: {}", self.cash, self.time_period)
    }
}

/// An infinite, regularly spaced series of flows starting at `time_period`
///
/// Each payment after the first is the previous one scaled by
/// `(1 + growth_rate)`. Convergence (`discount_rate > growth_rate`) is only
/// checked at valuation time, since the rate belongs to the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerpetuityNode {
    cash: f64,
    time_period: f64,
    growth_rate: f64,
}

impl PerpetuityNode {
    /// Level perpetuity (zero growth)
    pub fn new(cash: f64, time_period: f64) -> Self {
        Self::growing(cash, time_period, 0.0)
    }

    /// Growing perpetuity: each payment is the previous times `(1 + growth_rate)`
    pub fn growing(cash: f64, time_period: f64, growth_rate: f64) -> Self {
        Self {
            cash,
            time_period,
            growth_rate,
        }
    }

    /// Signed amount; negative for an outflow
    pub fn cash(&self) -> f64 {
        self.cash
    }

    /// Periods from now at which the (first) payment falls
    pub fn time_period(&self) -> f64 {
        self.time_period
    }

    /// Per-period payment growth
    pub fn growth_rate(&self) -> f64 {
        self.growth_rate
    }
}

impl fmt::Display for PerpetuityNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PerpetuityNode\nCash: {} Time Period: {} Growth Rate: {}",
            self.cash, self.time_period, self.growth_rate
        )
    }
}

/// Closed set of node kinds a timeline can value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node {
    Flow(CashFlowNode),
    Perpetuity(PerpetuityNode),
}

impl Node {
    /// Cash amount of either variant
    pub fn cash(&self) -> f64 {
        match self {
            Node::Flow(n) => n.cash(),
            Node::Perpetuity(p) => p.cash(),
        }
    }

    /// Time period of either variant
    pub fn time_period(&self) -> f64 {
        match self {
            Node::Flow(n) => n.time_period(),
            Node::Perpetuity(p) => p.time_period(),
        }
    }

    /// Fixed-width graphic used when rendering the timeline
    pub fn marker(&self) -> &'static str {
        match self {
            Node::Flow(_) => FLOW_MARKER,
            Node::Perpetuity(_) => PERPETUITY_MARKER,
        }
    }
}

impl From<CashFlowNode> for Node {
    fn from(node: CashFlowNode) -> Self {
        Node::Flow(node)
    }
}

impl From<PerpetuityNode> for Node {
    fn from(node: PerpetuityNode) -> Self {
        Node::Perpetuity(node)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Flow(n) => fmt::Display::fmt(n, f),
            Node::Perpetuity(p) => fmt::Display::fmt(p, f),
        }
    }
}
