//! Timeline of cash flows with an optional perpetuity tail
//!
//! A [`Timeline`] owns its finite flows in ascending `time_period` order
//! (stable: equal periods keep insertion order) plus at most one perpetuity,
//! held apart from the sequence and always treated as the end of the timeline.
//!
//! Every mutator leaves `pv` consistent with the current nodes: the PV is
//! recomputed in full after each change, and a change whose valuation fails
//! is rolled back before the error is returned.
//!
//! # Example
//!
//! ```rust
//! use cashflow_timeline::{CashFlowNode, Timeline, TimelineConfig};
//!
//! let mut timeline = Timeline::new(TimelineConfig::new(0.1));
//! timeline.add_node(CashFlowNode::new(110.0, 1.0)).unwrap();
//! assert_eq!(timeline.pv(), Some(100.0));
//!
//! timeline.add_perpetuity(100.0, 2.0, 0.0).unwrap();
//! println!("{}", timeline.render());
//! ```

mod render;
mod valuation;

pub use valuation::{round_cents, DiscountRate};

use std::any::Any;
use std::cmp::Ordering;
use std::ops::Index;

use log::{debug, trace, warn};

use crate::error::{TimelineError, TimelineResult};
use crate::node::{nodes_from_any, CashFlowNode, Node, PerpetuityNode};

/// Rate settings shared by every node on a timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineConfig {
    /// Per-period rate used to discount every flow to time 0
    pub discount_rate: f64,

    /// Compounding frequency; stored for reporting, not used in valuation
    pub compound_rate: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            discount_rate: 0.0,
            compound_rate: 1.0,
        }
    }
}

impl TimelineConfig {
    /// Config with the given discount rate and the default compound rate
    pub fn new(discount_rate: f64) -> Self {
        Self {
            discount_rate,
            ..Default::default()
        }
    }

    /// Set the compound rate
    pub fn with_compound_rate(mut self, compound_rate: f64) -> Self {
        self.compound_rate = compound_rate;
        self
    }
}

/// Ordered cash flows, an optional perpetuity tail, and their present value
#[derive(Debug, Clone)]
pub struct Timeline {
    config: TimelineConfig,
    nodes: Vec<CashFlowNode>,
    perpetuity: Option<PerpetuityNode>,
    pv: Option<f64>,
}

impl Timeline {
    /// Empty timeline; `pv()` is `None` until the first node is added
    pub fn new(config: TimelineConfig) -> Self {
        Self {
            config,
            nodes: Vec::new(),
            perpetuity: None,
            pv: None,
        }
    }

    /// Build from a node sequence and value it immediately
    ///
    /// Perpetuities in the input become the tail; if several are given the
    /// last one wins.
    pub fn with_nodes<I>(config: TimelineConfig, nodes: I) -> TimelineResult<Self>
    where
        I: IntoIterator<Item = Node>,
    {
        let mut timeline = Self::new(config);
        for node in nodes {
            match node {
                Node::Flow(flow) => timeline.nodes.push(flow),
                Node::Perpetuity(tail) => timeline.perpetuity = Some(tail),
            }
        }
        timeline
            .nodes
            .sort_by(|a, b| by_period(a.time_period(), b.time_period()));
        timeline.update_pv()?;
        Ok(timeline)
    }

    /// Build from a loosely typed node sequence
    ///
    /// `None` yields an empty timeline. Anything other than a supported
    /// `Vec` of nodes fails with [`TimelineError::TypeMismatch`].
    pub fn from_any(config: TimelineConfig, nodes: Option<&dyn Any>) -> TimelineResult<Self> {
        match nodes {
            None => Ok(Self::new(config)),
            Some(value) => Self::with_nodes(config, nodes_from_any(value)?),
        }
    }

    /// Insert a flow in time order and recompute the PV
    pub fn add_node(&mut self, node: CashFlowNode) -> TimelineResult<()> {
        let t = node.time_period();
        let idx = self
            .nodes
            .partition_point(|n| by_period(n.time_period(), t).is_le());
        self.nodes.insert(idx, node);

        if let Err(err) = self.update_pv() {
            warn!("rolling back node at period {}: {}", t, err);
            self.nodes.remove(idx);
            return Err(err);
        }
        Ok(())
    }

    /// Add a loosely typed node; a perpetuity replaces the tail
    pub fn add_node_any(&mut self, node: &dyn Any) -> TimelineResult<()> {
        match Node::try_from(node)? {
            Node::Flow(flow) => self.add_node(flow),
            Node::Perpetuity(tail) => self.set_perpetuity(tail),
        }
    }

    /// Set the perpetuity tail, replacing any existing one
    pub fn add_perpetuity(
        &mut self,
        cash: f64,
        time_period: f64,
        growth_rate: f64,
    ) -> TimelineResult<()> {
        self.set_perpetuity(PerpetuityNode::growing(cash, time_period, growth_rate))
    }

    /// Set an already-built perpetuity as the tail
    pub fn set_perpetuity(&mut self, tail: PerpetuityNode) -> TimelineResult<()> {
        let previous = self.perpetuity.replace(tail);

        if let Err(err) = self.update_pv() {
            warn!("restoring previous perpetuity tail: {}", err);
            self.perpetuity = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Recompute the PV from scratch
    ///
    /// On failure the stored PV is left unchanged.
    pub fn update_pv(&mut self) -> TimelineResult<f64> {
        let discount = self.discount();
        let mut total = 0.0;

        for node in &self.nodes {
            let pv = discount.pv_flow(node)?;
            trace!("flow {} at period {}: pv {}", node.cash(), node.time_period(), pv);
            total += pv;
        }
        if let Some(tail) = &self.perpetuity {
            let pv = discount.pv_perpetuity(tail)?;
            trace!(
                "perpetuity {} from period {} growing {}: pv {}",
                tail.cash(),
                tail.time_period(),
                tail.growth_rate(),
                pv
            );
            total += pv;
        }
        valuation::finite(total, "timeline")?;

        debug!(
            "timeline pv {:.2} ({} flows, tail: {}, rate {})",
            total,
            self.nodes.len(),
            self.perpetuity.is_some(),
            self.config.discount_rate
        );
        self.pv = Some(total);
        Ok(total)
    }

    /// PV of one flow at this timeline's rate, rounded to cents
    pub fn pv_node(&self, node: &CashFlowNode) -> TimelineResult<f64> {
        self.discount().pv_flow(node)
    }

    /// PV of a perpetuity at this timeline's rate
    pub fn pv_perpetuity(&self, tail: &PerpetuityNode) -> TimelineResult<f64> {
        self.discount().pv_perpetuity(tail)
    }

    fn discount(&self) -> DiscountRate {
        DiscountRate::new(self.config.discount_rate)
    }

    /// Current present value; `None` until the first valuation
    pub fn pv(&self) -> Option<f64> {
        self.pv
    }

    /// Rate settings this timeline was built with
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Per-period discount rate
    pub fn discount_rate(&self) -> f64 {
        self.config.discount_rate
    }

    /// Stored compound rate (no effect on valuation)
    pub fn compound_rate(&self) -> f64 {
        self.config.compound_rate
    }

    /// Finite flows in time order (excludes the tail)
    pub fn nodes(&self) -> &[CashFlowNode] {
        &self.nodes
    }

    /// The perpetuity tail, if one is set
    pub fn perpetuity(&self) -> Option<&PerpetuityNode> {
        self.perpetuity.as_ref()
    }

    /// Number of finite flows
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when there are no finite flows (a tail may still be set)
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over finite flows in time order
    pub fn iter(&self) -> std::slice::Iter<'_, CashFlowNode> {
        self.nodes.iter()
    }

    /// Flow at `index` in time order, if any
    pub fn get(&self, index: usize) -> Option<&CashFlowNode> {
        self.nodes.get(index)
    }

    /// Like [`get`](Self::get), but reports the range on failure
    pub fn node(&self, index: usize) -> TimelineResult<&CashFlowNode> {
        self.nodes.get(index).ok_or(TimelineError::IndexOutOfRange {
            index,
            len: self.nodes.len(),
        })
    }

    /// Flows followed by the tail, as rendered
    pub fn entries(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes
            .iter()
            .copied()
            .map(Node::Flow)
            .chain(self.perpetuity.map(Node::Perpetuity))
    }
}

/// Order by time period; `-0.0` and `0.0` compare equal, NaN sorts last
fn by_period(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

impl Index<usize> for Timeline {
    type Output = CashFlowNode;

    fn index(&self, index: usize) -> &CashFlowNode {
        &self.nodes[index]
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a CashFlowNode;
    type IntoIter = std::slice::Iter<'a, CashFlowNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
