//! Cash flow nodes: ordinary flows and perpetuity tails

mod flow;
mod input;

pub use flow::{CashFlowNode, Node, PerpetuityNode, FLOW_MARKER, PERPETUITY_MARKER};

pub(crate) use input::nodes_from_any;
