//! Runtime type checks for nodes supplied through `dyn Any`
//!
//! The typed API cannot receive a non-node. These conversions serve callers
//! holding loosely typed values, and fail eagerly with `TypeMismatch`.

use std::any::Any;

use super::{CashFlowNode, Node, PerpetuityNode};
use crate::error::{TimelineError, TimelineResult};

const EXPECTED_NODE: &str = "CashFlowNode, PerpetuityNode or Node";
const EXPECTED_SEQUENCE: &str =
    "None or a Vec of CashFlowNode, PerpetuityNode, Node or Box<dyn Any> nodes";

impl<'a> TryFrom<&'a dyn Any> for Node {
    type Error = TimelineError;

    fn try_from(value: &'a dyn Any) -> TimelineResult<Self> {
        if let Some(node) = value.downcast_ref::<Node>() {
            Ok(*node)
        } else if let Some(flow) = value.downcast_ref::<CashFlowNode>() {
            Ok(Node::Flow(*flow))
        } else if let Some(p) = value.downcast_ref::<PerpetuityNode>() {
            Ok(Node::Perpetuity(*p))
        } else {
            Err(TimelineError::type_mismatch(EXPECTED_NODE, "a non-node value"))
        }
    }
}

/// Unpack a loosely typed node sequence
pub(crate) fn nodes_from_any(value: &dyn Any) -> TimelineResult<Vec<Node>> {
    if let Some(nodes) = value.downcast_ref::<Vec<Node>>() {
        return Ok(nodes.clone());
    }
    if let Some(flows) = value.downcast_ref::<Vec<CashFlowNode>>() {
        return Ok(flows.iter().copied().map(Node::Flow).collect());
    }
    if let Some(tails) = value.downcast_ref::<Vec<PerpetuityNode>>() {
        return Ok(tails.iter().copied().map(Node::Perpetuity).collect());
    }
    if let Some(items) = value.downcast_ref::<Vec<Box<dyn Any>>>() {
        return items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                Node::try_from(&**item).map_err(|_| {
                    TimelineError::type_mismatch(EXPECTED_NODE, format!("element {i} is not a node"))
                })
            })
            .collect();
    }

    Err(TimelineError::type_mismatch(
        EXPECTED_SEQUENCE,
        "an unsupported container",
    ))
}
