//! Present value arithmetic for a single flat discount rate
//!
//! Every result is checked for finiteness: an invalid rate or a
//! non-converging perpetuity is an error, never `inf` or `NaN`.

use crate::error::{TimelineError, TimelineResult};
use crate::node::{CashFlowNode, Node, PerpetuityNode};

/// Magnitude from which every `f64` is already a whole number
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// Round to 2 decimal places (display precision for node PVs)
///
/// Rounds the exact value of `value`, sending exact ties to the even cent.
/// Values too large to carry cents are returned unchanged.
pub fn round_cents(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= INTEGRAL_THRESHOLD {
        return value;
    }

    let scaled = value * 100.0;
    let mut cents = scaled.round_ties_even();
    if (scaled - scaled.trunc()).abs() == 0.5 {
        // The product may have been rounded onto the tie; its exact error decides
        let residual = value.mul_add(100.0, -scaled);
        if residual > 0.0 {
            cents = scaled.ceil();
        } else if residual < 0.0 {
            cents = scaled.floor();
        }
    }
    cents / 100.0
}

/// Flat per-period discount rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountRate {
    /// Per-period rate, e.g. 0.05 for 5%
    pub rate: f64,
}

impl DiscountRate {
    /// Create a discount rate for valuing nodes
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Compounding base `(1 + rate)`; must be positive and finite
    fn base(&self) -> TimelineResult<f64> {
        let base = 1.0 + self.rate;
        if base.is_finite() && base > 0.0 {
            Ok(base)
        } else {
            Err(TimelineError::valuation(format!(
                "discount rate {} must be finite and greater than -1",
                self.rate
            )))
        }
    }

    /// Divisor `(1 + rate)^periods` that brings a value back to time 0
    pub fn accumulation(&self, periods: f64) -> TimelineResult<f64> {
        let factor = self.base()?.powf(periods);
        if factor.is_finite() && factor > 0.0 {
            Ok(factor)
        } else {
            Err(TimelineError::valuation(format!(
                "discounting over {} periods at rate {} is not finite",
                periods, self.rate
            )))
        }
    }

    /// PV of a single flow, rounded to cents
    pub fn pv_flow(&self, node: &CashFlowNode) -> TimelineResult<f64> {
        let pv = node.cash() / self.accumulation(node.time_period())?;
        finite(pv, "cash flow")?;
        let rounded = round_cents(pv);
        finite(rounded, "cash flow")?;
        Ok(rounded)
    }

    /// PV of a (growing) perpetuity whose first payment is at `time_period`
    ///
    /// The standard formula values the stream one period before the first
    /// payment; that value is then discounted the remaining `t - 1` periods.
    pub fn pv_perpetuity(&self, node: &PerpetuityNode) -> TimelineResult<f64> {
        let spread = self.rate - node.growth_rate();
        if spread.is_nan() {
            return Err(TimelineError::valuation(format!(
                "perpetuity spread is undefined (discount rate {}, growth rate {})",
                self.rate,
                node.growth_rate()
            )));
        }
        if spread == 0.0 {
            return Err(TimelineError::valuation(format!(
                "discount rate {} equals perpetuity growth rate; value is unbounded",
                self.rate
            )));
        }
        if spread < 0.0 {
            return Err(TimelineError::valuation(format!(
                "discount rate {} is below perpetuity growth rate {}; perpetuity does not converge",
                self.rate,
                node.growth_rate()
            )));
        }

        let raw = node.cash() / spread;
        let pv = raw / self.accumulation(node.time_period() - 1.0)?;
        finite(pv, "perpetuity")?;
        Ok(pv)
    }

    /// Dispatch on the node kind
    pub fn pv(&self, node: &Node) -> TimelineResult<f64> {
        match node {
            Node::Flow(flow) => self.pv_flow(flow),
            Node::Perpetuity(tail) => self.pv_perpetuity(tail),
        }
    }
}

pub(crate) fn finite(value: f64, what: &str) -> TimelineResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TimelineError::valuation(format!("{what} present value is not finite")))
    }
}
