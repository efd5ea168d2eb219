//! Cash Flow Timeline demo
//!
//! Builds a sample project timeline and prints its valuation

use cashflow_timeline::{CashFlowNode, Node, PerpetuityNode, Timeline, TimelineConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Cash Flow Timeline v0.1.0");
    println!("=========================\n");

    // Initial outlay, three years of ramp-up, then a growing perpetuity
    let config = TimelineConfig::new(0.10);
    let mut timeline = Timeline::with_nodes(
        config,
        vec![
            Node::from(CashFlowNode::new(-1000.0, 0.0)),
            Node::from(CashFlowNode::new(150.0, 2.0)),
            Node::from(CashFlowNode::new(100.0, 1.0)),
        ],
    )?;
    timeline.add_node(CashFlowNode::new(200.0, 3.0))?;
    timeline.add_perpetuity(220.0, 4.0, 0.02)?;

    println!("{}\n", timeline);

    println!("{:>8} {:>12} {:>8} {:>12}", "Period", "Cash", "Growth", "PV");
    println!("{}", "-".repeat(44));
    for flow in &timeline {
        println!(
            "{:>8} {:>12.2} {:>8} {:>12.2}",
            flow.time_period(),
            flow.cash(),
            "",
            timeline.pv_node(flow)?
        );
    }
    if let Some(tail) = timeline.perpetuity() {
        println!(
            "{:>8} {:>12.2} {:>8.4} {:>12.2}",
            format!("{}+", tail.time_period()),
            tail.cash(),
            tail.growth_rate(),
            timeline.pv_perpetuity(tail)?
        );
    }

    // A tail growing as fast as the discount rate has no finite value
    let mut unbounded = timeline.clone();
    match unbounded.set_perpetuity(PerpetuityNode::growing(220.0, 4.0, config.discount_rate)) {
        Ok(()) => println!("\nUnexpected valuation: {:?}", unbounded.pv()),
        Err(err) => println!("\nRejected tail: {}", err),
    }

    Ok(())
}
