//! Text rendering of a timeline
//!
//! Display only; the layout is not meant to be parsed back. Column widths
//! come from each node's marker, so periods wider than the marker (more than
//! two digits under an ordinary flow) push the rows out of alignment.
//! Labels are centered with the odd padding space on the left when both the
//! padding and the column width are odd, otherwise on the right.

use std::fmt;

use super::Timeline;

impl Timeline {
    /// Rates and PV, then three aligned rows: markers, periods, cash amounts
    pub fn render(&self) -> String {
        let mut out = format!("discount rate: {:.2}\n", self.discount_rate());
        match self.pv() {
            Some(pv) => out.push_str(&format!("PV: {:.2}\n", pv)),
            None => out.push_str("PV: n/a\n"),
        }

        let mut markers = String::new();
        let mut periods = String::new();
        let mut cash = String::new();
        for node in self.entries() {
            let marker = node.marker();
            let width = marker.len();
            markers.push_str(marker);
            periods.push_str(&center(&node.time_period().to_string(), width));
            cash.push_str(&center(&format!("C:{}", node.cash()), width));
        }

        out.push_str(&markers);
        out.push('\n');
        out.push_str(&periods);
        out.push('\n');
        out.push_str(&cash);
        out
    }
}

/// Pad `label` to `width` columns, centered
fn center(label: &str, width: usize) -> String {
    let len = label.chars().count();
    if len >= width {
        return label.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    format!("{}{}{}", " ".repeat(left), label, " ".repeat(margin - left))
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
