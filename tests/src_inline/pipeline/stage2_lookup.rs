use super::*;
use std::cell::RefCell;
use std::collections::HashMap;

use crate::panelapp::LookupError;

/// In-memory source keyed by gene symbol; unknown symbols fail like a dead link.
struct FakeSource {
    bodies: HashMap<&'static str, &'static str>,
    calls: RefCell<Vec<String>>,
}

impl FakeSource {
    fn new(bodies: &[(&'static str, &'static str)]) -> Self {
        Self {
            bodies: bodies.iter().copied().collect(),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl GeneSource for FakeSource {
    fn fetch_gene(&self, symbol: &str) -> Result<GeneResponse, LookupError> {
        self.calls.borrow_mut().push(symbol.to_string());
        match self.bodies.get(symbol) {
            Some(body) => Ok(serde_json::from_str(body)?),
            None => Err(LookupError::Status {
                status: 503,
                url: format!("fake://genes/{symbol}"),
            }),
        }
    }
}

fn inputs(genes: &[&str], panels: &[&str]) -> LookupInputs {
    LookupInputs::new(
        genes.iter().map(|g| g.to_string()).collect(),
        panels.iter().map(|p| p.to_string()).collect(),
    )
}

const TWO_PANELS: &str = r#"{"count":2,"results":[
    {"panel":{"id":1,"name":"Panel A"},"confidence_level":"3","penetrance":"Complete","mode_of_inheritance":"AD","evidence":["Expert Review"]},
    {"panel":{"id":9,"name":"Panel Z"},"confidence_level":"1","penetrance":"Incomplete","mode_of_inheritance":"AR","evidence":["Literature"]}
]}"#;

#[test]
fn keeps_only_requested_panels() {
    let source = FakeSource::new(&[("BRCA1", TWO_PANELS)]);
    let ctx = run_stage2(&source, &inputs(&["BRCA1"], &["1", "2"]));

    assert_eq!(ctx.rows.len(), 1);
    assert_eq!(ctx.rows[0].panel_id, "1");
    assert_eq!(ctx.rows[0].panel_name, "Panel A");
    assert_eq!(ctx.summary.rows, 1);
}

#[test]
fn zero_count_adds_nothing_and_continues() {
    let source = FakeSource::new(&[
        ("FAKE1", r#"{"count":0,"results":[]}"#),
        ("BRCA1", TWO_PANELS),
    ]);
    let ctx = run_stage2(&source, &inputs(&["FAKE1", "BRCA1"], &["1"]));

    assert_eq!(*source.calls.borrow(), vec!["FAKE1", "BRCA1"]);
    assert_eq!(ctx.rows.len(), 1);
    assert_eq!(ctx.rows[0].gene_symbol, "BRCA1");
    assert_eq!(ctx.summary.genes_unknown, 1);
}

#[test]
fn failing_gene_is_skipped() {
    let source = FakeSource::new(&[
        ("BAD", r#"{"detail":"oops"}"#),
        ("BRCA1", TWO_PANELS),
    ]);
    let ctx = run_stage2(&source, &inputs(&["DOWN", "BAD", "BRCA1"], &["1", "9"]));

    assert_eq!(source.calls.borrow().len(), 3);
    assert_eq!(
        ctx.summary,
        LookupSummary {
            genes_queried: 3,
            genes_failed: 2,
            genes_unknown: 0,
            rows: 2,
        }
    );
}

#[test]
fn rows_follow_gene_then_response_order() {
    let source = FakeSource::new(&[("ATM", TWO_PANELS), ("BRCA1", TWO_PANELS)]);
    let ctx = run_stage2(&source, &inputs(&["BRCA1", "ATM"], &["9", "1"]));

    let got: Vec<(&str, &str)> = ctx
        .rows
        .iter()
        .map(|r| (r.gene_symbol.as_str(), r.panel_id.as_str()))
        .collect();
    assert_eq!(
        got,
        vec![("BRCA1", "1"), ("BRCA1", "9"), ("ATM", "1"), ("ATM", "9")]
    );
}

#[test]
fn entries_without_panel_id_are_ignored() {
    let body = r#"{"count":1,"results":[{"panel":{"name":"Legacy"},"evidence":["x"]}]}"#;
    let resp: GeneResponse = serde_json::from_str(body).expect("decode");
    assert!(matching_rows("BRCA1", &resp, &inputs(&["BRCA1"], &["1"])).is_empty());
}
