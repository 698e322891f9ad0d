use super::*;
use tempfile::tempdir;

#[test]
fn resolves_both_lists() {
    let inputs = run_stage1("BRCA1,BRCA2", "1,2").expect("inputs");
    assert_eq!(inputs.genes, vec!["BRCA1", "BRCA2"]);
    assert_eq!(inputs.panels, vec!["1", "2"]);
    assert!(inputs.wants_panel("1"));
    assert!(!inputs.wants_panel("3"));
}

#[test]
fn gene_file_and_inline_panels_mix() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("genes.txt");
    std::fs::write(&path, "TP53\nATM\n").expect("write");

    let inputs = run_stage1(path.to_str().expect("utf8 path"), "245").expect("inputs");
    assert_eq!(inputs.genes, vec!["ATM", "TP53"]);
    assert_eq!(inputs.panels, vec!["245"]);
}

#[test]
fn bad_panel_list_is_fatal() {
    let err = run_stage1("BRCA1", "one,two").unwrap_err();
    assert!(err.to_string().starts_with("Bad format for gene symbols or panel IDs"));
}

#[test]
fn bad_gene_list_is_fatal() {
    assert!(run_stage1("BRCA1 BRCA2", "1").is_err());
}
