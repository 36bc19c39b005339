use findthem::Finder;

fn matched_indices(finder: &mut Finder, text: &str) -> Vec<u32> {
    finder.process(text).unwrap().into_iter().map(|r| r.index).collect()
}

#[test]
fn scenario_1_and_with_grouped_or() {
    let mut finder = Finder::with_default_backends(false);
    finder
        .add_expression(r#""lorem ipsum" AND ("dolor" OR "accumsan")"#, None)
        .unwrap();
    assert_eq!(
        matched_indices(&mut finder, "Lorem ipsum dolor sit amet"),
        vec![0]
    );
}

#[test]
fn scenario_2_multiple_expressions_in_insertion_order() {
    let mut finder = Finder::with_default_backends(false);
    finder
        .add_expression(r#""Nullam" AND NOT "volutpat""#, None)
        .unwrap();
    finder.add_expression(r#""Lorem" AND "ipsum""#, None).unwrap();
    assert_eq!(
        matched_indices(&mut finder, "Lorem ipsum Nullam non purus"),
        vec![0, 1]
    );
}

#[test]
fn scenario_3_inord_in_order_matches() {
    let mut finder = Finder::with_default_backends(false);
    finder
        .add_expression(r#"INORD("a" AND "b" AND "c")"#, None)
        .unwrap();
    assert_eq!(matched_indices(&mut finder, "acabXaXcb"), vec![0]);
}

#[test]
fn scenario_4_inord_out_of_order_fails() {
    let mut finder = Finder::with_default_backends(false);
    finder
        .add_expression(r#"INORD("a" AND "b" AND "c")"#, None)
        .unwrap();
    assert_eq!(matched_indices(&mut finder, "bacb"), Vec::<u32>::new());
}

#[test]
fn scenario_5_regex_atoms() {
    let mut finder = Finder::with_default_backends(false);
    finder
        .add_expression(r#"r"foo.*bar" AND r"bar.*foo""#, None)
        .unwrap();
    assert_eq!(matched_indices(&mut finder, "foo xx bar yy foo"), vec![0]);
}

#[test]
fn scenario_6_case_sensitive_mismatch() {
    let mut finder = Finder::with_default_backends(true);
    finder.add_expression(r#""A""#, None).unwrap();
    assert_eq!(matched_indices(&mut finder, "a"), Vec::<u32>::new());
}

#[test]
fn empty_text_against_single_atom_is_false() {
    let mut finder = Finder::with_default_backends(false);
    finder.add_expression(r#""anything""#, None).unwrap();
    assert_eq!(matched_indices(&mut finder, ""), Vec::<u32>::new());
}

#[test]
fn inord_single_atom_present_once_matches() {
    let mut finder = Finder::with_default_backends(false);
    finder.add_expression(r#"INORD("a")"#, None).unwrap();
    assert_eq!(matched_indices(&mut finder, "a"), vec![0]);
}

#[test]
fn and_with_only_one_side_present_is_false() {
    let mut finder = Finder::with_default_backends(false);
    finder.add_expression(r#""a" AND "b""#, None).unwrap();
    assert_eq!(matched_indices(&mut finder, "a"), Vec::<u32>::new());
}

#[test]
fn process_is_idempotent() {
    let mut finder = Finder::with_default_backends(false);
    finder
        .add_expression(r#""lorem" AND "ipsum""#, None)
        .unwrap();
    let text = "lorem ipsum dolor";
    assert_eq!(matched_indices(&mut finder, text), matched_indices(&mut finder, text));
}

#[test]
fn case_folding_equivalence_across_text_case() {
    let mut finder = Finder::with_default_backends(false);
    finder.add_expression(r#""lorem""#, None).unwrap();
    let lower = matched_indices(&mut finder, "lorem ipsum");
    let upper = matched_indices(&mut finder, "LOREM IPSUM");
    let mixed = matched_indices(&mut finder, "LoReM ipsum");
    assert_eq!(lower, upper);
    assert_eq!(lower, mixed);
}

#[test]
fn not_not_is_equivalent_to_the_atom() {
    let mut finder = Finder::with_default_backends(false);
    finder.add_expression(r#""a""#, None).unwrap();
    finder.add_expression(r#"NOT NOT "a""#, None).unwrap();
    let text = "a";
    assert_eq!(matched_indices(&mut finder, text), vec![0, 1]);
}

#[test]
fn add_expression_failure_leaves_finder_state_untouched() {
    let mut finder = Finder::with_default_backends(false);
    finder.add_expression(r#""lorem""#, None).unwrap();
    let keywords_before: Vec<String> = {
        let mut v: Vec<String> = finder.list_keywords().iter().cloned().collect();
        v.sort();
        v
    };
    assert!(finder.add_expression(r#""unterminated AND "b""#, None).is_err());
    let keywords_after: Vec<String> = {
        let mut v: Vec<String> = finder.list_keywords().iter().cloned().collect();
        v.sort();
        v
    };
    assert_eq!(keywords_before, keywords_after);
}

#[test]
fn force_build_then_process_yields_the_same_result() {
    let mut finder = Finder::with_default_backends(false);
    finder.add_expression(r#""lorem""#, None).unwrap();
    finder.force_build().unwrap();
    assert_eq!(matched_indices(&mut finder, "lorem ipsum"), vec![0]);
}

#[test]
fn results_carry_their_tag() {
    let mut finder = Finder::with_default_backends(false);
    finder
        .add_expression(r#""lorem""#, Some("greeting".to_string()))
        .unwrap();
    let results = finder.process("lorem ipsum").unwrap();
    assert_eq!(results[0].tag.as_deref(), Some("greeting"));
    assert_eq!(results[0].raw, r#""lorem""#);
}

#[test]
fn config_reflects_construction_options() {
    let finder = Finder::with_default_backends(true);
    assert!(finder.config().case_sensitive);
    let finder = Finder::with_default_backends(false);
    assert!(!finder.config().case_sensitive);
}
