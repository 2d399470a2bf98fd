//! Property tests for rule building and sheet mirroring.

use css_creator::prelude::*;
use proptest::prelude::*;

type RawDeclaration = (String, String, bool);

// Values are empty about a third of the time
fn declaration_strategy() -> impl Strategy<Value = RawDeclaration> {
    (
        "[a-z][a-z-]{0,10}",
        prop_oneof![Just(String::new()), "[a-z0-9#%.]{1,8}", "[a-z0-9#%.]{1,8}"],
        any::<bool>(),
    )
}

fn spec_strategy() -> impl Strategy<Value = (String, Vec<RawDeclaration>)> {
    ("[a-z]{1,6}", prop::collection::vec(declaration_strategy(), 0..6))
}

fn batch_strategy() -> impl Strategy<Value = Vec<(String, Vec<RawDeclaration>)>> {
    prop::collection::vec(spec_strategy(), 0..6)
}

fn to_specs(batch: &[(String, Vec<RawDeclaration>)]) -> Vec<RuleSpec> {
    batch
        .iter()
        .map(|(selector, decls)| RuleSpec::from_declarations(selector.clone(), decls.clone()))
        .collect()
}

fn expected_lines(decls: &[RawDeclaration]) -> Vec<String> {
    decls
        .iter()
        .filter(|(_, value, _)| !value.is_empty())
        .map(|(property, value, important)| {
            if *important {
                format!("{property}:{value} !important;")
            } else {
                format!("{property}:{value};")
            }
        })
        .collect()
}

fn sheet_contents(creator: &CssCreator<HeadlessDocument>) -> Vec<(String, String)> {
    let Some(el) = creator.element() else {
        return vec![];
    };
    creator
        .host()
        .rules(*el)
        .into_iter()
        .map(|rule| (rule.selector_text, rule.style_text))
        .collect()
}

fn rule_contents(creator: &CssCreator<HeadlessDocument>) -> Vec<(String, String)> {
    creator
        .rules()
        .iter()
        .map(|rule| {
            (
                rule.selector().to_string(),
                rule.declarations().trim().to_string(),
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn test_one_line_per_non_empty_value((selector, decls) in spec_strategy()) {
        let mut creator = CssCreator::new(HeadlessDocument::new());
        creator
            .add_rule(RuleSpec::from_declarations(selector.clone(), decls.clone()))
            .unwrap();

        let expected = expected_lines(&decls);
        if expected.is_empty() {
            prop_assert!(creator.is_empty());
            return Ok(());
        }

        prop_assert_eq!(creator.len(), 1);
        let rule = &creator.rules()[0];
        prop_assert_eq!(rule.selector(), selector.as_str());
        let lines: Vec<String> = rule.declarations().lines().map(str::to_string).collect();
        prop_assert_eq!(lines, expected);
        prop_assert!(rule.declarations().ends_with(";\n"));
    }

    #[test]
    fn test_blank_values_add_nothing(
        selector in "[a-z]{1,6}",
        properties in prop::collection::vec(("[a-z-]{1,8}", any::<bool>()), 0..6),
        mounted in any::<bool>(),
    ) {
        let mut creator = CssCreator::new(HeadlessDocument::new());
        if mounted {
            creator.mount().unwrap();
        }
        let decls = properties.into_iter().map(|(property, important)| (property, String::new(), important));
        creator.add_rule(RuleSpec::from_declarations(selector, decls)).unwrap();

        prop_assert!(creator.is_empty());
        prop_assert!(sheet_contents(&creator).is_empty());
    }

    #[test]
    fn test_clear_always_empties(batch in batch_strategy(), mounted in any::<bool>()) {
        let mut creator = CssCreator::new(HeadlessDocument::new());
        creator.add_rules(to_specs(&batch)).unwrap();
        if mounted {
            creator.mount().unwrap();
        }

        creator.clear().unwrap();
        prop_assert!(creator.is_empty());
        prop_assert!(sheet_contents(&creator).is_empty());
        prop_assert_eq!(creator.is_mounted(), mounted);
    }

    #[test]
    fn test_mounted_sheet_mirrors_rules(
        before_mount in batch_strategy(),
        after_mount in batch_strategy(),
        after_clear in batch_strategy(),
        replacement in batch_strategy(),
    ) {
        let mut creator = CssCreator::new(HeadlessDocument::new());
        creator.add_rules(to_specs(&before_mount)).unwrap().mount().unwrap();
        prop_assert_eq!(sheet_contents(&creator), rule_contents(&creator));

        creator.add_rules(to_specs(&after_mount)).unwrap();
        prop_assert_eq!(sheet_contents(&creator), rule_contents(&creator));

        creator.clear().unwrap().add_rules(to_specs(&after_clear)).unwrap();
        prop_assert_eq!(sheet_contents(&creator), rule_contents(&creator));

        let mut source = CssCreator::new(HeadlessDocument::new());
        source.add_rules(to_specs(&replacement)).unwrap();
        creator.replace_from(&source).unwrap();
        prop_assert_eq!(creator.rules(), source.rules());
        prop_assert_eq!(sheet_contents(&creator), rule_contents(&creator));
    }

    #[test]
    fn test_unmount_keeps_rules(batch in batch_strategy()) {
        let doc = HeadlessDocument::new();
        let mut creator = CssCreator::new(doc.clone());
        creator.add_rules(to_specs(&batch)).unwrap();
        let before = creator.rules().to_vec();

        creator.mount().unwrap().mount().unwrap();
        prop_assert_eq!(doc.head_elements().len(), 1);
        creator.unmount().unwrap();

        prop_assert!(!creator.is_mounted());
        prop_assert_eq!(creator.rules(), before.as_slice());
        prop_assert_eq!(doc.element_count(), 0);
    }
}
