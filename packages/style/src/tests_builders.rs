use crate::builders::*;
use crate::rule::PropertyName;
use crate::value::PresentableValue;

#[test]
fn test_prop_with_custom_value() {
    let property = prop("color", custom("color-primary"));
    assert_eq!(property.key, PropertyName::Plain("color".to_string()));
    assert_eq!(
        property.value,
        PropertyName::Custom("color-primary".to_string())
    );
}

#[test]
fn test_prop_with_custom_key() {
    let property = prop(custom("color-primary"), "red");
    assert_eq!(
        property.key,
        PropertyName::Custom("color-primary".to_string())
    );
    assert_eq!(property.value, PropertyName::Plain("red".to_string()));
}

#[test]
fn test_prop_camel_converts_key() {
    let property = prop_camel("boxSizing", "border-box");
    assert_eq!(property.key, PropertyName::Plain("box-sizing".to_string()));
}

#[test]
fn test_camel_to_kebab() {
    assert_eq!(camel_to_kebab("boxSizing"), "box-sizing");
    assert_eq!(camel_to_kebab("font"), "font");
    assert_eq!(camel_to_kebab("borderTopLeftRadius"), "border-top-left-radius");
    assert_eq!(camel_to_kebab(""), "");
}

#[test]
fn test_rule_selectors_from_iterator_are_eager() {
    let selectors = vec!["*".to_string(), "*::before".to_string()]
        .into_iter()
        .chain(std::iter::once("*::after".to_string()));
    let built = rule(selectors).properties(vec![]);
    assert_eq!(built.selectors, vec!["*", "*::before", "*::after"]);
}

#[test]
fn test_data_selector() {
    assert_eq!(data("outline"), "[outline]");
}

#[test]
fn test_data_selector_with_value() {
    assert_eq!(data_value("tone", "error"), r#"[tone="error"]"#);
}

#[test]
fn test_data_selector_value_is_json_escaped() {
    assert_eq!(data_value("label", r#"say "hi""#), r#"[label="say \"hi\""]"#);
}

#[test]
fn test_sequence_wraps_iterator() {
    let value = sequence(vec!["a".into(), "b".into()]);
    match value {
        PresentableValue::Sequence(items) => assert_eq!(items.count(), 2),
        other => panic!("expected sequence, got {:?}", other),
    }
}

#[test]
fn test_from_option() {
    assert!(matches!(
        PresentableValue::from(None::<&str>),
        PresentableValue::Empty
    ));
    assert!(matches!(
        PresentableValue::from(Some("x")),
        PresentableValue::Text(_)
    ));
}

#[test]
fn test_from_number() {
    match PresentableValue::from(5) {
        PresentableValue::Number(number) => assert_eq!(number, 5.0),
        other => panic!("expected number, got {:?}", other),
    }
}

#[test]
fn test_rule_debug_hides_lazy_properties() {
    let built = rule([":root"]).properties(vec![prop(custom("color-primary"), "red")]);
    let debugged = format!("{:?}", built);
    assert!(debugged.contains(":root"));
    assert!(debugged.contains("<lazy>"));
}
