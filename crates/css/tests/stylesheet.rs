use pretty_assertions::assert_eq;
use serde_json::json;

use stylebuddy_css::{
    djb2, render_static, ConfigOverride, CssError, PseudoBlock, StaticSheet, StyleBlock, StyleSheet,
    StyleSheetInput,
};

fn static_css(input: serde_json::Value) -> Result<String, CssError> {
    StaticSheet::from_json(&input)?.render()
}

#[test]
fn renders_plain_rule() {
    assert_eq!(
        static_css(json!({ "body": { "background": "black" } })).unwrap(),
        "body{background:black;}"
    );
}

#[test]
fn converts_camel_case_and_vendor_prefixes() {
    let css = static_css(json!({
        "button": {
            "background": "#fff",
            "borderColor": "black",
            "WebkitTransition": "all 1s"
        }
    }))
    .unwrap();
    assert_eq!(
        css,
        "button{background:#fff;border-color:black;-webkit-transition:all 1s;}"
    );
}

#[test]
fn expands_fallback_values() {
    let css = static_css(json!({ "div": { "display": ["-webkit-box", "-moz-box", "-webkit-box"] } })).unwrap();
    assert_eq!(css, "div{display:-webkit-box;display:-moz-box;display:-webkit-box;}");
}

#[test]
fn rejects_at_rule_inside_pseudo_selector() {
    let err = static_css(json!({
        "body": { ":hover": { "@media screen and (min-width:720px)": { "background": "black" } } }
    }))
    .unwrap_err();
    assert_eq!(err.to_string(), "At-rule nested in pseudo selector");
}

#[test]
fn wraps_deeply_nested_at_rules() {
    let css = static_css(json!({
        "body": {
            "@supports (display:grid)": {
                "@media screen": {
                    "@media (min-width:700px)": {
                        "display": "grid",
                        ":hover": { "color": "red" }
                    }
                }
            }
        }
    }))
    .unwrap();
    assert_eq!(
        css,
        "@supports (display:grid){@media screen{@media (min-width:700px){body{display:grid;}body:hover{color:red;}}}}"
    );
}

#[test]
fn typed_and_json_inputs_render_identically() {
    let typed = StyleSheetInput::new().rule(
        "button",
        StyleBlock::new()
            .property("background", "yellow")
            .pseudo(PseudoBlock::new(":hover").property("background", "blue"))
            .at_rule("@media print", StyleBlock::new().property("background", "none")),
    );
    let parsed = StyleSheetInput::from_json(&json!({
        "button": {
            "background": "yellow",
            ":hover": { "background": "blue" },
            "@media print": { "background": "none" }
        }
    }))
    .unwrap();

    assert_eq!(typed, parsed);
    assert_eq!(
        render_static(&typed).unwrap(),
        "button{background:yellow;}button:hover{background:blue;}@media print{button{background:none;}}"
    );
}

#[test]
fn default_identifiers_are_stable() {
    let mut sheet = StyleSheet::default();
    let selectors = sheet
        .add_json(&json!({ "component": { "color": "red" } }), &ConfigOverride::new())
        .unwrap();
    assert_eq!(selectors.get("component"), Some("_component_2513881194"));

    let mut salted = StyleSheet::new(ConfigOverride::new().salt("buddy"));
    salted
        .add_json(&json!({ "component": { "color": "red" } }), &ConfigOverride::new())
        .unwrap();
    assert_eq!(salted.render(), "._component_1892634500{color:red;}");
}

#[test]
fn hashed_selector_identifiers() {
    let mut sheet = StyleSheet::new(ConfigOverride::new().hash_selector(true).append_hash(false));
    let selectors = sheet
        .add_json(&json!({ "app": { "margin": 0 } }), &ConfigOverride::new())
        .unwrap();

    let expected = format!("_{}", djb2("app"));
    assert_eq!(selectors.get("app"), Some(expected.as_str()));
    assert_eq!(sheet.render(), "._193425604{margin:0;}");
}

#[test]
fn accumulates_sections_in_call_order() {
    let first = json!({ "a": { "color": "red" } });
    let second = json!({ "b": { "color": "blue", "@media print": { "color": "black" } } });
    let second_config = ConfigOverride::new().prefix("#").append_hash(false);

    let mut sheet = StyleSheet::default();
    sheet.add_json(&first, &ConfigOverride::new()).unwrap();
    let after_first = sheet.render();
    assert_eq!(sheet.render(), after_first);

    let selectors = sheet.add_json(&second, &second_config).unwrap();
    assert_eq!(selectors.get("b"), Some("_b"));
    assert_eq!(selectors.len(), 1);

    let mut alone = StyleSheet::default();
    alone.add_json(&second, &second_config).unwrap();

    assert_eq!(sheet.render(), format!("{}{}", after_first, alone.render()));
    assert_eq!(
        sheet.render(),
        format!(
            "._a_{}{{color:red;}}#_b{{color:blue;}}@media print{{#_b{{color:black;}}}}",
            djb2("a")
        )
    );
}

#[test]
fn selector_map_serializes_in_order() {
    let mut sheet = StyleSheet::new(ConfigOverride::new().append_hash(false));
    let selectors = sheet
        .add_json(
            &json!({ "zeta": { "color": "red" }, "alpha": { "color": "blue" } }),
            &ConfigOverride::new(),
        )
        .unwrap();

    assert_eq!(
        serde_json::to_string(&selectors).unwrap(),
        r#"{"zeta":"_zeta","alpha":"_alpha"}"#
    );
}
