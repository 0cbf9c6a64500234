//! Integration tests for render composition and the tag stack

use std::sync::Arc;
use std::thread;

use ui_forge::prelude::*;

fn config() -> UiConfig {
    UiConfig::default()
        .with_debug(false)
        .with_component(
            "alert",
            ComponentOptions {
                tag: Some("div".to_string()),
                attributes: AttributeBag::new()
                    .with("x", "default")
                    .with("y", "keep")
                    .with("role", "alert"),
                contents: Some("Heads up".to_string()),
                ..Default::default()
            },
        )
        .with_component(
            "badge",
            ComponentOptions {
                tag: Some("span".to_string()),
                attributes: AttributeBag::new().with("class", "badge"),
                ..Default::default()
            },
        )
}

fn manager() -> UiManager {
    let mut manager = UiManager::new(config());
    manager.register(&ComponentClass::templated("Alert"), None, false);
    manager
}

#[test]
fn test_caller_attributes_win_on_conflict_only() {
    let manager = manager();
    let merged = manager.merge_attributes("alert", &AttributeBag::new().with("x", "caller"));
    assert_eq!(merged.to_html(), r#"x="caller" y="keep" role="alert""#);
}

#[test]
fn test_make_registered_uses_defaults() {
    let manager = manager();
    assert_eq!(
        manager.make("alert", AttributeBag::new(), None).unwrap(),
        r#"<div x="default" y="keep" role="alert">Heads up</div>"#
    );
    assert_eq!(
        manager
            .make("alert", AttributeBag::new().with("hidden", true), Some("Saved".into()))
            .unwrap(),
        r#"<div x="default" y="keep" role="alert" hidden>Saved</div>"#
    );
}

#[test]
fn test_make_configured_only_skips_registry() {
    let manager = manager();
    let html = manager
        .make("badge", AttributeBag::new().with("id", "b1"), Some("3".into()))
        .unwrap();
    assert_eq!(html, r#"<span class="badge" id="b1">3</span>"#);
    assert!(manager.find("badge").is_none());
    assert_eq!(manager.host().templated().len(), 1);
}

#[test]
fn test_make_slot_contents() {
    let manager = manager();
    let slot = ComponentSlot::new("<b>Done</b>", AttributeBag::new().with("name", "body"));
    assert_eq!(
        manager
            .make("alert", AttributeBag::new(), Some(Contents::Slot(slot)))
            .unwrap(),
        r#"<div x="default" y="keep" role="alert"><b>Done</b></div>"#
    );
}

#[test]
fn test_false_flag_is_omitted() {
    let manager = manager();
    let html = manager
        .make("input", AttributeBag::new().with("disabled", false).with("name", "q"), None)
        .unwrap();
    assert_eq!(html, r#"<input name="q"/>"#);
}

#[test]
fn test_open_and_close_tags() {
    let manager = manager();
    let mut scope = manager.scope();

    assert_eq!(scope.open_tag("span", AttributeBag::new(), None), "<span>");
    assert_eq!(scope.close_tag().unwrap(), "</span>");
    assert!(matches!(scope.close_tag(), Err(UiError::NoOpenTag)));
}

#[test]
fn test_void_tag_does_not_touch_stack() {
    let manager = manager();
    let mut scope = manager.scope();

    let html = scope.open_tag("img", AttributeBag::new().with("src", "a.png"), None);
    assert_eq!(html, r#"<img src="a.png"/>"#);
    assert_eq!(scope.depth(), 0);
    assert!(scope.close_tag().is_err());
}

#[test]
fn test_open_registered_alias_with_default_contents() {
    let manager = manager();
    let mut scope = manager.scope();

    // Default contents make the tag complete; nothing is left open.
    assert_eq!(
        scope.open_tag("alert", AttributeBag::new(), None),
        r#"<div x="default" y="keep" role="alert">Heads up</div>"#
    );
    assert_eq!(scope.depth(), 0);
}

#[test]
fn test_compression_is_idempotent() {
    let input = "<div   class = 'a' >\n\n  hi  </div><!-- c -->";
    let once = compress(input);
    assert_eq!(once, "<div class='a'>hi</div>");
    assert_eq!(compress(&once), once);
}

#[test]
fn test_render_reuses_cache_and_clears_on_request() {
    let manager = manager();
    let template = "<ul>{% for item in items %}<li>{{ item }}</li>{% endfor %}</ul>";

    let first = manager
        .render(template, &json!({ "items": ["a", "b"] }), false)
        .unwrap();
    let cached = manager
        .render(template, &json!({ "items": ["c"] }), false)
        .unwrap();
    let cleared = manager
        .render(template, &json!({ "items": [] }), true)
        .unwrap();

    assert_eq!(first, "<ul><li>a</li><li>b</li></ul>");
    assert_eq!(cached, "<ul><li>c</li></ul>");
    assert_eq!(cleared, "<ul></ul>");
}

#[test]
fn test_directives_are_available_to_templates() {
    let manager = manager();
    let html = manager
        .render(r#"<x-{{ name | kebab }} title="{{ title | escape_attr }}"/>"#, &json!({ "name": "DateInput", "title": "a\"b" }), false)
        .unwrap();
    assert_eq!(html, r#"<x-date-input title="a&quot;b"/>"#);
}

#[test]
fn test_render_error_is_reported() {
    let manager = manager();
    let result = manager.render("{% if %}", &json!({}), false);
    assert!(matches!(result, Err(UiError::Render(_))));
}

#[test]
fn test_shared_manager_with_scoped_stacks() {
    let manager = Arc::new(manager());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let manager = Arc::clone(&manager);
            thread::spawn(move || {
                let mut scope = manager.scope();
                let mut html = scope.open_tag("section", AttributeBag::new().with("id", i.to_string()), None);
                html.push_str(&scope.make("alert", AttributeBag::new(), Some("x".into())).unwrap());
                html.push_str(&scope.close_tag().unwrap());
                assert_eq!(scope.depth(), 0);
                html
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let html = handle.join().unwrap();
        assert_eq!(
            html,
            format!(r#"<section id="{i}"><div x="default" y="keep" role="alert">x</div></section>"#)
        );
    }
}
