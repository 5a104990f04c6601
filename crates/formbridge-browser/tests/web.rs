//! WASM browser tests for formbridge-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`
//!
//! A minimal `ace` shim is installed on the page, so the full bind and
//! submit flow runs without the real widget. Submit events are dispatched
//! synthetically; synthetic dispatch runs the listeners without triggering
//! native form submission.

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use formbridge_browser::{BridgeConfig, BridgeError, FormEditorBridge};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn install_ace_shim() {
    js_sys::eval(
        r#"
        window.__ace_sessions = window.__ace_sessions || {};
        window.ace = window.ace || {
            config: {
                urls: {},
                setModuleUrl: function(module, url) {
                    window.ace.config.urls[module] = url;
                }
            },
            edit: function(id) {
                if (!document.getElementById(id)) {
                    throw new Error('ace: no element with id ' + id);
                }
                var session = {
                    value: '',
                    mode: null,
                    getValue: function() { return this.value; },
                    setValue: function(v) { this.value = v; },
                    setMode: function(m) { this.mode = m; }
                };
                window.__ace_sessions[id] = session;
                return {
                    theme: null,
                    setTheme: function(t) { this.theme = t; },
                    getSession: function() { return session; }
                };
            }
        };
        "#,
    )
    .unwrap();
}

/// Build a form fixture with unique ids derived from `tag`.
///
/// Returns the configuration pointing at the fixture.
fn build_fixture(tag: &str, content: &str, content_type: Option<&str>) -> BridgeConfig {
    let doc = document();
    let body = doc.body().unwrap();

    let form = doc.create_element("form").unwrap();
    form.set_id(&format!("form-{tag}"));

    let textarea: HtmlTextAreaElement = doc
        .create_element("textarea")
        .unwrap()
        .dyn_into()
        .unwrap();
    textarea.set_id(&format!("content-{tag}"));
    textarea.set_value(content);
    form.append_child(&textarea).unwrap();

    if let Some(value) = content_type {
        let input: HtmlInputElement = doc.create_element("input").unwrap().dyn_into().unwrap();
        input.set_id(&format!("contenttype-{tag}"));
        input.set_value(value);
        form.append_child(&input).unwrap();
    }

    let container = doc.create_element("div").unwrap();
    container.set_id(&format!("container-{tag}"));
    form.append_child(&container).unwrap();

    body.append_child(&form).unwrap();

    let mut config = BridgeConfig::new(
        format!("form-{tag}"),
        format!("content-{tag}"),
        format!("container-{tag}"),
    );
    if content_type.is_some() {
        config = config.with_content_type_field(format!("contenttype-{tag}"));
    }
    config
}

fn session_field(tag: &str, field: &str) -> Option<String> {
    js_sys::eval(&format!(
        "window.__ace_sessions['container-{tag}'] && window.__ace_sessions['container-{tag}'].{field}"
    ))
    .unwrap()
    .as_string()
}

fn set_session_value(tag: &str, value: &str) {
    js_sys::eval(&format!(
        "window.__ace_sessions['container-{tag}'].value = {value:?};"
    ))
    .unwrap();
}

fn textarea_value(tag: &str) -> String {
    document()
        .get_element_by_id(&format!("content-{tag}"))
        .unwrap()
        .dyn_into::<HtmlTextAreaElement>()
        .unwrap()
        .value()
}

fn dispatch_submit(tag: &str) {
    let form = document()
        .get_element_by_id(&format!("form-{tag}"))
        .unwrap();
    let event = Event::new("submit").unwrap();
    form.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn test_bind_seeds_editor_and_hides_field() {
    install_ace_shim();
    let config = build_fixture("seed", "initial text", None);
    let bridge = FormEditorBridge::unbound(config);
    bridge.bind_now().unwrap();

    assert!(bridge.is_bound());
    assert_eq!(bridge.content().as_deref(), Some("initial text"));
    assert_eq!(session_field("seed", "value").as_deref(), Some("initial text"));

    let textarea: HtmlElement = document()
        .get_element_by_id("content-seed")
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(
        textarea.style().get_property_value("display").unwrap(),
        "none"
    );
}

#[wasm_bindgen_test]
fn test_submit_round_trips_seeded_text() {
    install_ace_shim();
    let config = build_fixture("roundtrip", "unchanged", None);
    let bridge = FormEditorBridge::unbound(config);
    bridge.bind_now().unwrap();

    dispatch_submit("roundtrip");
    assert_eq!(textarea_value("roundtrip"), "unchanged");
}

#[wasm_bindgen_test]
fn test_submit_copies_edited_buffer() {
    install_ace_shim();
    let config = build_fixture("edit", "before", None);
    let bridge = FormEditorBridge::unbound(config);
    bridge.bind_now().unwrap();

    set_session_value("edit", "after");
    dispatch_submit("edit");
    assert_eq!(textarea_value("edit"), "after");

    // Repeatable within the bound state.
    set_session_value("edit", "after again");
    dispatch_submit("edit");
    assert_eq!(textarea_value("edit"), "after again");
}

#[wasm_bindgen_test]
fn test_mode_switched_from_content_type() {
    install_ace_shim();
    let config = build_fixture("mode", "", Some("text/html; charset=utf-8"));
    let bridge = FormEditorBridge::unbound(config);
    bridge.bind_now().unwrap();

    assert_eq!(
        session_field("mode", "mode").as_deref(),
        Some("ace/mode/html")
    );
}

#[wasm_bindgen_test]
fn test_unmatched_content_type_keeps_default_mode() {
    install_ace_shim();
    let config = build_fixture("plain", "", Some("text/plain"));
    let bridge = FormEditorBridge::unbound(config);
    bridge.bind_now().unwrap();

    assert_eq!(session_field("plain", "mode"), None);
}

#[wasm_bindgen_test]
fn test_missing_content_field_fails_with_its_id() {
    install_ace_shim();
    let mut config = build_fixture("missing", "", None);
    config.content_id = "does-not-exist".to_owned();

    let bridge = FormEditorBridge::unbound(config);
    assert_eq!(
        bridge.bind_now(),
        Err(BridgeError::MissingElement {
            id: "does-not-exist".to_owned()
        })
    );
    assert!(!bridge.is_bound());
}

#[wasm_bindgen_test]
fn test_second_bind_fails() {
    install_ace_shim();
    let config = build_fixture("twice", "", None);
    let bridge = FormEditorBridge::unbound(config);
    bridge.bind_now().unwrap();
    assert_eq!(bridge.bind_now(), Err(BridgeError::AlreadyBound));
    assert!(bridge.is_bound());
}

#[wasm_bindgen_test]
fn test_module_urls_registered_with_ace() {
    install_ace_shim();
    let config = build_fixture("modules", "", None)
        .with_module_url("ace/theme/chrome", "/js/ace/theme-chrome.js");
    let bridge = FormEditorBridge::unbound(config);
    bridge.bind_now().unwrap();

    let url = js_sys::eval("window.ace.config.urls['ace/theme/chrome']")
        .unwrap()
        .as_string();
    assert_eq!(url.as_deref(), Some("/js/ace/theme-chrome.js"));
}

#[wasm_bindgen_test]
fn test_document_ready_runs_immediately_when_loaded() {
    // The test document is past "loading", so the hook fires inline and no
    // listener is registered.
    use std::cell::Cell;
    use std::rc::Rc;

    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();
    let listener = formbridge_browser::on_document_ready(move || flag.set(true));
    assert!(listener.is_none());
    assert!(fired.get());
}

#[wasm_bindgen_test]
fn test_unmount_drops_submit_subscription() {
    install_ace_shim();
    let config = build_fixture("unmount", "kept", None);
    let bridge = FormEditorBridge::unbound(config);
    bridge.bind_now().unwrap();
    bridge.unmount();

    set_session_value("unmount", "lost");
    dispatch_submit("unmount");
    // Listener disposed: the field keeps its bound-time value.
    assert_eq!(textarea_value("unmount"), "kept");
}
