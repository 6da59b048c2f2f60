#![cfg(target_arch = "wasm32")]

//! Browser-side tests for the direct-DOM selection display binding.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{DataTransfer, Document, Event, File, HtmlElement, HtmlInputElement};

use stripper_webui::bind_selection_display;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn page() -> (HtmlInputElement, HtmlElement) {
    let doc = document();
    let body = doc.body().unwrap();

    let input: HtmlInputElement = doc.create_element("input").unwrap().unchecked_into();
    input.set_type("file");
    body.append_child(&input).unwrap();

    let status: HtmlElement = doc.create_element("p").unwrap().unchecked_into();
    status.set_hidden(true);
    body.append_child(&status).unwrap();

    (input, status)
}

fn fire_change(input: &HtmlInputElement) {
    let event = Event::new("change").unwrap();
    input.dispatch_event(&event).unwrap();
}

// Populates the input's FileList through a DataTransfer, the only way to
// set it from script, then dispatches a change event.
fn choose(input: &HtmlInputElement, name: &str, bytes: usize) {
    let parts = js_sys::Array::of1(&JsValue::from("x".repeat(bytes)));
    let file = File::new_with_str_sequence(&parts, name).unwrap();
    let transfer = DataTransfer::new().unwrap();
    transfer.items().add_with_file(&file).unwrap();
    input.set_files(transfer.files().as_ref());
    fire_change(input);
}

#[wasm_bindgen_test]
fn shows_the_selected_file() {
    let (input, status) = page();
    let _listener = bind_selection_display(input.clone(), status.clone());

    choose(&input, "report.pdf", 2048);

    assert_eq!(status.text_content().unwrap(), "report.pdf • 2.0 KB");
    assert!(!status.hidden());
}

#[wasm_bindgen_test]
fn change_without_a_file_hides_the_status() {
    let (input, status) = page();
    let _listener = bind_selection_display(input.clone(), status.clone());

    choose(&input, "a.txt", 512);
    input.set_files(None);
    fire_change(&input);

    assert_eq!(status.text_content().unwrap(), "");
    assert!(status.hidden());
}

#[wasm_bindgen_test]
fn later_selection_overwrites_the_label() {
    let (input, status) = page();
    let _listener = bind_selection_display(input.clone(), status.clone());

    choose(&input, "first.jpg", 1024);
    choose(&input, "second.jpg", 1536);

    assert_eq!(status.text_content().unwrap(), "second.jpg • 1.5 KB");
}

#[wasm_bindgen_test]
fn zero_byte_file_is_still_reported() {
    let (input, status) = page();
    let _listener = bind_selection_display(input.clone(), status.clone());

    choose(&input, "y", 0);

    assert_eq!(status.text_content().unwrap(), "y • 0.0 KB");
    assert!(!status.hidden());
}
