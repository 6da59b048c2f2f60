use wasm_bindgen::prelude::*;

mod app;
mod binder;
mod components;
mod dom;
mod selection;

pub use binder::{SelectionBinder, SelectionSource, StatusSink};
pub use dom::{bind_selection_display, FileInputSource, StatusElementSink};
pub use selection::{SelectedFile, Status};

#[wasm_bindgen(start)]
pub fn run_app() {
    // Route panic messages to the browser console
    console_error_panic_hook::set_once();

    yew::Renderer::<app::App>::new().render();
}
