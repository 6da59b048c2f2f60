use web_sys::{Event, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FileInputProps {
    /// Fires on every change event; `None` means the selection is empty.
    pub on_selection_change: Callback<Option<web_sys::File>>,
}

#[function_component(FileInput)]
pub fn file_input(props: &FileInputProps) -> Html {
    let on_change = {
        let on_selection_change = props.on_selection_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            on_selection_change.emit(file);
        })
    };

    html! {
        <div class="file-input">
            <label for="file" class="file-label">
                { "Select JPEG File" }
            </label>
            <input
                id="file"
                type="file"
                accept="image/jpeg"
                onchange={on_change}
            />
        </div>
    }
}
