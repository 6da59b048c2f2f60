use yew::prelude::*;

use crate::selection::{SelectedFile, Status};

#[derive(Properties, PartialEq)]
pub struct SelectionStatusProps {
    pub selection: Option<SelectedFile>,
}

/// Status label for the current selection. Text and the `hidden` flag come
/// from the same [`Status`] so they can never disagree.
#[function_component(SelectionStatus)]
pub fn selection_status(props: &SelectionStatusProps) -> Html {
    let status = Status::of(props.selection.as_ref());

    html! {
        <p id="chosen" class="selection-status" hidden={status.is_hidden()}>
            { status.text().to_string() }
        </p>
    }
}
