use gloo::console::log;
use web_sys::File;
use yew::prelude::*;

use crate::components::{file_input::FileInput, selection_status::SelectionStatus};
use crate::selection::SelectedFile;

pub struct App {
    selection: Option<SelectedFile>,
}

pub enum Msg {
    SelectionChanged(Option<File>),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { selection: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectionChanged(file) => {
                // Replace the selection wholesale; nothing of the previous
                // file survives a new change event.
                self.selection = file.map(|f| SelectedFile::new(f.name(), f.size() as u64));
                match &self.selection {
                    Some(file) => log!(format!("File selected: {}", file.name)),
                    None => log!("Selection cleared"),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-container">
                <header>
                    <h1>{ "JPEG Metadata Stripper" }</h1>
                </header>

                <main>
                    <div class="panel">
                        <h2>{ "Input" }</h2>
                        <FileInput
                            on_selection_change={ctx.link().callback(Msg::SelectionChanged)}
                        />
                        <SelectionStatus selection={self.selection.clone()} />
                    </div>
                </main>
            </div>
        }
    }
}
