use uuid::Uuid;
use web_sys::js_sys;
use yew::{html, Component, Context, Html, NodeRef, Properties};

pub struct ModalSheet {
    id: String,
}

#[derive(Properties, PartialEq)]
pub struct ModalSheetProps {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for ModalSheet {
    type Message = ();
    type Properties = ModalSheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="modal-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_sheet(sheet_ref: NodeRef) {
    toggle_shown(sheet_ref, "add");
}

pub fn close_sheet(sheet_ref: NodeRef) {
    toggle_shown(sheet_ref, "remove");
}

// The class flip goes through a deferred querySelector so the sheet's CSS
// transition runs after the current render settles.
fn toggle_shown(sheet_ref: NodeRef, action: &str) {
    if let Some(sheet) = sheet_ref.cast::<web_sys::HtmlElement>() {
        let func = js_sys::Function::new_no_args(&format!(
            "document.querySelector('#{}').classList.{}('shown')",
            sheet.id(),
            action
        ));
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50);
        }
    }
}
