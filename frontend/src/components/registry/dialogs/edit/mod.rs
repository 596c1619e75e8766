use crate::components::registry::{DebtorRegistryComponent, Msg};
use crate::overlay::modal_sheet::ModalSheet;
use yew::html::Scope;
use yew::prelude::*;

use super::super::view::build_form_fields;

/// Modal dialog for editing the selected record. Reuses the shared form
/// fields, so everything the user types lands in the same state the create
/// panel binds to; only "Save" pushes it into the store.
pub fn edit_dialog(
    component: &DebtorRegistryComponent,
    link: &Scope<DebtorRegistryComponent>,
) -> Html {
    html! {
        <ModalSheet node_ref={component.edit_sheet_ref.clone()}>
            <div class="dialog-backdrop">
                <div class="dialog-card">
                    <p class="dialog-title">{"Edit debtor"}</p>
                    { build_form_fields(component, link) }
                    <div class="dialog-actions">
                        <button class="text-btn" onclick={link.callback(|_| Msg::CancelEdit)}>
                            {"Cancel"}
                        </button>
                        <button class="primary-btn" onclick={link.callback(|_| Msg::SaveEdit)}>
                            {"Save"}
                        </button>
                    </div>
                </div>
            </div>
        </ModalSheet>
    }
}
