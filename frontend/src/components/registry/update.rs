//! Update function for the debtor registry component.
//!
//! Elm-style shape: receives the current state, the `Context`, and a `Msg`,
//! mutates the state accordingly, and returns whether the view should
//! re-render.
//!
//! Key behaviors
//! - Live formatting of the sum, payment and telephone fields on every
//!   keystroke.
//! - Create/edit/delete funneled through the record store, which persists the
//!   whole list on each mutation.
//! - Export via an in-browser file download; import via a hidden file input
//!   whose content is read asynchronously and posted back as a message.
//! - User-facing failures (import errors) surface as toasts; validation
//!   rejections and lookup misses stay silent apart from a console note.

use common::format::{format_amount, format_telephone};
use common::transfer::{self, ImportError};
use gloo_console::warn;
use gloo_file::{futures::read_as_text, Blob};
use js_sys::Date;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::overlay::modal_sheet::{close_sheet, open_sheet};

use super::helpers::{current_moment, download_json, show_toast};
use super::messages::Msg;
use super::state::DebtorRegistryComponent;

pub fn update(
    component: &mut DebtorRegistryComponent,
    ctx: &Context<DebtorRegistryComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetAddress(value) => {
            component.address = value;
            true
        }
        Msg::SetHouse(value) => {
            component.house = value;
            true
        }
        Msg::SetApartament(value) => {
            component.apartament = value;
            true
        }
        Msg::SetSum(raw) => {
            component.sum = format_amount(&raw);
            true
        }
        Msg::SetTelephone(raw) => {
            component.telephone = format_telephone(&raw);
            true
        }
        Msg::SetFio(value) => {
            component.fio = value;
            true
        }
        Msg::SetStatus(value) => {
            component.status = value;
            true
        }
        Msg::SetPayment(raw) => {
            component.payment = format_amount(&raw);
            true
        }
        Msg::SetPaymentDate(value) => {
            component.payment_date = value;
            true
        }

        Msg::AddDebtor => {
            if component.store.add(component.form_fields(), current_moment()) {
                component.clear_form();
            } else {
                warn!("create rejected: address, house and apartament are required");
            }
            true
        }

        Msg::OpenRowMenu(id) => {
            component.menu_anchor = Some(id);
            component.selected_id = Some(id);
            true
        }
        Msg::CloseRowMenu => {
            component.menu_anchor = None;
            true
        }

        Msg::OpenEditDialog => {
            component.menu_anchor = None;
            let Some(id) = component.selected_id else {
                return true;
            };
            // A row deleted elsewhere since the menu opened is a silent no-op.
            let Some(debtor) = component.store.get(id).cloned() else {
                return true;
            };
            component.load_form(&debtor);
            open_sheet(component.edit_sheet_ref.clone());
            true
        }
        Msg::SaveEdit => {
            if let Some(id) = component.selected_id {
                component.store.update(id, component.form_fields());
            }
            close_sheet(component.edit_sheet_ref.clone());
            component.selected_id = None;
            true
        }
        Msg::CancelEdit => {
            close_sheet(component.edit_sheet_ref.clone());
            component.selected_id = None;
            true
        }
        Msg::DeleteSelected => {
            if let Some(id) = component.selected_id.take() {
                component.store.remove(id);
                component.checked.remove(&id);
            }
            component.menu_anchor = None;
            true
        }

        Msg::ToggleRow(id) => {
            if !component.checked.remove(&id) {
                component.checked.insert(id);
            }
            true
        }
        Msg::ToggleAllRows => {
            if component.checked.len() == component.store.len() {
                component.checked.clear();
            } else {
                component.checked = component.store.all().iter().map(|d| d.id).collect();
            }
            true
        }

        Msg::SetPage(page) => {
            component.page = page;
            true
        }
        Msg::SetPageSize(size) => {
            component.page_size = size;
            component.page = 0;
            true
        }
        Msg::SortBy(key) => {
            component.sort = match component.sort {
                Some((current, ascending)) if current == key => Some((key, !ascending)),
                _ => Some((key, true)),
            };
            true
        }

        Msg::Export => {
            match transfer::export_json(component.store.all()) {
                Ok(text) => {
                    let stamp = Date::new_0().to_iso_string().as_string().unwrap_or_default();
                    download_json(&transfer::export_file_name(&stamp), &text);
                }
                Err(err) => show_toast(&format!("Export failed: {err}")),
            }
            false
        }

        Msg::PickImportFile => {
            if let Some(input) = component.import_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::ImportFileSelected(file) => {
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                let blob = Blob::from(file);
                match read_as_text(&blob).await {
                    Ok(text) => link.send_message(Msg::ImportLoaded(text)),
                    Err(_) => link.send_message(Msg::ImportFailed),
                }
            });
            false
        }
        Msg::ImportLoaded(text) => match transfer::parse_import(&text) {
            Ok(list) => {
                component.store.replace_all(list);
                component.page = 0;
                component.checked.clear();
                true
            }
            Err(err) => {
                warn!(format!("import rejected: {err}"));
                let alert = match err {
                    ImportError::NotAList => "Invalid file format.",
                    ImportError::Unreadable(_) => "Could not read the file.",
                };
                show_toast(alert);
                false
            }
        },
        Msg::ImportFailed => {
            show_toast("Could not read the file.");
            false
        }
    }
}
