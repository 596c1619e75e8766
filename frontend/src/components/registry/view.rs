//! View rendering for the debtor registry.
//!
//! One panel holds the whole page: the entry form (address autocomplete,
//! house/apartment row, live-formatted sum and telephone, status selector
//! with conditional payment fields), the import/export row, and the record
//! table with sortable headers, checkbox selection, per-row action menus and
//! a paginated footer. The edit dialog is a modal sheet reusing the same
//! field set, bound to the same form state.

use common::model::debtor::{Debtor, Status};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::streets::STREETS;

use super::dialogs::edit::edit_dialog;
use super::messages::Msg;
use super::state::{DebtorRegistryComponent, SortKey, PAGE_SIZES};

pub fn view(component: &DebtorRegistryComponent, ctx: &Context<DebtorRegistryComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="registry-root">
            <p class="registry-title">{"Apartment debt register"}</p>

            <datalist id="street-options">
                { for STREETS.iter().map(|street| html! { <option value={*street} /> }) }
            </datalist>

            { build_form_fields(component, link) }

            <button class="primary-btn" onclick={link.callback(|_| Msg::AddDebtor)}>
                {"Add"}
            </button>

            { build_transfer_row(component, link) }
            { build_table(component, link) }
            { edit_dialog(component, link) }
        </div>
    }
}

/// The shared debtor field set, rendered both in the create panel and inside
/// the edit dialog. Both bind to the same component state.
pub(super) fn build_form_fields(
    component: &DebtorRegistryComponent,
    link: &Scope<DebtorRegistryComponent>,
) -> Html {
    html! {
        <>
            <input
                class="field"
                list="street-options"
                placeholder="Address"
                value={component.address.clone()}
                oninput={link.callback(|e: InputEvent| Msg::SetAddress(input_value(e)))}
            />
            <div class="field-row">
                <input
                    class="field"
                    inputmode="numeric"
                    placeholder="House"
                    value={component.house.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetHouse(input_value(e)))}
                />
                <input
                    class="field"
                    inputmode="numeric"
                    placeholder="Apartment"
                    value={component.apartament.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetApartament(input_value(e)))}
                />
            </div>
            <div class="field-row">
                <input
                    class="field"
                    placeholder="Debt sum"
                    value={component.sum.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetSum(input_value(e)))}
                />
                <input
                    class="field"
                    placeholder="Telephone"
                    value={component.telephone.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetTelephone(input_value(e)))}
                />
            </div>
            <input
                class="field"
                placeholder="Owner full name"
                value={component.fio.clone()}
                oninput={link.callback(|e: InputEvent| Msg::SetFio(input_value(e)))}
            />
            <select
                class="field"
                onchange={link.callback(|e: Event| Msg::SetStatus(select_value(e)))}
            >
                { for [Status::SEALED_LABEL, Status::SERVED_LABEL].iter().map(|option| html! {
                    <option value={*option} selected={component.status == *option}>{*option}</option>
                }) }
            </select>
            {
                if component.status == Status::SERVED_LABEL {
                    html! {
                        <>
                            <input
                                class="field"
                                placeholder="Expected payment date"
                                value={component.payment_date.clone()}
                                oninput={link.callback(|e: InputEvent| Msg::SetPaymentDate(input_value(e)))}
                            />
                            <input
                                class="field"
                                placeholder="Payment sum"
                                value={component.payment.clone()}
                                oninput={link.callback(|e: InputEvent| Msg::SetPayment(input_value(e)))}
                            />
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

/// Export/import buttons plus the hidden file input the import button clicks.
fn build_transfer_row(
    component: &DebtorRegistryComponent,
    link: &Scope<DebtorRegistryComponent>,
) -> Html {
    html! {
        <div class="field-row">
            <button class="primary-btn wide" onclick={link.callback(|_| Msg::Export)}>
                {"Export"}
            </button>
            <button class="primary-btn wide" onclick={link.callback(|_| Msg::PickImportFile)}>
                {"Import"}
            </button>
            <input
                type="file"
                accept=".json"
                style="display:none;"
                ref={component.import_input_ref.clone()}
                onchange={link.batch_callback(|e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    input.files().and_then(|files| files.get(0)).map(Msg::ImportFileSelected)
                })}
            />
        </div>
    }
}

fn build_table(component: &DebtorRegistryComponent, link: &Scope<DebtorRegistryComponent>) -> Html {
    let rows = sorted_rows(component);
    let total = rows.len();

    // Clamp the page so deletes and imports never leave the view past the end.
    let last_page = total.saturating_sub(1) / component.page_size;
    let page = component.page.min(last_page);
    let start = page * component.page_size;
    let end = (start + component.page_size).min(total);
    let page_rows = &rows[start..end];

    let all_checked = total > 0 && component.checked.len() == component.store.len();

    html! {
        <div class="table-panel">
            <table class="record-table">
                <thead>
                    <tr>
                        <th class="check-col">
                            <input
                                type="checkbox"
                                checked={all_checked}
                                onclick={link.callback(|_| Msg::ToggleAllRows)}
                            />
                        </th>
                        { header_cell(component, link, "Address", SortKey::Address) }
                        { header_cell(component, link, "House", SortKey::House) }
                        { header_cell(component, link, "Apartment", SortKey::Apartament) }
                        { header_cell(component, link, "Date", SortKey::Date) }
                        { header_cell(component, link, "Sum", SortKey::Sum) }
                        { header_cell(component, link, "Telephone", SortKey::Telephone) }
                        { header_cell(component, link, "Owner", SortKey::Fio) }
                        { header_cell(component, link, "Status", SortKey::Status) }
                        { header_cell(component, link, "Payment", SortKey::Payment) }
                        { header_cell(component, link, "Payment date", SortKey::PaymentDate) }
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for page_rows.iter().map(|debtor| build_row(component, link, debtor)) }
                </tbody>
            </table>
            { build_pagination(component, link, page, total) }
        </div>
    }
}

fn header_cell(
    component: &DebtorRegistryComponent,
    link: &Scope<DebtorRegistryComponent>,
    label: &'static str,
    key: SortKey,
) -> Html {
    let indicator = match component.sort {
        Some((current, ascending)) if current == key => {
            if ascending {
                " \u{25b2}"
            } else {
                " \u{25bc}"
            }
        }
        _ => "",
    };

    html! {
        <th class="sortable" onclick={link.callback(move |_| Msg::SortBy(key))}>
            { label }{ indicator }
        </th>
    }
}

fn build_row(
    component: &DebtorRegistryComponent,
    link: &Scope<DebtorRegistryComponent>,
    debtor: &Debtor,
) -> Html {
    let id = debtor.id;

    html! {
        <tr key={id.to_string()}>
            <td class="check-col">
                <input
                    type="checkbox"
                    checked={component.checked.contains(&id)}
                    onclick={link.callback(move |_| Msg::ToggleRow(id))}
                />
            </td>
            <td>{ debtor.address.clone() }</td>
            <td class="num">{ debtor.house }</td>
            <td class="num">{ debtor.apartament }</td>
            <td>{ debtor.date.clone() }</td>
            <td>{ debtor.sum.clone() }</td>
            <td>{ debtor.telephone.clone() }</td>
            <td>{ debtor.fio.clone() }</td>
            <td>{ debtor.status.label() }</td>
            <td>{ debtor.status.payment().unwrap_or_default() }</td>
            <td>{ debtor.status.payment_date().unwrap_or_default() }</td>
            <td class="actions-col">
                <i
                    class="material-icons row-menu-btn"
                    onclick={link.callback(move |_| Msg::OpenRowMenu(id))}
                >
                    {"more_vert"}
                </i>
                {
                    if component.menu_anchor == Some(id) {
                        build_row_menu(link)
                    } else {
                        html! {}
                    }
                }
            </td>
        </tr>
    }
}

fn build_row_menu(link: &Scope<DebtorRegistryComponent>) -> Html {
    html! {
        <div class="row-menu">
            <div class="row-menu-item" onclick={link.callback(|_| Msg::OpenEditDialog)}>
                {"Edit"}
            </div>
            <div class="row-menu-item" onclick={link.callback(|_| Msg::DeleteSelected)}>
                {"Delete"}
            </div>
            <div class="row-menu-item muted" onclick={link.callback(|_| Msg::CloseRowMenu)}>
                {"Close"}
            </div>
        </div>
    }
}

fn build_pagination(
    component: &DebtorRegistryComponent,
    link: &Scope<DebtorRegistryComponent>,
    page: usize,
    total: usize,
) -> Html {
    let last_page = total.saturating_sub(1) / component.page_size;
    let first = if total == 0 {
        0
    } else {
        page * component.page_size + 1
    };
    let last = ((page + 1) * component.page_size).min(total);

    html! {
        <div class="pagination">
            <span>{"Rows per page:"}</span>
            <select onchange={link.callback(|e: Event| {
                Msg::SetPageSize(select_value(e).parse().unwrap_or(PAGE_SIZES[0]))
            })}>
                { for PAGE_SIZES.iter().map(|size| html! {
                    <option value={size.to_string()} selected={component.page_size == *size}>
                        { *size }
                    </option>
                }) }
            </select>
            <span class="page-range">{ format!("{first}\u{2013}{last} of {total}") }</span>
            <button
                disabled={page == 0}
                onclick={link.callback(move |_| Msg::SetPage(page.saturating_sub(1)))}
            >
                {"\u{2039}"}
            </button>
            <button
                disabled={page >= last_page}
                onclick={link.callback(move |_| Msg::SetPage(page + 1))}
            >
                {"\u{203a}"}
            </button>
        </div>
    }
}

/// Clones the list into presentation order. Sorting never touches the store,
/// which keeps insertion order.
fn sorted_rows(component: &DebtorRegistryComponent) -> Vec<Debtor> {
    let mut rows = component.store.all().to_vec();
    if let Some((key, ascending)) = component.sort {
        rows.sort_by(|a, b| {
            let ordering = match key {
                SortKey::Address => a.address.cmp(&b.address),
                SortKey::House => a.house.cmp(&b.house),
                SortKey::Apartament => a.apartament.cmp(&b.apartament),
                SortKey::Date => a.date.cmp(&b.date),
                SortKey::Sum => a.sum.cmp(&b.sum),
                SortKey::Telephone => a.telephone.cmp(&b.telephone),
                SortKey::Fio => a.fio.cmp(&b.fio),
                SortKey::Status => a.status.label().cmp(b.status.label()),
                SortKey::Payment => a
                    .status
                    .payment()
                    .unwrap_or_default()
                    .cmp(b.status.payment().unwrap_or_default()),
                SortKey::PaymentDate => a
                    .status
                    .payment_date()
                    .unwrap_or_default()
                    .cmp(b.status.payment_date().unwrap_or_default()),
            };
            if ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });
    }
    rows
}

fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

fn select_value(e: Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}
