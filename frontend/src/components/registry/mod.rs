//! Debtor registry: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export the component types (`Msg`, `DebtorRegistryProps`,
//!   `DebtorRegistryComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - Open the record store on creation, seeded from the persisted snapshot
//!   under the configured storage key.

use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::DebtorRegistryProps;
pub use state::DebtorRegistryComponent;

impl Component for DebtorRegistryComponent {
    type Message = Msg;
    type Properties = DebtorRegistryProps;

    fn create(ctx: &Context<Self>) -> Self {
        DebtorRegistryComponent::new(&ctx.props().storage_key)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
