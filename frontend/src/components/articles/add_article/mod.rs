//! Add-article modal: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, API calls and
//! browser helpers.
//!
//! Responsibilities
//! - Re-export `AddArticleModal`, `AddArticleProps` and `Msg`.
//! - Track the parent's `is_open` flag: every opening starts a fresh
//!   activation and reloads the categories, every closing makes in-flight
//!   work stale so its result is dropped instead of applied.

use yew::prelude::*;

mod api;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::AddArticleProps;
pub use state::AddArticleModal;

impl Component for AddArticleModal {
    type Message = Msg;
    type Properties = AddArticleProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut component = AddArticleModal::new(ctx.props().api_base.as_deref());
        if ctx.props().is_open {
            activate(&mut component, ctx);
        }
        component
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.api_base != old_props.api_base {
            self.config = state::config_for(props.api_base.as_deref());
        }
        match (old_props.is_open, props.is_open) {
            (false, true) => activate(self, ctx),
            (true, false) => self.form.close(),
            _ => {}
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

fn activate(component: &mut AddArticleModal, ctx: &Context<AddArticleModal>) {
    let token = component.form.open();
    update::spawn_category_fetch(component, ctx, token);
    if let Some((ticket, file)) = component.form.missing_preview() {
        update::spawn_preview(ctx, ticket, file);
    }
}
