//! Centered dialog shell shared by the dashboard's forms.
//!
//! Renders a blurred backdrop over the page and a scrollable panel holding
//! `children`. Clicking the backdrop asks the owner to close the dialog; the
//! shell itself keeps no open/closed state.

use yew::prelude::*;

pub struct Modal;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub on_close: Callback<()>,
}

impl Component for Modal {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_backdrop_click = ctx.props().on_close.reform(|_: MouseEvent| ());

        html! {
            <div class="fixed inset-0 flex items-center justify-center p-4 z-50">
                <div class="absolute inset-0 backdrop-blur-sm bg-black/30" onclick={on_backdrop_click}></div>
                <div class="bg-white dark:bg-gray-800 rounded-xl shadow-xl p-6 w-full max-w-2xl relative z-10 overflow-y-auto max-h-[90vh]">
                    { ctx.props().children.clone() }
                </div>
            </div>
        }
    }
}
