//! View rendering for the add-article modal.
//!
//! Markup follows the dashboard's Tailwind look; labels are Arabic and the
//! text fields are right-to-left. Nothing is rendered while the parent keeps
//! the modal closed.

use common::form::FormStatus;
use common::model::category::Category;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{first_selected_file, selected_files};
use super::messages::Msg;
use super::props::AddArticleProps;
use super::state::AddArticleModal;
use crate::components::modal::Modal;

const INPUT_CLASS: &str = "w-full p-3 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 outline-none transition-all duration-200";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2 tracking-wide";
const DROP_ZONE_CLASS: &str = "flex items-center justify-center p-4 border-2 border-dashed border-gray-300 dark:border-gray-600 rounded-lg cursor-pointer hover:bg-gray-50 dark:hover:bg-gray-700 transition-all duration-200";

pub fn view(component: &AddArticleModal, ctx: &Context<AddArticleModal>) -> Html {
    let props = ctx.props();
    if !props.is_open {
        return html! {};
    }
    let link = ctx.link();

    html! {
        <Modal on_close={props.on_close.clone()}>
            { build_header(props) }
            { build_feedback(component.form.status()) }

            <form
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
                enctype="multipart/form-data"
                class="space-y-5"
            >
                { build_title_field(component, link) }
                { build_content_field(component, link) }
                { build_featured_image_field(component, link) }
                { build_media_field(component, link) }
                { build_category_field(component, link) }
                { build_tags_field(component, link) }
                { build_buttons(component, props) }
            </form>
        </Modal>
    }
}

fn build_header(props: &AddArticleProps) -> Html {
    html! {
        <div class="flex justify-between items-center mb-6">
            <h2 class="text-2xl font-bold text-gray-800 dark:text-white">{"إضافة مقال جديد"}</h2>
            <button
                type="button"
                onclick={props.on_close.reform(|_| ())}
                class="text-gray-500 hover:text-gray-700 dark:text-gray-400 dark:hover:text-white transition-colors"
                aria-label="Close"
            >
                <i class="material-icons">{"close"}</i>
            </button>
        </div>
    }
}

/// Success and error banners. Both may show at once; the form does not
/// enforce exclusivity.
fn build_feedback(status: &FormStatus) -> Html {
    html! {
        <>
            if let Some(success) = &status.success {
                <div class="mb-4 p-3 bg-green-50 text-green-700 rounded-lg flex items-center">
                    <i class="material-icons mr-2">{"check_circle"}</i>
                    { success.clone() }
                </div>
            }
            if let Some(error) = &status.error {
                <div class="mb-4 p-3 bg-red-50 text-red-700 rounded-lg flex items-center">
                    <i class="material-icons mr-2">{"error_outline"}</i>
                    { error.clone() }
                </div>
            }
        </>
    }
}

fn build_title_field(component: &AddArticleModal, link: &Scope<AddArticleModal>) -> Html {
    html! {
        <div>
            <label class={LABEL_CLASS}>{"العنوان"}</label>
            <input
                type="text"
                name="title"
                value={component.form.draft().title.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetTitle(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
                class={INPUT_CLASS}
                required=true
                dir="rtl"
            />
        </div>
    }
}

fn build_content_field(component: &AddArticleModal, link: &Scope<AddArticleModal>) -> Html {
    html! {
        <div>
            <label class={LABEL_CLASS}>{"المحتوى"}</label>
            <textarea
                name="content"
                value={component.form.draft().content.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetContent(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
                class={INPUT_CLASS}
                rows="6"
                required=true
                dir="rtl"
            />
        </div>
    }
}

fn build_featured_image_field(component: &AddArticleModal, link: &Scope<AddArticleModal>) -> Html {
    let form = &component.form;
    let image_required = form.draft().featured_image.is_none() && form.preview().is_none();

    html! {
        <div>
            <label class={LABEL_CLASS}>{"الصورة الرئيسية"}</label>
            <div class="flex flex-col gap-3">
                <label class={DROP_ZONE_CLASS}>
                    <input
                        type="file"
                        name="featuredImage"
                        ref={component.featured_input_ref.clone()}
                        onchange={link.batch_callback(|e: Event| {
                            first_selected_file(&e).map(Msg::FeaturedImageSelected)
                        })}
                        class="hidden"
                        accept="image/*"
                        required={image_required}
                    />
                    <div class="flex flex-col items-center">
                        <i class="material-icons text-gray-500 dark:text-gray-400 mb-2">{"image"}</i>
                        <span class="text-sm text-gray-500 dark:text-gray-400">{"اختر صورة أو اسحبها وأفلتها هنا"}</span>
                    </div>
                </label>

                if let Some(preview) = form.preview() {
                    <div class="relative mt-2 w-full h-32 bg-gray-100 dark:bg-gray-700 rounded-lg overflow-hidden">
                        <img src={preview.to_string()} alt="Preview" class="w-full h-full object-cover" />
                        <button
                            type="button"
                            onclick={link.callback(|_| Msg::RemoveFeaturedImage)}
                            class="absolute top-1 right-1 bg-white dark:bg-gray-800 rounded-full p-1 shadow-md"
                        >
                            <i class="material-icons text-gray-600 dark:text-gray-400" style="font-size:14px;">{"close"}</i>
                        </button>
                    </div>
                }
            </div>
        </div>
    }
}

fn build_media_field(component: &AddArticleModal, link: &Scope<AddArticleModal>) -> Html {
    let media_count = component.form.draft().media.len();

    html! {
        <div>
            <label class={LABEL_CLASS}>{"الوسائط"}</label>
            <label class={DROP_ZONE_CLASS}>
                <input
                    type="file"
                    name="media"
                    ref={component.media_input_ref.clone()}
                    onchange={link.callback(|e: Event| Msg::MediaSelected(selected_files(&e)))}
                    class="hidden"
                    accept="image/*"
                    multiple=true
                />
                <div class="flex flex-col items-center">
                    <i class="material-icons text-gray-500 dark:text-gray-400 mb-2">{"upload"}</i>
                    <span class="text-sm text-gray-500 dark:text-gray-400">{"اختر ملفات متعددة أو اسحبها وأفلتها هنا"}</span>
                    if media_count > 0 {
                        <span class="mt-2 text-xs text-indigo-600 dark:text-indigo-400">
                            { format!("تم اختيار {} ملف", media_count) }
                        </span>
                    }
                </div>
            </label>
        </div>
    }
}

fn build_category_field(component: &AddArticleModal, link: &Scope<AddArticleModal>) -> Html {
    let selected = component.form.draft().category_id.as_deref();

    html! {
        <div>
            <label class={LABEL_CLASS}>{"التصنيفات"}</label>
            <div class="relative">
                <select
                    onchange={link.callback(|e: Event| {
                        Msg::CategorySelected(e.target_unchecked_into::<HtmlSelectElement>().value())
                    })}
                    class={format!("{} appearance-none pr-8", INPUT_CLASS)}
                    required=true
                    dir="rtl"
                >
                    <option value="" disabled=true selected={selected.is_none()}>{"اختر تصنيفًا"}</option>
                    { for component.form.categories().iter().map(|category| category_option(category, selected)) }
                </select>
                <div class="absolute inset-y-0 left-0 flex items-center pl-3 pointer-events-none">
                    <i class="material-icons text-gray-500 dark:text-gray-400">{"expand_more"}</i>
                </div>
            </div>
        </div>
    }
}

fn category_option(category: &Category, selected: Option<&str>) -> Html {
    html! {
        <option
            key={category.id.clone()}
            value={category.id.clone()}
            selected={selected == Some(category.id.as_str())}
        >
            { category.name.clone() }
        </option>
    }
}

fn build_tags_field(component: &AddArticleModal, link: &Scope<AddArticleModal>) -> Html {
    html! {
        <div>
            <label class={LABEL_CLASS}>{"الوسوم"}</label>
            <div class="flex items-center border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 p-2">
                <i class="material-icons text-gray-500 dark:text-gray-400 ml-2">{"sell"}</i>
                <input
                    type="text"
                    name="tags"
                    value={component.form.draft().tags.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetTags(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                    class="flex-1 p-1 bg-transparent border-none focus:ring-0 outline-none text-gray-900 dark:text-white"
                    placeholder="أدخل الوسوم مفصولة بفاصلة"
                    dir="rtl"
                />
            </div>
            <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">{"أدخل الوسوم مفصولة بفاصلة (مثال: سياسة، رياضة، فن)"}</p>
        </div>
    }
}

fn build_buttons(component: &AddArticleModal, props: &AddArticleProps) -> Html {
    let loading = component.form.status().loading;

    html! {
        <div class="flex justify-end gap-3 pt-4">
            <button
                type="button"
                onclick={props.on_close.reform(|_| ())}
                class="px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-300 hover:bg-gray-50 dark:hover:bg-gray-700 transition-colors duration-200"
            >
                {"إلغاء"}
            </button>
            <button
                type="submit"
                disabled={loading}
                class="px-4 py-2 rounded-lg bg-indigo-600 text-white hover:bg-indigo-700 disabled:opacity-50 disabled:cursor-not-allowed transition-colors duration-200"
            >
                { if loading { "جاري الإضافة..." } else { "إضافة" } }
            </button>
        </div>
    }
}
