//! Update function for the add-article modal.
//!
//! Every message is applied to the toolkit-independent `ArticleForm`; this
//! module only adds the browser side effects: spawning the requests, the
//! file read and the success delay, logging, and talking to the parent.

use common::config::SUCCESS_RESET_DELAY_MS;
use common::form::{ActivationToken, PreviewTicket, SuccessAction};
use common::model::article::CreatedArticle;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

use super::api;
use super::helpers::read_preview;
use super::messages::Msg;
use super::state::AddArticleModal;

/// Applies `msg` and returns whether the view must re-render.
pub fn update(
    component: &mut AddArticleModal,
    ctx: &Context<AddArticleModal>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::CategoriesLoaded(token, categories) => {
            let applied = component.form.categories_loaded(token, categories);
            if !applied {
                gloo_console::log!("Dropped categories of a closed form");
            }
            applied
        }
        Msg::CategoriesFailed(token) => component.form.categories_failed(token),
        Msg::SetTitle(title) => {
            component.form.set_title(title);
            true
        }
        Msg::SetContent(content) => {
            component.form.set_content(content);
            true
        }
        Msg::SetTags(tags) => {
            component.form.set_tags(tags);
            true
        }
        Msg::FeaturedImageSelected(file) => {
            let ticket = component.form.select_featured_image(file.clone());
            spawn_preview(ctx, ticket, file);
            true
        }
        Msg::PreviewReady(ticket, data_url) => component.form.apply_preview(ticket, data_url),
        Msg::RemoveFeaturedImage => {
            component.form.remove_featured_image();
            component.clear_file_inputs(false);
            true
        }
        Msg::MediaSelected(files) => {
            component.form.select_media(files);
            true
        }
        Msg::CategorySelected(id) => {
            component.form.select_category(id);
            true
        }
        Msg::Submit => {
            let token = component.form.activation();
            match component.form.begin_submit(token) {
                Ok(upload) => {
                    let config = component.config.clone();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        match api::create_article(&config, upload).await {
                            Ok(article) => link.send_message(Msg::SubmitSucceeded(token, article)),
                            Err(err) => {
                                gloo_console::error!("Error adding article:", err.to_string());
                                link.send_message(Msg::SubmitFailed(token));
                            }
                        }
                    });
                    true
                }
                Err(err) => {
                    gloo_console::warn!("Article not submitted:", err.to_string());
                    err.is_validation()
                }
            }
        }
        Msg::SubmitSucceeded(token, article) => match component.form.submit_succeeded(token) {
            None => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(SUCCESS_RESET_DELAY_MS).await;
                    link.send_message(Msg::SuccessDelayElapsed(token, article));
                });
                true
            }
            Some(action) => {
                notify_parent(ctx, action, article);
                true
            }
        },
        Msg::SubmitFailed(token) => component.form.submit_failed(token),
        Msg::SuccessDelayElapsed(token, article) => {
            let action = component.form.finish_success(token);
            if action == SuccessAction::NotifyAndClose {
                component.clear_file_inputs(true);
            }
            notify_parent(ctx, action, article);
            true
        }
    }
}

/// Loads the categories for the activation identified by `token`.
pub fn spawn_category_fetch(
    component: &AddArticleModal,
    ctx: &Context<AddArticleModal>,
    token: ActivationToken,
) {
    let config = component.config.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        match api::fetch_categories(&config).await {
            Ok(categories) => link.send_message(Msg::CategoriesLoaded(token, categories)),
            Err(err) => {
                gloo_console::error!("Error fetching categories:", err.to_string());
                link.send_message(Msg::CategoriesFailed(token));
            }
        }
    });
}

/// Reads `file` into a data URL and reports it under `ticket`.
pub fn spawn_preview(ctx: &Context<AddArticleModal>, ticket: PreviewTicket, file: File) {
    let link = ctx.link().clone();
    spawn_local(async move {
        match read_preview(file).await {
            Ok(data_url) => link.send_message(Msg::PreviewReady(ticket, data_url)),
            Err(err) => gloo_console::error!("Error reading featured image:", err.to_string()),
        }
    });
}

fn notify_parent(ctx: &Context<AddArticleModal>, action: SuccessAction, article: CreatedArticle) {
    let props = ctx.props();
    props.on_article_added.emit(article);
    if action == SuccessAction::NotifyAndClose {
        props.on_close.emit(());
    }
}
