use common::model::article::CreatedArticle;
use yew::{html, Component, Context, Html};

use crate::components::articles::add_article::AddArticleModal;

pub enum Msg {
    OpenAddArticle,
    CloseAddArticle,
    ArticleAdded(CreatedArticle),
}

/// Journalist dashboard: lists the articles added in this session and owns
/// the visibility of the add-article modal.
pub struct App {
    add_article_open: bool,
    articles: Vec<CreatedArticle>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            add_article_open: false,
            articles: Vec::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OpenAddArticle => self.add_article_open = true,
            Msg::CloseAddArticle => self.add_article_open = false,
            Msg::ArticleAdded(article) => self.articles.insert(0, article),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="max-w-4xl mx-auto p-6" dir="rtl">
                <div class="flex justify-between items-center mb-6">
                    <h1 class="text-3xl font-bold text-gray-800 dark:text-white">{"مقالاتي"}</h1>
                    <button
                        class="px-4 py-2 rounded-lg bg-indigo-600 text-white hover:bg-indigo-700"
                        onclick={link.callback(|_| Msg::OpenAddArticle)}
                    >
                        {"إضافة مقال"}
                    </button>
                </div>
                <ul class="space-y-2">
                    { for self.articles.iter().map(article_row) }
                </ul>
                <AddArticleModal
                    is_open={self.add_article_open}
                    on_close={link.callback(|_: ()| Msg::CloseAddArticle)}
                    on_article_added={link.callback(Msg::ArticleAdded)}
                />
            </div>
        }
    }
}

fn article_row(article: &CreatedArticle) -> Html {
    let title = article
        .get("title")
        .and_then(|title| title.as_str())
        .unwrap_or("بدون عنوان")
        .to_string();

    html! {
        <li class="p-3 bg-white dark:bg-gray-800 rounded-lg shadow text-gray-900 dark:text-white">
            { title }
        </li>
    }
}
