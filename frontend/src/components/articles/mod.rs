pub mod add_article;
