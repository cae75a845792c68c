//! HTML fragments generated from a [`Structure`].
//!
//! Both renderers are pure: they never modify the structure and produce the
//! same bytes for the same input, which keeps repeated runs byte-identical.

use crate::models::{sort_by_date_desc, Article, Structure};
use crate::utils::strip_article_extension;
use itertools::Itertools;

/// Distinct language codes across all groups, ascending.
pub fn existing_languages(structure: &Structure) -> Vec<String> {
    structure
        .groups()
        .map(|g| g.language_code.clone())
        .unique()
        .sorted()
        .collect()
}

/// Language showcase block, or an empty string when there are no languages.
pub fn render_language_showcase(languages: &[String]) -> String {
    if languages.is_empty() {
        return String::new();
    }

    let spans = languages
        .iter()
        .map(|lang| format!(r#"<span class="language">{}</span>"#, lang))
        .join("\n                ");

    format!(
        "\n            <div class=\"language-showcase\">\n                {}\n            </div>",
        spans
    )
}

/// One `<li>` per article: groups in key order, articles newest first.
///
/// Link targets are the article paths with the article extension removed.
pub fn render_news_list(structure: &Structure, extension: &str) -> String {
    let mut items = Vec::with_capacity(structure.article_count());

    for (_, group) in structure.iter() {
        let language_tag = group.language_tag();
        let mut articles: Vec<Article> = group.articles.clone();
        sort_by_date_desc(&mut articles);

        for article in &articles {
            items.push(render_news_item(article, &language_tag, extension));
        }
    }

    items.join("\n")
}

fn render_news_item(article: &Article, language_tag: &str, extension: &str) -> String {
    let href = strip_article_extension(&article.filepath, extension);
    format!(
        "\n            <li class=\"news-item\">\
         \n                <div class=\"news-header\">\
         \n                    <span class=\"news-date\">{}</span>\
         \n                    <span class=\"language-tag\">{}</span>\
         \n                    <a href=\"{}\" class=\"news-title\">{}</a>\
         \n                </div>\
         \n            </li>",
        article.date, language_tag, href, article.title
    )
}
