use crate::api::{ApiClient, PUBLIC_NEWS_LIMIT};
use crate::models::NewsArticle;

/// Articles shown before the visitor expands the list.
pub const NEWS_PREVIEW_COUNT: usize = 6;

/// The news section on the public page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsFeed {
    pub articles: Vec<NewsArticle>,
    pub expanded: bool,
    pub selected: Option<String>,
}

impl NewsFeed {
    /// Loads published news. A failed request just means an empty section.
    pub async fn fetch(api: &ApiClient) -> Self {
        let articles = match api.list_news(PUBLIC_NEWS_LIMIT).await {
            Ok(articles) => articles,
            Err(e) => {
                log::warn!("news unavailable: {e}");
                Vec::new()
            }
        };

        Self {
            articles,
            ..Self::default()
        }
    }

    pub fn visible(&self) -> &[NewsArticle] {
        if self.expanded {
            &self.articles
        } else {
            &self.articles[..self.articles.len().min(NEWS_PREVIEW_COUNT)]
        }
    }

    pub fn has_more(&self) -> bool {
        self.articles.len() > NEWS_PREVIEW_COUNT
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id.map(str::to_string);
    }

    pub fn selected_article(&self) -> Option<&NewsArticle> {
        let id = self.selected.as_deref()?;
        self.articles.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn article(n: usize) -> NewsArticle {
        NewsArticle {
            id: format!("n{n}"),
            title: format!("Title {n}"),
            excerpt: String::new(),
            content: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            published: true,
        }
    }

    #[test]
    fn preview_shows_six() {
        let mut feed = NewsFeed {
            articles: (0..9).map(article).collect(),
            ..Default::default()
        };
        assert!(feed.has_more());
        assert_eq!(feed.visible().len(), 6);

        feed.toggle_expanded();
        assert_eq!(feed.visible().len(), 9);
    }

    #[test]
    fn short_list_has_no_more() {
        let feed = NewsFeed {
            articles: (0..3).map(article).collect(),
            ..Default::default()
        };
        assert!(!feed.has_more());
        assert_eq!(feed.visible().len(), 3);
    }

    #[test]
    fn selection_resolves_by_id() {
        let mut feed = NewsFeed {
            articles: (0..3).map(article).collect(),
            ..Default::default()
        };
        feed.select(Some("n2"));
        assert_eq!(feed.selected_article().map(|a| a.title.as_str()), Some("Title 2"));

        feed.select(Some("missing"));
        assert!(feed.selected_article().is_none());
    }
}
