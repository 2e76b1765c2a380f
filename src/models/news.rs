use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::wire_time;

/// A news article as returned by the backend. Ids are server-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    #[serde(deserialize_with = "wire_time::date")]
    pub date: NaiveDate,
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

/// Create/update payload for `POST /news` and `PUT /news/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: NaiveDate,
    pub published: bool,
}

impl NewsDraft {
    /// Empty draft dated today, published by default.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            date: Utc::now().date_naive(),
            published: true,
        }
    }
}

impl Default for NewsDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&NewsArticle> for NewsDraft {
    fn from(article: &NewsArticle) -> Self {
        Self {
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            content: article.content.clone(),
            date: article.date,
            published: article.published,
        }
    }
}

impl NewsArticle {
    /// Date as shown on the public site, e.g. `01.03.2024`.
    pub fn display_date(&self) -> String {
        self.date.format("%d.%m.%Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_date_accepts_datetime() {
        let json = r#"{
            "id": "a1", "title": "t", "excerpt": "e", "content": "c",
            "date": "2024-05-09T00:00:00"
        }"#;
        let article: NewsArticle = serde_json::from_str(json).unwrap();
        assert_eq!(article.date, NaiveDate::from_ymd_opt(2024, 5, 9).unwrap());
        assert!(article.published);
        assert_eq!(article.display_date(), "09.05.2024");
    }

    #[test]
    fn draft_serializes_bare_date() {
        let draft = NewsDraft {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            ..NewsDraft::new()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["date"], "2024-01-02");
        assert_eq!(json["published"], true);
    }
}
