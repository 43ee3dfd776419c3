use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    pub title: String,
    pub description: Option<String>,
    pub link: String,
}

/// Partial edit; absent fields keep their stored value. An explicit JSON
/// `null` is treated the same as absent, so a field cannot be cleared back
/// to null once set.
#[derive(Debug, Default, Deserialize)]
pub struct EditBookmarkRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_title_and_link() {
        assert!(serde_json::from_str::<CreateBookmarkRequest>(r#"{"title": "t"}"#).is_err());
        assert!(serde_json::from_str::<CreateBookmarkRequest>(r#"{"link": "l"}"#).is_err());

        let ok: CreateBookmarkRequest = serde_json::from_str(
            r#"{"title": "Bookmark title", "link": "Bookmarklink.com"}"#,
        )
        .expect("parse");
        assert_eq!(ok.title, "Bookmark title");
        assert_eq!(ok.link, "Bookmarklink.com");
        assert!(ok.description.is_none());
    }

    #[test]
    fn edit_accepts_any_subset_of_fields() {
        let only_description: EditBookmarkRequest =
            serde_json::from_str(r#"{"description": "Bueno bueno bueno"}"#).expect("parse");
        assert!(only_description.title.is_none());
        assert_eq!(
            only_description.description.as_deref(),
            Some("Bueno bueno bueno")
        );

        let empty: EditBookmarkRequest = serde_json::from_str("{}").expect("parse");
        assert!(empty.title.is_none() && empty.description.is_none() && empty.link.is_none());
    }

    #[test]
    fn explicit_null_means_keep() {
        let nulled: EditBookmarkRequest =
            serde_json::from_str(r#"{"description": null}"#).expect("parse");
        assert!(nulled.description.is_none());
    }
}
