use serde::Deserialize;

/// Full payload for create and update; the manager form always submits
/// every field.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertPortfolioRequest {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub display_order: i32,
}

impl UpsertPortfolioRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty()
            || self.description.trim().is_empty()
            || self.image_url.trim().is_empty()
            || self.category.trim().is_empty()
        {
            return Err("Title, description, image and category are required");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> UpsertPortfolioRequest {
        serde_json::from_str(
            r#"{
                "title": "Shop rebuild",
                "description": "Headless storefront",
                "image_url": "https://cdn.x/shop.png",
                "category": "web"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn defaults_are_applied() {
        let req = base();
        assert!(req.technologies.is_empty());
        assert!(!req.featured);
        assert_eq!(req.display_order, 0);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn blank_required_field_fails_validation() {
        let mut req = base();
        req.image_url = "   ".into();
        assert!(req.validate().is_err());
    }
}
