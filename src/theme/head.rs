//! The document head: the stylesheet links the renderer reads its palette from

/// Id of the link carrying the shared base stylesheet
pub const BASE_LINK_ID: &str = "base-theme-link";

/// Id of the link carrying the theme-specific stylesheet
pub const THEME_LINK_ID: &str = "theme-link";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleLink {
    pub id: String,
    pub rel: String,
    pub href: String,
}

/// Ordered list of stylesheet links; later links override earlier ones
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleHead {
    links: Vec<StyleLink>,
}

impl StyleHead {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn links(&self) -> &[StyleLink] {
        &self.links
    }

    pub fn get(&self, id: &str) -> Option<&StyleLink> {
        self.links.iter().find(|link| link.id == id)
    }

    /// Find the stylesheet link `id`, appending an empty one if absent
    pub fn ensure_stylesheet(&mut self, id: &str) -> &mut StyleLink {
        let position = match self.links.iter().position(|link| link.id == id) {
            Some(position) => position,
            None => {
                self.links.push(StyleLink {
                    id: id.to_string(),
                    rel: "stylesheet".to_string(),
                    href: String::new(),
                });
                self.links.len() - 1
            }
        };
        &mut self.links[position]
    }

    /// Href of link `id`, if present
    pub fn href(&self, id: &str) -> Option<&str> {
        self.get(id).map(|link| link.href.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_stylesheet_reuses_existing_link() {
        let mut head = StyleHead::new();
        head.ensure_stylesheet(BASE_LINK_ID).href = "a".to_string();
        head.ensure_stylesheet(BASE_LINK_ID).href = "b".to_string();
        assert_eq!(head.links().len(), 1);
        assert_eq!(head.href(BASE_LINK_ID), Some("b"));
        assert_eq!(head.get(BASE_LINK_ID).map(|l| l.rel.as_str()), Some("stylesheet"));
        assert_eq!(head.href(THEME_LINK_ID), None);
    }
}
