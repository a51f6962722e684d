use serde::{Deserialize, Serialize};

/// Markup style used for each rendered record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderStyle {
    /// `Name:` / `Diet:` / `Location:` / `Type:` lines, no markup.
    PlainText,
    /// Unstyled `<li>` with `<br/>`-separated lines.
    SimpleListItem,
    /// `<li class="cards__item">` with a title block and a text block.
    #[default]
    CardListItem,
}

impl RenderStyle {
    /// All styles, in the order they are offered to users.
    pub const ALL: [RenderStyle; 3] = [
        RenderStyle::CardListItem,
        RenderStyle::SimpleListItem,
        RenderStyle::PlainText,
    ];

    /// Resolve a style by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "plain-text" => Some(Self::PlainText),
            "simple-list-item" => Some(Self::SimpleListItem),
            "card-list-item" => Some(Self::CardListItem),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "plain-text",
            Self::SimpleListItem => "simple-list-item",
            Self::CardListItem => "card-list-item",
        }
    }
}

impl std::fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_valid_styles() {
        for style in RenderStyle::ALL {
            assert_eq!(RenderStyle::from_name(style.as_str()), Some(style));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert!(RenderStyle::from_name("cards").is_none());
        assert!(RenderStyle::from_name("").is_none());
    }

    #[test]
    fn test_default_is_card() {
        assert_eq!(RenderStyle::default(), RenderStyle::CardListItem);
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&RenderStyle::SimpleListItem).unwrap();
        assert_eq!(json, "\"simple-list-item\"");
        let parsed: RenderStyle = serde_json::from_str("\"plain-text\"").unwrap();
        assert_eq!(parsed, RenderStyle::PlainText);
    }
}
