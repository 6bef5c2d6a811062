//! Tag to rendering rule lookup for Markdown conversion.

mod rule;

pub use rule::{RenderRule, Separator, TagRule};

use indexmap::IndexMap;
use once_cell::sync::Lazy;

static BUILTIN_RULES: Lazy<Rules> = Lazy::new(Rules::builtin);

/// Table mapping lowercase tag names to rendering rules
#[derive(Debug, Clone)]
pub struct Rules {
    table: IndexMap<String, TagRule>,
}

impl Rules {
    /// Create an empty table; every tag renders transparently
    pub fn empty() -> Self {
        Self {
            table: IndexMap::new(),
        }
    }

    /// Create a table holding the built-in rules
    pub fn new() -> Self {
        Rules::clone(&BUILTIN_RULES)
    }

    fn builtin() -> Self {
        let mut rules = Self::empty();

        for level in 1..=6u8 {
            rules.add(
                &format!("h{level}"),
                TagRule::new(RenderRule::Heading(level), Separator::Block),
            );
        }
        for tag in ["p", "div", "figure", "section", "ul"] {
            rules.add(tag, TagRule::block());
        }
        for tag in ["figcaption", "blockquote"] {
            rules.add(tag, TagRule::new(RenderRule::Quote, Separator::Block));
        }
        rules.add("ol", TagRule::new(RenderRule::OrderedList, Separator::Block));
        rules.add("li", TagRule::new(RenderRule::ListItem, Separator::Line));
        rules.add("b", TagRule::inline(RenderRule::Strong));
        rules.add("strong", TagRule::inline(RenderRule::Strong));
        rules.add("a", TagRule::inline(RenderRule::Link));
        for tag in ["img", "image"] {
            rules.add(tag, TagRule::new(RenderRule::Image, Separator::Block));
        }

        rules
    }

    /// Add or replace the rule for a tag
    pub fn add(&mut self, tag: &str, rule: TagRule) -> &mut Self {
        self.table.insert(tag.to_lowercase(), rule);
        self
    }

    /// Drop the rule for a tag so it renders transparently
    pub fn remove(&mut self, tag: &str) -> &mut Self {
        self.table.shift_remove(&tag.to_lowercase());
        self
    }

    /// Find the rule for a tag, falling back to a transparent container
    pub fn for_tag(&self, tag: &str) -> TagRule {
        self.table.get(tag).copied().unwrap_or_default()
    }

    /// Tags with an explicit rule, in insertion order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_headings() {
        let rules = Rules::new();
        assert_eq!(
            rules.for_tag("h3"),
            TagRule::new(RenderRule::Heading(3), Separator::Block)
        );
    }

    #[test]
    fn test_unknown_tag_is_transparent() {
        let rules = Rules::new();
        assert_eq!(rules.for_tag("span"), TagRule::transparent());
        assert_eq!(rules.for_tag("span").separator.as_str(), "");
    }

    #[test]
    fn test_list_item_separator() {
        let rules = Rules::new();
        assert_eq!(rules.for_tag("li").separator, Separator::Line);
        assert_eq!(rules.for_tag("ol").separator, Separator::Block);
    }

    #[test]
    fn test_add_and_remove() {
        let mut rules = Rules::new();
        rules.add("EM", TagRule::inline(RenderRule::Strong));
        assert_eq!(rules.for_tag("em").render, RenderRule::Strong);

        rules.remove("a");
        assert_eq!(rules.for_tag("a"), TagRule::transparent());
        assert!(!rules.tags().any(|t| t == "a"));
    }

    #[test]
    fn test_builtin_table_is_shared_copy() {
        let mut local = Rules::new();
        local.remove("p");
        assert_eq!(Rules::new().for_tag("p"), TagRule::block());
    }
}
