//! Rendering rule types for Markdown conversion.

/// What a tag turns into when rendered as Markdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderRule {
    /// `#`×level prefix
    Heading(u8),
    /// `> ` on the first line and on every following line of the content
    Quote,
    /// Children are numbered from 1
    OrderedList,
    /// `- ` or `N. ` depending on the enclosing list
    ListItem,
    /// ` **content** `
    Strong,
    /// ` [content](href) `
    Link,
    /// `![alt](src)`, children ignored
    Image,
    /// Children rendered in place
    Transparent,
}

/// What follows an element when it has a next sibling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    #[default]
    None,
    /// Single newline, between list items
    Line,
    /// Blank line, between blocks
    Block,
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::None => "",
            Separator::Line => "\n",
            Separator::Block => "\n\n",
        }
    }
}

/// A table entry: how a tag renders and how it is separated from its next sibling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagRule {
    pub render: RenderRule,
    pub separator: Separator,
}

impl TagRule {
    pub const fn new(render: RenderRule, separator: Separator) -> Self {
        Self { render, separator }
    }

    /// Rule used for tags without an entry
    pub const fn transparent() -> Self {
        Self::new(RenderRule::Transparent, Separator::None)
    }

    /// Transparent container separated like a block
    pub const fn block() -> Self {
        Self::new(RenderRule::Transparent, Separator::Block)
    }

    /// Inline rule: never adds a separator of its own
    pub const fn inline(render: RenderRule) -> Self {
        Self::new(render, Separator::None)
    }
}

impl Default for TagRule {
    fn default() -> Self {
        Self::transparent()
    }
}
