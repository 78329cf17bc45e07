use std::borrow::Cow;

/// Controls how [`Chain::render_with`](crate::Chain::render_with) joins values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub separator: Cow<'static, str>,
    /// Maximum number of nodes to render. `None` renders until the chain ends.
    pub max_depth: Option<usize>,
}

impl RenderOptions {
    pub const DEFAULT_SEPARATOR: &'static str = "; ";

    pub fn with_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            separator: Cow::Borrowed(Self::DEFAULT_SEPARATOR),
            max_depth: None,
        }
    }
}
