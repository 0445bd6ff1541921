//! Layout-independent description of generated source.

/// A piece of output whose indentation is decided by the [`CodeBuilder`]
/// that writes it.
///
/// [`CodeBuilder`]: super::CodeBuilder
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    Line(String),
    Blank,
    /// `header`, then `body` one level deeper, then `close` if present.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    Indent(Vec<CodeFragment>),
    Sequence(Vec<CodeFragment>),
    /// Lines of a `/** ... */` comment.
    DocBlock(Vec<String>),
    Comment(String),
}

impl CodeFragment {
    pub fn line(text: impl Into<String>) -> Self {
        Self::Line(text.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn indent(body: Vec<CodeFragment>) -> Self {
        Self::Indent(body)
    }

    pub fn sequence(items: Vec<CodeFragment>) -> Self {
        Self::Sequence(items)
    }

    /// A doc block with one entry per line of `text`.
    pub fn doc(text: &str) -> Self {
        Self::DocBlock(text.lines().map(String::from).collect())
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(text.into())
    }
}

/// A declaration that can describe itself as fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        T::to_fragments(self)
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        T::to_fragments(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker(&'static str);

    impl Renderable for Marker {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            vec![CodeFragment::comment(self.0)]
        }
    }

    #[test]
    fn test_doc_keeps_empty_lines() {
        assert_eq!(
            CodeFragment::doc("A product.\n\nSold by weight."),
            CodeFragment::DocBlock(vec![
                "A product.".into(),
                String::new(),
                "Sold by weight.".into(),
            ])
        );
    }

    #[test]
    fn test_references_and_boxes_render_the_same() {
        let marker = Marker("generated");
        let boxed: Box<dyn Renderable> = Box::new(Marker("generated"));
        assert_eq!((&marker).to_fragments(), boxed.to_fragments());
        assert_eq!(
            boxed.to_fragments(),
            vec![CodeFragment::Comment("generated".into())]
        );
    }

    #[test]
    fn test_block_without_close() {
        let block = CodeFragment::block("if (x) {", vec![CodeFragment::blank()], None);
        let CodeFragment::Block { header, body, close } = block else {
            panic!("expected a block");
        };
        assert_eq!(header, "if (x) {");
        assert_eq!(body, vec![CodeFragment::Blank]);
        assert_eq!(close, None);
    }
}
