/// How a fragment of an answer should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Heading,
    Math,
    Bold,
    Code,
    Plain,
}

/// A typed fragment of an answer entry, with its delimiters already stripped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    pub content: &'a str,
}

impl<'a> Segment<'a> {
    pub fn new(kind: SegmentKind, content: &'a str) -> Self {
        Segment { kind, content }
    }

    pub fn heading(content: &'a str) -> Self {
        Self::new(SegmentKind::Heading, content)
    }

    pub fn math(content: &'a str) -> Self {
        Self::new(SegmentKind::Math, content)
    }

    pub fn bold(content: &'a str) -> Self {
        Self::new(SegmentKind::Bold, content)
    }

    pub fn code(content: &'a str) -> Self {
        Self::new(SegmentKind::Code, content)
    }

    pub fn plain(content: &'a str) -> Self {
        Self::new(SegmentKind::Plain, content)
    }
}
