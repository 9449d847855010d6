/// The structured reply of one model invocation: the ordered text parts of
/// the first candidate. The pipeline's parser stage reduces this to a plain
/// string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelOutput {
    parts: Vec<String>,
}

impl ModelOutput {
    pub fn new(parts: Vec<String>) -> Self {
        Self { parts }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![text.into()],
        }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
