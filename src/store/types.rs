/// A titled text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    title: String,
    content: String,
}

impl Document {
    /// Create a document. Title validation is the store's job.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// The seeded cover letter every session starts with.
    pub fn sample() -> Self {
        Self::new(SAMPLE_TITLE, SAMPLE_CONTENT)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub(super) fn set_content(&mut self, content: String) {
        self.content = content;
    }
}

pub const SAMPLE_TITLE: &str = "Sample Mail Template";

pub const SAMPLE_CONTENT: &str = "
Dear [Hiring Manager's Name],

I hope this message finds you well.

I am writing to express my interest in the AI/ML Engineer position at [Company Name], as advertised on [Job Board/Company Website]. With a strong background in developing end-to-end AI solutions, including LLM-powered assistants and cloud-based analytics dashboards, I am eager to contribute to your team's success.

Please find my resume and portfolio attached for your review. I look forward to the opportunity to discuss how my skills align with your company's needs.

Thank you for considering my application.
";
