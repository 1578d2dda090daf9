/// The three free-text search fields of one submission. Fields left empty
/// are omitted from the provider query entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub author: String,
    pub title: String,
    pub isbn: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Please enter at least one search field.")]
    Empty,
}

impl SearchQuery {
    /// Build the provider query string: `field:value` tokens for each
    /// populated field, title first, then author, then isbn.
    pub fn build(&self) -> Result<String, QueryError> {
        let mut tokens = Vec::new();
        if let Some(title) = non_empty(&self.title) {
            tokens.push(format!("intitle:{title}"));
        }
        if let Some(author) = non_empty(&self.author) {
            tokens.push(format!("inauthor:{author}"));
        }
        if let Some(isbn) = non_empty(&self.isbn) {
            tokens.push(format!("isbn:{isbn}"));
        }
        if tokens.is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(tokens.join(" "))
    }

    /// Terms the reranker matches against: the title, with the author
    /// appended when one was supplied. `None` when no title term exists,
    /// which disables reranking for the submission.
    pub fn rank_terms(&self) -> Option<String> {
        let title = non_empty(&self.title)?;
        Some(match non_empty(&self.author) {
            Some(author) => format!("{title} {author}"),
            None => title.to_string(),
        })
    }
}

fn non_empty(field: &str) -> Option<&str> {
    let trimmed = field.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
