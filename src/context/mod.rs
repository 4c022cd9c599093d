use crate::models::chat::{ChatMessage, Role};

/// Keyword patterns that classify a question as a summarization request.
/// Matching is case-insensitive substring search so additional locales can
/// be added without touching the matching logic.
#[derive(Debug, Clone)]
pub struct SummaryKeywords {
    patterns: Vec<String>,
}

impl SummaryKeywords {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| p.into().to_lowercase())
                .collect(),
        }
    }

    pub fn matches(&self, question: &str) -> bool {
        let question = question.to_lowercase();
        self.patterns.iter().any(|p| question.contains(p.as_str()))
    }
}

impl Default for SummaryKeywords {
    fn default() -> Self {
        Self::new([
            "tóm tắt",
            "summary",
            "summarize",
            "give me a summary",
            "short version",
        ])
    }
}

/// Per-session conversation transcript. Owned by a single client session;
/// never shared across sessions. History grows unbounded within a session —
/// any truncation policy belongs to the caller.
#[derive(Debug, Clone)]
pub struct ConversationContext {
    messages: Vec<ChatMessage>,
    summary_keywords: SummaryKeywords,
}

impl ConversationContext {
    /// Every conversation starts with exactly one system message.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self::with_keywords(system_prompt, SummaryKeywords::default())
    }

    pub fn with_keywords(system_prompt: impl Into<String>, keywords: SummaryKeywords) -> Self {
        Self {
            messages: vec![ChatMessage::system(system_prompt)],
            summary_keywords: keywords,
        }
    }

    pub fn append(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(ChatMessage::new(role, content));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Renders the prompt for the next upstream call. `new_question` is a
    /// parameter, not yet part of history: the caller appends the user turn
    /// after rendering (and the assistant turn once the reply arrives), so
    /// the question never appears twice in the transcript.
    ///
    /// System messages stay in history but are excluded from the rendered
    /// text. Does not mutate history.
    pub fn render(&self, new_question: &str, current_url: &str) -> String {
        let mut prompt = String::new();
        for msg in &self.messages {
            if msg.role == Role::System {
                continue;
            }
            prompt.push_str(&format!("{}: {}\n", msg.role, msg.content));
        }
        prompt.push_str(&format!("User: {}", new_question));

        if !current_url.is_empty() && self.summary_keywords.matches(new_question) {
            prompt.push_str(&format!(
                "Assistant: Please summarize the main content of this website: {}",
                current_url
            ));
        }

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYSTEM: &str = "You are a helpful assistant.";

    #[test]
    fn empty_transcript_renders_question_only() {
        let ctx = ConversationContext::new(SYSTEM);
        assert_eq!(ctx.render("hello", ""), "User: hello");
    }

    #[test]
    fn summary_question_with_url_adds_directive() {
        let ctx = ConversationContext::new(SYSTEM);
        let out = ctx.render("Can you summarize this?", "https://example.com/post");
        assert!(out.contains(
            "Please summarize the main content of this website: https://example.com/post"
        ));
    }

    #[test]
    fn summary_question_without_url_has_no_directive() {
        let ctx = ConversationContext::new(SYSTEM);
        let out = ctx.render("give me a summary", "");
        assert!(!out.contains("Please summarize the main content"));
    }

    #[test]
    fn non_summary_question_never_gets_directive() {
        let ctx = ConversationContext::new(SYSTEM);
        let out = ctx.render("What time is it?", "https://example.com");
        assert!(!out.contains("Please summarize the main content"));
    }

    #[test]
    fn keyword_matching_is_case_insensitive_across_locales() {
        let keywords = SummaryKeywords::default();
        assert!(keywords.matches("SUMMARIZE this please"));
        assert!(keywords.matches("Tóm tắt trang này giúp tôi"));
        assert!(keywords.matches("just the short version"));
        assert!(!keywords.matches("what is this page about?"));
    }

    #[test]
    fn append_is_monotonic_and_fifo() {
        let mut ctx = ConversationContext::new(SYSTEM);
        assert_eq!(ctx.len(), 1);
        ctx.append(Role::User, "first");
        assert_eq!(ctx.len(), 2);
        ctx.append(Role::Assistant, "second");
        ctx.append(Role::User, "third");
        assert_eq!(ctx.len(), 4);

        let contents: Vec<&str> = ctx.messages()[1..]
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn duplicate_consecutive_roles_are_permitted() {
        let mut ctx = ConversationContext::new(SYSTEM);
        ctx.append(Role::User, "one");
        ctx.append(Role::User, "two");
        assert_eq!(ctx.len(), 3);
    }

    #[test]
    fn system_message_excluded_from_transcript_but_kept_in_history() {
        let mut ctx = ConversationContext::new(SYSTEM);
        ctx.append(Role::User, "hi");
        ctx.append(Role::Assistant, "hello!");
        let out = ctx.render("how are you?", "");
        assert_eq!(out, "User: hi\nAssistant: hello!\nUser: how are you?");
        assert_eq!(ctx.messages()[0].role, Role::System);
    }

    #[test]
    fn fresh_session_question_about_page_renders_bare() {
        // Client flow: create the session, ask without a URL loaded.
        let ctx = ConversationContext::new(SYSTEM);
        let out = ctx.render("What is this page about?", "");
        assert_eq!(out, "User: What is this page about?");
    }
}
