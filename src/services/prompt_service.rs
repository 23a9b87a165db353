//! Prompt building service
//!
//! Builds the chat messages sent for a journal entry. The system prompt fixes
//! the two-section reply format that `response_extractor` relies on.

use crate::llm::ChatMessage;

/// System prompt
const SYSTEM_PROMPT: &str = concat!(
    "You are a professional expert in psychology and physical health.\n\n",
    "Given a personal journal entry, respond in exactly two sections, clearly labeled like this:\n\n",
    "Summary:\n",
    "[Write exactly two sentences summarizing the user's emotional and physical state. ",
    "Be concise, professional, and specific. START your summary with 1-2 relevant emojis ",
    "that represent the dominant emotion or mood (e.g., 😊 for happiness, 😔 for sadness, ",
    "😰 for anxiety, 😌 for calm, 💪 for strength, 🌟 for achievement, 😴 for tiredness, etc.). ",
    "The emojis should feel natural and supportive.]\n\n",
    "Recommendation:\n",
    "[Write 2\u{2013}4 sentences with a practical suggestion to improve wellbeing. If both mental ",
    "and physical aspects are relevant, address both. Be clear and empathetic, but do not ",
    "use greetings or markdown formatting.]\n\n",
    "Important: Only respond using this format. Do not add any extra text, markdown, or ",
    "closing phrases. Speak directly to the user using 'you'\u{2014}do not refer to them as ",
    "'the user' or in the third person."
);

/// Prompt service
pub struct PromptService;

impl PromptService {
    pub fn new() -> Self {
        Self
    }

    /// System instruction followed by the entry, verbatim
    pub fn build_analysis_messages(&self, entry: &str) -> Vec<ChatMessage> {
        vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(entry)]
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}
