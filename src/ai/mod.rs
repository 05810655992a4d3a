//! AI-assisted translation.
//!
//! - [`prompt`]: system/user prompt construction
//! - [`translator`]: chat-completion client, single and batch suggestion

pub mod prompt;
pub mod translator;

pub use prompt::{locale_display_name, user_prompt};
pub use translator::{BatchOutcome, Translator};

/// Default system prompt for translation suggestions. Configurable via
/// `.lokalrc.json` (`ai.systemPrompt`).
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are a developer experienced in multilingual systems and app localization.
I will provide a localization key (in dot-separated camel case) and a translation in a source language.
I will also provide a list of missing locales (2-character locale codes).

Your task is to translate the given text into the specified missing locales while ensuring:
- The translated text maintains a similar length to the source translation.
- The translation aligns with the key's significant meaning.
- The tone and context remain appropriate for app localization.
- Try to use the meaning of the **last word** in the localization key to guide the translation.

Respond **only** with a JSON object where the keys are the locale codes and the values are the translations.
Do not include explanations, comments, or any extra characters.";
