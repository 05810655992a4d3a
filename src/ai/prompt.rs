//! Prompt construction for AI translation requests.

use crate::core::record::LocalizationRecord;

/// Human-readable language names for common locale codes, used to phrase
/// prompts ("vi (Vietnamese)" reads better to the model than a bare code).
/// Unknown codes fall back to the code itself.
pub fn locale_display_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "vi" => "Vietnamese",
        "en" => "English",
        "kr" => "Korean",
        "jp" => "Japanese",
        "fr" => "French",
        "de" => "German",
        "it" => "Italian",
        "es" => "Spanish",
        "pt" => "Portuguese",
        "ru" => "Russian",
        "tr" => "Turkish",
        "ar" => "Arabic",
        "cn" => "Chinese",
        "tw" => "Taiwanese",
        "th" => "Thai",
        "id" => "Indonesian",
        "ms" => "Malay",
        "fil" => "Filipino",
        "pl" => "Polish",
        "nl" => "Dutch",
        "hu" => "Hungarian",
        "el" => "Greek",
        "bg" => "Bulgarian",
        "cz" => "Czech",
        "sk" => "Slovak",
        "ro" => "Romanian",
        "hr" => "Croatian",
        "sr" => "Serbian",
        "sl" => "Slovenian",
        "lv" => "Latvian",
        "lt" => "Lithuanian",
        "ee" => "Estonian",
        "fi" => "Finnish",
        "se" => "Swedish",
        "no" => "Norwegian",
        "da" => "Danish",
        "is" => "Icelandic",
        _ => return None,
    };
    Some(name)
}

fn describe_locale(code: &str) -> String {
    match locale_display_name(code) {
        Some(name) => format!("{} ({})", code, name),
        None => code.to_string(),
    }
}

/// Build the user prompt for one record: the key, its existing
/// translations, and the locales still missing. The response contract
/// (JSON object only) is restated at the end so a model that skimmed the
/// system prompt still answers parseably.
pub fn user_prompt(record: &LocalizationRecord) -> String {
    let translated: Vec<String> = record
        .values
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(locale, value)| format!("{}: \"{}\"", locale, value))
        .collect();

    let missing = record.untranslated_locales();
    let missing_described: Vec<String> = missing.iter().map(|code| describe_locale(code)).collect();

    let example_first = missing.first().copied().unwrap_or("locale");
    let example_second = missing.get(1).copied().unwrap_or("locale");

    format!(
        "The localization key is: \"{key}\"\n\n\
         Existing translations:\n{existing}\n\n\
         Please provide translations for: {missing}\n\n\
         Return only a JSON object with the missing translations in this format:\n\
         {{\"{first}\": \"translation\", \"{second}\": \"translation\"}}",
        key = record.key,
        existing = translated.join("\n"),
        missing = missing_described.join(", "),
        first = example_first,
        second = example_second,
    )
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_user_prompt_lists_existing_and_missing() {
        let mut values = BTreeMap::new();
        values.insert("en".to_string(), "Sign out".to_string());
        values.insert("vi".to_string(), String::new());
        values.insert("fr".to_string(), String::new());
        let record = LocalizationRecord {
            key: "nav.signOut".to_string(),
            values,
        };

        let prompt = user_prompt(&record);
        assert!(prompt.contains("\"nav.signOut\""));
        assert!(prompt.contains("en: \"Sign out\""));
        assert!(prompt.contains("fr (French), vi (Vietnamese)"));
        assert!(prompt.contains("{\"fr\": \"translation\", \"vi\": \"translation\"}"));
    }

    #[test]
    fn test_unknown_locale_falls_back_to_code() {
        assert!(locale_display_name("xx").is_none());
        assert_eq!(describe_locale("xx"), "xx");
        assert_eq!(describe_locale("vi"), "vi (Vietnamese)");
    }
}
