use crate::completion::ChatPrompt;

/// Build the instruction/content pair for translating `text` into
/// `language`.
///
/// The cultural-context score selects how much localization nuance the
/// instruction asks for; the user message carries the source text
/// unmodified. Pure and deterministic.
pub fn build_prompt(text: &str, language: &str, cultural_context: f64) -> ChatPrompt {
    let cultural_instruction = if cultural_context > 0.7 {
        "Provide a direct, nuanced translation with a strong emphasis on cultural context to enhance understanding. Use modern, idiomatic expressions and phrasing suitable for both formal and informal contexts."
    } else if cultural_context > 0.3 {
        "Provide a direct translation, integrating relevant cultural context where necessary to clarify the meaning. Ensure modern clarity while maintaining formal correctness."
    } else {
        "Provide a translation, prioritizing cultural context to convey deeper nuances and avoid misinterpretations."
    };

    let system = format!(
        "You are a highly skilled {language} translator. Your task is to translate the provided text into {language}, accurately preserving meaning and tone without any additional context or explanations. Your translation should focus on fluency, accuracy, and appropriateness.\n\
        Rules to follow:\n\
        Cultural context: {cultural_instruction}\n\
        1. Preserve the original meaning and tone without grammatical errors.\n\
        2. Use formal language unless the source text is more informal or colloquial.\n\
        3. Ensure technical terms are translated accurately. If no specific term exists in {language}, retain the English term as-is.\n\
        4. Do not add explanations, notes, or emojis—focus solely on translation.\n\
        5. Do not use any markdown stylings or formatting. Simply provide the clean, accurate translation.\n\
        6. If the proper script for the {language} is not available, give it in the script of the nearby most spoken languages script.\n\
        Ensure that all cultural subtleties and linguistic variations in {language} are considered, especially in terms of local expressions or idioms that could enhance the quality of the translation.\n"
    );

    ChatPrompt {
        system,
        user: format!("provided text: {text}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_context_selects_nuanced_tier() {
        let prompt = build_prompt("hello", "Hindi", 0.8);
        assert!(prompt.system.contains("strong emphasis on cultural context"));
    }

    #[test]
    fn mid_context_selects_direct_tier() {
        let prompt = build_prompt("hello", "Hindi", 0.5);
        assert!(prompt
            .system
            .contains("integrating relevant cultural context"));
    }

    #[test]
    fn low_context_selects_nuance_priority_tier() {
        let prompt = build_prompt("hello", "Hindi", 0.1);
        assert!(prompt
            .system
            .contains("prioritizing cultural context to convey deeper nuances"));
    }

    #[test]
    fn tier_thresholds_are_exclusive_at_boundaries() {
        // 0.7 is not "> 0.7", 0.3 is not "> 0.3"
        let at_upper = build_prompt("x", "Tamil", 0.7);
        assert!(at_upper
            .system
            .contains("integrating relevant cultural context"));
        let at_lower = build_prompt("x", "Tamil", 0.3);
        assert!(at_lower
            .system
            .contains("prioritizing cultural context to convey deeper nuances"));
    }

    #[test]
    fn system_instruction_embeds_fixed_rules() {
        let prompt = build_prompt("hello", "Bodo", 0.5);
        assert!(prompt.system.contains("highly skilled Bodo translator"));
        assert!(prompt.system.contains("Use formal language"));
        assert!(prompt.system.contains("retain the English term as-is"));
        assert!(prompt.system.contains("Do not use any markdown"));
        assert!(prompt
            .system
            .contains("script of the nearby most spoken languages script"));
    }

    #[test]
    fn user_message_carries_source_text_verbatim() {
        let text = "Stay indoors  due to flooding\nSecond line";
        let prompt = build_prompt(text, "Tamil", 0.5);
        assert_eq!(prompt.user, format!("provided text: {text}"));
    }

    #[test]
    fn builder_is_deterministic() {
        let a = build_prompt("hello", "Marathi", 0.42);
        let b = build_prompt("hello", "Marathi", 0.42);
        assert_eq!(a, b);
    }
}
