use super::rules::{INTENT_RULES, default_reply};

/// Map one utterance, plus the session's current prediction, to exactly
/// one reply.
///
/// Matching is substring containment over the lower-cased utterance, rules
/// evaluated in table order, first match wins. Pure and total: the same
/// `(utterance, prediction)` pair always produces the same reply, and the
/// default covers everything down to the empty string. The responder holds
/// no state; transcript bookkeeping belongs to the caller.
pub fn respond(utterance: &str, current_prediction: Option<f64>) -> String {
    let question = utterance.to_lowercase();

    for rule in INTENT_RULES {
        if rule.keywords.iter().any(|word| question.contains(word)) {
            return (rule.reply)(current_prediction);
        }
    }

    default_reply(current_prediction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_matches_any_language() {
        for utterance in ["hello", "Bonjour!", "SALAM", "je te salue... salut"] {
            let reply = respond(utterance, None);
            assert!(reply.contains("chatbot"), "no greeting for {utterance:?}");
        }
    }

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        // "prediction" inside "predictions" still matches.
        let reply = respond("Explique tes PREDICTIONS", Some(42.0));
        assert!(reply.contains("42.0000"));
    }

    #[test]
    fn test_precedence_is_table_order_not_text_order() {
        // "risque" appears first in the text, but the result rule sits
        // earlier in the table and must win.
        let with_both = respond("le risque de cette prediction", Some(7.5));
        let result_only = respond("prediction", Some(7.5));
        assert_eq!(with_both, result_only);
    }

    #[test]
    fn test_fallback_for_empty_and_unknown() {
        let fallback = respond("", None);
        assert_eq!(fallback, respond("xyzzy", None));
        assert!(fallback.contains("pas bien compris"));
    }

    #[test]
    fn test_determinism() {
        let a = respond("comment utiliser l'application?", Some(3.25));
        let b = respond("comment utiliser l'application?", Some(3.25));
        assert_eq!(a, b);
    }
}
