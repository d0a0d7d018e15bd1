/// One entry of the intent table: trigger keywords plus a reply producer.
///
/// The reply producer receives the session's current prediction so the
/// result-explanation rule can embed it; every other rule ignores it.
pub struct IntentRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub reply: fn(Option<f64>) -> String,
}

/// Ordered intent table, first match wins.
/// The order IS the precedence contract: ties between rules are broken by
/// position here, never by keyword specificity. Reordering entries is a
/// behavioral change for every utterance matching more than one rule.
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        name: "greeting",
        keywords: &["hello", "hi", "salut", "bonjour", "salam"],
        reply: greeting,
    },
    IntentRule {
        name: "app-identity",
        keywords: &["quoi", "what", "application"],
        reply: app_identity,
    },
    IntentRule {
        name: "usage-instructions",
        keywords: &["comment", "utiliser", "how"],
        reply: usage_instructions,
    },
    IntentRule {
        name: "result-explanation",
        keywords: &["prediction", "prédit", "résultat"],
        reply: result_explanation,
    },
    IntentRule {
        name: "risk-disclaimer",
        keywords: &["risque", "risk"],
        reply: risk_disclaimer,
    },
    IntentRule {
        name: "model-explanation",
        keywords: &["modèle", "model", "machine learning"],
        reply: model_explanation,
    },
    IntentRule {
        name: "gratitude",
        keywords: &["merci", "thanks", "choukran"],
        reply: gratitude,
    },
];

fn greeting(_prediction: Option<f64>) -> String {
    "Bonjour 👋 Je suis le chatbot AI-RiskInvest 🤖.\n\
     Je peux vous aider à comprendre l'application et les prédictions."
        .to_string()
}

fn app_identity(_prediction: Option<f64>) -> String {
    "AI-RiskInvest est une application de prédiction boursière \
     basée sur le Machine Learning et la gestion du risque."
        .to_string()
}

fn usage_instructions(_prediction: Option<f64>) -> String {
    "Entrez les 60 derniers prix de clôture \
     puis lancez la commande « predict »."
        .to_string()
}

fn result_explanation(prediction: Option<f64>) -> String {
    match prediction {
        // 4 decimals is the documented display precision for forecasts.
        Some(price) => format!(
            "Le prix prédit actuel est {price:.4}. La prédiction est une \
             estimation du prochain prix basée sur les données historiques."
        ),
        None => "Aucune prédiction n'a encore été calculée. \
                 Lancez d'abord une prédiction avec vos derniers prix de clôture."
            .to_string(),
    }
}

fn risk_disclaimer(_prediction: Option<f64>) -> String {
    "Le risque représente l'incertitude du marché. \
     Cette application aide à mieux l'anticiper, \
     mais une prédiction n'est jamais une garantie."
        .to_string()
}

fn model_explanation(_prediction: Option<f64>) -> String {
    "Le modèle est un régresseur pré-entraîné sur des fenêtres de 60 prix \
     normalisés; il n'est jamais réentraîné par cette application."
        .to_string()
}

fn gratitude(_prediction: Option<f64>) -> String {
    "Avec plaisir 😊 N'hésitez pas à poser d'autres questions.".to_string()
}

/// Always matches; placed conceptually last. `no-match` is the documented
/// default behavior, not an error state.
pub fn default_reply(_prediction: Option<f64>) -> String {
    "Je n'ai pas bien compris 🤖.\n\
     Essayez par exemple : hello, comment utiliser, prédiction, risque."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_has_keywords() {
        for rule in INTENT_RULES {
            assert!(!rule.keywords.is_empty(), "rule {} has no keywords", rule.name);
            for keyword in rule.keywords {
                assert_eq!(
                    **keyword,
                    keyword.to_lowercase(),
                    "keyword {keyword} of rule {} must be lower-case",
                    rule.name
                );
            }
        }
    }

    #[test]
    fn test_result_rule_never_fabricates_a_number() {
        let reply = result_explanation(None);
        assert!(!reply.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_result_rule_rounds_to_four_decimals() {
        let reply = result_explanation(Some(123.4567));
        assert!(reply.contains("123.4567"));

        let reply = result_explanation(Some(100.0));
        assert!(reply.contains("100.0000"));
    }
}
