//! Line-oriented interactive shell.
//!
//! Owns the per-session state (last prediction + transcript) and threads
//! it between the forecast pipeline and the intent responder. Every
//! interaction is one blocking, synchronous call.

use std::io::{BufRead, Write};

use crate::application::chat::respond;
use crate::application::forecast::ForecastPipeline;
use crate::domain::prices::{PriceSeries, WINDOW};
use crate::domain::transcript::{Role, Session};

/// Parse free-form comma/newline/space separated decimals.
///
/// Exact-count validation is deliberately NOT done here: the shell reports
/// counts as a corrective prompt, the pipeline still defends its own
/// precondition through `PriceSeries`.
pub fn parse_prices(input: &str) -> Result<Vec<f64>, String> {
    let mut prices = Vec::new();
    for token in input.split([',', '\n', ';', ' ', '\t']) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let price: f64 = token
            .parse()
            .map_err(|_| format!("« {token} » n'est pas un nombre valide"))?;
        prices.push(price);
    }
    Ok(prices)
}

pub struct Shell<'a> {
    pipeline: &'a ForecastPipeline,
    session: Session,
}

enum Outcome {
    Reply(String),
    Quit,
}

impl<'a> Shell<'a> {
    pub fn new(pipeline: &'a ForecastPipeline) -> Self {
        Self {
            pipeline,
            session: Session::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run the REPL until EOF or an explicit quit.
    pub fn run(&mut self, reader: impl BufRead, mut writer: impl Write) -> std::io::Result<()> {
        writeln!(writer, "📈 AI-RiskInvest — prédiction boursière et gestion du risque")?;
        writeln!(
            writer,
            "Collez {WINDOW} prix de clôture (« predict 101.2, 101.9, ... ») ou posez une question."
        )?;

        for line in reader.lines() {
            let line = line?;
            match self.handle_line(&line) {
                Outcome::Reply(reply) => {
                    if !reply.is_empty() {
                        writeln!(writer, "{reply}")?;
                    }
                }
                Outcome::Quit => break,
            }
        }
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Outcome {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Outcome::Reply(String::new());
        }

        match trimmed {
            "quit" | "exit" => return Outcome::Quit,
            "history" => return Outcome::Reply(self.render_history()),
            _ => {}
        }

        // "prediction"/"prédit" etc are chat, not commands; only a bare
        // "predict" or "predict <numbers>" reaches the pipeline.
        if let Some(rest) = trimmed.strip_prefix("predict")
            && (rest.is_empty() || rest.starts_with([' ', '\t', ',']))
        {
            return Outcome::Reply(self.handle_predict(rest));
        }
        // A pasted block of numbers is also a prediction request.
        if trimmed.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '.') {
            return Outcome::Reply(self.handle_predict(trimmed));
        }

        Outcome::Reply(self.handle_chat(trimmed))
    }

    fn handle_predict(&mut self, raw: &str) -> String {
        let prices = match parse_prices(raw) {
            Ok(prices) => prices,
            Err(feedback) => return format!("⚠️ {feedback}. Réessayez avec des nombres séparés par des virgules."),
        };

        if prices.len() != WINDOW {
            return format!(
                "⚠️ Il faut exactement {WINDOW} prix de clôture ({} fournis).",
                prices.len()
            );
        }

        let series = match PriceSeries::new(prices) {
            Ok(series) => series,
            Err(err) => return format!("⚠️ {err}"),
        };

        match self.pipeline.predict(&series) {
            Ok(predicted) => {
                self.session.record_prediction(predicted);
                format!("📊 Prix prédit : {predicted:.2}")
            }
            Err(err) => format!("⚠️ Prédiction impossible : {err}"),
        }
    }

    fn handle_chat(&mut self, utterance: &str) -> String {
        self.session.transcript.push_user(utterance);
        let reply = respond(utterance, self.session.last_prediction());
        self.session.transcript.push_assistant(reply.clone());
        reply
    }

    fn render_history(&self) -> String {
        if self.session.transcript.is_empty() {
            return "(conversation vide)".to_string();
        }
        self.session
            .transcript
            .turns()
            .iter()
            .map(|turn| match turn.role {
                Role::User => format!("vous> {}", turn.text),
                Role::Assistant => format!("bot>  {}", turn.text),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
