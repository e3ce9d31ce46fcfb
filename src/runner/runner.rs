use rand::{rngs::StdRng, Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, info};

use crate::templating::{handler::{RuleSet, RuleSetError}, response::{generate, ResponseError}, template::Token};

use super::{config::{Config, ConfigError}, tokenizer::tokenize};

/// The reply that ends a session.
pub const FAREWELL: [&str; 2] = ["good", "bye"];

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error(transparent)]
    RuleSet(#[from] RuleSetError),
    #[error(transparent)]
    Response(#[from] ResponseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Answers one tokenized line: selects the first matching rule and fills in
/// one of its templates.
pub fn respond<R: Rng + ?Sized>(input: &[Token], rules: &RuleSet, rng: &mut R) -> Result<Vec<Token>, ResponseError> {
    let selection = rules.select(input);
    generate(selection.rule, &selection.bindings, rng)
}

pub fn is_farewell(reply: &[Token]) -> bool {
    reply.len() == FAREWELL.len() && reply.iter().zip(FAREWELL).all(|(token, word)| token == word)
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Turn {
    pub reply: Vec<Token>,
    pub finished: bool,
}
impl Turn {
    pub fn text(&self) -> String {
        self.reply.join(" ")
    }
}

pub struct ConversationRunner<R: Rng = StdRng> {
    rules: RuleSet,
    rng: R,
}

impl ConversationRunner<StdRng> {
    /// Bundled rules, entropy-seeded selection.
    pub fn new() -> Result<Self, RunnerError> {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Result<Self, RunnerError> {
        let rules = match &config.rules_path {
            Some(path) => RuleSet::load_from_file(path)?,
            None => {
                let rules = RuleSet::default_rules()?;
                info!(rules = rules.len(), "using bundled rule set");
                rules
            },
        };
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self::with_rng(rules, rng))
    }
}

impl<R: Rng> ConversationRunner<R> {
    pub fn with_rng(rules: RuleSet, rng: R) -> Self {
        ConversationRunner {
            rules: rules,
            rng: rng,
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn respond(&mut self, input: &[Token]) -> Result<Vec<Token>, RunnerError> {
        Ok(respond(input, &self.rules, &mut self.rng)?)
    }

    /// Tokenizes and answers a raw line of user text.
    pub fn run(&mut self, line: &str) -> Result<Turn, RunnerError> {
        let input = tokenize(line);
        debug!(tokens = ?input, "tokenized input");
        let reply = self.respond(&input)?;
        let finished = is_farewell(&reply);
        Ok(Turn {
            reply: reply,
            finished: finished,
        })
    }
}
