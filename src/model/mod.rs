use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Model identity advertised by `/v1/models` and used as the default
/// for requests that omit a `model` field.
pub const MODEL_ID: &str = "jan-nano-4b-q8";
pub const MODEL_OWNER: &str = "jan-hq";

const TEMPLATE_COUNT: usize = 3;

fn render_reply(template: usize, last_message: &str) -> String {
    match template {
        0 => format!(
            "こんにちは！{}についてお答えします。Jan Nano 4B Q8モデルが応答しています。",
            last_message
        ),
        1 => format!(
            "ご質問「{}」を承りました。詳細な回答をお作りいたします。",
            last_message
        ),
        _ => format!(
            "{}について考察してみます。このモデルは日本語に対応しています。",
            last_message
        ),
    }
}

/// Stands in for real inference: picks one of a small set of canned reply
/// templates and interpolates the caller's last message into it.
pub struct ReplyGenerator {
    rng: Mutex<StdRng>,
}

impl ReplyGenerator {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Fixed-seed generator, for deterministic reply selection in tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn generate(&self, last_message: &str) -> String {
        let template = {
            // A poisoned lock still holds a usable generator
            let mut rng = match self.rng.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            rng.gen_range(0..TEMPLATE_COUNT)
        };
        render_reply(template, last_message)
    }
}

/// Whitespace-split word count, the mock's stand-in for tokenizer counts.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn same_seed_yields_same_replies() {
        let a = ReplyGenerator::seeded(42);
        let b = ReplyGenerator::seeded(42);
        for _ in 0..16 {
            assert_eq!(a.generate("テスト"), b.generate("テスト"));
        }
    }

    #[test]
    fn reply_contains_last_message() {
        let replies = ReplyGenerator::seeded(1);
        for _ in 0..16 {
            assert!(replies.generate("量子計算の課題").contains("量子計算の課題"));
        }
    }

    #[test]
    fn all_templates_are_reachable() {
        let replies = ReplyGenerator::seeded(7);
        let mut seen = HashSet::new();
        for _ in 0..100 {
            seen.insert(replies.generate("x"));
        }
        assert_eq!(seen.len(), TEMPLATE_COUNT);
    }

    #[test]
    fn word_count_splits_on_whitespace() {
        assert_eq!(word_count("Hello"), 1);
        assert_eq!(word_count("Hello  there\tworld"), 3);
        assert_eq!(word_count(""), 0);
        // Japanese text carries no spaces, so it counts as a single word
        assert_eq!(word_count("こんにちは"), 1);
    }
}
