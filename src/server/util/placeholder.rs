//! Rewriting of author-placed action placeholders into modal markup.
//!
//! A message may contain token pairs such as `[redirect]continue[/redirect]`. Each pair
//! is replaced by an element described by a dot-separated pseudo markup string, e.g.
//! `a.modal-redirect.modal-redirect-text` becomes
//! `<a class='modal-redirect modal-redirect-text'>continue</a>`.

/// Maps an opening placeholder token onto the element that replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderRule {
    /// Tag name followed by the classes, separated by dots.
    pub pseudo_markup: String,
    /// Opening token, e.g. `[redirect]`. The closing token is derived from it.
    pub token: String,
}

impl PlaceholderRule {
    pub fn new(pseudo_markup: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            pseudo_markup: pseudo_markup.into(),
            token: token.into(),
        }
    }

    /// Closing token, formed by inserting `/` after the opening bracket.
    pub fn closing_token(&self) -> String {
        self.token.replacen('[', "[/", 1)
    }

    fn tag_and_classes(&self) -> (&str, String) {
        let mut parts = self.pseudo_markup.split('.');
        let tag = parts.next().unwrap_or_default();
        let classes = parts.collect::<Vec<_>>().join(" ");
        (tag, classes)
    }
}

/// Rewrites every placeholder pair present in `message`.
///
/// Rules whose opening token does not occur in the message are skipped, so a message
/// without placeholders comes back unchanged.
pub fn rewrite_placeholders(message: &str, rules: &[PlaceholderRule]) -> String {
    let mut rewritten = message.to_string();

    for rule in rules {
        if !rewritten.contains(&rule.token) {
            continue;
        }

        let (tag, classes) = rule.tag_and_classes();
        rewritten = rewritten
            .replace(&rule.token, &format!("<{} class='{}'>", tag, classes))
            .replace(&rule.closing_token(), &format!("</{}>", tag));
    }

    rewritten
}
