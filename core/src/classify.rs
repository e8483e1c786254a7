//! Token classification.
//!
//! Every whitespace-delimited token of the tool output is tested against two
//! patterns, IP range first and ASN second:
//!
//! * **IP range**: four dot-separated digit groups, `/`, exactly two digits,
//!   and nothing else (`192.0.2.0/24`).
//! * **ASN**: five digits at the start of the token. The rest of the token is
//!   unconstrained and kept, so `64512-ghost` is recorded as-is. With
//!   [`ClassifierOptions::strict_asn`] the token must be exactly five digits.
//!
//! Tokens matching neither are dropped, or handed to a callback through
//! [`Classifier::classify_with`]. Digit classes are ASCII only.

use std::sync::LazyLock;

use regex::Regex;

use crate::ordered::OrderedSet;

static IP_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+/[0-9]{2}$").expect("IP range pattern is valid")
});

static ASN_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}").expect("ASN pattern is valid"));

static ASN_STRICT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}$").expect("strict ASN pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    IpRange,
    Asn,
    Unmatched,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifierOptions {
    /// Pass unmatched tokens to a side channel instead of dropping them.
    pub echo_unmatched: bool,
    /// Anchor the ASN pattern at the end of the token.
    pub strict_asn: bool,
}

/// The two deduplicated result lists, each in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    asns: OrderedSet<String>,
    ip_ranges: OrderedSet<String>,
}

impl Classification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn asns(&self) -> &[String] {
        self.asns.as_slice()
    }

    pub fn ip_ranges(&self) -> &[String] {
        self.ip_ranges.as_slice()
    }

    pub fn is_empty(&self) -> bool {
        self.asns.is_empty() && self.ip_ranges.is_empty()
    }

    /// Number of distinct records across both lists.
    pub fn total(&self) -> usize {
        self.asns.len() + self.ip_ranges.len()
    }
}

#[derive(Debug, Clone)]
pub struct Classifier {
    options: ClassifierOptions,
    asn: &'static Regex,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ClassifierOptions::default())
    }
}

impl Classifier {
    pub fn new(options: ClassifierOptions) -> Self {
        let asn: &'static Regex = if options.strict_asn {
            &*ASN_STRICT
        } else {
            &*ASN_PREFIX
        };
        Self { options, asn }
    }

    pub fn options(&self) -> ClassifierOptions {
        self.options
    }

    /// Which pattern `token` satisfies. The IP range test runs first.
    pub fn kind(&self, token: &str) -> TokenKind {
        if IP_RANGE.is_match(token) {
            TokenKind::IpRange
        } else if self.asn.is_match(token) {
            TokenKind::Asn
        } else {
            TokenKind::Unmatched
        }
    }

    /// Adds a single token to `out`.
    ///
    /// Feeding a stream through `record` one token at a time gives the same
    /// result as classifying the whole stream at once.
    pub fn record(&self, out: &mut Classification, token: &str) -> TokenKind {
        let kind = self.kind(token);
        let set = match kind {
            TokenKind::IpRange => &mut out.ip_ranges,
            TokenKind::Asn => &mut out.asns,
            TokenKind::Unmatched => return kind,
        };
        if !set.contains(token) {
            set.insert_if_absent(token.to_owned());
        }
        kind
    }

    /// Classifies `tokens`, silently dropping those that match neither pattern.
    pub fn classify<I, S>(&self, tokens: I) -> Classification
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.classify_with(tokens, |_| {})
    }

    /// Classifies `tokens`, handing every unmatched token to `on_unmatched` as it is seen.
    pub fn classify_with<I, S, F>(&self, tokens: I, mut on_unmatched: F) -> Classification
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&str),
    {
        let mut out = Classification::new();
        for token in tokens {
            let token = token.as_ref();
            if self.record(&mut out, token) == TokenKind::Unmatched {
                on_unmatched(token);
            }
        }
        out
    }
}

/// Classifies with the default (lenient, silent) options.
pub fn classify<I, S>(tokens: I) -> Classification
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Classifier::default().classify(tokens)
}
