//! # ASN Discovery Service
//!
//! Implements the "ASNs for these organizations" use case.
//!
//! The service queries a [`TokenSource`] once per target, accumulates every
//! token in target order and classifies the whole stream in one pass.

use recon_common::error::ReconError;
use recon_common::target::Target;
use recon_common::{info, success};
use tracing::debug;

use crate::classify::{Classification, Classifier};
use crate::source::{self, TokenSource};

/// Application service for ASN and IP range discovery.
///
/// Orchestrates the run by:
/// 1. delegating token collection to the [`TokenSource`] trait.
/// 2. classifying the accumulated tokens with a [`Classifier`].
pub struct AsnService {
    source: Box<dyn TokenSource>,
    classifier: Classifier,
}

impl AsnService {
    pub fn new(source: Box<dyn TokenSource>, classifier: Classifier) -> Self {
        Self { source, classifier }
    }

    /// Gathers and classifies without progress reporting.
    ///
    /// Unmatched tokens go to `on_unmatched` only when echoing is enabled.
    pub async fn run<U>(
        &self,
        targets: &[Target],
        on_unmatched: U,
    ) -> Result<Classification, ReconError>
    where
        U: FnMut(&str),
    {
        self.run_with_progress(targets, |_, _| {}, on_unmatched).await
    }

    /// Executes a full gather-and-classify cycle.
    ///
    /// Any source failure aborts the run before classification.
    pub async fn run_with_progress<P, U>(
        &self,
        targets: &[Target],
        on_target: P,
        on_unmatched: U,
    ) -> Result<Classification, ReconError>
    where
        P: FnMut(usize, &Target),
        U: FnMut(&str),
    {
        let names: Vec<&str> = targets.iter().map(Target::raw).collect();
        info!("Gathering ASNs and associated IP ranges for the following: {names:?}");

        // 1. Collect every token, in target order
        let tokens: Vec<String> = source::gather_with(&*self.source, targets, on_target).await?;
        debug!("{} returned {} tokens", self.source.name(), tokens.len());

        // 2. Classify once over the whole stream
        let classification = if self.classifier.options().echo_unmatched {
            self.classifier.classify_with(&tokens, on_unmatched)
        } else {
            self.classifier.classify(&tokens)
        };

        success!(
            "Found {} ASNs and {} IP ranges",
            classification.asns().len(),
            classification.ip_ranges().len()
        );
        Ok(classification)
    }
}
