#![cfg(test)]
use std::collections::HashMap;
use std::io::Write;

use async_trait::async_trait;
use recon_common::error::ReconError;
use recon_common::target::{self, Target};
use recon_core::classify::{Classifier, ClassifierOptions};
use recon_core::service::AsnService;
use recon_core::source::{AmassIntel, TokenSource};

/// Replays recorded `amass intel -org` output keyed by organization.
struct Recorded {
    outputs: HashMap<&'static str, &'static str>,
}

#[async_trait]
impl TokenSource for Recorded {
    fn name(&self) -> &str {
        "recorded"
    }

    async fn invoke(&self, target: &Target) -> Result<Vec<String>, ReconError> {
        match self.outputs.get(target.query_name()) {
            Some(out) => Ok(out.split_whitespace().map(str::to_owned).collect()),
            None => Err(ReconError::ToolFailed {
                program: "recorded".into(),
                target: target.query_name().into(),
                status: "exit status: 1".into(),
                stderr: "no such organization".into(),
            }),
        }
    }
}

fn recorded() -> Recorded {
    Recorded {
        outputs: HashMap::from([
            (
                "acme",
                "64512, ACME-AS - Acme Corporation, US\n\
                 192.0.2.0/24\n\
                 198.51.100.0/24\n",
            ),
            (
                "globex",
                "64513, GLOBEX - Globex Inc, US\n\
                 203.0.113.0/24\n\
                 64512, ACME-AS - Acme Corporation, US\n\
                 192.0.2.0/24\n",
            ),
        ]),
    }
}

fn targets_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Targets file through to the final result lists.
#[tokio::test]
async fn targets_file_to_results() {
    let file = targets_file("acme.com\nglobex.net\n\n");
    let targets = target::read_targets(file.path()).unwrap();

    let service = AsnService::new(Box::new(recorded()), Classifier::default());
    let out = service.run(&targets, |_| {}).await.unwrap();

    assert_eq!(out.asns(), &["64512,", "64513,"]);
    assert_eq!(
        out.ip_ranges(),
        &["192.0.2.0/24", "198.51.100.0/24", "203.0.113.0/24"]
    );
}

#[tokio::test]
async fn strict_mode_drops_decorated_asns() {
    let targets = vec![Target::from("acme")];
    let classifier = Classifier::new(ClassifierOptions {
        strict_asn: true,
        ..Default::default()
    });

    let service = AsnService::new(Box::new(recorded()), classifier);
    let out = service.run(&targets, |_| {}).await.unwrap();

    assert!(out.asns().is_empty());
    assert_eq!(out.ip_ranges().len(), 2);
}

#[tokio::test]
async fn failing_target_aborts_the_run() {
    let targets = vec![Target::from("acme"), Target::from("initech")];
    let service = AsnService::new(Box::new(recorded()), Classifier::default());

    let result = service.run(&targets, |_| {}).await;
    assert!(
        matches!(result, Err(ReconError::ToolFailed { ref target, .. }) if target == "initech"),
        "Expected the run to fail on initech, got: {result:?}"
    );
}

/// Drives the real process runner with `echo` in place of amass.
///
/// `echo intel -org <name>` reflects the query name, so names shaped like
/// records come back as records once their extension is stripped.
#[cfg(unix)]
#[tokio::test]
async fn process_source_end_to_end() {
    let file = targets_file("64512.com\n192.0.2.0/24.txt\n64512.org\n");
    let targets = target::read_targets(file.path()).unwrap();

    let classifier = Classifier::new(ClassifierOptions {
        echo_unmatched: true,
        ..Default::default()
    });
    let service = AsnService::new(Box::new(AmassIntel::new("echo")), classifier);

    let mut unmatched: Vec<String> = Vec::new();
    let out = service
        .run(&targets, |token| unmatched.push(token.to_string()))
        .await
        .unwrap();

    assert_eq!(out.asns(), &["64512"]);
    assert_eq!(out.ip_ranges(), &["192.0.2.0/24"]);
    assert_eq!(unmatched.len(), 6, "intel and -org per target: {unmatched:?}");
}

#[tokio::test]
async fn missing_targets_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = target::read_targets(&dir.path().join("targets.txt")).unwrap_err();
    assert!(err.to_string().contains("failed to read targets file"));
}
