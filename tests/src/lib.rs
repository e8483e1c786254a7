//! Cross-crate tests for the `recon` workspace.

#[cfg(test)]
mod asn;
