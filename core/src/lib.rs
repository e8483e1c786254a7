//! # Recon Core
//!
//! Turns raw intelligence-tool output into deduplicated ASNs and IP ranges.
//!
//! * [`classify`]: the token classifier.
//! * [`ordered`]: the insertion-ordered set both result lists are built on.
//! * [`source`]: where tokens come from ([`TokenSource`](source::TokenSource)).
//! * [`service`]: runs a source over every target and classifies the output.

pub mod classify;
pub mod ordered;
pub mod service;
pub mod source;
