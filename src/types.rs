// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Payload types for the JSON stdin/stdout mode.
//!
//! JSON `null` is the wire form of the absent value: a payload with
//! `"text": null` (or no `text` field at all) decodes to an absent input,
//! and an absent result serializes back as `"reversed": null`. Present
//! values survive the round trip unchanged apart from the reversal itself.

use serde::{Deserialize, Serialize};

/// Input payload read from stdin by `verso --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReversePayload {
    /// Text to reverse; `null` or missing means absent.
    #[serde(default)]
    pub text: Option<String>,
}

/// Output payload written to stdout by `verso --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseResult {
    /// The reversed text, or `null` when the input was absent.
    pub reversed: Option<String>,
}

impl ReverseResult {
    /// Apply the reversal to a decoded payload.
    pub fn from_payload(payload: &ReversePayload) -> Self {
        Self {
            reversed: crate::reverse_opt(payload.text.as_deref()),
        }
    }
}
