//! JSON shapes printed by `--format json`.

use calc_session::Resolution;
use serde::Serialize;

/// One resolved selection.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ResolutionJson {
    pub index: u64,
    pub input: String,
    pub output: String,
    /// "evaluated", "rejected" or "failed"
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append: Option<bool>,
    /// Why the selection was declined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ResolutionJson {
    pub fn new(index: u64, input: &str, resolution: Resolution) -> Self {
        let input = input.to_string();
        match resolution {
            Resolution::Evaluated {
                output,
                answer,
                append,
            } => Self {
                index,
                input,
                output,
                status: "evaluated",
                answer: Some(answer),
                append: Some(append),
                reason: None,
            },
            Resolution::Rejected { output, reason } => Self {
                index,
                input,
                output,
                status: "rejected",
                answer: None,
                append: None,
                reason: Some(reason.to_string()),
            },
            Resolution::Failed { output, error } => Self {
                index,
                input,
                output,
                status: "failed",
                answer: None,
                append: None,
                reason: Some(error.to_string()),
            },
        }
    }
}
