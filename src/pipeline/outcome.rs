// src/pipeline/outcome.rs
// =============================================================================
// Per-source outcomes and the summary of a whole run.
//
// Every source ends up Done or Failed, never silently dropped. A failed
// source names the stage that broke so the user knows whether the page
// never arrived or arrived but could not be processed.
// =============================================================================

use std::time::Duration;

use serde::Serialize;

use crate::extract::Mode;
use crate::sources::Source;

/// Which half of the pipeline a failure happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Fetch,
    Extract,
}

/// Terminal state of one source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourceStatus {
    /// Report written; `links` is the number of Link lines in it
    Done { links: usize },
    /// The source stopped at `stage`
    Failed { stage: Stage, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceOutcome {
    pub url: String,
    pub cache_key: String,
    #[serde(flatten)]
    pub status: SourceStatus,
    /// HTTP status of the fetched page, when there was a response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    /// Non-fatal problems, e.g. a body stream that broke halfway
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl SourceOutcome {
    pub fn done(source: &Source, links: usize, http_status: u16) -> Self {
        SourceOutcome {
            url: source.url.clone(),
            cache_key: source.cache_key.clone(),
            status: SourceStatus::Done { links },
            http_status: Some(http_status),
            warnings: Vec::new(),
        }
    }

    pub fn failed(source: &Source, stage: Stage, error: impl ToString) -> Self {
        SourceOutcome {
            url: source.url.clone(),
            cache_key: source.cache_key.clone(),
            status: SourceStatus::Failed {
                stage,
                error: error.to_string(),
            },
            http_status: None,
            warnings: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.status, SourceStatus::Done { .. })
    }
}

/// Everything a finished run reports back.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub mode: Mode,
    /// Outcomes in source-list order
    pub outcomes: Vec<SourceOutcome>,
    #[serde(rename = "elapsed_secs", serialize_with = "as_secs_f64")]
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn done_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &SourceOutcome> {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }

    /// 0 when every source made it, 1 when any failed
    pub fn exit_code(&self) -> i32 {
        if self.failed().next().is_some() {
            1
        } else {
            0
        }
    }
}

fn as_secs_f64<S: serde::Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources() -> Vec<Source> {
        Source::from_urls(vec!["http://a.example".into(), "http://b.example".into()])
    }

    #[test]
    fn test_exit_code() {
        let s = sources();
        let mut summary = RunSummary {
            mode: Mode::Links,
            outcomes: vec![SourceOutcome::done(&s[0], 3, 200), SourceOutcome::done(&s[1], 0, 200)],
            elapsed: Duration::from_millis(1500),
        };
        assert_eq!(summary.exit_code(), 0);
        assert_eq!(summary.done_count(), 2);

        summary.outcomes[1] = SourceOutcome::failed(&s[1], Stage::Fetch, "timed out");
        assert_eq!(summary.exit_code(), 1);
        assert_eq!(summary.failed().count(), 1);
    }

    #[test]
    fn test_json_shape() {
        let s = sources();
        let summary = RunSummary {
            mode: Mode::Images,
            outcomes: vec![
                SourceOutcome::done(&s[0], 2, 200),
                SourceOutcome::failed(&s[1], Stage::Extract, "missing page"),
            ],
            elapsed: Duration::from_millis(500),
        };

        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["mode"], "images");
        assert_eq!(json["elapsed_secs"], 0.5);
        assert_eq!(json["outcomes"][0]["status"], "done");
        assert_eq!(json["outcomes"][0]["links"], 2);
        assert_eq!(json["outcomes"][1]["status"], "failed");
        assert_eq!(json["outcomes"][1]["stage"], "extract");
        assert!(json["outcomes"][1].get("http_status").is_none());
    }
}
