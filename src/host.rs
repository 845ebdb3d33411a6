//! Host collaborator boundary.
//!
//! The core never fetches its own inputs. A [`SimulationHost`] supplies the
//! zone list, the configuration document and the runtime capabilities;
//! [`check_readiness`] runs validation and evaluation over whatever the host
//! returns and substitutes empty defaults for anything it could not supply.
use crate::document::{load_document, ConfigurationDocument, Zone};
use crate::readiness::{evaluate, ReadinessStep, RuntimeCapabilities};
use crate::util::sha256_hex;
use crate::validate::{validate, Diagnostics};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Inputs provided by the embedding application.
pub trait SimulationHost {
    /// Geometry-derived zones; may be empty.
    fn zones(&self) -> Result<Vec<Zone>>;
    /// Snapshot of the persisted configuration.
    fn configuration_document(&self) -> Result<ConfigurationDocument>;
    fn runtime_capabilities(&self) -> Result<RuntimeCapabilities>;
}

/// Diagnostics and readiness steps for one host snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub diagnostics: Diagnostics,
    pub steps: Vec<ReadinessStep>,
    /// SHA-256 of the serialized diagnostics; equal inputs give equal values.
    pub fingerprint: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Validate and evaluate whatever `host` provides.
///
/// A failing collaborator never aborts the check: its input is replaced by an
/// empty default and the failure is recorded in `warnings`.
pub fn check_readiness(host: &dyn SimulationHost) -> ReadinessReport {
    let mut warnings = Vec::new();
    let zones = host
        .zones()
        .unwrap_or_else(|err| fallback("zones", &err, &mut warnings));
    let doc = host
        .configuration_document()
        .unwrap_or_else(|err| fallback("configuration document", &err, &mut warnings));
    let capabilities = host
        .runtime_capabilities()
        .unwrap_or_else(|err| fallback("runtime capabilities", &err, &mut warnings));
    build_report(&doc, &zones, &capabilities, warnings)
}

fn fallback<T: Default>(what: &str, err: &anyhow::Error, warnings: &mut Vec<String>) -> T {
    let message = format!("{what} unavailable, using empty default: {}", error_chain_message(err));
    tracing::warn!("{message}");
    warnings.push(message);
    T::default()
}

/// Run validation and evaluation over explicit inputs.
pub fn build_report(
    doc: &ConfigurationDocument,
    zones: &[Zone],
    capabilities: &RuntimeCapabilities,
    warnings: Vec<String>,
) -> ReadinessReport {
    let diagnostics = validate(doc, zones);
    let steps = evaluate(&diagnostics, doc, capabilities);
    let fingerprint = diagnostics_fingerprint(&diagnostics);
    tracing::info!(
        zones = zones.len(),
        issues = diagnostics.issues.len(),
        fingerprint = %fingerprint,
        "readiness report built"
    );
    ReadinessReport {
        diagnostics,
        steps,
        fingerprint,
        warnings,
    }
}

fn diagnostics_fingerprint(diagnostics: &Diagnostics) -> String {
    match serde_json::to_vec(diagnostics) {
        Ok(bytes) => sha256_hex(&bytes),
        Err(err) => {
            tracing::warn!(error = %err, "failed to serialize diagnostics for fingerprint");
            String::new()
        }
    }
}

pub(crate) fn error_chain_message(err: &anyhow::Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}

/// Host backed by JSON files on disk.
#[derive(Debug, Clone)]
pub struct FileHost {
    pub document_path: PathBuf,
    /// JSON array of zones; `None` means no geometry.
    pub zones_path: Option<PathBuf>,
    pub capabilities: RuntimeCapabilities,
}

impl SimulationHost for FileHost {
    fn zones(&self) -> Result<Vec<Zone>> {
        match &self.zones_path {
            Some(path) => load_zones(path),
            None => Ok(Vec::new()),
        }
    }

    fn configuration_document(&self) -> Result<ConfigurationDocument> {
        let loaded = load_document(&self.document_path)?;
        for warning in &loaded.warnings {
            tracing::warn!(path = %self.document_path.display(), "{warning}");
        }
        Ok(loaded.document)
    }

    fn runtime_capabilities(&self) -> Result<RuntimeCapabilities> {
        Ok(self.capabilities)
    }
}

/// Load a zone list from a JSON array file.
pub fn load_zones(path: &Path) -> Result<Vec<Zone>> {
    let bytes = fs::read(path).with_context(|| format!("read zones {}", path.display()))?;
    let zones: Vec<Zone> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse zones {}", path.display()))?;
    Ok(zones)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readiness::StepStatus;
    use anyhow::anyhow;

    struct BrokenHost;

    impl SimulationHost for BrokenHost {
        fn zones(&self) -> Result<Vec<Zone>> {
            Err(anyhow!("geometry service timed out"))
        }

        fn configuration_document(&self) -> Result<ConfigurationDocument> {
            Err(anyhow!("disk full")).context("load configuration")
        }

        fn runtime_capabilities(&self) -> Result<RuntimeCapabilities> {
            Err(anyhow!("bridge offline"))
        }
    }

    #[test]
    fn failing_host_falls_back_to_empty_defaults() {
        let report = check_readiness(&BrokenHost);
        assert_eq!(report.warnings.len(), 3);
        assert_eq!(
            report.warnings[1],
            "configuration document unavailable, using empty default: load configuration: disk full"
        );
        assert_eq!(report.steps.len(), 7);
        assert_eq!(report.steps[0].status, StepStatus::Warning);
        assert_eq!(report.steps[6].status, StepStatus::Error);
        assert!(report.diagnostics.issues.is_empty());
    }

    #[test]
    fn fingerprint_tracks_diagnostics() {
        let doc = ConfigurationDocument::default();
        let caps = RuntimeCapabilities::default();
        let first = build_report(&doc, &[], &caps, Vec::new());
        let second = build_report(&doc, &[], &caps, Vec::new());
        assert_eq!(first.fingerprint, second.fingerprint);
        assert_eq!(first.fingerprint.len(), 64);

        let third = build_report(&doc, &[Zone::named("Zone_1")], &caps, Vec::new());
        assert_ne!(first.fingerprint, third.fingerprint);
    }

    #[test]
    fn file_host_reads_document_and_zones() {
        let dir = tempfile::tempdir().expect("tempdir");
        let document_path = dir.path().join("document.json");
        let zones_path = dir.path().join("zones.json");
        fs::write(
            &document_path,
            r#"{"simulation": {"weather_file": "USA_CO_Denver.epw"}}"#,
        )
        .expect("write document");
        fs::write(&zones_path, r#"[{"name": "Zone_1", "surface_count": 6}]"#)
            .expect("write zones");

        let host = FileHost {
            document_path,
            zones_path: Some(zones_path),
            capabilities: RuntimeCapabilities {
                can_execute: true,
                live_zone_count: None,
            },
        };
        let report = check_readiness(&host);
        assert!(report.warnings.is_empty());
        assert_eq!(report.diagnostics.geometry.totals.zones, 1);
        assert_eq!(report.steps[4].status, StepStatus::Ok);
    }

    #[test]
    fn missing_zone_file_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let host = FileHost {
            document_path: dir.path().join("document.json"),
            zones_path: Some(dir.path().join("zones.json")),
            capabilities: RuntimeCapabilities::default(),
        };
        let report = check_readiness(&host);
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[0].starts_with("zones unavailable"));
        assert!(report.warnings[1].contains("configuration document unavailable"));
    }
}
