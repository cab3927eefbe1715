//! Worklist-driven translation across the record dependency closure.

use std::collections::{HashSet, VecDeque};

use rosmsg2asn1_asn1::translate;
use rosmsg2asn1_core::SchemaResolver;
use tracing::{debug, error};

use crate::{error::GenerateError, sink::OutputSink};

/// Drives [`translate`] over every requested record and its transitive
/// record dependencies, persisting each generated module through the sink.
pub struct Generator<R> {
    resolver: R,
}

/// One worklist entry that failed to resolve, translate, or persist.
#[derive(Debug)]
pub struct GenerateFailure {
    pub name: String,
    pub error: GenerateError,
}

/// Outcome of one generation run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Names translated and persisted, in completion order.
    pub generated: Vec<String>,
    /// Names that failed, with the cause. A failed name does not stop the
    /// rest of the worklist.
    pub failures: Vec<GenerateFailure>,
}

impl GenerateReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

impl<R: SchemaResolver> Generator<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Translate `requested` and every record they transitively reference.
    ///
    /// Each distinct name is translated at most once: a name already queued
    /// or already handled is never re-enqueued, which also bounds the run
    /// when records reference each other cyclically.
    pub fn generate_all<S: OutputSink + ?Sized>(
        &self,
        requested: impl IntoIterator<Item = String>,
        sink: &mut S,
    ) -> GenerateReport {
        let mut pending: VecDeque<String> = VecDeque::new();
        let mut seen: HashSet<String> = HashSet::new();
        for name in requested {
            if seen.insert(name.clone()) {
                pending.push_back(name);
            }
        }

        let mut report = GenerateReport::default();
        while let Some(name) = pending.pop_front() {
            match self.generate_one(&name, sink) {
                Ok(dependencies) => {
                    debug!(record = %name, "generated module");
                    report.generated.push(name);
                    for dependency in dependencies {
                        if seen.insert(dependency.clone()) {
                            pending.push_back(dependency);
                        }
                    }
                }
                Err(cause) => {
                    error!(record = %name, "generation failed: {cause}");
                    report.failures.push(GenerateFailure { name, error: cause });
                }
            }
        }
        report
    }

    fn generate_one<S: OutputSink + ?Sized>(
        &self,
        name: &str,
        sink: &mut S,
    ) -> Result<Vec<String>, GenerateError> {
        let record = self.resolver.resolve(name)?;
        let translation = translate(&record)?;
        sink.persist(name, &translation.module_text)
            .map_err(|source| GenerateError::Persist {
                name: name.to_string(),
                source,
            })?;
        Ok(translation.dependencies)
    }
}
