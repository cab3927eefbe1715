use std::collections::HashMap;
use std::io;

use rosmsg2asn1::{GenerateError, Generator, OutputSink};
use rosmsg2asn1_core::{FieldSpec, RecordSchema, ResolveError, SchemaResolver};

/// Resolver over a fixed set of schemas keyed by qualified name.
struct MapResolver(HashMap<String, RecordSchema>);

impl MapResolver {
    fn new(records: impl IntoIterator<Item = RecordSchema>) -> Self {
        Self(
            records
                .into_iter()
                .map(|record| (record.qualified_name(), record))
                .collect(),
        )
    }
}

impl SchemaResolver for MapResolver {
    fn resolve(&self, name: &str) -> Result<RecordSchema, ResolveError> {
        self.0
            .get(name)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound {
                name: name.to_string(),
            })
    }
}

#[derive(Default)]
struct MemorySink {
    artifacts: Vec<(String, String)>,
}

impl OutputSink for MemorySink {
    fn persist(&mut self, name: &str, module_text: &str) -> io::Result<()> {
        self.artifacts
            .push((name.to_string(), module_text.to_string()));
        Ok(())
    }
}

/// Sink that rejects one specific name.
struct FailingSink {
    reject: String,
    accepted: Vec<String>,
}

impl OutputSink for FailingSink {
    fn persist(&mut self, name: &str, _module_text: &str) -> io::Result<()> {
        if name == self.reject {
            return Err(io::Error::other("disk full"));
        }
        self.accepted.push(name.to_string());
        Ok(())
    }
}

fn record(package: &str, name: &str, fields: &[(&str, &str)]) -> RecordSchema {
    let fields = fields
        .iter()
        .map(|(name, raw_type)| FieldSpec::new(*name, *raw_type).unwrap())
        .collect();
    RecordSchema::new(package, name, fields)
}

#[test]
fn dependencies_are_generated_transitively() {
    let resolver = MapResolver::new([
        record(
            "nav_msgs",
            "Odometry",
            &[("header", "std_msgs/Header"), ("pose", "geometry_msgs/Pose")],
        ),
        record(
            "std_msgs",
            "Header",
            &[("seq", "uint32"), ("stamp", "time"), ("frame_id", "string")],
        ),
        record(
            "geometry_msgs",
            "Pose",
            &[("position", "geometry_msgs/Point")],
        ),
        record(
            "geometry_msgs",
            "Point",
            &[("x", "float64"), ("y", "float64"), ("z", "float64")],
        ),
    ]);

    let mut sink = MemorySink::default();
    let report =
        Generator::new(resolver).generate_all(["nav_msgs/Odometry".to_string()], &mut sink);

    assert!(report.is_success());
    assert_eq!(
        report.generated,
        vec![
            "nav_msgs/Odometry",
            "std_msgs/Header",
            "geometry_msgs/Pose",
            "geometry_msgs/Point",
        ]
    );
    assert_eq!(sink.artifacts.len(), 4);
}

#[test]
fn cyclic_dependencies_terminate_with_one_module_each() {
    let resolver = MapResolver::new([
        record("a_msgs", "A", &[("other", "b_msgs/B")]),
        record("b_msgs", "B", &[("other", "a_msgs/A")]),
    ]);

    let mut sink = MemorySink::default();
    let report = Generator::new(resolver).generate_all(["a_msgs/A".to_string()], &mut sink);

    assert!(report.is_success());
    assert_eq!(report.generated, vec!["a_msgs/A", "b_msgs/B"]);
    assert_eq!(sink.artifacts.len(), 2);
}

#[test]
fn shared_dependencies_are_translated_exactly_once() {
    let resolver = MapResolver::new([
        record("p_msgs", "A", &[("header", "std_msgs/Header")]),
        record("p_msgs", "C", &[("header", "std_msgs/Header")]),
        record("std_msgs", "Header", &[("seq", "uint32")]),
    ]);

    let mut sink = MemorySink::default();
    let report = Generator::new(resolver)
        .generate_all(["p_msgs/A".to_string(), "p_msgs/C".to_string()], &mut sink);

    assert_eq!(report.generated, vec!["p_msgs/A", "p_msgs/C", "std_msgs/Header"]);
}

#[test]
fn duplicate_requests_are_collapsed() {
    let resolver = MapResolver::new([record("p_msgs", "A", &[("x", "int32")])]);

    let mut sink = MemorySink::default();
    let report = Generator::new(resolver)
        .generate_all(["p_msgs/A".to_string(), "p_msgs/A".to_string()], &mut sink);

    assert_eq!(report.generated, vec!["p_msgs/A"]);
    assert_eq!(sink.artifacts.len(), 1);
}

#[test]
fn one_failing_name_does_not_stop_the_rest() {
    let resolver = MapResolver::new([record("p_msgs", "Good", &[("x", "int32")])]);

    let mut sink = MemorySink::default();
    let report = Generator::new(resolver).generate_all(
        ["p_msgs/Missing".to_string(), "p_msgs/Good".to_string()],
        &mut sink,
    );

    assert!(!report.is_success());
    assert_eq!(report.generated, vec!["p_msgs/Good"]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].name, "p_msgs/Missing");
    assert!(matches!(
        report.failures[0].error,
        GenerateError::Resolve(_)
    ));
}

#[test]
fn translation_failures_are_isolated_per_name() {
    let resolver = MapResolver::new([
        // Unqualified composed type: translation rejects it.
        record("p_msgs", "Broken", &[("pose", "Pose")]),
        record("p_msgs", "Good", &[("x", "int32")]),
    ]);

    let mut sink = MemorySink::default();
    let report = Generator::new(resolver).generate_all(
        ["p_msgs/Broken".to_string(), "p_msgs/Good".to_string()],
        &mut sink,
    );

    assert_eq!(report.generated, vec!["p_msgs/Good"]);
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        report.failures[0].error,
        GenerateError::Translate(_)
    ));
}

#[test]
fn persist_failures_are_reported_and_the_run_continues() {
    let resolver = MapResolver::new([
        record("p_msgs", "A", &[("x", "int32")]),
        record("p_msgs", "B", &[("y", "int32")]),
    ]);

    let mut sink = FailingSink {
        reject: "p_msgs/A".to_string(),
        accepted: Vec::new(),
    };
    let report = Generator::new(resolver)
        .generate_all(["p_msgs/A".to_string(), "p_msgs/B".to_string()], &mut sink);

    assert_eq!(report.generated, vec!["p_msgs/B"]);
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        report.failures[0].error,
        GenerateError::Persist { .. }
    ));
    assert_eq!(sink.accepted, vec!["p_msgs/B"]);
}

#[test]
fn empty_request_list_is_a_successful_no_op() {
    let resolver = MapResolver::new([]);
    let mut sink = MemorySink::default();
    let report = Generator::new(resolver).generate_all(Vec::new(), &mut sink);

    assert!(report.is_success());
    assert!(report.generated.is_empty());
    assert!(sink.artifacts.is_empty());
}
