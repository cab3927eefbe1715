use std::fs;
use std::path::Path;

use rosmsg2asn1::{FsSink, Generator, OutputSink};
use rosmsg2asn1::msg::PackageIndex;
use tempfile::TempDir;

#[test]
fn persist_creates_the_output_directory() {
    let root = TempDir::new().unwrap();
    let out_dir = root.path().join("nested").join("out");

    let mut sink = FsSink::new(&out_dir);
    sink.persist("geometry_msgs/Point", "MODULE").unwrap();

    assert_eq!(fs::read_to_string(out_dir.join("Point.asn")).unwrap(), "MODULE");
}

#[test]
fn artifact_names_drop_the_package_qualifier() {
    let root = TempDir::new().unwrap();
    let mut sink = FsSink::new(root.path());

    sink.persist("std_msgs/Header", "A").unwrap();
    sink.persist("Point", "B").unwrap();

    assert!(root.path().join("Header.asn").is_file());
    assert!(root.path().join("Point.asn").is_file());
}

#[test]
fn persist_overwrites_existing_artifacts() {
    let root = TempDir::new().unwrap();
    let mut sink = FsSink::new(root.path());

    sink.persist("p/Msg", "old").unwrap();
    sink.persist("p/Msg", "new").unwrap();

    assert_eq!(fs::read_to_string(root.path().join("Msg.asn")).unwrap(), "new");
}

fn write_msg(root: &Path, package: &str, name: &str, text: &str) {
    let dir = root.join(package).join("msg");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{name}.msg")), text).unwrap();
}

fn generate_into(packages: &Path, out_dir: &Path) -> Vec<String> {
    let index = PackageIndex::scan([packages]);
    let mut sink = FsSink::new(out_dir);
    let report =
        Generator::new(index).generate_all(["nav_msgs/Odometry".to_string()], &mut sink);
    assert!(report.is_success());
    report.generated
}

#[test]
fn repeated_runs_produce_byte_identical_artifacts() {
    let packages = TempDir::new().unwrap();
    write_msg(
        packages.path(),
        "nav_msgs",
        "Odometry",
        "std_msgs/Header header\ngeometry_msgs/Pose pose\nfloat64[36] covariance",
    );
    write_msg(
        packages.path(),
        "std_msgs",
        "Header",
        "uint32 seq\ntime stamp\nstring frame_id",
    );
    write_msg(
        packages.path(),
        "geometry_msgs",
        "Pose",
        "geometry_msgs/Point position\nfloat64[4] orientation",
    );
    write_msg(
        packages.path(),
        "geometry_msgs",
        "Point",
        "float64 x\nfloat64 y\nfloat64 z",
    );

    let first_out = TempDir::new().unwrap();
    let second_out = TempDir::new().unwrap();
    let first = generate_into(packages.path(), first_out.path());
    let second = generate_into(packages.path(), second_out.path());

    assert_eq!(first, second);
    for name in ["Odometry", "Header", "Pose", "Point"] {
        let file = format!("{name}.asn");
        let a = fs::read(first_out.path().join(&file)).unwrap();
        let b = fs::read(second_out.path().join(&file)).unwrap();
        assert!(!a.is_empty());
        assert_eq!(a, b, "artifact {file} differs between runs");
    }
}
