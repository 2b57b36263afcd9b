use std::fs;
use std::path::{Path, PathBuf};

use nbrcheck_io::links::write_links_csv_file;
use nbrcheck_io::scene::compare_scene;
use nbrcheck_io::{Dataset, IoError};
use nbrcheck_recon::{run, CompareConfig, ReconInput};

const PARTICLES: &str = "\
5 20.000000 5
0 1.0000 1.0000 0.2500
1 1.8000 1.2000 0.2500
2 2.4000 1.9000 0.2500
3 10.0000 10.0000 0.2500
4 10.9000 10.1000 0.2500
";

const NEIGHBORS_CIM: &str = "\
0 1
1 0 2
2 1
3
4
";

const NEIGHBORS_BRUTE: &str = "\
0 1
1 0 2
2 1
3 4
4 3
";

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn load_and_compare_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let cim = Dataset::load(
        "CIM",
        &write(dir.path(), "particlesCIM.txt", PARTICLES),
        &write(dir.path(), "neighborsCIM.txt", NEIGHBORS_CIM),
    )
    .unwrap();
    let brute = Dataset::load(
        "bruteForce",
        &write(dir.path(), "particlesbruteForce.txt", PARTICLES),
        &write(dir.path(), "neighborsbruteForce.txt", NEIGHBORS_BRUTE),
    )
    .unwrap();

    let config = CompareConfig::conventional("CIM", "bruteForce").unwrap();
    let input = ReconInput { left: cim.source(), right: brute.source() };
    let result = run(&config, &input).unwrap();

    assert_eq!(result.summary.common, 2);
    assert_eq!(result.summary.only_left, 0);
    assert_eq!(result.summary.only_right, 1);
    assert_eq!(result.vertex_diffs.len(), 2);
    assert_eq!(result.vertex_diffs[0].vertex, 3);
    assert_eq!(result.vertex_diffs[0].only_right, vec![4]);

    let csv_path = dir.path().join("links.csv");
    write_links_csv_file(&csv_path, &result.links).unwrap();
    assert_eq!(
        fs::read_to_string(&csv_path).unwrap(),
        "a,b,class\n0,1,common\n1,2,common\n3,4,only_right\n"
    );

    let scene = compare_scene(&cim, "bruteForce", &result.links).unwrap();
    assert_eq!(scene.links.len(), 3);
    assert_eq!(scene.grid_lines, vec![0.0, 4.0, 8.0, 12.0, 16.0, 20.0]);
    let scene_path = dir.path().join("scene.json");
    scene.write_json(&scene_path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&scene_path).unwrap()).unwrap();
    assert_eq!(json["links"][2]["class"], "only_right");
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let particles = write(dir.path(), "particlesCIM.txt", PARTICLES);
    let err = Dataset::load("CIM", &particles, &dir.path().join("neighborsCIM.txt")).unwrap_err();
    match err {
        IoError::NotFound { path } => assert!(path.ends_with("neighborsCIM.txt")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn malformed_neighbor_file_reports_location() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dataset::load(
        "CIM",
        &write(dir.path(), "particlesCIM.txt", PARTICLES),
        &write(dir.path(), "neighborsCIM.txt", "0 1\n1 0 two\n"),
    )
    .unwrap_err();
    let msg = err.to_string();
    assert!(msg.ends_with("neighborsCIM.txt:2: invalid neighbor id 'two'"), "{msg}");
}

#[test]
fn unwritable_output_is_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("missing-dir").join("links.csv");
    let err = write_links_csv_file(&target, &Default::default()).unwrap_err();
    assert!(matches!(err, IoError::Write { .. }));
}
