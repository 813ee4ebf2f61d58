//! Generate every sheet into a temporary directory and check the final layout.

use std::fs;

use faxbox_camtools::{
    generate_drawer, generate_layout, generate_lids, generate_shell, parse_svg_dimensions,
    CamToolError, DRAWER_FILE, LAYOUT_FILE, LIDS_FILE, SHELL_FILE,
};
use faxbox_camtools::parts::{build_drawer_document, build_lids_document, build_shell_document};
use faxbox_core::BoxConfig;
use tempfile::TempDir;

const EPS: f64 = 1e-3;

#[test]
fn test_full_pipeline_writes_layout() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("output");
    let config = BoxConfig::default();

    let shell = generate_shell(&config, &output).unwrap();
    let drawer = generate_drawer(&config, &output).unwrap();
    let lids = generate_lids(&config, &output).unwrap();
    assert_eq!(shell.panel_count, 7);
    assert_eq!(drawer.panel_count, 5);
    assert_eq!(lids.panel_count, 8);

    let report = generate_layout(&config, &output).unwrap();
    assert_eq!(report.path, output.join(LAYOUT_FILE));

    let svg = fs::read_to_string(output.join(LAYOUT_FILE)).unwrap();
    assert_eq!(svg.matches("<g").count(), 4);
    for id in ["outer-shell", "drawer-1", "drawer-2", "lids"] {
        assert!(svg.contains(&format!(r#"<g id="{}""#, id)), "missing group {}", id);
    }

    let shell_size = parse_svg_dimensions(&fs::read_to_string(output.join(SHELL_FILE)).unwrap()).unwrap();
    let drawer_size = parse_svg_dimensions(&fs::read_to_string(output.join(DRAWER_FILE)).unwrap()).unwrap();
    let lids_size = parse_svg_dimensions(&fs::read_to_string(output.join(LIDS_FILE)).unwrap()).unwrap();

    let spacing = config.layout_spacing;
    let expected_width = shell_size
        .width
        .max(2.0 * drawer_size.width + lids_size.width + 2.0 * spacing);
    let expected_height =
        shell_size.height + spacing + drawer_size.height.max(lids_size.height);

    let layout_size = parse_svg_dimensions(&svg).unwrap();
    assert!((layout_size.width - expected_width).abs() < EPS);
    assert!((layout_size.height - expected_height).abs() < EPS);
}

#[test]
fn test_layout_has_no_black_strokes() {
    let dir = TempDir::new().unwrap();
    let config = BoxConfig::default();

    generate_shell(&config, dir.path()).unwrap();
    generate_drawer(&config, dir.path()).unwrap();
    generate_lids(&config, dir.path()).unwrap();
    generate_layout(&config, dir.path()).unwrap();

    let shell = fs::read_to_string(dir.path().join(SHELL_FILE)).unwrap();
    assert!(shell.contains(r#"stroke="rgb(0,0,0)""#));

    let svg = fs::read_to_string(dir.path().join(LAYOUT_FILE)).unwrap();
    assert!(!svg.contains(r#"stroke="rgb(0,0,0)""#));
    assert!(svg.contains(r#"stroke="rgb(0,0,255)""#));
    assert!(svg.contains(r#"stroke="rgb(255,0,0)""#));
    assert!(!svg.contains("<metadata"));
    assert_eq!(svg.matches("<title>").count(), 1);
}

#[test]
fn test_layout_reports_missing_sources() {
    let dir = TempDir::new().unwrap();
    let config = BoxConfig::default();
    generate_shell(&config, dir.path()).unwrap();

    let err = generate_layout(&config, dir.path()).unwrap_err();
    match err {
        CamToolError::MissingSources { missing, commands } => {
            assert_eq!(missing, vec![DRAWER_FILE.to_string(), LIDS_FILE.to_string()]);
            assert_eq!(
                commands,
                vec!["faxbox drawer".to_string(), "faxbox lids".to_string()]
            );
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!dir.path().join(LAYOUT_FILE).exists());
}

#[test]
fn test_viewbox_matches_document_extents() {
    let config = BoxConfig::default();
    let docs = [
        build_shell_document(&config).unwrap(),
        build_drawer_document(&config).unwrap(),
        build_lids_document(&config).unwrap(),
    ];

    for doc in &docs {
        let extents = doc.extents();
        let parsed = parse_svg_dimensions(&doc.to_svg()).unwrap();
        assert!((parsed.width - extents.width).abs() < EPS, "{}", doc.title());
        assert!((parsed.height - extents.height).abs() < EPS, "{}", doc.title());
    }
}

#[test]
fn test_generation_is_deterministic() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let config = BoxConfig::default();

    for dir in [&first, &second] {
        generate_shell(&config, dir.path()).unwrap();
        generate_drawer(&config, dir.path()).unwrap();
        generate_lids(&config, dir.path()).unwrap();
        generate_layout(&config, dir.path()).unwrap();
    }

    for file in [SHELL_FILE, DRAWER_FILE, LIDS_FILE, LAYOUT_FILE] {
        let a = fs::read(first.path().join(file)).unwrap();
        let b = fs::read(second.path().join(file)).unwrap();
        assert_eq!(a, b, "{} differs between runs", file);
    }
}

#[test]
fn test_panels_do_not_overlap() {
    let config = BoxConfig::default();
    let docs = [
        build_shell_document(&config).unwrap(),
        build_drawer_document(&config).unwrap(),
        build_lids_document(&config).unwrap(),
    ];

    for doc in &docs {
        let bounds: Vec<_> = doc
            .panels()
            .iter()
            .map(|p| (p.label.as_str(), p.bounds().unwrap()))
            .collect();
        for (i, (a_label, a)) in bounds.iter().enumerate() {
            for (b_label, b) in &bounds[i + 1..] {
                let overlap = a.min_x < b.max_x - EPS
                    && b.min_x < a.max_x - EPS
                    && a.min_y < b.max_y - EPS
                    && b.min_y < a.max_y - EPS;
                assert!(!overlap, "{}: {} overlaps {}", doc.title(), a_label, b_label);
            }
        }
    }
}
