use std::f64::consts::PI;

use lining_mesh::builders::{CsgRingBuilder, MeshBuilder, WedgeBuilder};
use lining_mesh::{
    generate, generate_with, BuildStrategy, GenerateOptions, MeshError, MeshKey, MeshPart,
    TunnelConfig, WedgeStyle,
};

fn radial(v: glam::DVec3) -> f64 {
    (v.x * v.x + v.z * v.z).sqrt()
}

#[test]
fn two_staggered_rings() {
    let config = TunnelConfig {
        outer_radius: 4.7,
        lining_thickness: 0.3,
        ring_width: 2.1,
        segments_per_ring: 6,
        num_rings: 2,
        stagger_odd_rings: true,
        show_hoops: false,
        ..TunnelConfig::default()
    };
    assert!((config.tunnel_length() - 4.2).abs() < 1e-12);

    let meshes = generate(&config).unwrap();
    assert_eq!(meshes.len(), 12);
    let labels: Vec<&str> = meshes.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(labels[0], "Ring 1 Segment 1");
    assert_eq!(labels[11], "Ring 2 Segment 6");

    // The first outer vertex of each four-wall wedge sits at angle_start
    let starts: Vec<f64> = meshes
        .iter()
        .map(|m| {
            let v = m.mesh.vertices[0];
            v.z.atan2(v.x).rem_euclid(2.0 * PI)
        })
        .collect();
    let ring1 = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0].map(|k| k * PI / 3.0);
    let ring2 = [1.0, 3.0, 5.0, 7.0, 9.0, 11.0].map(|k| k * PI / 6.0);
    for (got, want) in starts.iter().zip(ring1.iter().chain(&ring2)) {
        assert!((got - want).abs() < 1e-9, "start {got} != {want}");
    }

    // Second ring occupies y ∈ [2.1, 4.2]
    let (min, max) = meshes[6].mesh.bounding_box().unwrap();
    assert!((min.y - 2.1).abs() < 1e-12 && (max.y - 4.2).abs() < 1e-12);
}

#[test]
fn hoop_spacing_within_first_ring() {
    let config = TunnelConfig {
        num_rings: 1,
        hoops_per_ring: 4,
        ring_width: 2.1,
        show_lining: false,
        ..TunnelConfig::default()
    };
    let meshes = generate(&config).unwrap();
    let centers: Vec<f64> = meshes
        .iter()
        .map(|m| {
            let (min, max) = m.mesh.bounding_box().unwrap();
            (min.y + max.y) / 2.0
        })
        .collect();
    for (got, want) in centers.iter().zip([0.42, 0.84, 1.26, 1.68]) {
        assert!((got - want).abs() < 1e-12, "hoop at {got}, expected {want}");
    }
    for m in &meshes {
        let (min, max) = m.mesh.bounding_box().unwrap();
        assert!(min.y >= 0.0 && max.y <= 2.1);
        assert!(m.mesh.vertices.iter().all(|v| (radial(*v) - 4.45).abs() < 1e-9));
    }
}

#[test]
fn two_segment_ring_closes_without_overlap() {
    let config = TunnelConfig {
        segments_per_ring: 2,
        num_rings: 1,
        show_hoops: false,
        ..TunnelConfig::default()
    };
    assert!((config.sweep_angle() - PI).abs() < 1e-12);

    for strategy in [
        BuildStrategy::Extrusion(WedgeStyle::FourWall),
        BuildStrategy::Extrusion(WedgeStyle::Profile),
        BuildStrategy::Csg,
    ] {
        let options = GenerateOptions { strategy, ..GenerateOptions::default() };
        let meshes = generate_with(&config, &options).unwrap();
        assert_eq!(meshes.len(), 2);

        // Upper half-plane (z ≥ 0) for the first wedge, lower for the second
        let upper = &meshes[0].mesh;
        let lower = &meshes[1].mesh;
        assert!(upper.vertices.iter().all(|v| v.z >= -1e-6), "{strategy:?}");
        assert!(lower.vertices.iter().all(|v| v.z <= 1e-6), "{strategy:?}");
    }
}

#[test]
fn csg_segments_are_closed_solids() {
    let options = GenerateOptions { strategy: BuildStrategy::Csg, ..GenerateOptions::default() };
    for segments_per_ring in 2..=12 {
        for stagger_odd_rings in [false, true] {
            let config = TunnelConfig {
                num_rings: 2,
                segments_per_ring,
                stagger_odd_rings,
                show_hoops: false,
                ..TunnelConfig::default()
            };
            let meshes = generate_with(&config, &options).unwrap();
            assert_eq!(meshes.len(), 2 * segments_per_ring as usize);

            let sweep = config.sweep_angle();
            let (r, big_r, w) = (config.inner_radius(), config.outer_radius, config.ring_width);
            let expected = 0.5 * sweep * (big_r * big_r - r * r) * w;
            for m in &meshes {
                m.mesh.validate_indices().unwrap();
                assert_eq!(m.mesh.unpaired_edges(), 0, "{} of {segments_per_ring}", m.label);
                let volume = m.mesh.signed_volume();
                assert!(
                    (volume - expected).abs() / expected < 0.03,
                    "{}: volume {volume}, expected {expected}",
                    m.label
                );
            }
        }
    }
}

#[test]
fn extruded_wedges_are_open_shells() {
    // The four-wall wedge has no radial joint faces
    let config = TunnelConfig { num_rings: 1, show_hoops: false, ..TunnelConfig::default() };
    let meshes = generate(&config).unwrap();
    assert!(meshes.iter().all(|m| m.mesh.unpaired_edges() > 0));
}

#[test]
fn wedge_and_csg_agree_on_extent() {
    let config = TunnelConfig { num_rings: 2, ..TunnelConfig::default() };
    let segment = lining_mesh::assembler::segment_layout(&config)[7].1;

    let wedge = WedgeBuilder::new(30, WedgeStyle::FourWall).build(&segment).unwrap();
    let solid = CsgRingBuilder::new(48).build(&segment).unwrap();
    let (wmin, wmax) = wedge.bounding_box().unwrap();
    let (cmin, cmax) = solid.bounding_box().unwrap();
    assert!((wmin - cmin).length() < 0.05, "{wmin} vs {cmin}");
    assert!((wmax - cmax).length() < 0.05, "{wmax} vs {cmax}");
}

#[test]
fn output_order_is_segments_then_hoops_per_ring() {
    let config = TunnelConfig { num_rings: 3, segments_per_ring: 4, hoops_per_ring: 2, ..TunnelConfig::default() };
    let keys: Vec<MeshKey> = generate(&config).unwrap().iter().map(|m| m.key).collect();
    let mut expected = Vec::new();
    for ring in 0..3 {
        expected.extend((0..4).map(|s| MeshKey::segment(ring, s)));
        expected.extend((1..=2).map(|h| MeshKey::hoop(ring, h)));
    }
    assert_eq!(keys, expected);
    assert!(matches!(keys[4].part, MeshPart::Hoop(1)));
}

#[test]
fn invalid_input_yields_no_meshes() {
    let config = TunnelConfig { lining_thickness: 5.0, ..TunnelConfig::default() };
    match generate(&config) {
        Err(MeshError::InvalidParameter(msg)) => assert!(msg.contains("lining_thickness")),
        other => panic!("expected an invalid parameter error, got {other:?}"),
    }
}

#[test]
fn repeated_generation_is_identical() {
    let config = TunnelConfig::default();
    let options = GenerateOptions { strategy: BuildStrategy::Csg, ..GenerateOptions::default() };
    let config = TunnelConfig { num_rings: 3, ..config };
    assert_eq!(
        generate_with(&config, &options).unwrap(),
        generate_with(&config, &options).unwrap()
    );
}
