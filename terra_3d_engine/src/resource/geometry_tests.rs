use super::*;
use crate::error::Error;

fn vertex(position: [f32; 3]) -> Vertex {
    Vertex {
        position,
        normal: [0.0, 1.0, 0.0],
        uv: [0.0, 0.0],
    }
}

fn triangle_desc() -> GeometryDesc {
    GeometryDesc {
        name: "triangle".to_string(),
        vertices: vec![
            vertex([0.0, 0.0, 0.0]),
            vertex([1.0, 0.0, 0.0]),
            vertex([0.0, 1.0, 0.0]),
        ],
        indices: vec![0, 1, 2],
    }
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_from_desc_valid_triangle() {
    let geometry = Geometry::from_desc(triangle_desc()).unwrap();
    assert_eq!(geometry.name(), "triangle");
    assert_eq!(geometry.vertex_count(), 3);
    assert_eq!(geometry.index_count(), 3);
    assert_eq!(geometry.triangle_count(), 1);
}

#[test]
fn test_from_desc_rejects_empty_vertices() {
    let desc = GeometryDesc {
        name: "empty".to_string(),
        vertices: Vec::new(),
        indices: Vec::new(),
    };
    assert!(matches!(
        Geometry::from_desc(desc),
        Err(Error::InvalidResource(_))
    ));
}

#[test]
fn test_from_desc_rejects_partial_triangle() {
    let mut desc = triangle_desc();
    desc.indices.push(0);
    assert!(matches!(
        Geometry::from_desc(desc),
        Err(Error::InvalidResource(_))
    ));
}

#[test]
fn test_from_desc_rejects_out_of_bounds_index() {
    let mut desc = triangle_desc();
    desc.indices = vec![0, 1, 3];
    assert!(matches!(
        Geometry::from_desc(desc),
        Err(Error::InvalidResource(_))
    ));
}

// ============================================================================
// UV sphere
// ============================================================================

#[test]
fn test_uv_sphere_counts() {
    let sphere = Geometry::uv_sphere("sphere", 8).unwrap();
    assert_eq!(sphere.vertex_count(), 81);
    assert_eq!(sphere.index_count(), 8 * 8 * 6);
    assert_eq!(sphere.triangle_count(), 128);
}

#[test]
fn test_uv_sphere_indices_in_bounds() {
    let sphere = Geometry::uv_sphere("sphere", 5).unwrap();
    let vertex_count = sphere.vertex_count();
    assert!(sphere.indices().iter().all(|&i| i < vertex_count));
}

#[test]
fn test_uv_sphere_is_unit() {
    let sphere = Geometry::uv_sphere("sphere", 6).unwrap();
    for v in sphere.vertices() {
        let p = glam::Vec3::from_array(v.position);
        assert!((p.length() - 1.0).abs() < 1e-5);
        // Unit sphere: position doubles as the outward normal.
        assert_eq!(v.position, v.normal);
    }
}

#[test]
fn test_uv_sphere_uv_range() {
    let sphere = Geometry::uv_sphere("sphere", 4).unwrap();
    for v in sphere.vertices() {
        assert!((0.0..=1.0).contains(&v.uv[0]));
        assert!((0.0..=1.0).contains(&v.uv[1]));
    }
}

#[test]
fn test_uv_sphere_rejects_degenerate_segments() {
    assert!(Geometry::uv_sphere("sphere", 2).is_err());
    assert!(Geometry::uv_sphere("sphere", 0).is_err());
}

// ============================================================================
// Byte views
// ============================================================================

#[test]
fn test_byte_views_match_layout() {
    let geometry = Geometry::from_desc(triangle_desc()).unwrap();
    assert_eq!(
        geometry.vertex_bytes().len(),
        3 * std::mem::size_of::<Vertex>()
    );
    assert_eq!(geometry.index_bytes().len(), 3 * std::mem::size_of::<u32>());
}

#[test]
fn test_vertex_is_32_bytes() {
    assert_eq!(std::mem::size_of::<Vertex>(), 32);
}
