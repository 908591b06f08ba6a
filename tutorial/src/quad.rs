//! Hard-coded geometry and shaders for the quad program.

use backend::math::Vec3;

#[rustfmt::skip]
pub const QUAD_VERTICES: [Vec3; 4] = [
    Vec3::new( 0.5,  0.5, 0.0), // top right
    Vec3::new( 0.5, -0.5, 0.0), // bottom right
    Vec3::new(-0.5, -0.5, 0.0), // bottom left
    Vec3::new(-0.5,  0.5, 0.0), // top left
];

pub const TOP_RIGHT: u32 = 0;
pub const BOTTOM_RIGHT: u32 = 1;
pub const BOTTOM_LEFT: u32 = 2;
pub const TOP_LEFT: u32 = 3;

#[rustfmt::skip]
pub const QUAD_INDICES: [u32; 6] = [
    TOP_RIGHT, BOTTOM_RIGHT, TOP_LEFT,   // first triangle
    BOTTOM_RIGHT, BOTTOM_LEFT, TOP_LEFT, // second triangle
];

pub const VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;

void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
"#;

pub const FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 FragColor;

void main()
{
    FragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}
"#;

pub const CLEAR_COLOR: [f32; 3] = [0.2, 0.3, 0.3];

/// Splits an index list into triangles.
pub fn triangles(indices: &[u32]) -> impl Iterator<Item = [u32; 3]> + '_ {
    indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(t: [u32; 3]) -> Vec<(u32, u32)> {
        let sorted = |a: u32, b: u32| (a.min(b), a.max(b));
        vec![sorted(t[0], t[1]), sorted(t[1], t[2]), sorted(t[2], t[0])]
    }

    // signed area in the xy plane
    fn area_z(t: [u32; 3]) -> f32 {
        let [a, b, c] = t.map(|i| QUAD_VERTICES[i as usize]);
        ((b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)) / 2.0
    }

    #[test]
    fn exactly_two_triangles() {
        assert_eq!(QUAD_INDICES.len() % 3, 0);
        assert_eq!(triangles(&QUAD_INDICES).count(), 2);
    }

    #[test]
    fn indices_reference_existing_vertices() {
        assert!(QUAD_INDICES
            .iter()
            .all(|&i| (i as usize) < QUAD_VERTICES.len()));
    }

    #[test]
    fn triangles_share_top_left_bottom_right_diagonal() {
        let tris: Vec<_> = triangles(&QUAD_INDICES).collect();
        let shared: Vec<_> = edges(tris[0])
            .into_iter()
            .filter(|e| edges(tris[1]).contains(e))
            .collect();
        assert_eq!(shared, vec![(BOTTOM_RIGHT, TOP_LEFT)]);

        let tl = QUAD_VERTICES[TOP_LEFT as usize];
        let br = QUAD_VERTICES[BOTTOM_RIGHT as usize];
        assert!(tl.x < br.x && tl.y > br.y);
    }

    #[test]
    fn triangles_cover_the_quad_without_overlap() {
        let areas: Vec<f32> = triangles(&QUAD_INDICES).map(area_z).collect();
        assert!(areas.iter().all(|a| a.abs() > 0.0));
        // same winding on both halves
        assert!(areas[0].signum() == areas[1].signum());
        let total: f32 = areas.iter().map(|a| a.abs()).sum();
        assert!((total - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn every_corner_is_used() {
        for corner in [TOP_RIGHT, BOTTOM_RIGHT, BOTTOM_LEFT, TOP_LEFT] {
            assert!(QUAD_INDICES.contains(&corner));
        }
    }

    #[test]
    fn shaders_target_core_330() {
        assert!(VERTEX_SHADER.starts_with("#version 330 core"));
        assert!(FRAGMENT_SHADER.starts_with("#version 330 core"));
        assert!(VERTEX_SHADER.contains("layout (location = 0) in vec3 aPos"));
    }
}
