use glam::Vec3;

/// Indexed triangle mesh for a (p, q) torus knot with per-vertex UVs.
///
/// `u` runs along the knot (0 to 1 over the tubular segments), `v` around the
/// tube cross-section (0 to 1 over the radial segments). Both seams repeat
/// their first ring so the UVs stay monotonic across the whole surface.
pub struct KnotMesh {
    pub positions: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl KnotMesh {
    pub fn vertex_count(tubular: usize, radial: usize) -> usize {
        (tubular + 1) * (radial + 1)
    }

    /// Generate the mesh. `radius` is the overall knot radius, `tube` the
    /// cross-section radius; `p` and `q` wind the curve around the torus
    /// axes. A moving frame is taken from finite differences of the curve,
    /// which is plenty stable at these segment counts.
    pub fn generate(radius: f32, tube: f32, tubular: usize, radial: usize, p: u32, q: u32) -> Self {
        let p_f = p as f32;
        let q_f = q as f32;

        let vert_count = Self::vertex_count(tubular, radial);
        let mut positions = Vec::with_capacity(vert_count);
        let mut uvs = Vec::with_capacity(vert_count);

        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * p_f * std::f32::consts::TAU;
            let p1 = curve_point(u, radius, p_f, q_f);
            let p2 = curve_point(u + 0.01, radius, p_f, q_f);

            let tangent = p2 - p1;
            let binormal = tangent.cross(p2 + p1).normalize();
            let normal = binormal.cross(tangent).normalize();

            for j in 0..=radial {
                let v = j as f32 / radial as f32 * std::f32::consts::TAU;
                let cx = -tube * v.cos();
                let cy = tube * v.sin();
                let pos = p1 + cx * normal + cy * binormal;
                positions.push(pos.to_array());
                uvs.push([i as f32 / tubular as f32, j as f32 / radial as f32]);
            }
        }

        let ring = radial + 1;
        let mut indices = Vec::with_capacity(tubular * radial * 6);
        for i in 0..tubular {
            for j in 0..radial {
                let a = (i * ring + j) as u32;
                let b = ((i + 1) * ring + j) as u32;
                let c = b + 1;
                let d = a + 1;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        Self {
            positions,
            uvs,
            indices,
        }
    }
}

/// Point on the (p, q) torus-knot curve at parameter `u` in `[0, p*2*PI]`.
fn curve_point(u: f32, radius: f32, p: f32, q: f32) -> Vec3 {
    let qu_over_p = q / p * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * qu_over_p.sin() * 0.5,
    )
}
