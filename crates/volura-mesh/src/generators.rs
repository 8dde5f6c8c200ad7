//! Procedural tetrahedral mesh generators for tests and benchmarks.
//!
//! Deterministic, resolution-configurable meshes that stand in for the
//! tetrahedralized inputs produced by external meshing tools.

use volura_math::DVec3;

use crate::mesh::TetMesh;

/// A single unit right tetrahedron.
///
/// Vertices at the origin and the three axis unit points; volume 1/6.
///
/// # Example
/// ```
/// use volura_mesh::generators::single_tet;
/// let mesh = single_tet();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.tet_count(), 1);
/// ```
pub fn single_tet() -> TetMesh {
    TetMesh {
        positions: vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
        ],
        tets: vec![[0, 1, 2, 3]],
    }
}

/// An axis-aligned box tetrahedralized with five tets per cell.
///
/// The box spans `[0, nx·cell] × [0, ny·cell] × [0, nz·cell]`. Each grid
/// cell is split into one central and four corner tetrahedra; the split
/// alternates with cell parity so neighboring cells share conforming
/// faces.
///
/// # Arguments
/// - `nx`, `ny`, `nz` — Number of cells along each axis.
/// - `cell` — Cell edge length in meters.
pub fn tet_box(nx: usize, ny: usize, nz: usize, cell: f64) -> TetMesh {
    let (vx, vy, vz) = (nx + 1, ny + 1, nz + 1);

    let mut positions = Vec::with_capacity(vx * vy * vz);
    for k in 0..vz {
        for j in 0..vy {
            for i in 0..vx {
                positions.push(DVec3::new(
                    i as f64 * cell,
                    j as f64 * cell,
                    k as f64 * cell,
                ));
            }
        }
    }

    let vid = |i: usize, j: usize, k: usize| -> u32 { ((k * vy + j) * vx + i) as u32 };

    let mut tets = Vec::with_capacity(nx * ny * nz * 5);
    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                // Cell corners, indexed by axis bits.
                let c = [
                    vid(i, j, k),
                    vid(i + 1, j, k),
                    vid(i, j + 1, k),
                    vid(i + 1, j + 1, k),
                    vid(i, j, k + 1),
                    vid(i + 1, j, k + 1),
                    vid(i, j + 1, k + 1),
                    vid(i + 1, j + 1, k + 1),
                ];

                if (i + j + k) % 2 == 0 {
                    tets.push([c[0], c[3], c[5], c[6]]); // central
                    tets.push([c[1], c[0], c[3], c[5]]);
                    tets.push([c[2], c[0], c[3], c[6]]);
                    tets.push([c[4], c[0], c[5], c[6]]);
                    tets.push([c[7], c[3], c[5], c[6]]);
                } else {
                    tets.push([c[1], c[2], c[4], c[7]]); // central
                    tets.push([c[0], c[1], c[2], c[4]]);
                    tets.push([c[3], c[1], c[2], c[7]]);
                    tets.push([c[5], c[1], c[4], c[7]]);
                    tets.push([c[6], c[2], c[4], c[7]]);
                }
            }
        }
    }

    TetMesh { positions, tets }
}
