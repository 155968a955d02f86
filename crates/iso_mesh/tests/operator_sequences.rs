//! Mixed flip / split / collapse sequences keep the mesh a closed manifold.

use iso_mesh::{fixtures, EdgeId, HalfEdgeMesh, MeshError};

#[derive(Clone, Copy, Debug)]
enum Op {
  Flip,
  Split,
  Collapse,
}

/// (vertices, edges, faces)
fn counts(mesh: &HalfEdgeMesh) -> (i64, i64, i64) {
  (
    mesh.num_vertices() as i64,
    mesh.num_edges() as i64,
    mesh.num_faces() as i64,
  )
}

fn apply(mesh: &mut HalfEdgeMesh, op: Op, edge: EdgeId) -> Result<(), MeshError> {
  let (v, e, f) = counts(mesh);

  let result = match op {
    Op::Flip => mesh.flip(edge).map(|_| (0, 0, 0)),
    Op::Split => mesh.split(edge).map(|m| {
      assert_eq!(mesh.vertex_degree(m).unwrap(), 4);
      (1, 3, 2)
    }),
    Op::Collapse => mesh.collapse(edge).map(|_| (-1, -3, -2)),
  };

  match result {
    Ok((dv, de, df)) => {
      assert_eq!(counts(mesh), (v + dv, e + de, f + df), "{:?} changed counts", op);
      Ok(())
    }
    Err(err) => {
      assert_eq!(counts(mesh), (v, e, f), "rejected {:?} changed counts", op);
      Err(err)
    }
  }
}

fn run_sequence(mut mesh: HalfEdgeMesh, rounds: usize) -> HalfEdgeMesh {
  let ops = [Op::Split, Op::Flip, Op::Collapse, Op::Flip, Op::Split];

  for round in 0..rounds {
    let edges: Vec<EdgeId> = mesh.edge_ids().collect();
    for (i, &edge) in edges.iter().enumerate().step_by(3 + round % 4) {
      if !mesh.contains_edge(edge) {
        continue;
      }

      let op = ops[(i + round) % ops.len()];
      match apply(&mut mesh, op, edge) {
        Ok(()) => {}
        Err(MeshError::IllegalFlip { .. } | MeshError::IllegalCollapse { .. }) => {}
        Err(err) => panic!("{:?} on {:?} failed: {}", op, edge, err),
      }

      mesh.check_invariants().unwrap();
      let (v, e, f) = counts(&mesh);
      assert_eq!(v - e + f, 2, "Euler characteristic changed");
    }
  }

  mesh
}

#[test]
fn test_mixed_sequence_on_icosahedron() {
  let mesh = HalfEdgeMesh::build(&fixtures::icosahedron()).unwrap();
  let mesh = run_sequence(mesh, 4);

  for f in mesh.face_ids() {
    assert_eq!(mesh.face_num_edges(f).unwrap(), 3);
  }
  let out = mesh.to_indexed_mesh().unwrap();
  HalfEdgeMesh::build(&out).unwrap().check_invariants().unwrap();
}

#[test]
fn test_mixed_sequence_on_extracted_sphere() {
  let mesh = HalfEdgeMesh::build(&fixtures::extracted_sphere(14)).unwrap();
  let mesh = run_sequence(mesh, 3);

  let out = mesh.to_indexed_mesh().unwrap();
  out.validate().unwrap();
  HalfEdgeMesh::build(&out).unwrap().check_invariants().unwrap();
}

#[test]
fn test_degree_sum_matches_edges() {
  let mut mesh = HalfEdgeMesh::build(&fixtures::octahedron()).unwrap();
  let first = mesh.edge_ids().next().unwrap();
  mesh.split(first).unwrap();

  let degree_sum: usize = mesh
    .vertex_ids()
    .map(|v| mesh.vertex_degree(v).unwrap())
    .sum();
  assert_eq!(degree_sum, mesh.num_edges() * 2);
}

#[test]
fn test_flip_pairs_restore_every_edge() {
  let mut mesh = HalfEdgeMesh::build(&fixtures::extracted_sphere(10)).unwrap();
  let before = mesh.to_indexed_mesh().unwrap();

  for edge in mesh.edge_ids().collect::<Vec<_>>() {
    if mesh.flip(edge).is_ok() {
      mesh.flip(edge).unwrap();
    }
  }
  mesh.check_invariants().unwrap();

  let after = mesh.to_indexed_mesh().unwrap();
  let key = |m: &iso_mesh::IndexedMesh| {
    let mut tris: Vec<[[u32; 3]; 3]> = m
      .triangles
      .iter()
      .map(|t| {
        let p = t.map(|i| m.vertices[i as usize].to_array().map(f32::to_bits));
        let first = (0..3).min_by_key(|&i| p[i]).unwrap();
        [p[first], p[(first + 1) % 3], p[(first + 2) % 3]]
      })
      .collect();
    tris.sort();
    tris
  };
  assert_eq!(key(&after), key(&before));
}
