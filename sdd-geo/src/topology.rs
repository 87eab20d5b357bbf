//! Minimal TopoJSON decoding for the us-atlas states topology.
//!
//! TopoJSON stores shared borders once as quantized, delta-encoded arcs;
//! each state geometry references arcs by index, with `!i` (one's
//! complement) meaning arc `i` reversed. Decoding is cumulative summation
//! of the deltas followed by the topology's affine transform.

use serde::Deserialize;
use serde_json::Value;

/// The subset of a TopoJSON document the map needs.
#[derive(Debug, Deserialize)]
pub struct Topology {
    pub transform: Option<Transform>,
    pub arcs: Vec<Vec<[f64; 2]>>,
    pub objects: Objects,
}

/// Quantization transform: `position = delta_sum * scale + translate`.
#[derive(Debug, Deserialize)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

#[derive(Debug, Deserialize)]
pub struct Objects {
    pub states: GeometryCollection,
}

#[derive(Debug, Deserialize)]
pub struct GeometryCollection {
    pub geometries: Vec<Geometry>,
}

/// One state's geometry: a Polygon or MultiPolygon over arc indices.
#[derive(Debug, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    /// FIPS id; us-atlas uses two-digit strings but numbers appear in other
    /// atlases.
    pub id: Option<Value>,
    pub arcs: Value,
    pub properties: Option<Properties>,
}

#[derive(Debug, Deserialize)]
pub struct Properties {
    pub name: Option<String>,
}

/// A decoded state outline ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct StateShape {
    /// Two-digit FIPS code.
    pub id: String,
    /// State name from topology properties, or the FIPS lookup fallback.
    pub name: String,
    /// SVG path data in atlas viewport coordinates.
    pub path: String,
    /// Mean of the outer-ring vertices; the tooltip anchor.
    pub centroid: (f64, f64),
}

/// Decode every state geometry into drawable shapes.
///
/// Geometries with unknown kinds or malformed arc indices are skipped
/// rather than failing the whole map.
pub fn decode_states(topo: &Topology) -> Vec<StateShape> {
    let mut shapes = Vec::with_capacity(topo.objects.states.geometries.len());
    for geometry in &topo.objects.states.geometries {
        let polygons = match polygons_of(geometry) {
            Some(p) => p,
            None => {
                log::warn!("skipping geometry with kind {:?}", geometry.kind);
                continue;
            }
        };

        let mut path = String::new();
        let mut outer_ring: Option<Vec<(f64, f64)>> = None;
        for polygon in &polygons {
            for (ring_idx, ring_arcs) in polygon.iter().enumerate() {
                let ring = decode_ring(topo, ring_arcs);
                if ring.is_empty() {
                    continue;
                }
                append_ring_path(&mut path, &ring);
                if ring_idx == 0 && outer_ring.as_ref().map_or(true, |r| ring.len() > r.len()) {
                    // Anchor tooltips on the largest outer ring (the
                    // mainland part of multi-part states).
                    outer_ring = Some(ring);
                }
            }
        }

        let centroid = match outer_ring {
            Some(ring) => ring_centroid(&ring),
            None => continue,
        };

        let id = normalize_fips(geometry.id.as_ref());
        let name = geometry
            .properties
            .as_ref()
            .and_then(|p| p.name.clone())
            .or_else(|| crate::state_name(&id).map(str::to_string))
            .unwrap_or_else(|| id.clone());

        shapes.push(StateShape {
            id,
            name,
            path,
            centroid,
        });
    }
    shapes
}

/// Normalize a geometry id to a two-digit FIPS string.
pub fn normalize_fips(id: Option<&Value>) -> String {
    let raw = match id {
        Some(Value::String(s)) => s.chars().filter(char::is_ascii_digit).collect::<String>(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };
    if raw.len() == 1 {
        format!("0{raw}")
    } else {
        raw
    }
}

/// View a geometry's arcs as a list of polygons (each a list of rings).
fn polygons_of(geometry: &Geometry) -> Option<Vec<Vec<Vec<i64>>>> {
    match geometry.kind.as_str() {
        "Polygon" => {
            let rings: Vec<Vec<i64>> = serde_json::from_value(geometry.arcs.clone()).ok()?;
            Some(vec![rings])
        }
        "MultiPolygon" => serde_json::from_value(geometry.arcs.clone()).ok(),
        _ => None,
    }
}

/// Decode one arc into absolute coordinates, reversing for complemented
/// indices.
fn decode_arc(topo: &Topology, index: i64) -> Vec<(f64, f64)> {
    let (arc_idx, reversed) = if index < 0 {
        ((!index) as usize, true)
    } else {
        (index as usize, false)
    };
    let deltas = match topo.arcs.get(arc_idx) {
        Some(a) => a,
        None => return Vec::new(),
    };

    let mut points = Vec::with_capacity(deltas.len());
    match &topo.transform {
        Some(t) => {
            let (mut x, mut y) = (0.0, 0.0);
            for d in deltas {
                x += d[0];
                y += d[1];
                points.push((x * t.scale[0] + t.translate[0], y * t.scale[1] + t.translate[1]));
            }
        }
        None => {
            for d in deltas {
                points.push((d[0], d[1]));
            }
        }
    }
    if reversed {
        points.reverse();
    }
    points
}

/// Stitch a ring's arcs together, dropping the duplicated junction point
/// between consecutive arcs.
fn decode_ring(topo: &Topology, arc_indices: &[i64]) -> Vec<(f64, f64)> {
    let mut ring: Vec<(f64, f64)> = Vec::new();
    for &index in arc_indices {
        let points = decode_arc(topo, index);
        let skip = usize::from(!ring.is_empty() && !points.is_empty());
        ring.extend_from_slice(&points[skip.min(points.len())..]);
    }
    ring
}

fn append_ring_path(path: &mut String, ring: &[(f64, f64)]) {
    use std::fmt::Write;
    for (i, (x, y)) in ring.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(path, "{cmd}{:.1},{:.1}", x, y);
    }
    path.push('Z');
}

fn ring_centroid(ring: &[(f64, f64)]) -> (f64, f64) {
    let n = ring.len() as f64;
    let (sx, sy) = ring
        .iter()
        .fold((0.0, 0.0), |(sx, sy), (x, y)| (sx + x, sy + y));
    (sx / n, sy / n)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 2x2 quantized square split into two arcs shared at the corners,
    /// plus a second geometry reusing one arc reversed.
    fn fixture() -> Topology {
        let json = r#"{
            "type": "Topology",
            "transform": { "scale": [1.0, 1.0], "translate": [10.0, 20.0] },
            "arcs": [
                [[0, 0], [2, 0], [0, 2]],
                [[2, 2], [-2, 0], [0, -2]]
            ],
            "objects": {
                "states": {
                    "geometries": [
                        {
                            "type": "Polygon",
                            "id": "6",
                            "arcs": [[0, 1]],
                            "properties": { "name": "California" }
                        },
                        {
                            "type": "Polygon",
                            "id": "32",
                            "arcs": [[-1, -2]],
                            "properties": {}
                        }
                    ]
                }
            }
        }"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn arcs_decode_with_transform() {
        let topo = fixture();
        let points = decode_arc(&topo, 0);
        assert_eq!(points, vec![(10.0, 20.0), (12.0, 20.0), (12.0, 22.0)]);
        // Complemented index decodes the same arc reversed.
        let reversed = decode_arc(&topo, -1);
        assert_eq!(reversed, vec![(12.0, 22.0), (12.0, 20.0), (10.0, 20.0)]);
    }

    #[test]
    fn rings_drop_duplicate_junctions() {
        let topo = fixture();
        let ring = decode_ring(&topo, &[0, 1]);
        // 3 + 3 points with one junction removed.
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), Some(&(10.0, 20.0)));
        assert_eq!(ring.last(), Some(&(10.0, 20.0)));
    }

    #[test]
    fn states_decode_to_paths_and_centroids() {
        let topo = fixture();
        let shapes = decode_states(&topo);
        assert_eq!(shapes.len(), 2);

        let ca = &shapes[0];
        assert_eq!(ca.id, "06");
        assert_eq!(ca.name, "California");
        assert!(ca.path.starts_with("M10.0,20.0"));
        assert!(ca.path.ends_with('Z'));
        // Mean of the 5-point ring (closing point counted once at start).
        assert!((ca.centroid.0 - 10.8).abs() < 1e-9);
        assert!((ca.centroid.1 - 20.8).abs() < 1e-9);

        // Missing name falls back to the FIPS table.
        assert_eq!(shapes[1].id, "32");
        assert_eq!(shapes[1].name, "Nevada");
    }

    #[test]
    fn fips_normalization() {
        use serde_json::json;
        assert_eq!(normalize_fips(Some(&json!("06"))), "06");
        assert_eq!(normalize_fips(Some(&json!(6))), "06");
        assert_eq!(normalize_fips(Some(&json!("US48"))), "48");
        assert_eq!(normalize_fips(None), "");
    }
}
