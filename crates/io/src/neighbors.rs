// Neighbor file: one `id n1 n2 ...` line per vertex, neighbor list may be empty.

use std::path::Path;

use nbrcheck_recon::{AdjacencyRelation, VertexId};

use crate::error::IoError;
use crate::particles::field;

pub fn read_neighbors(path: &Path) -> Result<AdjacencyRelation, IoError> {
    let content = std::fs::read_to_string(path).map_err(|e| IoError::from_read(path, e))?;
    parse_neighbors(path, &content)
}

/// Parse neighbor file content. `path` is only used in error messages.
pub fn parse_neighbors(path: &Path, content: &str) -> Result<AdjacencyRelation, IoError> {
    let mut relation = AdjacencyRelation::new();

    for (i, line) in content.lines().enumerate() {
        let line_no = i + 1;
        let mut fields = line.split_whitespace();
        let Some(first) = fields.next() else {
            continue;
        };

        let vertex: VertexId = field(path, line_no, "vertex id", first)?;
        let neighbors = fields
            .map(|raw| field::<VertexId>(path, line_no, "neighbor id", raw))
            .collect::<Result<Vec<_>, _>>()?;

        if relation.insert(vertex, neighbors).is_some() {
            return Err(IoError::parse(
                path,
                line_no,
                format!("vertex {vertex} listed more than once"),
            ));
        }
    }

    log::debug!(
        "{}: {} vertices, {} neighbor entries",
        path.display(),
        relation.vertex_count(),
        relation.entry_count()
    );
    Ok(relation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<AdjacencyRelation, IoError> {
        parse_neighbors(Path::new("neighborsCIM.txt"), content)
    }

    #[test]
    fn parse_with_empty_lists() {
        let r = parse("0 1 2\n1 0\n2 0\n3\n").unwrap();
        assert_eq!(r.vertex_count(), 4);
        assert_eq!(r.entry_count(), 4);
        assert!(r.neighbors(3).unwrap().is_empty());
        assert_eq!(r.neighbors(0).unwrap().iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn repeated_neighbor_collapses() {
        let r = parse("0 1 1 1\n1 0\n").unwrap();
        assert_eq!(r.neighbors(0).unwrap().len(), 1);
    }

    #[test]
    fn blank_lines_skipped() {
        let r = parse("\n0 1\n\n1 0\n\n").unwrap();
        assert_eq!(r.vertex_count(), 2);
    }

    #[test]
    fn non_numeric_neighbor() {
        match parse("0 1\n1 x\n") {
            Err(IoError::Parse { line, message, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(message, "invalid neighbor id 'x'");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn negative_id_rejected() {
        assert!(matches!(parse("-1 2\n"), Err(IoError::Parse { line: 1, .. })));
    }

    #[test]
    fn duplicate_vertex_line() {
        let err = parse("0 1\n1 0\n0 2\n").unwrap_err();
        assert_eq!(err.to_string(), "neighborsCIM.txt:3: vertex 0 listed more than once");
    }
}
