use std::io::Write;

use crate::prelude::*;

/// Writes a graph in the plain text format read by the benchmarks.
///
/// The first line holds the node count, the second line the edge count,
/// followed by one `source target weight` line per edge. Edges are written
/// as they are produced by `edges`. Returns the number of edge lines.
///
/// # Example
///
/// ```ignore
/// > graph_gen --node-count 3 --edge-count 2
/// 3
/// 2
/// 0 2 1
/// 1 0 2
/// ```
pub fn write_graph<W, NI, I>(writer: &mut W, shape: GraphShape, edges: I) -> Result<usize, Error>
where
    W: Write,
    NI: Idx,
    I: IntoIterator<Item = Edge<NI>>,
{
    writeln!(writer, "{}", shape.node_count)?;
    writeln!(writer, "{}", shape.edge_count)?;

    let mut written = 0;
    for edge in edges {
        writeln!(writer, "{edge}")?;
        written += 1;
    }

    writer.flush()?;

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_then_edges() {
        let mut out = Vec::new();
        let edges = vec![Edge::new(0_u32, 2, 1), Edge::new(1, 0, 2)];

        let written = write_graph(&mut out, GraphShape::new(3, 2), edges).unwrap();

        assert_eq!(written, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "3\n2\n0 2 1\n1 0 2\n");
    }

    #[test]
    fn header_only() {
        let mut out = Vec::new();

        let written =
            write_graph(&mut out, GraphShape::new(5, 0), Vec::<Edge<u64>>::new()).unwrap();

        assert_eq!(written, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "5\n0\n");
    }
}
