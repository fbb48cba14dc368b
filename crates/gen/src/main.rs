use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use graph_gen::prelude::*;
use log::{debug, info};
use num_format::{Locale, ToFormattedString};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let Args {
        node_count,
        edge_count,
        seed,
        unique_by,
        output,
        use_32_bit,
    } = Args::parse();

    info!(
        "Generating graph ({} bit) with {} nodes and {} edges",
        if use_32_bit { "32" } else { "64" },
        node_count.to_formatted_string(&Locale::en),
        edge_count.to_formatted_string(&Locale::en)
    );

    let shape = GraphShape::new(node_count, edge_count);

    let mut writer = open_output(output.as_deref())?;

    if use_32_bit {
        run::<u32, _>(&mut writer, shape, unique_by, seed)?;
    } else {
        run::<u64, _>(&mut writer, shape, unique_by, seed)?;
    }

    Ok(())
}

fn open_output(output: Option<&Path>) -> Result<BufWriter<Box<dyn Write>>, Error> {
    let writer: Box<dyn Write> = match output {
        Some(path) => {
            info!("Writing graph to: {:?}", path);
            Box::new(File::create(path)?)
        }
        None => Box::new(io::stdout().lock()),
    };

    Ok(BufWriter::new(writer))
}

fn run<NI, W>(
    writer: &mut W,
    shape: GraphShape,
    uniqueness: Uniqueness,
    seed: Option<u64>,
) -> Result<(), Error>
where
    NI: Idx,
    W: Write,
{
    let mut sampler = match seed {
        Some(seed) => EdgeSampler::<NI>::with_seed(shape, uniqueness, seed)?,
        None => EdgeSampler::<NI>::new(shape, uniqueness)?,
    };

    let start = Instant::now();
    let written = write_graph(writer, shape, &mut sampler)?;

    info!(
        "Generated {} edges in {:?}",
        written.to_formatted_string(&Locale::en),
        start.elapsed()
    );
    debug!(
        "Rejected {} draws",
        sampler.rejections().to_formatted_string(&Locale::en)
    );

    Ok(())
}

#[derive(Debug, Parser)]
#[clap(author, version, about = "Generates a random weighted directed graph")]
struct Args {
    /// Number of nodes
    #[clap(short, long, default_value_t = 10_000)]
    node_count: usize,

    /// Number of edges
    #[clap(short, long, default_value_t = 9_990_000)]
    edge_count: usize,

    /// Seed for reproducible output
    #[clap(short, long)]
    seed: Option<u64>,

    /// Which part of an edge must be unique
    #[clap(short, long, value_enum, default_value_t = Uniqueness::Pair)]
    unique_by: Uniqueness,

    /// Output file, stdout if omitted
    #[clap(short, long)]
    output: Option<PathBuf>,

    #[clap(long)]
    use_32_bit: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["graph_gen"]).unwrap();

        assert_eq!(args.node_count, 10_000);
        assert_eq!(args.edge_count, 9_990_000);
        assert_eq!(args.seed, None);
        assert_eq!(args.unique_by, Uniqueness::Pair);
        assert_eq!(args.output, None);
        assert!(!args.use_32_bit);
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "graph_gen",
            "-n",
            "3",
            "-e",
            "2",
            "--seed",
            "42",
            "--unique-by",
            "triple",
            "--output",
            "graph.txt",
            "--use-32-bit",
        ])
        .unwrap();

        assert_eq!(args.node_count, 3);
        assert_eq!(args.edge_count, 2);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.unique_by, Uniqueness::Triple);
        assert_eq!(args.output, Some(PathBuf::from("graph.txt")));
        assert!(args.use_32_bit);
    }

    #[test]
    fn run_writes_seeded_graph() {
        let shape = GraphShape::new(2, 2);
        let mut out = Vec::new();

        run::<u32, _>(&mut out, shape, Uniqueness::Pair, Some(1)).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("2"));
        assert_eq!(lines.next(), Some("2"));
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn run_into_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.txt");
        let shape = GraphShape::new(4, 5);

        let mut writer = open_output(Some(path.as_path())).unwrap();
        run::<u64, _>(&mut writer, shape, Uniqueness::Triple, Some(8)).unwrap();
        drop(writer);

        let text = std::fs::read_to_string(&path).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 7);
        assert_eq!(&lines[..2], ["4", "5"]);
    }

    #[test]
    fn output_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("graph.txt");

        assert!(matches!(
            open_output(Some(path.as_path())),
            Err(Error::IoError { .. })
        ));
    }

    #[test]
    fn run_rejects_infeasible_shape() {
        let mut out = Vec::new();

        let err = run::<u32, _>(&mut out, GraphShape::new(3, 7), Uniqueness::Pair, None)
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Infeasible {
                requested: 7,
                capacity: 6
            }
        ));
        assert!(out.is_empty());
    }
}
