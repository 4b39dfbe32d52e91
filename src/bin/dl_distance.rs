//! Command-line driver: print the Damerau-Levenshtein distance of two strings.
//!
//! ```text
//! dl-distance "O'Callaghan" OCallaghan
//! dl-distance foo bar --matrix
//! dl-distance kitten sitting --sub 2 --distance-only
//! ```

use anyhow::Context;
use clap::Parser;
use damerau_dp::utils::code_points;
use damerau_dp::{osa_distance, Cost, CostModel, DistanceEngine, Ordinal};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(
    name = "dl-distance",
    about = "Damerau-Levenshtein distance with configurable operation costs",
    version
)]
struct Cli {
    /// Source string
    a: String,

    /// Target string
    b: String,

    /// Cost of inserting a character into the source
    #[arg(long = "ins", default_value_t = 1, allow_negative_numbers = true)]
    insert: Cost,

    /// Cost of deleting a character from the source
    #[arg(long = "del", default_value_t = 1, allow_negative_numbers = true)]
    delete: Cost,

    /// Cost of substituting one character for another
    #[arg(long = "sub", default_value_t = 1, allow_negative_numbers = true)]
    substitute: Cost,

    /// Cost of swapping two adjacent characters
    #[arg(long = "trans", default_value_t = 1, allow_negative_numbers = true)]
    transpose: Cost,

    /// Also print the dynamic-programming matrix
    #[arg(long, conflicts_with = "distance_only")]
    matrix: bool,

    /// Only compute the distance, keeping three rows instead of the full matrix
    #[arg(long)]
    distance_only: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("installing log subscriber")?;

    print!("{}", report(&cli)?);
    Ok(())
}

/// Build everything the command prints for `cli`.
fn report(cli: &Cli) -> anyhow::Result<String> {
    let costs = CostModel::new(cli.insert, cli.delete, cli.substitute, cli.transpose)
        .context("invalid cost model")?;
    tracing::debug!(?costs, "cost model");

    if cli.distance_only {
        let distance = osa_distance(&code_points(&cli.a), &code_points(&cli.b), &costs, &Ordinal);
        return Ok(format!("{distance}\n"));
    }

    let mut engine = DistanceEngine::with_costs(&cli.a, &cli.b, costs);
    let mut out = format!(
        "distance: {}\nmaximal distance: {}\nrelative distance: {:.6}\n",
        engine.similarity(),
        engine.maximal_distance(),
        engine.relative_distance()
    );
    if cli.matrix {
        out.push_str(&engine.display_matrix());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use damerau_dp::{EditError, EditOp};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("dl-distance").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn flags_map_onto_costs() {
        let cli = parse(&["a", "b", "--ins", "2", "--del", "3", "--sub", "4", "--trans", "5"]);
        assert_eq!(
            (cli.insert, cli.delete, cli.substitute, cli.transpose),
            (2, 3, 4, 5)
        );
        let cli = parse(&["a", "b"]);
        assert_eq!(
            (cli.insert, cli.delete, cli.substitute, cli.transpose),
            (1, 1, 1, 1)
        );
    }

    #[test]
    fn default_report() {
        let out = report(&parse(&["qw", "wq"])).unwrap();
        assert_eq!(
            out,
            "distance: 1\nmaximal distance: 2\nrelative distance: 0.500000\n"
        );
    }

    #[test]
    fn costs_reach_the_engine() {
        let out = report(&parse(&["foo", "fooo", "--ins", "2"])).unwrap();
        assert!(out.starts_with("distance: 2\nmaximal distance: 5\n"), "{out}");
    }

    #[test]
    fn matrix_flag_appends_rendering() {
        let out = report(&parse(&["foo", "bar", "--matrix"])).unwrap();
        assert!(out.ends_with("  foo\n 0123\nb1123\na2223\nr3333\n"), "{out}");
    }

    #[test]
    fn distance_only_prints_just_the_number() {
        let out = report(&parse(&["пионер", "плеер", "--distance-only"])).unwrap();
        assert_eq!(out, "3\n");
    }

    #[test]
    fn matrix_conflicts_with_distance_only() {
        let err = Cli::try_parse_from(["dl-distance", "foo", "bar", "--matrix", "--distance-only"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn negative_cost_parses_but_is_rejected() {
        let cli = parse(&["a", "b", "--ins", "-1"]);
        assert_eq!(cli.insert, -1);
        let err = report(&cli).unwrap_err();
        assert_eq!(
            err.downcast_ref::<EditError>(),
            Some(&EditError::NegativeCost {
                op: EditOp::Insert,
                value: -1
            })
        );
    }
}
