use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// List and resolve the dependencies of Python source units
#[derive(Parser, Debug)]
#[command(name = "srclib-pydep")]
#[command(version)]
#[command(
    about = "List and resolve the dependencies of Python source units",
    long_about = None
)]
pub struct Args {
    /// Configuration file (defaults to ./srclib-pydep.config.yml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only print warnings and errors on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the dependencies of one source unit as raw dependency JSON
    List(ListArgs),
    /// Resolve raw dependencies to the repositories and units they refer to
    Resolve(ResolveArgs),
    /// Look up the normalized kind of a grapher symbol kind
    Kind(KindArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Repository checkout on the host, mounted at /src in the container
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Name of the source unit
    #[arg(short, long)]
    pub unit: String,

    /// Type of the source unit
    #[arg(long, default_value = "PipPackage")]
    pub unit_type: String,

    /// Unit root directory, relative to the repository root
    #[arg(long, default_value = ".")]
    pub unit_root: String,

    /// URI of the repository the unit belongs to (e.g. github.com/foo/bar)
    #[arg(short, long)]
    pub repo: String,

    /// Use previously captured lister output instead of running the container
    #[arg(long, value_name = "FILE")]
    pub lister_output: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    /// JSON array of raw dependencies (reads stdin if not specified)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// URI of the repository the dependencies were listed from
    #[arg(short, long, default_value = "")]
    pub repo: String,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct KindArgs {
    /// Symbol kind as reported by the grapher (e.g. FUNCTION)
    pub name: String,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("srclib-pydep").chain(args.iter().copied()))
    }

    #[test]
    fn test_list_defaults() {
        let args = parse(&["list", "--unit", "app", "--repo", "github.com/me/app"]).unwrap();

        let Command::List(list) = args.command else {
            panic!("expected list subcommand");
        };
        assert_eq!(list.dir, PathBuf::from("."));
        assert_eq!(list.unit, "app");
        assert_eq!(list.unit_type, "PipPackage");
        assert_eq!(list.unit_root, ".");
        assert!(list.lister_output.is_none());
        assert!(list.output.is_none());
    }

    #[test]
    fn test_list_requires_unit_and_repo() {
        assert!(parse(&["list", "--unit", "app"]).is_err());
        assert!(parse(&["list", "--repo", "github.com/me/app"]).is_err());
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let args = parse(&["resolve", "--config", "custom.yml", "-q"]).unwrap();

        assert_eq!(args.config, Some(PathBuf::from("custom.yml")));
        assert!(args.quiet);
        assert!(matches!(args.command, Command::Resolve(_)));
    }

    #[test]
    fn test_resolve_input_and_output() {
        let args = parse(&["resolve", "-i", "deps.json", "-o", "out.json"]).unwrap();

        let Command::Resolve(resolve) = args.command else {
            panic!("expected resolve subcommand");
        };
        assert_eq!(resolve.input, Some(PathBuf::from("deps.json")));
        assert_eq!(resolve.output, Some(PathBuf::from("out.json")));
        assert_eq!(resolve.repo, "");
    }

    #[test]
    fn test_kind_takes_positional_name() {
        let args = parse(&["kind", "FUNCTION"]).unwrap();

        assert!(matches!(args.command, Command::Kind(KindArgs { ref name }) if name == "FUNCTION"));
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(parse(&[]).is_err());
    }
}
