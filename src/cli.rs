use clap::Parser;

/// Quick Install - install npm packages without remembering package manager syntax
#[derive(Parser, Debug)]
#[command(name = "quickinstall")]
#[command(version)]
pub struct Cli {
    /// Log commands, intermediate values and installer output
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_defaults_to_off() {
        let cli = Cli::try_parse_from(["quickinstall"]).unwrap();
        assert!(!cli.debug);
    }

    #[test]
    fn short_and_long_debug() {
        assert!(Cli::try_parse_from(["quickinstall", "-d"]).unwrap().debug);
        assert!(Cli::try_parse_from(["quickinstall", "--debug"]).unwrap().debug);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["quickinstall", "lodash"]).is_err());
    }
}
