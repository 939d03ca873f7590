//! Subcommands.

use clap::Subcommand;

/// Available resolution commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a name through the registry and its resolver's addr record
    Resolve {
        /// Name to resolve (e.g. "nick.eth")
        name: String,
    },

    /// Resolve a name through the extended resolver, following gateway redirects
    Offchain {
        /// Name to resolve (e.g. "1.offchainexample.eth")
        name: String,
    },

    /// Resolve a name, choosing the path from the resolver's interfaces
    Lookup {
        /// Name to resolve
        name: String,
    },

    /// Find the primary name of an address
    Reverse {
        /// 0x-prefixed address
        address: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Cli;
    use clap::Parser;

    #[test]
    fn test_each_subcommand_parses() {
        let parse = |args: &[&str]| Cli::parse_from(args).command;

        assert!(matches!(parse(&["ensgate", "resolve", "a.eth"]), Commands::Resolve { .. }));
        assert!(matches!(parse(&["ensgate", "offchain", "a.eth"]), Commands::Offchain { .. }));
        assert!(matches!(parse(&["ensgate", "lookup", "a.eth"]), Commands::Lookup { .. }));
        assert!(matches!(
            parse(&["ensgate", "reverse", "0x0000000000000000000000000000000000000001"]),
            Commands::Reverse { .. }
        ));
    }
}
