//! Forward resolution handlers.

use alloy_primitives::Address;
use ensgate_core::Lookup;
use tracing::info;

use super::normalize;
use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Which forward path to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardPath {
    /// Registry, resolver, `addr(node)`.
    Plain,
    /// Extended resolver with gateway redirects.
    Offchain,
    /// Chosen from the resolver's advertised interfaces.
    Automatic,
}

/// Resolve `name` and return the printed address.
pub async fn execute(ctx: &CliContext, name: &str, path: ForwardPath) -> Result<String, CliError> {
    let name = normalize(name);
    let resolver = ctx.resolver();

    let lookup = match path {
        ForwardPath::Plain => resolver.resolve_forward(&name).await?,
        ForwardPath::Offchain => resolver.resolve_gateway_redirect(&name).await?,
        ForwardPath::Automatic => resolver.resolve_address(&name).await?,
    };
    info!("{name} ({path:?}): {lookup:?}");

    render(&name, lookup)
}

fn render(name: &str, lookup: Lookup<Address>) -> Result<String, CliError> {
    match lookup {
        Lookup::Found(address) => Ok(address.to_checksum(None)),
        Lookup::Absent(absence) => Err(CliError::NoResult(format!("{name}: {absence}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::context;
    use alloy_primitives::address;
    use ensgate_core::Absence;

    #[test]
    fn test_render_found_is_checksummed() {
        let rendered = render(
            "vitalik.eth",
            Lookup::Found(address!("d8da6bf26964af9d7eed9e03e53415d37aa96045")),
        )
        .unwrap();
        assert_eq!(rendered, "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
    }

    #[test]
    fn test_render_absent_is_no_result() {
        let err = render("nobody.eth", Lookup::Absent(Absence::ResolverUnset)).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "nobody.eth: no resolver set");
    }

    #[test]
    fn test_unset_name_through_every_path() {
        let ctx = context();
        for path in [ForwardPath::Plain, ForwardPath::Offchain, ForwardPath::Automatic] {
            let err = tokio_test::block_on(execute(&ctx, "  Nobody.ETH ", path)).unwrap_err();
            assert!(matches!(err, CliError::NoResult(ref msg) if msg.starts_with("nobody.eth")));
        }
    }

    #[test]
    fn test_unnormalizable_name_is_argument_error() {
        let ctx = context();
        let err = tokio_test::block_on(execute(&ctx, "bad..eth", ForwardPath::Plain)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
