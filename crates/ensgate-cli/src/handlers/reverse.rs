//! Reverse resolution handler.

use alloy_primitives::Address;
use ensgate_core::Lookup;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Find the primary name of `address` and return it.
pub async fn execute(ctx: &CliContext, address: &str) -> Result<String, CliError> {
    let address = address
        .trim()
        .parse::<Address>()
        .map_err(|e| CliError::Arguments(format!("invalid address '{}': {e}", address.trim())))?;

    match ctx.resolver().resolve_reverse(address).await? {
        Lookup::Found(name) => Ok(name),
        Lookup::Absent(absence) => Err(CliError::NoResult(format!("{address}: {absence}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::context;

    #[test]
    fn test_bad_address_is_argument_error() {
        let ctx = context();
        let err = tokio_test::block_on(execute(&ctx, "0xnothex")).unwrap_err();
        assert!(matches!(err, CliError::Arguments(_)));
    }

    #[test]
    fn test_missing_reverse_record() {
        // The stub chain answers recordExists with false.
        let ctx = context();
        let err = tokio_test::block_on(execute(
            &ctx,
            " 0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045 ",
        ))
        .unwrap_err();
        assert!(matches!(err, CliError::NoResult(ref msg) if msg.ends_with("no reverse record")));
    }
}
