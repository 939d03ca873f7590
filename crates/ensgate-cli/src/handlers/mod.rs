//! Command handlers.
//!
//! Handlers normalize terminal input, call the resolver and turn the outcome
//! into a line of output or a [`crate::CliError`].

pub mod resolve;
pub mod reverse;

/// Light normalization of user input: trim and ASCII-lowercase.
///
/// Full UTS-46 normalization is not attempted; names that still fail to
/// parse are rejected by the resolver.
pub fn normalize(input: &str) -> String {
    input.trim().to_ascii_lowercase()
}


#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use alloy_primitives::{Address, Bytes};
    use async_trait::async_trait;
    use ensgate_core::{
        CallError, ChainReader, GatewayPort, GatewayPortError, GatewayRequest, GatewayResponse,
        NameResolver, ResolverSettings,
    };

    use crate::bootstrap::CliContext;

    /// A chain where every read returns a zero word: no resolvers, no records.
    struct EmptyChain;

    #[async_trait]
    impl ChainReader for EmptyChain {
        async fn call(&self, _to: Address, _data: Bytes) -> Result<Bytes, CallError> {
            Ok(Bytes::from(vec![0u8; 32]))
        }
    }

    struct NoGateway;

    #[async_trait]
    impl GatewayPort for NoGateway {
        async fn fetch(
            &self,
            request: &GatewayRequest,
        ) -> Result<GatewayResponse, GatewayPortError> {
            Err(GatewayPortError::Unreachable {
                url: request.url_template.clone(),
                message: "offline".to_string(),
            })
        }
    }

    pub fn context() -> CliContext {
        CliContext::new(NameResolver::new(
            Arc::new(EmptyChain),
            Arc::new(NoGateway),
            ResolverSettings::new(),
        ))
    }
}
