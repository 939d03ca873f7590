//! Scripted chain double for service tests.

use std::collections::HashMap;
use std::sync::Mutex;

use alloy_primitives::{Address, Bytes};
use alloy_sol_types::{SolCall, SolValue};
use async_trait::async_trait;

use crate::ports::{CallError, ChainReader};

/// ABI-encode a single return value the way a contract would.
pub fn encode_return<T: SolValue>(value: T) -> Bytes {
    Bytes::from((value,).abi_encode_params())
}

/// A chain that answers from a table keyed by `(to, calldata)`.
///
/// Unknown calls revert without data, like a contract missing the function.
#[derive(Default)]
pub struct FakeChain {
    responses: HashMap<(Address, Bytes), Result<Bytes, CallError>>,
    calls: Mutex<Vec<(Address, Bytes)>>,
}

impl FakeChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `call` on `to` with `result`.
    pub fn on<C: SolCall>(self, to: Address, call: &C, result: Result<Bytes, CallError>) -> Self {
        self.on_raw(to, Bytes::from(call.abi_encode()), result)
    }

    /// Answer raw calldata on `to` with `result`.
    pub fn on_raw(mut self, to: Address, data: Bytes, result: Result<Bytes, CallError>) -> Self {
        self.responses.insert((to, data), result);
        self
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ChainReader for FakeChain {
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, CallError> {
        self.calls.lock().unwrap().push((to, data.clone()));
        self.responses
            .get(&(to, data))
            .cloned()
            .unwrap_or(Err(CallError::Reverted { data: None }))
    }
}
