//! Solidity ABI fragments for the registry, resolvers and the off-chain lookup error.

#![allow(missing_docs)]

alloy_sol_types::sol! {
    // Registry
    function resolver(bytes32 node) external view returns (address);
    function recordExists(bytes32 node) external view returns (bool);

    // Resolver
    function supportsInterface(bytes4 interfaceID) external view returns (bool);
    function addr(bytes32 node) external view returns (address);
    function name(bytes32 node) external view returns (string);

    // Extended resolver (ENSIP-10) and its verification callback
    function resolve(bytes name, bytes data) external view returns (bytes);
    function resolveWithProof(bytes response, bytes extraData) external view returns (bytes);

    // EIP-3668 redirect
    error OffchainLookup(
        address sender,
        string[] urls,
        bytes callData,
        bytes4 callbackFunction,
        bytes extraData
    );
}
