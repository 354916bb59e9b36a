//! Chainlink VRF coordinator mock bindings.
//!
//! Surface of `VRFCoordinatorV2Mock` from `@chainlink/contracts`, the
//! coordinator stand-in deployed on development chains. The constructor call
//! type doubles as the ABI encoder for the mock's deployment arguments.

use alloy_sol_types::sol;

sol! {
    /// Test double for the Chainlink VRF v2 coordinator.
    ///
    /// Subscriptions are plain in-contract bookkeeping and fulfillment is
    /// driven manually by the caller, which is what local test flows want.
    #[sol(rpc)]
    contract VRFCoordinatorV2Mock {
        /// `_baseFee` is the flat LINK fee per request (in juels);
        /// `_gasPriceLink` converts fulfillment gas into LINK owed.
        constructor(uint96 _baseFee, uint96 _gasPriceLink);

        /// Emitted when a subscription is created
        event SubscriptionCreated(uint64 indexed subId, address owner);

        /// Emitted when a subscription balance changes
        event SubscriptionFunded(uint64 indexed subId, uint256 oldBalance, uint256 newBalance);

        /// Emitted when randomness is requested against a subscription
        event RandomWordsRequested(
            bytes32 indexed keyHash,
            uint256 requestId,
            uint256 preSeed,
            uint64 indexed subId,
            uint16 minimumRequestConfirmations,
            uint32 callbackGasLimit,
            uint32 numWords,
            address indexed sender
        );

        /// Emitted when a pending request is fulfilled
        event RandomWordsFulfilled(uint256 indexed requestId, uint256 outputSeed, uint96 payment, bool success);

        /// Create a new subscription owned by the caller
        function createSubscription() external returns (uint64);

        /// Credit a subscription with LINK (mock accounting only)
        function fundSubscription(uint64 _subId, uint96 _amount) external;

        /// Authorize a consumer contract on a subscription
        function addConsumer(uint64 _subId, address _consumer) external;

        /// Request random words against a funded subscription
        function requestRandomWords(
            bytes32 _keyHash,
            uint64 _subId,
            uint16 _minimumRequestConfirmations,
            uint32 _callbackGasLimit,
            uint32 _numWords
        ) external returns (uint256);

        /// Fulfill a pending request, calling back into the consumer
        function fulfillRandomWords(uint256 _requestId, address _consumer) external;

        /// Balance, request count, owner and consumers of a subscription
        function getSubscription(uint64 _subId)
            external view returns (uint96 balance, uint64 reqCount, address owner, address[] memory consumers);
    }
}
