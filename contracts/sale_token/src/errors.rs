use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    // --- Lifecycle ---
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // --- Authorization ---
    NotAuthorized = 3,

    // --- Transfers ---
    InvalidAmount = 4,
    InsufficientBalance = 5,
    TransferPaused = 6,

    // --- Pause switch ---
    AlreadyPaused = 7,
    NotPaused = 8,
}
