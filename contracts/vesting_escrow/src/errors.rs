use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–4) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,
    AlreadyFunded = 3,
    NotFunded = 4,

    // --- Authorization (5) ---
    NotAuthorized = 5,

    // --- Grant validation (6–9) ---
    InvalidAmount = 6,
    InvalidShares = 7,
    InvalidSchedule = 8,
    Underfunded = 9,

    // --- Lookup / arithmetic (10–11) ---
    UnknownBeneficiary = 10,
    ArithmeticOverflow = 11,
}
