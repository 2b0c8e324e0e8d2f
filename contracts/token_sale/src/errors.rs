use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Configuration (1–3) ---
    InvalidConfig = 1,
    InvalidAmount = 2,
    LengthMismatch = 3,

    // --- Sequence (4–9) ---
    NotInitialized = 4,
    EmissionRatesLocked = 5,
    EmissionRatesNotSet = 6,
    SharesNotDistributed = 7,
    NotBegun = 8,
    SalePaused = 9,

    // --- Authorization (10) ---
    NotAuthorized = 10,

    // --- Capacity (11–13) ---
    PoolExhausted = 11,
    LimitExceeded = 12,
    BelowMinContribution = 13,

    // --- Range (14) ---
    OutOfRange = 14,

    // --- Timing (15–17) ---
    WindowNotClosed = 15,
    WindowClosed = 16,
    NothingToCollect = 17,

    // --- Already done (18–23) ---
    AlreadyInitialized = 18,
    AlreadyDistributed = 19,
    AlreadyBegun = 20,
    AlreadySwept = 21,
    TransferAlreadyPaused = 22,
    TransferNotPaused = 23,

    // --- Funds (24–25) ---
    NonZeroBalance = 24,
    ArithmeticOverflow = 25,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    Configuration,
    Sequence,
    Authorization,
    Capacity,
    Range,
    Timing,
    AlreadyDone,
    Funds,
}

/// Which class of precondition a failure violated.
pub fn category(error: Error) -> ErrorCategory {
    match error {
        Error::InvalidConfig | Error::InvalidAmount | Error::LengthMismatch => {
            ErrorCategory::Configuration
        }
        Error::NotInitialized
        | Error::EmissionRatesLocked
        | Error::EmissionRatesNotSet
        | Error::SharesNotDistributed
        | Error::NotBegun
        | Error::SalePaused => ErrorCategory::Sequence,
        Error::NotAuthorized => ErrorCategory::Authorization,
        Error::PoolExhausted | Error::LimitExceeded | Error::BelowMinContribution => {
            ErrorCategory::Capacity
        }
        Error::OutOfRange => ErrorCategory::Range,
        Error::WindowNotClosed | Error::WindowClosed | Error::NothingToCollect => {
            ErrorCategory::Timing
        }
        Error::AlreadyInitialized
        | Error::AlreadyDistributed
        | Error::AlreadyBegun
        | Error::AlreadySwept
        | Error::TransferAlreadyPaused
        | Error::TransferNotPaused => ErrorCategory::AlreadyDone,
        Error::NonZeroBalance | Error::ArithmeticOverflow => ErrorCategory::Funds,
    }
}
