// tests/integration/mod.rs
mod sale_lifecycle;
mod vesting_schedule;
