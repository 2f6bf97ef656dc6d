use soroban_sdk::{contracttype, Address, String};

/// A registered energy producer. Keyed by its own address.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Generator {
    pub name: String,
    pub location: String,
    pub capacity: u64,
    pub verified: bool,
}

/// A single self-reported generation event.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenerationRecord {
    pub generator: Address,
    pub amount: u64,
    /// Ledger sequence at the time the record was created.
    pub timestamp: u32,
    pub verified: bool,
}

/// How new generators may be onboarded.
///
/// `SelfRegistration` keys every registration by the calling admin's own
/// address. `AdminAssigned` additionally lets the admin register any address
/// through `register_generator_for`.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RegistrationMode {
    SelfRegistration = 0,
    AdminAssigned = 1,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    RecordCounter,
    RegistrationMode,
    Generator(Address),
    Record(u64),
}
