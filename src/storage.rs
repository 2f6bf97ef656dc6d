use soroban_sdk::{Address, Env};

use crate::storage_types::{DataKey, GenerationRecord, Generator, RegistrationMode};

// Ledgers close roughly every 5 seconds.
pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const ENTRY_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub(crate) const ENTRY_LIFETIME_THRESHOLD: u32 = ENTRY_BUMP_AMOUNT - 7 * DAY_IN_LEDGERS;

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_entry(e: &Env, key: &DataKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
}

pub fn has_admin(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Admin)
}

pub fn read_admin(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::Admin)
}

pub fn write_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_registration_mode(e: &Env) -> RegistrationMode {
    e.storage()
        .instance()
        .get(&DataKey::RegistrationMode)
        .unwrap_or(RegistrationMode::SelfRegistration)
}

pub fn write_registration_mode(e: &Env, mode: RegistrationMode) {
    e.storage().instance().set(&DataKey::RegistrationMode, &mode);
}

pub fn read_record_count(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::RecordCounter)
        .unwrap_or(0)
}

/// Pre-increments the registry-wide counter and returns the new id, so the
/// first record ever created gets id 1. Returns `None` once ids are exhausted;
/// the counter is left untouched in that case.
pub fn next_record_id(e: &Env) -> Option<u64> {
    let id = read_record_count(e).checked_add(1)?;
    e.storage().instance().set(&DataKey::RecordCounter, &id);
    Some(id)
}

pub fn read_generator(e: &Env, generator: &Address) -> Option<Generator> {
    e.storage()
        .persistent()
        .get(&DataKey::Generator(generator.clone()))
}

/// Keeps an active generator's entry alive without rewriting it.
pub fn bump_generator(e: &Env, generator: &Address) {
    bump_entry(e, &DataKey::Generator(generator.clone()));
}

pub fn write_generator(e: &Env, generator: &Address, info: &Generator) {
    let key = DataKey::Generator(generator.clone());
    e.storage().persistent().set(&key, info);
    bump_entry(e, &key);
}

pub fn read_record(e: &Env, record_id: u64) -> Option<GenerationRecord> {
    e.storage().persistent().get(&DataKey::Record(record_id))
}

pub fn write_record(e: &Env, record_id: u64, record: &GenerationRecord) {
    let key = DataKey::Record(record_id);
    e.storage().persistent().set(&key, record);
    bump_entry(e, &key);
}
