use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::storage_types::RegistrationMode;

pub const INITIALIZED: Symbol = symbol_short!("init");
pub const GENERATOR_REGISTERED: Symbol = symbol_short!("gen_reg");
pub const GENERATOR_VERIFIED: Symbol = symbol_short!("gen_vrf");
pub const RECORD_CREATED: Symbol = symbol_short!("rec_new");
pub const RECORD_VERIFIED: Symbol = symbol_short!("rec_vrf");
pub const ADMIN_TRANSFERRED: Symbol = symbol_short!("adm_xfer");
pub const MODE_CHANGED: Symbol = symbol_short!("reg_mode");

pub fn emit_initialized(e: &Env, admin: &Address) {
    e.events().publish((INITIALIZED,), admin.clone());
}

pub fn emit_generator_registered(e: &Env, generator: &Address, capacity: u64) {
    e.events()
        .publish((GENERATOR_REGISTERED, generator.clone()), capacity);
}

pub fn emit_generator_verified(e: &Env, generator: &Address, admin: &Address) {
    e.events()
        .publish((GENERATOR_VERIFIED, generator.clone()), admin.clone());
}

/// Topics `["rec_new", generator]`, data `(record_id, amount)`.
pub fn emit_record_created(e: &Env, generator: &Address, record_id: u64, amount: u64) {
    e.events()
        .publish((RECORD_CREATED, generator.clone()), (record_id, amount));
}

pub fn emit_record_verified(e: &Env, record_id: u64, admin: &Address) {
    e.events().publish((RECORD_VERIFIED, record_id), admin.clone());
}

pub fn emit_admin_transferred(e: &Env, old_admin: &Address, new_admin: &Address) {
    e.events()
        .publish((ADMIN_TRANSFERRED, old_admin.clone()), new_admin.clone());
}

pub fn emit_registration_mode(e: &Env, mode: RegistrationMode) {
    e.events().publish((MODE_CHANGED,), mode);
}
