#![no_std]
use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String};

mod events;
mod storage;
mod storage_types;
pub use storage_types::{GenerationRecord, Generator, RegistrationMode};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    RecordIdOverflow = 3,
    Unauthorized = 403,
    NotFound = 404,
}

impl Error {
    /// Numeric code surfaced to clients as `Error(Contract, #code)`.
    pub fn code(self) -> u32 {
        self as u32
    }
}

/// Authenticates `caller` and checks it is the current admin.
fn require_admin(e: &Env, caller: &Address) -> Result<Address, Error> {
    caller.require_auth();
    let admin = storage::read_admin(e).ok_or(Error::NotInitialized)?;
    if *caller != admin {
        return Err(Error::Unauthorized);
    }
    Ok(admin)
}

fn register(e: &Env, generator: &Address, name: String, location: String, capacity: u64) {
    let info = Generator {
        name,
        location,
        capacity,
        verified: false,
    };
    storage::write_generator(e, generator, &info);
    storage::bump_instance(e);
    events::emit_generator_registered(e, generator, capacity);
}

#[contract]
pub struct GenerationRegistry;

#[contractimpl]
impl GenerationRegistry {
    /// Initialize the registry with its first admin, normally the deployer.
    /// Only can be called once.
    pub fn initialize(e: Env, admin: Address) -> Result<(), Error> {
        if storage::has_admin(&e) {
            return Err(Error::AlreadyInitialized);
        }

        storage::write_admin(&e, &admin);
        storage::write_registration_mode(&e, RegistrationMode::SelfRegistration);
        storage::bump_instance(&e);
        events::emit_initialized(&e, &admin);
        Ok(())
    }

    /// Register (or re-register) the calling admin's own address as a
    /// generator. Re-registration overwrites the entry and clears `verified`.
    ///
    /// The entry is keyed by `caller`, so under `SelfRegistration` only the
    /// admin's own address can be onboarded. See `register_generator_for`.
    ///
    /// # Arguments
    /// * `caller` - Must be the current admin
    /// * `name` - Display name of the generation facility
    /// * `location` - Free-form location description
    /// * `capacity` - Rated generation capacity
    pub fn register_generator(
        e: Env,
        caller: Address,
        name: String,
        location: String,
        capacity: u64,
    ) -> Result<(), Error> {
        require_admin(&e, &caller)?;
        register(&e, &caller, name, location, capacity);
        Ok(())
    }

    /// Register an arbitrary `generator` address on the admin's behalf.
    /// Only available when the registration mode is `AdminAssigned`.
    pub fn register_generator_for(
        e: Env,
        caller: Address,
        generator: Address,
        name: String,
        location: String,
        capacity: u64,
    ) -> Result<(), Error> {
        require_admin(&e, &caller)?;
        if storage::read_registration_mode(&e) != RegistrationMode::AdminAssigned {
            return Err(Error::Unauthorized);
        }
        register(&e, &generator, name, location, capacity);
        Ok(())
    }

    /// Mark a registered generator as verified. Idempotent.
    pub fn verify_generator(e: Env, caller: Address, generator: Address) -> Result<(), Error> {
        let admin = require_admin(&e, &caller)?;

        let mut info = storage::read_generator(&e, &generator).ok_or(Error::NotFound)?;
        info.verified = true;
        storage::write_generator(&e, &generator, &info);
        storage::bump_instance(&e);

        events::emit_generator_verified(&e, &generator, &admin);
        Ok(())
    }

    /// Report `amount` of generated energy. The caller must be a verified
    /// generator. Returns the new record id; ids start at 1.
    pub fn record_generation(e: Env, caller: Address, amount: u64) -> Result<u64, Error> {
        caller.require_auth();

        let info = storage::read_generator(&e, &caller).ok_or(Error::NotFound)?;
        if !info.verified {
            return Err(Error::Unauthorized);
        }
        storage::bump_generator(&e, &caller);

        let record_id = storage::next_record_id(&e).ok_or(Error::RecordIdOverflow)?;
        let record = GenerationRecord {
            generator: caller.clone(),
            amount,
            timestamp: e.ledger().sequence(),
            verified: false,
        };
        storage::write_record(&e, record_id, &record);
        storage::bump_instance(&e);

        events::emit_record_created(&e, &caller, record_id, amount);
        Ok(record_id)
    }

    /// Mark a generation record as verified. Idempotent.
    pub fn verify_generation(e: Env, caller: Address, record_id: u64) -> Result<(), Error> {
        let admin = require_admin(&e, &caller)?;

        let mut record = storage::read_record(&e, record_id).ok_or(Error::NotFound)?;
        record.verified = true;
        storage::write_record(&e, record_id, &record);
        storage::bump_instance(&e);

        events::emit_record_verified(&e, record_id, &admin);
        Ok(())
    }

    /// Look up a generation record by id, `None` if it was never created.
    pub fn get_generation_record(e: Env, record_id: u64) -> Option<GenerationRecord> {
        storage::read_record(&e, record_id)
    }

    /// Look up the generator registered under `generator`, if any.
    pub fn get_generator_info(e: Env, generator: Address) -> Option<Generator> {
        storage::read_generator(&e, &generator)
    }

    /// Hand the admin role to `new_admin`. No checks are made on the new
    /// address; the previous admin loses its privileges immediately.
    pub fn transfer_admin(e: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        let admin = require_admin(&e, &caller)?;

        storage::write_admin(&e, &new_admin);
        storage::bump_instance(&e);

        events::emit_admin_transferred(&e, &admin, &new_admin);
        Ok(())
    }

    /// Current admin, `None` until the registry is initialized.
    pub fn get_admin(e: Env) -> Option<Address> {
        storage::read_admin(&e)
    }

    /// Total number of generation records ever created.
    pub fn get_record_count(e: Env) -> u64 {
        storage::read_record_count(&e)
    }

    /// Choose how generators are onboarded. Only callable by admin.
    ///
    /// # Arguments
    /// * `caller` - Must be the current admin
    /// * `mode` - `AdminAssigned` enables `register_generator_for`
    pub fn set_registration_mode(
        e: Env,
        caller: Address,
        mode: RegistrationMode,
    ) -> Result<(), Error> {
        require_admin(&e, &caller)?;

        storage::write_registration_mode(&e, mode);
        storage::bump_instance(&e);

        events::emit_registration_mode(&e, mode);
        Ok(())
    }

    /// Current registration mode; `SelfRegistration` unless changed.
    pub fn get_registration_mode(e: Env) -> RegistrationMode {
        storage::read_registration_mode(&e)
    }
}
