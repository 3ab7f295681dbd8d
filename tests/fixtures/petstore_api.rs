//! Sample api source tree content used by the integration tests.

pub struct PetResource {
    pub id: u64,
    pub name: String,
}

pub struct StoreResource {
    pub open: bool,
}

pub enum PetStatus {
    Available,
    Pending,
    Sold,
}

pub fn not_a_type() {}
