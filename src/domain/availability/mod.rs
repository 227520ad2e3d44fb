//! Weekly availability domain: the windows a user can be booked in.

mod slot;

pub use slot::{AvailabilitySlot, TimeOfDay};
