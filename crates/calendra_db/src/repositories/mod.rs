//! Repository implementations for event types and bookings.

pub mod booking_memory;
pub mod booking_sql;
pub mod event_type_memory;
pub mod event_type_sql;

pub use booking_memory::MemoryBookingRepository;
pub use booking_sql::SqlBookingRepository;
pub use event_type_memory::MemoryEventTypeRepository;
pub use event_type_sql::SqlEventTypeRepository;
