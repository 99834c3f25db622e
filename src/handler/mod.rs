pub mod contracts;
pub mod docs;
pub mod feedback;
pub mod properties;
pub mod users;
