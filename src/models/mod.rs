pub mod profile;
pub mod workout;

pub use profile::UserProfile;
pub use workout::WorkoutRecord;
