mod update_profile;

pub use update_profile::{UpdateProfile, UpdateProfileError};
