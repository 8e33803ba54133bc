pub mod current_user;
pub mod fixture_id;
pub mod validated_json;

pub use current_user::AuthedUser;
pub use fixture_id::FixtureId;
pub use validated_json::ValidatedJson;
