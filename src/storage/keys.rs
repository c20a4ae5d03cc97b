/// Provides the fixed keys the stores persist their collections under.
/// These names are an internal contract; nothing outside the stores reads
/// them directly.
pub struct StorageKeys;

impl StorageKeys {
    /// Key holding the serialized array of user records.
    pub const USERS: &'static str = "site_users";

    /// Key holding the single serialized session object.
    pub const SESSION: &'static str = "site_session";

    /// Key holding the serialized array of contact messages.
    pub const MESSAGES: &'static str = "site_messages";
}
