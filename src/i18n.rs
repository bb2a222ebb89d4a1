//! Seam to the translation tables, which live outside this crate.
//!
//! View models store translation keys, never rendered strings; the
//! embedding UI resolves them through a [`Translate`] implementation.

/// Pure lookup, assumed total over the key set listed in [`keys`].
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Translation keys produced by this crate.
pub mod keys {
    pub const INTERNAL_SERVER_ERROR: &str = "internal_server_error";
    pub const GAMEHISTORY_NOT_FOUND: &str = "gamehistory_not_found";
    pub const TRY_AGAIN_IN_A_MINUTE: &str = "try_again_in_a_minute";
    pub const N_HOURS_AGO: &str = "n_hours_ago";
    pub const YESTERDAY: &str = "yesterday";
}
