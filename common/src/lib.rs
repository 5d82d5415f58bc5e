pub mod banner;
pub mod config;
pub mod effects;
pub mod form;
pub mod route;
pub mod theme;

// string validation
//
// page ids end up in fragment urls, so we keep them to a conservative charset instead of
// trusting whatever shows up in the location fragment
pub const PAGE_ID_REGEX: &str = r"^[a-zA-Z0-9_-]{1,64}$";

// the "valid e-mail address" grammar browsers apply to <input type="email">
pub const EMAIL_REGEX: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";
