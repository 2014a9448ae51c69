/// Build version from `git describe`, or "dev" outside a checkout.
pub const GIT_VERSION: &str = env!("GIT_VERSION");
