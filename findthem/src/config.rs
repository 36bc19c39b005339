/// The construction-time option set beyond the matcher backends themselves
/// (which are constructor parameters, not config fields — see
/// [`crate::Finder::new`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinderConfig {
    pub case_sensitive: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self { case_sensitive: false }
    }
}
