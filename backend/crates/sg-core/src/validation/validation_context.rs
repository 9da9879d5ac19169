/// Which flow a goal list comes from.
///
/// The creation form may omit a goal's type (it defaults to
/// `Dev Complete`); the goal-management flow always sends the type it
/// displayed, so a missing type there is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationContext {
    Create,
    Replace,
}
