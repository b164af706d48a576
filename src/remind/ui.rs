/// Yes/no confirmation seam. Core code never talks to a terminal: the binary
/// supplies an interactive implementation, tests supply scripted ones.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}
