/// Bold emphasis, `**like this**`.
pub struct Bold;

impl Bold {
    /// Opening and closing delimiter.
    pub const DELIM: &'static str = "**";
}
