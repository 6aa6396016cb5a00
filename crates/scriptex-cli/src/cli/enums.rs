use clap::ValueEnum;
use scriptex::UnterminatedPolicy;

/// Policy for an opening `<script>` tag without a closing tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Unterminated {
    /// Drop the dangling block silently
    Drop,
    /// Print the dangling block's remaining text
    Emit,
    /// Fail with an error
    Error,
}

impl From<Unterminated> for UnterminatedPolicy {
    fn from(value: Unterminated) -> Self {
        match value {
            Unterminated::Drop => UnterminatedPolicy::Drop,
            Unterminated::Emit => UnterminatedPolicy::Emit,
            Unterminated::Error => UnterminatedPolicy::Error,
        }
    }
}
