//! Command implementations for the scriptex CLI.
//!
//! - [`extract`] - Read a file and print each `<script>` block's contents

pub mod extract;

pub use extract::execute as extract_execute;
