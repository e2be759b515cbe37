//! Subcommands of the `jsonlex` binary that do not scan input.
pub mod generate;
