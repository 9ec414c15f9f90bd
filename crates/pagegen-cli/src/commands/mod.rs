//! Command implementations for the pagegen CLI
//!
//! Each command lives in its own submodule: `generate` drives the full
//! pipeline and exports HTML, `fetch` previews the scrape step alone.

mod fetch;
mod generate;

pub use fetch::execute as preview_fetch;
pub use generate::execute as generate_page;
