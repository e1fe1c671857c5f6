/* src/head/rust/src/lib.rs */

mod escape;
mod inject;
mod render;

pub use escape::{escape_html, escape_json_for_script};
pub use inject::{inject_before_head_close, inject_head_meta, inject_html_lang, inject_page_head};
pub use render::{json_ld_script, json_ld_scripts, render_head_meta};

#[cfg(test)]
mod tests;
