//! Client-side view state.
//!
//! DESIGN
//! ======
//! Each view owns one plain state struct with its transition methods. The
//! components wrap them in signals; the structs themselves know nothing
//! about Leptos.

pub mod create_form;
pub mod feed;
pub mod roadmap_list;
