//! Derive macros for `velesdb-ogm`.
//!
//! Use through the re-exports in `velesdb_ogm` rather than directly.

use proc_macro::TokenStream;

mod attrs;
mod graph_fields;
mod graph_labels;

/// Derives `GraphFields` and `HasFieldType` for a struct with named fields.
///
/// Field attributes: `#[ogm(tag = "...")]`, `#[ogm(rel = "...")]`,
/// `#[ogm(embed)]`.
#[proc_macro_derive(GraphFields, attributes(ogm))]
pub fn derive_graph_fields(input: TokenStream) -> TokenStream {
    graph_fields::derive_graph_fields(input.into()).into()
}

/// Derives `GraphLabels`.
///
/// Container attributes: `#[ogm(label = "...")]` (repeatable, defaults to the
/// type name) and `#[ogm(edge)]`.
#[proc_macro_derive(GraphLabels, attributes(ogm))]
pub fn derive_graph_labels(input: TokenStream) -> TokenStream {
    graph_labels::derive_graph_labels(input.into()).into()
}
