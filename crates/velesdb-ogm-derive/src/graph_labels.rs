use proc_macro2::TokenStream;
use quote::quote;
use syn::{ext::IdentExt, DeriveInput};

use crate::attrs::ContainerAttrs;

pub fn derive_graph_labels(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let attrs = match ContainerAttrs::parse(&input.attrs) {
        Ok(attrs) => attrs,
        Err(err) => return err.to_compile_error(),
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let labels = if attrs.labels.is_empty() {
        let name = ident.unraw().to_string();
        vec![quote!(#name)]
    } else {
        attrs.labels.iter().map(|label| quote!(#label)).collect()
    };

    let kind = if attrs.edge {
        quote!(::velesdb_ogm::EntityKind::Edge)
    } else {
        quote!(::velesdb_ogm::EntityKind::Vertex)
    };

    quote! {
        impl #impl_generics ::velesdb_ogm::GraphLabels for #ident #ty_generics #where_clause {
            fn labels() -> ::std::vec::Vec<::std::string::String> {
                ::std::vec![#(::std::string::String::from(#labels)),*]
            }

            fn kind() -> ::velesdb_ogm::EntityKind {
                #kind
            }
        }
    }
}
