use proc_macro2::TokenStream;
use quote::quote;
use syn::{ext::IdentExt, Data, DeriveInput, Error, Field, Fields};

use crate::attrs::{ContainerAttrs, FieldAttrs};

// derive_graph_fields
pub fn derive_graph_fields(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    // container attributes are shared with GraphLabels, reject typos here too
    if let Err(err) = ContainerAttrs::parse(&input.attrs) {
        return err.to_compile_error();
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = if let Data::Struct(data) = &input.data {
        if let Fields::Named(named) = &data.fields {
            &named.named
        } else {
            let err = Error::new_spanned(
                &data.fields,
                "GraphFields can only be derived for structs with named fields",
            );
            return err.to_compile_error();
        }
    } else {
        let err = Error::new_spanned(
            &input.ident,
            "GraphFields can only be derived for structs with named fields",
        );
        return err.to_compile_error();
    };

    let mut defs = Vec::with_capacity(fields.len());
    for field in fields {
        match field_def_expr(field) {
            Ok(def) => defs.push(def),
            Err(err) => return err.to_compile_error(),
        }
    }

    let type_name = ident.unraw().to_string();

    quote! {
        impl #impl_generics ::velesdb_ogm::GraphFields for #ident #ty_generics #where_clause {
            fn graph_fields() -> ::std::vec::Vec<::velesdb_ogm::FieldDef> {
                ::std::vec![#(#defs),*]
            }
        }

        impl #impl_generics ::velesdb_ogm::HasFieldType for #ident #ty_generics #where_clause {
            fn field_type() -> ::velesdb_ogm::FieldType {
                ::velesdb_ogm::FieldType::structure(#type_name)
            }
        }
    }
}

fn field_def_expr(field: &Field) -> syn::Result<TokenStream> {
    let Some(field_ident) = field.ident.as_ref() else {
        return Err(Error::new_spanned(field, "expected a named field"));
    };
    let attrs = FieldAttrs::parse(&field.attrs)?;
    let name = field_ident.unraw().to_string();
    let ty = &field.ty;

    let mut def = if attrs.embed {
        quote! {
            ::velesdb_ogm::FieldDef::embedded(
                #name,
                <#ty as ::velesdb_ogm::GraphFields>::graph_fields(),
            )
        }
    } else {
        quote! {
            ::velesdb_ogm::FieldDef::new(
                #name,
                <#ty as ::velesdb_ogm::HasFieldType>::field_type(),
            )
        }
    };

    if let Some(tag) = &attrs.tag {
        def = quote!(#def.with_tag(#tag));
    }
    if let Some(rel) = &attrs.rel {
        def = quote!(#def.with_relationship(#rel));
    }

    Ok(def)
}
