use syn::{Attribute, LitStr, Result};

const ATTR: &str = "ogm";

///
/// ContainerAttrs
///

#[derive(Default)]
pub struct ContainerAttrs {
    pub labels: Vec<LitStr>,
    pub edge: bool,
}

impl ContainerAttrs {
    pub fn parse(attrs: &[Attribute]) -> Result<Self> {
        let mut out = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("label") {
                    let label: LitStr = meta.value()?.parse()?;
                    if label.value().is_empty() {
                        return Err(syn::Error::new_spanned(&label, "label must not be empty"));
                    }
                    out.labels.push(label);
                    Ok(())
                } else if meta.path.is_ident("edge") {
                    out.edge = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown ogm container attribute, expected `label` or `edge`"))
                }
            })?;
        }

        Ok(out)
    }
}

///
/// FieldAttrs
///

#[derive(Default)]
pub struct FieldAttrs {
    pub tag: Option<LitStr>,
    pub rel: Option<LitStr>,
    pub embed: bool,
}

impl FieldAttrs {
    pub fn parse(attrs: &[Attribute]) -> Result<Self> {
        let mut out = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("tag") {
                    set_once(&mut out.tag, meta.value()?.parse()?, "tag")
                } else if meta.path.is_ident("rel") {
                    set_once(&mut out.rel, meta.value()?.parse()?, "rel")
                } else if meta.path.is_ident("embed") {
                    out.embed = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown ogm field attribute, expected `tag`, `rel` or `embed`"))
                }
            })?;
        }

        // only the ignore marker means anything on an embedded struct
        if let (true, Some(tag)) = (out.embed, &out.tag) {
            let value = tag.value();
            if !(value.is_empty() || value == "-") {
                return Err(syn::Error::new_spanned(
                    tag,
                    "embedded fields only accept the ignore tag `-`",
                ));
            }
        }

        if let (true, Some(rel)) = (out.embed, &out.rel) {
            return Err(syn::Error::new_spanned(
                rel,
                "embedded fields cannot declare a relationship",
            ));
        }

        Ok(out)
    }
}

fn set_once(slot: &mut Option<LitStr>, value: LitStr, key: &str) -> Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new_spanned(
            &value,
            format!("duplicate `{key}` attribute"),
        ));
    }
    *slot = Some(value);
    Ok(())
}
