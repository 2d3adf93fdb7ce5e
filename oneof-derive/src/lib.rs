#![doc(html_root_url = "https://docs.rs/oneof-derive/0.1.0")]
// The `quote!` macro requires deep recursion.
#![recursion_limit = "4096"]

extern crate proc_macro;

use anyhow::{bail, Context, Error};
use itertools::Itertools;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    punctuated::Punctuated, Attribute, Data, DataEnum, DeriveInput, Expr, ExprLit, Fields, Ident,
    Lit, Meta, MetaNameValue, Path, Token, Variant,
};

fn try_enumeration(input: TokenStream) -> Result<TokenStream, Error> {
    let input: DeriveInput = syn::parse2(input)?;
    let ident = input.ident;

    let Attributes {
        oneof_path,
        case,
        name,
    } = Attributes::new(input.attrs)?;
    if let Some(case) = case {
        bail!("Enumeration {ident} does not take a case attribute, found {}", quote!(#case));
    }
    if let Some(name) = name {
        bail!("Enumeration {ident} does not take a name attribute, found {name:?}");
    }

    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let punctuated_variants = match input.data {
        Data::Enum(DataEnum { variants, .. }) => variants,
        Data::Struct(_) => bail!("Enumeration can not be derived for a struct"),
        Data::Union(..) => bail!("Enumeration can not be derived for a union"),
    };

    // Map the variants into (name, number) pairs, remembering the sentinel.
    let mut variants: Vec<(Ident, Expr)> = Vec::new();
    let mut not_set = None;
    for Variant {
        attrs,
        ident: variant_ident,
        fields,
        discriminant,
        ..
    } in punctuated_variants
    {
        match fields {
            Fields::Unit => (),
            Fields::Named(_) | Fields::Unnamed(_) => {
                bail!("Enumeration variants may not have fields")
            }
        }
        let expr = match discriminant {
            Some((_, expr)) => expr,
            None => bail!("Enumeration variants must have a discriminant"),
        };
        for meta in oneof_attrs(attrs)? {
            match meta {
                Meta::Path(ref path) if path.is_ident("not_set") => {
                    if let Some(number) = int_literal(&expr) {
                        if number != 0 {
                            bail!("NOT_SET variant {ident}::{variant_ident} must be numbered 0, not {number}");
                        }
                    }
                    set_option(&mut not_set, variant_ident.clone(), "duplicate not_set variants")?;
                }
                meta => bail!("unknown attribute: #[oneof({})]", quote!(#meta)),
            }
        }
        variants.push((variant_ident, expr));
    }

    let not_set = match not_set {
        Some(not_set) => not_set,
        None => bail!("Enumeration {ident} has no #[oneof(not_set)] variant"),
    };

    let is_valid = variants.iter().map(|(_, value)| quote!(#value => true));
    let for_number = variants
        .iter()
        .map(|(variant, value)| quote!(#value => ::core::option::Option::Some(#ident::#variant)));
    let try_from = variants
        .iter()
        .map(|(variant, value)| quote!(#value => ::core::result::Result::Ok(#ident::#variant)));

    let is_valid_doc = format!("Returns `true` if `value` is a variant of `{ident}`.");
    let for_number_doc =
        format!("Converts an `i32` to a `{ident}`, or `None` if `value` is not a valid variant.");
    let not_set_message = format!("{ident}::{not_set} must be numbered 0");

    let expanded = quote! {
        const _: () = ::core::assert!(#ident::#not_set as i32 == 0, #not_set_message);

        impl #impl_generics #ident #ty_generics #where_clause {
            #[doc=#is_valid_doc]
            pub fn is_valid(value: i32) -> bool {
                match value {
                    #(#is_valid,)*
                    _ => false,
                }
            }

            #[doc=#for_number_doc]
            pub fn for_number(value: i32) -> ::core::option::Option<#ident> {
                match value {
                    #(#for_number,)*
                    _ => ::core::option::Option::None,
                }
            }

            /// Returns the field number of this case, `0` for the `NOT_SET` sentinel.
            pub const fn number(self) -> i32 {
                self as i32
            }
        }

        impl #impl_generics ::core::default::Default for #ident #ty_generics #where_clause {
            fn default() -> #ident {
                #ident::#not_set
            }
        }

        impl #impl_generics ::core::convert::From::<#ident> for i32 #ty_generics #where_clause {
            fn from(value: #ident) -> i32 {
                value as i32
            }
        }

        impl #impl_generics ::core::convert::TryFrom::<i32> for #ident #ty_generics #where_clause {
            type Error = #oneof_path::UnknownEnumValue;

            fn try_from(value: i32) -> ::core::result::Result<#ident, #oneof_path::UnknownEnumValue> {
                match value {
                    #(#try_from,)*
                    _ => ::core::result::Result::Err(#oneof_path::UnknownEnumValue(value)),
                }
            }
        }

        impl #impl_generics #oneof_path::Case for #ident #ty_generics #where_clause {
            const NOT_SET: #ident = #ident::#not_set;

            fn for_number(number: i32) -> ::core::option::Option<#ident> {
                #ident::for_number(number)
            }
        }
    };

    Ok(expanded)
}

#[proc_macro_derive(Enumeration, attributes(oneof))]
pub fn enumeration(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand(try_enumeration(input.into()))
}

fn try_oneof(input: TokenStream) -> Result<TokenStream, Error> {
    let input: DeriveInput = syn::parse2(input)?;

    let ident = input.ident;

    let Attributes {
        oneof_path,
        case,
        name,
    } = Attributes::new(input.attrs)?;

    let case = match case {
        Some(case) => case,
        None => bail!("Oneof {ident} is missing #[oneof(case = \"...\")]"),
    };
    let name = match name {
        Some(name) => name,
        None => ident.to_string(),
    };

    let variants = match input.data {
        Data::Enum(DataEnum { variants, .. }) => variants,
        Data::Struct(..) => bail!("Oneof can not be derived for a struct"),
        Data::Union(..) => bail!("Oneof can not be derived for a union"),
    };

    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // Map each member variant onto its case.
    let mut members: Vec<(Ident, Ident)> = Vec::new();
    for Variant {
        attrs,
        ident: variant_ident,
        fields: variant_fields,
        ..
    } in variants
    {
        match variant_fields {
            Fields::Unnamed(ref fields) if fields.unnamed.len() == 1 => (),
            _ => bail!("Oneof enum variants must have a single unnamed field"),
        }
        let mut variant_case = None;
        for meta in oneof_attrs(attrs)? {
            match meta {
                Meta::NameValue(MetaNameValue {
                    ref path,
                    value:
                        Expr::Lit(ExprLit {
                            lit: Lit::Str(ref lit),
                            ..
                        }),
                    ..
                }) if path.is_ident("case") => {
                    let case_ident: Ident =
                        syn::parse_str(&lit.value()).context("invalid case argument")?;
                    set_option(&mut variant_case, case_ident, "duplicate case attributes")?;
                }
                meta => bail!("unknown attribute: #[oneof({})]", quote!(#meta)),
            }
        }
        let variant_case = variant_case.unwrap_or_else(|| variant_ident.clone());
        members.push((variant_ident, variant_case));
    }

    if members.is_empty() {
        bail!("Oneof {ident} must have at least one member");
    }

    if let Some(duplicate) = members
        .iter()
        .map(|(_, variant_case)| variant_case)
        .duplicates()
        .next()
    {
        bail!("invalid oneof {ident}: multiple variants have case {duplicate}");
    }

    let cases = members.iter().map(|(variant_ident, variant_case)| {
        quote!(#ident::#variant_ident(_) => #case::#variant_case)
    });

    let expanded = quote! {
        impl #impl_generics #oneof_path::Oneof for #ident #ty_generics #where_clause {
            type Case = #case;

            const NAME: &'static str = #name;

            fn case(&self) -> #case {
                match *self {
                    #(#cases,)*
                }
            }
        }
    };

    Ok(expanded)
}

#[proc_macro_derive(Oneof, attributes(oneof))]
pub fn oneof(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand(try_oneof(input.into()))
}

fn expand(result: Result<TokenStream, Error>) -> proc_macro::TokenStream {
    match result {
        Ok(tokens) => tokens.into(),
        Err(error) => {
            let message = error.to_string();
            quote!(::core::compile_error!(#message);).into()
        }
    }
}

/// Get the items belonging to the 'oneof' list attribute, e.g. `#[oneof(foo, bar="baz")]`.
fn oneof_attrs(attrs: Vec<Attribute>) -> Result<Vec<Meta>, Error> {
    let mut result = Vec::new();
    for attr in attrs.iter() {
        if let Meta::List(meta_list) = &attr.meta {
            if meta_list.path.is_ident("oneof") {
                result.extend(
                    meta_list
                        .parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?
                        .into_iter(),
                )
            }
        }
    }
    Ok(result)
}

fn set_option<T>(option: &mut Option<T>, value: T, message: &str) -> Result<(), Error>
where
    T: core::fmt::Debug,
{
    if let Some(existing) = option {
        bail!("{}: {:?} and {:?}", message, existing, value);
    }
    *option = Some(value);
    Ok(())
}

fn int_literal(expr: &Expr) -> Option<i64> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) => lit.base10_parse().ok(),
        _ => None,
    }
}

fn string_value(meta: &Meta, name: &str) -> Option<String> {
    match meta {
        Meta::NameValue(MetaNameValue {
            path,
            value:
                Expr::Lit(ExprLit {
                    lit: Lit::Str(lit), ..
                }),
            ..
        }) if path.is_ident(name) => Some(lit.value()),
        _ => None,
    }
}

struct Attributes {
    oneof_path: Path,
    case: Option<Path>,
    name: Option<String>,
}

impl Attributes {
    fn new(attrs: Vec<Attribute>) -> Result<Self, Error> {
        let attrs = oneof_attrs(attrs)?;

        let mut oneof_path = None;
        let mut case = None;
        let mut name = None;
        for attr in &attrs {
            if let Some(value) = string_value(attr, "oneof_path") {
                let path: Path = syn::parse_str(&value).context("invalid oneof_path argument")?;
                set_option(&mut oneof_path, path, "duplicate oneof_path attributes")?;
            } else if let Some(value) = string_value(attr, "case") {
                let path: Path = syn::parse_str(&value).context("invalid case argument")?;
                set_option(&mut case, path, "duplicate case attributes")?;
            } else if let Some(value) = string_value(attr, "name") {
                set_option(&mut name, value, "duplicate name attributes")?;
            } else {
                bail!("unknown attribute: #[oneof({})]", quote!(#attr));
            }
        }

        let oneof_path =
            oneof_path.unwrap_or_else(|| syn::parse_quote!(::oneof));

        Ok(Self {
            oneof_path,
            case,
            name,
        })
    }
}
