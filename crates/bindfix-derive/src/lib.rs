// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse_macro_input, Attribute, Data, DeriveInput, Fields, GenericArgument, PathArguments, Type,
};

/// `#[derive(Shape)]` macro: generates a static `ShapeDescriptor`
///
/// Supports:
/// - Primitive types: i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, bool
/// - `String`
/// - `Option<T>`, `Vec<T>`, `Box<T>`, `HashMap<K, V>` / `BTreeMap<K, V>`
/// - Any other named type, taken as a nested `Shape`
///
/// Attributes:
/// - `#[shape(methods = PATH)]` on the struct attaches a
///   `&'static [MethodSignature]` table
/// - `#[shape(iter = field)]` on the struct marks the field traversed by
///   begin/end on the binding side
/// - `#[shape(readonly)]` on a field hides it behind methods
///
/// # Panics
///
/// Never; unsupported input is reported as a compile error.
///
/// Example:
/// ```ignore
/// use bindfix::Shape;
///
/// #[derive(Shape)]
/// struct Chance {
///     probability: Option<i32>,
/// }
/// ```
#[proc_macro_derive(Shape, attributes(shape))]
pub fn derive_shape(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

struct StructAttrs {
    methods: Option<syn::Path>,
    iter: Option<syn::Ident>,
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let type_name = name.to_string();
    let type_id = compute_fnv1a_hash(&type_name);

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Generic types are not supported",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(f) => &f.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Only named fields are supported",
                ))
            }
        },
        _ => return Err(syn::Error::new_spanned(input, "Only structs are supported")),
    };

    let attrs = parse_struct_attrs(&input.attrs)?;

    let mut field_layouts = Vec::new();
    let mut field_idents = Vec::new();
    for (idx, field) in fields.iter().enumerate() {
        let Some(field_name) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "Field must have a name"));
        };
        let field_type = &field.ty;

        let Some(type_ref) = type_ref_tokens(field_type) else {
            return Err(syn::Error::new_spanned(
                field_type,
                "Unsupported type. Supported types: primitives, String, Option<T>, Vec<T>, \
                 Box<T>, HashMap<K, V>, BTreeMap<K, V> and nested Shape types.",
            ));
        };

        let Ok(index) = u32::try_from(idx) else {
            return Err(syn::Error::new_spanned(
                field_name,
                format!("Struct has too many fields (index {idx} exceeds u32::MAX)"),
            ));
        };
        let readonly = parse_readonly(&field.attrs)?;
        let name_str = field_name.to_string();

        field_layouts.push(quote! {
            ::bindfix::shape::FieldLayout {
                name: #name_str,
                index: #index,
                offset_bytes: ::core::mem::offset_of!(#name, #field_name) as u32,
                size_bytes: ::core::mem::size_of::<#field_type>() as u32,
                alignment: ::core::mem::align_of::<#field_type>() as u8,
                field_type: #type_ref,
                readonly: #readonly,
            }
        });
        field_idents.push(field_name.clone());
    }

    let methods = match &attrs.methods {
        Some(path) => quote! { #path },
        None => quote! { &[] },
    };

    let iterates = match &attrs.iter {
        Some(ident) => {
            if !field_idents.iter().any(|f| f == ident) {
                return Err(syn::Error::new_spanned(
                    ident,
                    format!("`iter` names unknown field `{ident}`"),
                ));
            }
            let iter_str = ident.to_string();
            quote! { Some(#iter_str) }
        }
        None => quote! { None },
    };

    Ok(quote! {
        impl ::bindfix::shape::Shape for #name {
            fn shape() -> &'static ::bindfix::shape::ShapeDescriptor {
                static DESCRIPTOR: ::bindfix::shape::ShapeDescriptor = ::bindfix::shape::ShapeDescriptor {
                    type_id: #type_id,
                    type_name: #type_name,
                    size_bytes: ::core::mem::size_of::<#name>() as u32,
                    alignment: ::core::mem::align_of::<#name>() as u8,
                    fields: &[#(#field_layouts),*],
                    methods: #methods,
                    iterates: #iterates,
                };
                &DESCRIPTOR
            }
        }
    })
}

fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs {
        methods: None,
        iter: None,
    };
    for attr in attrs.iter().filter(|a| a.path().is_ident("shape")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("methods") {
                out.methods = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("iter") {
                out.iter = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported shape attribute, expected `methods` or `iter`"))
            }
        })?;
    }
    Ok(out)
}

fn parse_readonly(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut readonly = false;
    for attr in attrs.iter().filter(|a| a.path().is_ident("shape")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("readonly") {
                readonly = true;
                Ok(())
            } else {
                Err(meta.error("unsupported field attribute, expected `readonly`"))
            }
        })?;
    }
    Ok(readonly)
}

/// Map a Rust field type to a `TypeRef` constructor expression
fn type_ref_tokens(ty: &Type) -> Option<proc_macro2::TokenStream> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let segment = type_path.path.segments.last()?;
    let ident_str = segment.ident.to_string();

    if let Some(kind) = primitive_kind(&ident_str) {
        return Some(quote! {
            ::bindfix::shape::TypeRef::Primitive(::bindfix::shape::PrimitiveKind::#kind)
        });
    }

    match ident_str.as_str() {
        "String" => Some(quote! { ::bindfix::shape::TypeRef::String }),
        "Option" => {
            let [inner] = generic_types::<1>(&segment.arguments)?;
            let inner = type_ref_tokens(inner)?;
            Some(quote! { ::bindfix::shape::TypeRef::Optional { inner: &#inner } })
        }
        "Vec" => {
            let [element] = generic_types::<1>(&segment.arguments)?;
            let element = type_ref_tokens(element)?;
            Some(quote! { ::bindfix::shape::TypeRef::Sequence { element: &#element } })
        }
        "Box" => {
            let [inner] = generic_types::<1>(&segment.arguments)?;
            let inner = type_ref_tokens(inner)?;
            Some(quote! { ::bindfix::shape::TypeRef::Unique { inner: &#inner } })
        }
        "HashMap" | "BTreeMap" => {
            let [key, value] = generic_types::<2>(&segment.arguments)?;
            let key = type_ref_tokens(key)?;
            let value = type_ref_tokens(value)?;
            Some(quote! {
                ::bindfix::shape::TypeRef::Map { key: &#key, value: &#value }
            })
        }
        _ => {
            // Nested shape: a plain named type without generic arguments
            if !matches!(segment.arguments, PathArguments::None) {
                return None;
            }
            Some(quote! {
                ::bindfix::shape::TypeRef::Struct(<#ty as ::bindfix::shape::Shape>::shape)
            })
        }
    }
}

fn primitive_kind(ident: &str) -> Option<proc_macro2::TokenStream> {
    let kind = match ident {
        "bool" => quote! { Bool },
        "i8" => quote! { I8 },
        "i16" => quote! { I16 },
        "i32" => quote! { I32 },
        "i64" => quote! { I64 },
        "u8" => quote! { U8 },
        "u16" => quote! { U16 },
        "u32" => quote! { U32 },
        "u64" => quote! { U64 },
        "f32" => quote! { F32 },
        "f64" => quote! { F64 },
        _ => return None,
    };
    Some(kind)
}

/// Exactly `N` generic type arguments, in order
fn generic_types<const N: usize>(args: &PathArguments) -> Option<[&Type; N]> {
    let PathArguments::AngleBracketed(args) = args else {
        return None;
    };
    let types: Vec<&Type> = args
        .args
        .iter()
        .filter_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        })
        .collect();
    types.try_into().ok()
}

/// Compute FNV-1a hash (32-bit) for type ID
fn compute_fnv1a_hash(s: &str) -> u32 {
    let mut hash = 2_166_136_261_u32;
    for byte in s.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(16_777_619);
    }
    hash
}
