use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};

/// Generate an immutable color model from a struct with exactly 3 component
/// fields.
///
/// The generated type gets an `alpha` field, read-only accessors for every
/// component, `new`/`new_with_alpha` constructors that run the model's
/// `Normalize` implementation, `with_*` methods that return modified copies
/// and conversions to and from the dynamic `Color`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Option<Vec<_>>>();
    let Some(field_names) = field_names else {
        return quote! {
            compile_error!("Model components must be named fields.")
        }
        .into();
    };

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Components are only reachable through accessors so that every value
    // passes through normalization.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Inherited;
    });

    input
        .attrs
        .push(syn::parse_quote!(#[derive(Clone, Copy, Debug, PartialEq)]));

    let mut phantom_fields: Vec<syn::Ident> = vec![];

    if let syn::Fields::Named(ref mut named) = input.fields {
        named
            .named
            .push(syn::parse_quote!(alpha: crate::color::Component));

        for g in input.generics.params.iter() {
            let syn::GenericParam::Type(type_param) = g else {
                return quote! {
                    compile_error!("Models only support type parameters.")
                }
                .into();
            };

            let ident = &type_param.ident;
            let field_name = format!("_{}", ident.to_string().to_lowercase());
            let field_name = syn::Ident::new(field_name.as_str(), Span::call_site());
            phantom_fields.push(field_name.clone());

            named
                .named
                .push(syn::parse_quote!(#field_name: std::marker::PhantomData<#ident>));
        }
    }

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, _) = input.generics.split_for_impl();

    let mut where_clause = input
        .generics
        .where_clause
        .clone()
        .unwrap_or_else(|| syn::parse_quote!(where));
    where_clause
        .predicates
        .push(syn::parse_quote!(Self: crate::models::Normalize));

    let with1 = format_ident!("with_{}", field1);
    let with2 = format_ident!("with_{}", field2);
    let with3 = format_ident!("with_{}", field3);

    let get_doc1 = format!("Return the {} component of the color.", field1);
    let get_doc2 = format!("Return the {} component of the color.", field2);
    let get_doc3 = format!("Return the {} component of the color.", field3);
    let with_doc1 = format!("Return a copy of this color with the {} component replaced.", field1);
    let with_doc2 = format!("Return a copy of this color with the {} component replaced.", field2);
    let with_doc3 = format!("Return a copy of this color with the {} component replaced.", field3);

    let new_impl = quote! {
        impl #impl_gen #struct_name #type_gen #where_clause {
            /// Create a new, fully opaque color.
            pub fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self::new_with_alpha(#field1, #field2, #field3, 1.0)
            }

            /// Create a new color with the given alpha. Components are
            /// normalized into the model's valid ranges.
            pub fn new_with_alpha(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
                alpha: crate::color::Component,
            ) -> Self {
                let crate::color::Components(#field1, #field2, #field3) =
                    <Self as crate::models::Normalize>::normalize(
                        crate::color::Components(#field1, #field2, #field3),
                    );

                Self {
                    #field1,
                    #field2,
                    #field3,
                    alpha: crate::math::normalize_alpha(alpha),
                    #(#phantom_fields: std::marker::PhantomData,)*
                }
            }

            #[doc = #get_doc1]
            pub fn #field1(&self) -> crate::color::Component {
                self.#field1
            }

            #[doc = #get_doc2]
            pub fn #field2(&self) -> crate::color::Component {
                self.#field2
            }

            #[doc = #get_doc3]
            pub fn #field3(&self) -> crate::color::Component {
                self.#field3
            }

            /// Return the alpha component of the color.
            pub fn alpha(&self) -> crate::color::Component {
                self.alpha
            }

            #[doc = #with_doc1]
            pub fn #with1(&self, value: crate::color::Component) -> Self {
                Self::new_with_alpha(value, self.#field2, self.#field3, self.alpha)
            }

            #[doc = #with_doc2]
            pub fn #with2(&self, value: crate::color::Component) -> Self {
                Self::new_with_alpha(self.#field1, value, self.#field3, self.alpha)
            }

            #[doc = #with_doc3]
            pub fn #with3(&self, value: crate::color::Component) -> Self {
                Self::new_with_alpha(self.#field1, self.#field2, value, self.alpha)
            }

            /// Return a copy of this color with the alpha component replaced.
            pub fn with_alpha(&self, alpha: crate::color::Component) -> Self {
                Self::new_with_alpha(self.#field1, self.#field2, self.#field3, alpha)
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl #impl_gen From<crate::color::Components> for #struct_name #type_gen #where_clause {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl #impl_gen crate::models::Model for #struct_name #type_gen
        where
            Self: crate::models::Normalize + crate::color::HasSpace,
        {
            fn to_color(&self) -> crate::color::Color {
                crate::color::Color::new(
                    <Self as crate::color::HasSpace>::SPACE,
                    self.#field1,
                    self.#field2,
                    self.#field3,
                    self.alpha,
                )
            }

            fn from_color(color: &crate::color::Color) -> Self {
                let crate::color::Components(#field1, #field2, #field3) = color.components();
                Self::new_with_alpha(#field1, #field2, #field3, color.alpha())
            }
        }

        impl #impl_gen From<#struct_name #type_gen> for crate::color::Color
        where
            #struct_name #type_gen: crate::models::Model,
        {
            fn from(value: #struct_name #type_gen) -> Self {
                crate::models::Model::to_color(&value)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
