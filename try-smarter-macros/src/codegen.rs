//! Code generation for `#[derive(FaultFamily)]`.
//!
//! Emits three impls for the family enum:
//! - `FaultType`: `matches`/`extract` try each member type in order;
//! - `Display`: delegates to the held member;
//! - `From<Family> for Fault`: unwraps back to the member's own fault.

use proc_macro2::TokenStream;
use quote::quote;

use crate::family::Family;

pub fn expand(family: &Family) -> TokenStream {
    let fault_type = gen_fault_type(family);
    let display = gen_display(family);
    let into_fault = gen_from(family);
    quote! {
        #fault_type
        #display
        #into_fault
    }
}

fn gen_fault_type(family: &Family) -> TokenStream {
    let name = &family.name;
    let (impl_generics, ty_generics, where_clause) = family.generics.split_for_impl();

    let match_checks = family.members.iter().map(|m| {
        let ty = &m.ty;
        quote! {
            if <#ty as ::try_smarter::FaultType>::matches(fault) {
                return true;
            }
        }
    });

    // Each failed extract hands the fault back for the next member.
    let extract_steps = family.members.iter().map(|m| {
        let ty = &m.ty;
        let variant = &m.variant;
        quote! {
            let fault = match <#ty as ::try_smarter::FaultType>::extract(fault) {
                ::core::result::Result::Ok(member) => {
                    return ::core::result::Result::Ok(#name::#variant(member));
                }
                ::core::result::Result::Err(fault) => fault,
            };
        }
    });

    let into_arms = family.members.iter().map(|m| {
        let ty = &m.ty;
        let variant = &m.variant;
        quote! {
            #name::#variant(member) => <#ty as ::try_smarter::FaultType>::into_fault(member),
        }
    });

    quote! {
        impl #impl_generics ::try_smarter::FaultType for #name #ty_generics #where_clause {
            fn matches(fault: &::try_smarter::Fault) -> bool {
                #(#match_checks)*
                false
            }

            fn extract(
                fault: ::try_smarter::Fault,
            ) -> ::core::result::Result<Self, ::try_smarter::Fault> {
                #(#extract_steps)*
                ::core::result::Result::Err(fault)
            }

            fn into_fault(self) -> ::try_smarter::Fault {
                match self {
                    #(#into_arms)*
                }
            }
        }
    }
}

fn gen_display(family: &Family) -> TokenStream {
    let name = &family.name;
    let (impl_generics, ty_generics, where_clause) = family.generics.split_for_impl();

    let arms = family.members.iter().map(|m| {
        let variant = &m.variant;
        quote! {
            #name::#variant(member) => ::core::fmt::Display::fmt(member, f),
        }
    });

    quote! {
        impl #impl_generics ::core::fmt::Display for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    #(#arms)*
                }
            }
        }
    }
}

fn gen_from(family: &Family) -> TokenStream {
    let name = &family.name;
    let (impl_generics, ty_generics, where_clause) = family.generics.split_for_impl();

    quote! {
        impl #impl_generics ::core::convert::From<#name #ty_generics> for ::try_smarter::Fault #where_clause {
            fn from(family: #name #ty_generics) -> Self {
                <#name #ty_generics as ::try_smarter::FaultType>::into_fault(family)
            }
        }
    }
}
